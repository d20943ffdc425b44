use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and cell positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional board coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Converts board coordinates into an `ndarray` index, `x` major.
pub const fn grid_index((x, y): Coord2) -> [usize; 2] {
    [x as usize, y as usize]
}

/// Board size as an `ndarray` dimension.
pub const fn grid_dim((w, h): Coord2) -> [usize; 2] {
    [w as usize, h as usize]
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the Moore neighborhood of `center`, clipped to `[0, bounds)` on
/// both axes. The center cell itself is not yielded.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let x = center.0 as i32 + dx;
        let y = center.1 as i32 + dy;
        let in_x = (0..bounds.0 as i32).contains(&x);
        let in_y = (0..bounds.1 as i32).contains(&y);
        (in_x && in_y).then_some((x as Coord, y as Coord))
    })
}

/// Axis-aligned screen-space rectangle, half-open on both axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Whether `(px, py)` lies inside the rectangle. The left/top edges are
    /// inclusive and the right/bottom edges exclusive, so adjacent
    /// rectangles classify every boundary pixel exactly once.
    pub const fn contains(&self, (px, py): (i32, i32)) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_clipped_at_corners() {
        let mut at_origin: Vec<_> = neighbors((0, 0), (3, 3)).collect();
        at_origin.sort_unstable();
        assert_eq!(at_origin, vec![(0, 1), (1, 0), (1, 1)]);

        assert_eq!(neighbors((1, 1), (3, 3)).count(), 8);
        assert_eq!(neighbors((2, 2), (3, 3)).count(), 3);
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn neighbors_exclude_center() {
        assert!(neighbors((1, 1), (3, 3)).all(|pos| pos != (1, 1)));
    }

    #[test]
    fn rect_edges_are_half_open() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains((10, 20)));
        assert!(rect.contains((14, 24)));
        assert!(!rect.contains((15, 20)));
        assert!(!rect.contains((10, 25)));
        assert!(!rect.contains((9, 20)));
    }
}
