//! Pixel metrics of the classic skin and per-frame hit testing.
//!
//! All values are in source pixels; the host applies its own integer window
//! scale on top.

use crate::GameConfig;
use crate::types::{Coord, Coord2, Rect};

/// Side length of one board cell sprite.
pub const TILE: u32 = 16;
/// Width of the left/right chrome frame.
pub const EDGE: u32 = 12;
/// Height of a horizontal chrome band (top, divider, bottom).
pub const BORDER: u32 = 11;
/// Height of the HUD strip between the top band and the divider.
pub const HUD: u32 = 33;
/// Reset button sprite extent.
pub const BUTTON: u32 = 26;
/// Horizontal advance between HUD digit glyphs (11 px glyph + 2 px spacing).
pub const DIGIT_STEP: u32 = 13;

/// Output surface size for a board: cells plus chrome on every side.
pub fn window_size(config: GameConfig) -> (u32, u32) {
    let (w, h) = config.size();
    (
        w as u32 * TILE + EDGE * 2,
        h as u32 * TILE + BORDER * 3 + HUD,
    )
}

/// Logical UI zone a pointer position can land in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Tiles,
    Button,
}

/// The named hit rectangles of one frame.
///
/// Rebuilt from scratch out of the current layout parameters every frame,
/// never patched, so a board resize can never leak stale geometry into hit
/// testing. Rectangles are half-open and disjoint: every boundary pixel
/// belongs to exactly one region or to none.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HitMap {
    tiles: Rect,
    button: Rect,
}

impl HitMap {
    pub fn compute(config: GameConfig) -> Self {
        let (w, h) = config.size();
        let (win_w, _) = window_size(config);
        Self {
            tiles: Rect::new(
                EDGE as i32,
                (BORDER * 2 + HUD) as i32,
                w as u32 * TILE,
                h as u32 * TILE,
            ),
            button: Rect::new(
                win_w as i32 / 2 - (BUTTON as i32 / 2),
                (BORDER + 4) as i32,
                BUTTON,
                BUTTON,
            ),
        }
    }

    pub fn rect(&self, region: Region) -> Rect {
        match region {
            Region::Tiles => self.tiles,
            Region::Button => self.button,
        }
    }

    /// Classifies a pointer position into a region, if any.
    pub fn resolve(&self, pos: (i32, i32)) -> Option<Region> {
        if self.tiles.contains(pos) {
            Some(Region::Tiles)
        } else if self.button.contains(pos) {
            Some(Region::Button)
        } else {
            None
        }
    }

    /// Board coordinates under the pointer; `Some` only inside the tiles
    /// rectangle.
    pub fn tile_at(&self, pos: (i32, i32)) -> Option<Coord2> {
        if !self.tiles.contains(pos) {
            return None;
        }
        let cx = (pos.0 - self.tiles.x) as u32 / TILE;
        let cy = (pos.1 - self.tiles.y) as u32 / TILE;
        Some((cx as Coord, cy as Coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::new((9, 9), 10).unwrap()
    }

    #[test]
    fn window_size_matches_the_skin_chrome() {
        assert_eq!(window_size(config()), (168, 210));
    }

    #[test]
    fn tile_grid_boundary_pixels_belong_to_exactly_one_region() {
        let hits = HitMap::compute(config());
        let tiles = hits.rect(Region::Tiles);
        assert_eq!(tiles, Rect::new(12, 55, 144, 144));

        // One pixel either side of each edge of the tiles rect.
        assert_eq!(hits.resolve((12, 55)), Some(Region::Tiles));
        assert_eq!(hits.resolve((11, 55)), None);
        assert_eq!(hits.resolve((12, 54)), None);
        assert_eq!(hits.resolve((155, 198)), Some(Region::Tiles));
        assert_eq!(hits.resolve((156, 198)), None);
        assert_eq!(hits.resolve((155, 199)), None);
    }

    #[test]
    fn button_rect_is_centered_and_exclusive() {
        let hits = HitMap::compute(config());
        assert_eq!(hits.rect(Region::Button), Rect::new(71, 15, 26, 26));
        assert_eq!(hits.resolve((71, 15)), Some(Region::Button));
        assert_eq!(hits.resolve((96, 40)), Some(Region::Button));
        assert_eq!(hits.resolve((97, 15)), None);
        assert_eq!(hits.resolve((70, 15)), None);
    }

    #[test]
    fn tile_coordinates_come_from_integer_division() {
        let hits = HitMap::compute(config());
        assert_eq!(hits.tile_at((12, 55)), Some((0, 0)));
        assert_eq!(hits.tile_at((27, 70)), Some((0, 0)));
        assert_eq!(hits.tile_at((28, 71)), Some((1, 1)));
        assert_eq!(hits.tile_at((155, 198)), Some((8, 8)));
        assert_eq!(hits.tile_at((11, 55)), None);
        assert_eq!(hits.tile_at((156, 55)), None);
    }

    #[test]
    fn hit_map_tracks_a_resized_board() {
        let small = HitMap::compute(GameConfig::new((4, 3), 2).unwrap());
        assert_eq!(small.rect(Region::Tiles), Rect::new(12, 55, 64, 48));
        assert_eq!(small.rect(Region::Button), Rect::new(31, 15, 26, 26));
    }
}
