use ndarray::Array2;
use web_time::Instant;

use crate::tile::Tile;
use crate::types::{self, CellCount, Coord2};
use crate::Minefield;

/// Outcome of a left click on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    /// The cell opened; carries the adjacency count it now displays.
    Opened(u8),
    /// The cell held a mine.
    Exploded,
}

/// Outcome of a right click on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

/// One game's worth of mutable board state: the per-cell visibility grid
/// on top of an immutable [`Minefield`], plus the bombs-left counter and
/// the elapsed-time origin for the HUD.
///
/// Coordinates handed to the transition methods must already have been
/// filtered by the hit-test boundary; out-of-range input is a contract
/// violation and fails fast.
#[derive(Clone, Debug)]
pub struct Board {
    minefield: Minefield,
    tiles: Array2<Tile>,
    flags_placed: CellCount,
    started_at: Instant,
}

impl Board {
    pub fn new(minefield: Minefield) -> Self {
        let dim = types::grid_dim(minefield.size());
        Self {
            minefield,
            tiles: Array2::default(dim),
            flags_placed: 0,
            started_at: Instant::now(),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.assert_in_bounds(coords);
        self.tiles[types::grid_index(coords)]
    }

    /// Mines minus flags placed; negative once the player over-flags.
    pub fn mines_left(&self) -> i64 {
        self.minefield.mine_count() as i64 - self.flags_placed as i64
    }

    /// Whole seconds since this board was created.
    pub fn elapsed_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Left click: opens a closed safe cell, explodes a closed mined one.
    /// Every other state ignores the click.
    pub fn open(&mut self, coords: Coord2) -> OpenOutcome {
        self.assert_in_bounds(coords);

        if !self.tiles[types::grid_index(coords)].is_closed() {
            return OpenOutcome::NoChange;
        }

        if self.minefield.contains_mine(coords) {
            self.tiles[types::grid_index(coords)] = Tile::ExplodedMine;
            log::debug!("left-click {coords:?}: mine");
            OpenOutcome::Exploded
        } else {
            let count = self.minefield.adjacent_mines(coords);
            self.tiles[types::grid_index(coords)] = Tile::Opened;
            log::debug!("left-click {coords:?}: opened with {count} adjacent");
            OpenOutcome::Opened(count)
        }
    }

    /// Right click: toggles the flag on a closed cell. Opened cells and the
    /// loss reveal ignore it.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        self.assert_in_bounds(coords);

        match self.tiles[types::grid_index(coords)] {
            Tile::Closed => {
                self.tiles[types::grid_index(coords)] = Tile::Flagged;
                self.flags_placed += 1;
                log::debug!("right-click {coords:?}: flagged");
                FlagOutcome::Changed
            }
            Tile::Flagged => {
                self.tiles[types::grid_index(coords)] = Tile::Closed;
                self.flags_placed -= 1;
                log::debug!("right-click {coords:?}: unflagged");
                FlagOutcome::Changed
            }
            _ => FlagOutcome::NoChange,
        }
    }

    fn assert_in_bounds(&self, coords: Coord2) {
        let (w, h) = self.size();
        assert!(
            coords.0 < w && coords.1 < h,
            "cell coordinates {coords:?} outside {w}x{h} board; hit testing must filter these"
        );
    }
}
