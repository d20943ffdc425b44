//! Classic Minesweeper core: the board state machine and the
//! sprite-compositing renderer that assembles the window chrome from a
//! fixed 144x122 skin atlas.
//!
//! The crate is host-agnostic: a platform layer owns the window and the
//! frame loop, polls the pointer into a [`PointerSnapshot`] once per tick,
//! and hands it to [`Game::update`] before reading pixels back out of
//! [`Game::draw`]. Everything in here is single-threaded and synchronous.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use atlas::SpriteAtlas;
pub use board::{Board, FlagOutcome, OpenOutcome};
pub use compose::NineSlice;
pub use error::{GameError, Result};
pub use game::Game;
pub use input::{ButtonState, PointerSnapshot};
pub use layout::{HitMap, Region, window_size};
pub use render::Renderer;
pub use surface::Canvas;
pub use tile::Tile;
pub use types::{CellCount, Coord, Coord2, Rect};

pub mod atlas;
mod board;
pub mod compose;
mod error;
mod game;
mod generator;
mod input;
pub mod layout;
mod render;
mod surface;
mod tile;
pub mod types;

/// Validated board parameters: dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    /// Builds a config, rejecting degenerate boards up front so that mine
    /// placement always terminates and the chrome compositor never sees a
    /// negative stretch extent.
    pub fn new((w, h): Coord2, mines: CellCount) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(GameError::EmptyBoard {
                width: w,
                height: h,
            });
        }
        let total = w as CellCount * h as CellCount;
        if mines == 0 || mines >= total {
            return Err(GameError::TooManyMines {
                width: w,
                height: h,
                mines,
            });
        }
        Ok(Self {
            size: (w, h),
            mines,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.0 as CellCount * self.size.1 as CellCount
    }
}

impl Default for GameConfig {
    /// The beginner board of the original game: 9x9 with 10 mines.
    fn default() -> Self {
        Self {
            size: (9, 9),
            mines: 10,
        }
    }
}

/// Immutable result of board generation: the mine mask and the precomputed
/// per-cell adjacency counts. Both are fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    adjacency: Array2<u8>,
    count: CellCount,
}

impl Minefield {
    /// Wraps an explicit mine mask, deriving the mine count and the
    /// adjacency field from it.
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let size = mask_size(&mines);
        let mut adjacency = Array2::default(mines.raw_dim());
        for ((ix, iy), count) in adjacency.indexed_iter_mut() {
            *count = types::neighbors((ix as Coord, iy as Coord), size)
                .filter(|&pos| mines[types::grid_index(pos)])
                .count() as u8;
        }
        let count = mines.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mines,
            adjacency,
            count,
        }
    }

    /// Places mines at the given coordinates; mainly a test fixture.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(types::grid_dim(size));
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mines[types::grid_index(coords)] = true;
        }
        Ok(Self::from_mine_mask(mines))
    }

    pub fn size(&self) -> Coord2 {
        mask_size(&self.mines)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Precomputed count of mines among the clipped Moore neighborhood.
    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.adjacency[types::grid_index(coords)]
    }
}

impl Index<Coord2> for Minefield {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mines[types::grid_index(coords)]
    }
}

fn mask_size(mask: &Array2<bool>) -> Coord2 {
    let dim = mask.dim();
    (dim.0 as Coord, dim.1 as Coord)
}
