use thiserror::Error;

use crate::types::{CellCount, Coord};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("sprite atlas could not be decoded")]
    Decode(#[from] image::ImageError),
    #[error("sprite atlas is {width}x{height}, smaller than the skin layout requires")]
    AtlasLayout { width: u32, height: u32 },
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("{mines} mines do not fit a {width}x{height} board")]
    TooManyMines {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("coordinates outside the board")]
    OutOfBounds,
    #[error(
        "composite target {target_w}x{target_h} is below the nine-slice minimum {min_w}x{min_h}"
    )]
    TargetTooSmall {
        target_w: u32,
        target_h: u32,
        min_w: u32,
        min_h: u32,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
