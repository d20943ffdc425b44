use serde::{Deserialize, Serialize};

use crate::atlas;

/// Player-visible state of a single board cell.
///
/// `isMine` and the adjacency count live in the [`Minefield`](crate::Minefield)
/// and never change after generation; this enum only tracks what the player
/// sees, and mutates exclusively through [`Board`](crate::Board) transitions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Closed,
    /// Terminal for the cell; shows the adjacency-count glyph.
    Opened,
    Flagged,
    /// The mine the player opened on a losing click.
    ExplodedMine,
    /// End-of-game answer face for a wrongly flagged safe cell. Declared for
    /// the skin's sake; no transition produces it until win/loss detection
    /// is wired up.
    SafeAnswer,
}

impl Tile {
    /// Atlas icon drawn for this state when the cell is not `Opened`.
    pub const fn icon(self) -> usize {
        match self {
            Self::Closed => atlas::ICON_CLOSED,
            Self::Opened => atlas::ICON_OPENED,
            Self::Flagged => atlas::ICON_FLAGGED,
            Self::ExplodedMine => atlas::ICON_ANSWER_IS_BOMB,
            Self::SafeAnswer => atlas::ICON_ANSWER_NO_BOMB,
        }
    }

    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}
