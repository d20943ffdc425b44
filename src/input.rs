use serde::{Deserialize, Serialize};

/// One frame's worth of pointer state.
///
/// The host polls its input source once per tick and fills this in; the
/// `just_*` fields are edge-triggered (true only on the frame the edge
/// happened). The core never sees an event stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerSnapshot {
    /// Pointer position in source pixels, window-relative.
    pub pos: (i32, i32),
    pub left_just_pressed: bool,
    pub left_just_released: bool,
    pub right_just_released: bool,
}

/// Which face the reset button shows. Independent of any one cell's state,
/// reset together with the board.
///
/// `Lost` and `Won` are declared because the skin carries their faces, but
/// no transition produces them: end-of-game detection is not wired up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Pointer held down over the reset button.
    Pressed,
    /// Pointer held down over a tile.
    Evaluating,
    Lost,
    Won,
}

impl ButtonState {
    /// Index of this state's face in the skin's button strip.
    pub const fn face(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Evaluating => 1,
            Self::Lost => 2,
            Self::Won => 3,
            Self::Pressed => 4,
        }
    }
}
