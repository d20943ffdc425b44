//! The skin: a single packed 144x122 image holding every sprite the game
//! draws, laid out as fixed-stride horizontal strips.

use image::RgbaImage;

use crate::error::{GameError, Result};
use crate::types::Rect;

/// The embedded skin image, decoded once at startup.
pub const SKIN: &[u8] = include_bytes!("../assets/skin.png");

pub const ICON_CLOSED: usize = 0;
pub const ICON_OPENED: usize = 1;
pub const ICON_BOMB: usize = 2;
pub const ICON_FLAGGED: usize = 3;
pub const ICON_ANSWER_NO_BOMB: usize = 4;
pub const ICON_ANSWER_IS_BOMB: usize = 5;
pub const ICON_QUESTION: usize = 6;
pub const ICON_QUESTION_PRESSED: usize = 7;

/// HUD digit glyph index that renders as an empty digit cell.
pub const DIGIT_BLANK: usize = 10;

pub const NUMBER_COUNT: usize = 9;
pub const ICON_COUNT: usize = 8;
pub const DIGIT_COUNT: usize = 11;
pub const BUTTON_COUNT: usize = 5;

// Strip geometry in skin pixels: (y offset, glyph width, height, stride).
const NUMBER_STRIP: (u32, u32, u32, u32) = (0, 16, 16, 16);
const ICON_STRIP: (u32, u32, u32, u32) = (16, 16, 16, 16);
const DIGIT_STRIP: (u32, u32, u32, u32) = (33, 11, 21, 12);
const BUTTON_STRIP: (u32, u32, u32, u32) = (55, 26, 26, 27);

const MIN_WIDTH: u32 = 144;
const MIN_HEIGHT: u32 = 122;

/// Decoded skin plus the fixed sub-region layout. Immutable after decode;
/// every consumer reads from the same pixels.
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    image: RgbaImage,
}

impl SpriteAtlas {
    /// Decodes a packed skin image. Fails on malformed image data or on an
    /// image too small to hold the expected strips; either way the game
    /// cannot start.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        if image.width() < MIN_WIDTH || image.height() < MIN_HEIGHT {
            return Err(GameError::AtlasLayout {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Adjacency-count glyph, `0..=8`.
    pub fn number(&self, n: usize) -> Rect {
        assert!(n < NUMBER_COUNT, "number glyph index {n} out of range");
        strip_rect(NUMBER_STRIP, n)
    }

    /// Tile status icon, see the `ICON_*` constants.
    pub fn icon(&self, index: usize) -> Rect {
        assert!(index < ICON_COUNT, "icon index {index} out of range");
        strip_rect(ICON_STRIP, index)
    }

    /// HUD counter glyph: `0..=9`, plus [`DIGIT_BLANK`].
    pub fn digit(&self, d: usize) -> Rect {
        assert!(d < DIGIT_COUNT, "digit glyph index {d} out of range");
        strip_rect(DIGIT_STRIP, d)
    }

    /// Reset-button face, indexed by [`ButtonState::face`](crate::ButtonState::face).
    pub fn button(&self, index: usize) -> Rect {
        assert!(index < BUTTON_COUNT, "button face index {index} out of range");
        strip_rect(BUTTON_STRIP, index)
    }
}

fn strip_rect((y, w, h, stride): (u32, u32, u32, u32), index: usize) -> Rect {
    Rect::new((index as u32 * stride) as i32, y as i32, w, h)
}
