use image::{Rgba, RgbaImage};

use crate::types::Rect;

/// Owned RGBA draw surface. Provides the one primitive the compositor and
/// renderer need: blitting a source rectangle onto a destination rectangle
/// with independent X/Y scaling.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// Fills the whole surface with one opaque color.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba(rgba);
        }
    }

    /// Copies `src_rect` out of `src` into `dst_rect`, scaling each axis
    /// independently (nearest neighbor) and compositing source-over.
    /// Zero-extent rectangles draw nothing; destination pixels outside the
    /// surface are clipped.
    pub fn blit_scaled(&mut self, src: &RgbaImage, src_rect: Rect, dst_rect: Rect) {
        if src_rect.w == 0 || src_rect.h == 0 || dst_rect.w == 0 || dst_rect.h == 0 {
            return;
        }
        debug_assert!(src_rect.x >= 0 && src_rect.y >= 0);
        debug_assert!(src_rect.right() as u32 <= src.width());
        debug_assert!(src_rect.bottom() as u32 <= src.height());

        for dy in 0..dst_rect.h {
            let ty = dst_rect.y + dy as i32;
            if ty < 0 || ty >= self.height() as i32 {
                continue;
            }
            let sy = src_rect.y as u32 + dy * src_rect.h / dst_rect.h;
            for dx in 0..dst_rect.w {
                let tx = dst_rect.x + dx as i32;
                if tx < 0 || tx >= self.width() as i32 {
                    continue;
                }
                let sx = src_rect.x as u32 + dx * src_rect.w / dst_rect.w;
                let src_pixel = *src.get_pixel(sx, sy);
                source_over(self.pixels.get_pixel_mut(tx as u32, ty as u32), src_pixel);
            }
        }
    }

    /// Unscaled blit of `src_rect` at `dst_pos`.
    pub fn blit(&mut self, src: &RgbaImage, src_rect: Rect, dst_pos: (i32, i32)) {
        let dst_rect = Rect::new(dst_pos.0, dst_pos.1, src_rect.w, src_rect.h);
        self.blit_scaled(src, src_rect, dst_rect);
    }
}

fn source_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let alpha = src.0[3] as u32;
    match alpha {
        0 => {}
        255 => *dst = src,
        _ => {
            for channel in 0..3 {
                let blended =
                    src.0[channel] as u32 * alpha + dst.0[channel] as u32 * (255 - alpha);
                dst.0[channel] = (blended / 255) as u8;
            }
            dst.0[3] = (alpha + dst.0[3] as u32 * (255 - alpha) / 255) as u8;
        }
    }
}
