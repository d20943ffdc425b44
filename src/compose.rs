//! Nine-patch compositing: scaling fixed-corner UI chrome out of the skin.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::surface::Canvas;
use crate::types::Rect;

/// Nine-slice descriptor: a 3x3 decomposition of a skin region into corners
/// (fixed), edges (stretched along one axis), and a center (stretched along
/// both). `gap` is the number of source pixels separating adjacent slices
/// in the skin.
///
/// The skin parks a placeholder color in some center slices; descriptors
/// for those regions set `omit_center` so the slice stays undrawn and the
/// caller's clear fill shows through the interior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NineSlice {
    pub x: u32,
    pub y: u32,
    pub widths: [u32; 3],
    pub heights: [u32; 3],
    pub gap: u32,
    pub omit_center: bool,
}

impl NineSlice {
    /// Smallest target width: the two fixed columns with the stretch column
    /// at zero extent.
    pub const fn min_width(&self) -> u32 {
        self.widths[0] + self.widths[2]
    }

    pub const fn min_height(&self) -> u32 {
        self.heights[0] + self.heights[2]
    }

    /// Composites this descriptor onto a fresh surface of the target size.
    ///
    /// Corner and edge slices keep their source extent; the middle column
    /// and row absorb all remaining space. Slices are drawn row-major with
    /// independent X/Y scale factors and never overlap, so composing the
    /// same target twice is pixel-identical. With `omit_center` the center
    /// slice is skipped and its destination pixels stay transparent. A
    /// target smaller than the fixed slices would need a negative stretch
    /// extent and is rejected.
    pub fn compose(&self, skin: &RgbaImage, target_w: u32, target_h: u32) -> Result<Canvas> {
        if target_w < self.min_width() || target_h < self.min_height() {
            return Err(GameError::TargetTooSmall {
                target_w,
                target_h,
                min_w: self.min_width(),
                min_h: self.min_height(),
            });
        }

        let mut out = Canvas::new(target_w, target_h);
        let mut src_y = self.y;
        let mut dst_y = 0u32;
        for row in 0..3 {
            let src_h = self.heights[row];
            let dst_h = if row == 1 {
                target_h - self.min_height()
            } else {
                src_h
            };

            let mut src_x = self.x;
            let mut dst_x = 0u32;
            for col in 0..3 {
                let src_w = self.widths[col];
                let dst_w = if col == 1 {
                    target_w - self.min_width()
                } else {
                    src_w
                };

                let skipped = row == 1 && col == 1 && self.omit_center;
                if !skipped {
                    out.blit_scaled(
                        skin,
                        Rect::new(src_x as i32, src_y as i32, src_w, src_h),
                        Rect::new(dst_x as i32, dst_y as i32, dst_w, dst_h),
                    );
                }

                src_x += src_w + self.gap;
                dst_x += dst_w;
            }

            src_y += src_h + self.gap;
            dst_y += dst_h;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const SLICE: NineSlice = NineSlice {
        x: 0,
        y: 0,
        widths: [2, 1, 2],
        heights: [2, 1, 2],
        gap: 1,
        omit_center: false,
    };

    /// A 7x7 test skin where each of the 9 slices is a distinct solid color
    /// (color index = row * 3 + col + 1) and every gap pixel is 0xEE.
    fn test_skin() -> RgbaImage {
        let mut skin = RgbaImage::from_pixel(7, 7, Rgba([0xEE, 0xEE, 0xEE, 255]));
        let spans = [(0u32, 2u32), (3, 1), (5, 2)];
        for (row, &(y0, sh)) in spans.iter().enumerate() {
            for (col, &(x0, sw)) in spans.iter().enumerate() {
                let color = (row * 3 + col + 1) as u8;
                for y in y0..y0 + sh {
                    for x in x0..x0 + sw {
                        skin.put_pixel(x, y, Rgba([color, color, color, 255]));
                    }
                }
            }
        }
        skin
    }

    fn color_at(canvas: &Canvas, x: u32, y: u32) -> u8 {
        canvas.pixels().get_pixel(x, y).0[0]
    }

    #[test]
    fn stretch_slices_absorb_all_remaining_space() {
        let skin = test_skin();
        let out = SLICE.compose(&skin, 10, 8).unwrap();

        assert_eq!(out.width(), 10);
        assert_eq!(out.height(), 8);
        // Corners keep their source pixels.
        assert_eq!(color_at(&out, 0, 0), 1);
        assert_eq!(color_at(&out, 9, 0), 3);
        assert_eq!(color_at(&out, 0, 7), 7);
        assert_eq!(color_at(&out, 9, 7), 9);
        // Edge and center stretch across the interior.
        assert_eq!(color_at(&out, 5, 0), 2);
        assert_eq!(color_at(&out, 0, 4), 4);
        assert_eq!(color_at(&out, 5, 4), 5);
        assert_eq!(color_at(&out, 9, 4), 6);
        assert_eq!(color_at(&out, 5, 7), 8);
        // Gap pixels never leak into the output.
        assert!(out.pixels().pixels().all(|p| p.0[0] != 0xEE));
    }

    #[test]
    fn omitted_center_stays_transparent() {
        let skin = test_skin();
        let hollow = NineSlice {
            omit_center: true,
            ..SLICE
        };
        let out = hollow.compose(&skin, 10, 8).unwrap();

        // The interior (2..8, 2..6) is untouched; the frame is drawn.
        for y in 2..6 {
            for x in 2..8 {
                assert_eq!(out.pixels().get_pixel(x, y).0, [0, 0, 0, 0], "at ({x}, {y})");
            }
        }
        assert_eq!(color_at(&out, 0, 0), 1);
        assert_eq!(color_at(&out, 5, 0), 2);
        assert_eq!(color_at(&out, 0, 4), 4);
        assert_eq!(color_at(&out, 9, 4), 6);
        assert_eq!(color_at(&out, 5, 7), 8);
        assert!(out.pixels().pixels().all(|p| p.0 != [5, 5, 5, 255]));
    }

    #[test]
    fn composing_twice_is_pixel_identical() {
        let skin = test_skin();
        let a = SLICE.compose(&skin, 23, 17).unwrap();
        let b = SLICE.compose(&skin, 23, 17).unwrap();
        assert_eq!(a.pixels().as_raw(), b.pixels().as_raw());
    }

    #[test]
    fn minimum_target_tiles_the_fixed_slices_with_no_stretch() {
        let skin = test_skin();
        let out = SLICE
            .compose(&skin, SLICE.min_width(), SLICE.min_height())
            .unwrap();

        // 4x4 output: only corner colors, butted directly together.
        let expected = [[1, 1, 3, 3], [1, 1, 3, 3], [7, 7, 9, 9], [7, 7, 9, 9]];
        for (y, row) in expected.iter().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                assert_eq!(color_at(&out, x as u32, y as u32), color, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn undersized_target_is_rejected() {
        let skin = test_skin();
        assert!(matches!(
            SLICE.compose(&skin, 3, 10),
            Err(GameError::TargetTooSmall { .. })
        ));
        assert!(matches!(
            SLICE.compose(&skin, 10, 3),
            Err(GameError::TargetTooSmall { .. })
        ));
    }
}
