//! Per-frame drawing: the baked background, HUD counters, reset button, and
//! the tile grid.

use crate::atlas::{self, SpriteAtlas};
use crate::board::Board;
use crate::compose::NineSlice;
use crate::error::Result;
use crate::input::ButtonState;
use crate::layout::{self, HitMap, Region};
use crate::surface::Canvas;
use crate::tile::Tile;
use crate::types::{Coord2, Rect};
use crate::GameConfig;

const CLEAR_COLOR: [u8; 4] = [0xCC, 0xCC, 0xCC, 0xFF];

/// Upper chrome panel: top band, HUD stretch strip, divider band. The
/// skin's center slice is a placeholder color; the HUD interior is the
/// clear fill, so the center stays undrawn.
const HUD_PANEL: NineSlice = NineSlice {
    x: 0,
    y: 82,
    widths: [12, 1, 12],
    heights: [11, 1, 11],
    gap: 1,
    omit_center: true,
};

/// Lower chrome panel: divider band, tile-grid stretch strip, bottom band.
/// Shares the divider row with `HUD_PANEL`, drawn 11 px above its bottom.
/// Center omitted like the HUD panel; the tile grid covers it exactly.
const FIELD_PANEL: NineSlice = NineSlice {
    x: 0,
    y: 96,
    widths: [12, 1, 12],
    heights: [11, 1, 11],
    gap: 1,
    omit_center: true,
};

/// Decorative title-bar cap in the skin, drawn unscaled at both HUD corners.
const TITLE_CAP: Rect = Rect::new(28, 82, 41, 25);
const CAP_INSET: i32 = 4;

/// Reads game state and turns it into draw calls, every frame, in a fixed
/// order. Owns the decoded skin and the background composite baked for the
/// current board size.
#[derive(Clone, Debug)]
pub struct Renderer {
    atlas: SpriteAtlas,
    background: Canvas,
}

impl Renderer {
    pub fn new(config: GameConfig) -> Result<Self> {
        let atlas = SpriteAtlas::decode(atlas::SKIN)?;
        let background = bake_background(&atlas, config)?;
        Ok(Self { atlas, background })
    }

    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    pub fn background(&self) -> &Canvas {
        &self.background
    }

    /// Re-bakes the size-dependent background composite for a new game.
    pub fn rebake(&mut self, config: GameConfig) -> Result<()> {
        self.background = bake_background(&self.atlas, config)?;
        Ok(())
    }

    /// Draws one frame into `canvas`. Pure read of current state; the board
    /// is not touched.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        board: &Board,
        button: ButtonState,
        peek: Option<Coord2>,
        hits: &HitMap,
    ) {
        canvas.fill(CLEAR_COLOR);
        canvas.blit(self.background.pixels(), self.background.bounds(), (0, 0));
        self.draw_bombs_left(canvas, board);
        self.draw_button(canvas, button, hits);
        self.draw_seconds(canvas, board);
        self.draw_tiles(canvas, board, peek, hits);
    }

    fn draw_bombs_left(&self, canvas: &mut Canvas, board: &Board) {
        let x0 = (layout::EDGE + 6) as i32;
        let y = (layout::BORDER + 6) as i32;
        for (i, digit) in counter_digits(board.mines_left()).into_iter().enumerate() {
            let x = x0 + i as i32 * layout::DIGIT_STEP as i32;
            canvas.blit(self.atlas.image(), self.atlas.digit(digit), (x, y));
        }
    }

    fn draw_seconds(&self, canvas: &mut Canvas, board: &Board) {
        let win_w = canvas.width() as i32;
        let y = (layout::BORDER + 6) as i32;
        let seconds = board.elapsed_secs().min(999) as i64;
        for (i, digit) in counter_digits(seconds).into_iter().enumerate() {
            let x = win_w - (layout::EDGE + 4) as i32 - (3 - i as i32) * layout::DIGIT_STEP as i32;
            canvas.blit(self.atlas.image(), self.atlas.digit(digit), (x, y));
        }
    }

    fn draw_button(&self, canvas: &mut Canvas, button: ButtonState, hits: &HitMap) {
        let rect = hits.rect(Region::Button);
        canvas.blit(
            self.atlas.image(),
            self.atlas.button(button.face()),
            (rect.x, rect.y),
        );
    }

    fn draw_tiles(&self, canvas: &mut Canvas, board: &Board, peek: Option<Coord2>, hits: &HitMap) {
        let origin = hits.rect(Region::Tiles);
        let (w, h) = board.size();
        for y in 0..h {
            for x in 0..w {
                let pos = (
                    origin.x + x as i32 * layout::TILE as i32,
                    origin.y + y as i32 * layout::TILE as i32,
                );
                let tile = board.tile_at((x, y));
                let src = match tile {
                    Tile::Opened => self
                        .atlas
                        .number(board.minefield().adjacent_mines((x, y)) as usize),
                    // Visual-only peek: a held pointer shows the closed
                    // cell as opened without mutating it.
                    Tile::Closed if peek == Some((x, y)) => {
                        self.atlas.icon(atlas::ICON_OPENED)
                    }
                    other => self.atlas.icon(other.icon()),
                };
                canvas.blit(self.atlas.image(), src, pos);
            }
        }
    }
}

fn bake_background(atlas: &SpriteAtlas, config: GameConfig) -> Result<Canvas> {
    let (win_w, win_h) = layout::window_size(config);
    let (_, board_h) = config.size();

    let hud_h = layout::BORDER * 2 + layout::HUD;
    let field_h = layout::BORDER * 2 + board_h as u32 * layout::TILE;
    let hud = HUD_PANEL.compose(atlas.image(), win_w, hud_h)?;
    let field = FIELD_PANEL.compose(atlas.image(), win_w, field_h)?;

    let mut background = Canvas::new(win_w, win_h);
    background.blit(hud.pixels(), hud.bounds(), (0, 0));
    // The field panel's top band is the divider; it overlays the HUD
    // panel's bottom band exactly.
    background.blit(
        field.pixels(),
        field.bounds(),
        (0, (layout::BORDER + layout::HUD) as i32),
    );

    let cap_y = (layout::BORDER as i32) + CAP_INSET;
    let left_x = layout::EDGE as i32 + CAP_INSET;
    let right_x = win_w as i32 - layout::EDGE as i32 - CAP_INSET - TITLE_CAP.w as i32;
    background.blit(atlas.image(), TITLE_CAP, (left_x, cap_y));
    background.blit(atlas.image(), TITLE_CAP, (right_x, cap_y));

    Ok(background)
}

/// Three-digit positional display, most significant digit first, clamped to
/// what three glyphs can show. The skin has no minus glyph, so negative
/// counters clamp to zero.
fn counter_digits(value: i64) -> [usize; 3] {
    let v = value.clamp(0, 999) as usize;
    [v / 100, v / 10 % 10, v % 10]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Minefield;

    fn config() -> GameConfig {
        GameConfig::new((9, 9), 10).unwrap()
    }

    #[test]
    fn counter_renders_most_significant_digit_first() {
        assert_eq!(counter_digits(7), [0, 0, 7]);
        assert_eq!(counter_digits(105), [1, 0, 5]);
        assert_eq!(counter_digits(0), [0, 0, 0]);
        assert_eq!(counter_digits(999), [9, 9, 9]);
    }

    #[test]
    fn counter_clamps_outside_the_displayable_range() {
        assert_eq!(counter_digits(-3), [0, 0, 0]);
        assert_eq!(counter_digits(1234), [9, 9, 9]);
    }

    #[test]
    fn background_bake_matches_the_window_and_is_deterministic() {
        let renderer = Renderer::new(config()).unwrap();
        let (win_w, win_h) = layout::window_size(config());
        assert_eq!(renderer.background().width(), win_w);
        assert_eq!(renderer.background().height(), win_h);

        let again = bake_background(renderer.atlas(), config()).unwrap();
        assert_eq!(
            renderer.background().pixels().as_raw(),
            again.pixels().as_raw()
        );
    }

    #[test]
    fn hud_interior_is_the_clear_fill_not_the_skin_placeholder() {
        let renderer = Renderer::new(config()).unwrap();
        let board = Board::new(
            Minefield::from_mine_coords((9, 9), &[(0, 0), (4, 4)]).unwrap(),
        );
        let hits = HitMap::compute(config());
        let (win_w, win_h) = layout::window_size(config());
        let mut canvas = Canvas::new(win_w, win_h);

        renderer.draw(&mut canvas, &board, ButtonState::Idle, None, &hits);

        // HUD-strip pixels not covered by the caps (x 16..57 and 111..152)
        // or the button (x 71..97) show the grey clear color, never the
        // green placeholder parked in the skin's stretch slices.
        for &(x, y) in &[(64, 12), (64, 40), (100, 12), (100, 40), (64, 27)] {
            assert_eq!(
                canvas.pixels().get_pixel(x, y).0,
                CLEAR_COLOR,
                "at ({x}, {y})"
            );
        }
        assert!(
            canvas
                .pixels()
                .pixels()
                .all(|p| p.0 != [0, 255, 0, 255])
        );
    }

    #[test]
    fn a_frame_draws_without_disturbing_board_state() {
        let renderer = Renderer::new(config()).unwrap();
        let board = Board::new(
            Minefield::from_mine_coords((9, 9), &[(0, 0), (4, 4)]).unwrap(),
        );
        let hits = HitMap::compute(config());
        let (win_w, win_h) = layout::window_size(config());
        let mut canvas = Canvas::new(win_w, win_h);

        renderer.draw(&mut canvas, &board, ButtonState::Idle, None, &hits);

        assert_eq!(board.tile_at((0, 0)), Tile::Closed);

        // Cell (0, 0) shows the closed icon, pixel for pixel (where the
        // icon is opaque).
        let tiles = hits.rect(Region::Tiles);
        let icon = renderer.atlas().icon(atlas::ICON_CLOSED);
        for dy in 0..layout::TILE {
            for dx in 0..layout::TILE {
                let src = renderer
                    .atlas()
                    .image()
                    .get_pixel(icon.x as u32 + dx, icon.y as u32 + dy);
                if src.0[3] != 255 {
                    continue;
                }
                let dst = canvas
                    .pixels()
                    .get_pixel(tiles.x as u32 + dx, tiles.y as u32 + dy);
                assert_eq!(dst, src, "at ({dx}, {dy})");
            }
        }
    }
}
