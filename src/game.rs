use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::error::Result;
use crate::input::{ButtonState, PointerSnapshot};
use crate::layout::{self, HitMap, Region};
use crate::render::Renderer;
use crate::surface::Canvas;
use crate::types::Coord2;
use crate::{GameConfig, Minefield};

/// A running game: the board, the global button state, the transient
/// pressed-tile peek, and the renderer baked for the current board size.
///
/// The host drives it with one [`update`](Self::update) and one
/// [`draw`](Self::draw) per tick; all mutation happens in `update`, strictly
/// before `draw` reads it.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    renderer: Renderer,
    button: ButtonState,
    pressed_tile: Option<Coord2>,
    rng: SmallRng,
}

impl Game {
    /// Starts a game with operating-system entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Starts a game with a fixed seed; boards are fully reproducible.
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: SmallRng) -> Result<Self> {
        let renderer = Renderer::new(config)?;
        let board = Board::new(Minefield::random(config, &mut rng));
        Ok(Self {
            config,
            board,
            renderer,
            button: ButtonState::default(),
            pressed_tile: None,
            rng,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    /// Cell currently shown as pressed-open (the visual-only peek).
    pub fn pressed_tile(&self) -> Option<Coord2> {
        self.pressed_tile
    }

    /// Output surface size the host should allocate.
    pub fn window_size(&self) -> (u32, u32) {
        layout::window_size(self.config)
    }

    /// Applies one frame of pointer input to the state machine.
    ///
    /// Hit rectangles are recomputed from the current layout on every call;
    /// the board only ever sees coordinates that resolved inside the tiles
    /// rectangle.
    pub fn update(&mut self, pointer: PointerSnapshot) -> Result<()> {
        let hits = HitMap::compute(self.config);
        let region = hits.resolve(pointer.pos);

        if pointer.left_just_pressed {
            match region {
                Some(Region::Button) => self.button = ButtonState::Pressed,
                Some(Region::Tiles) => {
                    self.pressed_tile = hits.tile_at(pointer.pos);
                    self.button = ButtonState::Evaluating;
                }
                None => {}
            }
        }

        if pointer.left_just_released {
            match region {
                Some(Region::Button) => {
                    let was_pressed = self.button == ButtonState::Pressed;
                    self.button = ButtonState::Idle;
                    if was_pressed {
                        self.new_game()?;
                    }
                }
                Some(Region::Tiles) => {
                    if self.pressed_tile.take().is_some() {
                        self.button = ButtonState::Idle;
                        if let Some(coords) = hits.tile_at(pointer.pos) {
                            self.board.open(coords);
                        }
                    }
                }
                None => {}
            }
        }

        if pointer.right_just_released && region == Some(Region::Tiles) {
            self.pressed_tile = None;
            self.button = ButtonState::Idle;
            if let Some(coords) = hits.tile_at(pointer.pos) {
                self.board.toggle_flag(coords);
            }
        }

        // Transient visuals revert the instant the pointer leaves their
        // region, without a completed click.
        if self.button == ButtonState::Pressed && region != Some(Region::Button) {
            self.button = ButtonState::Idle;
        }
        if self.pressed_tile.is_some() {
            if region == Some(Region::Tiles) {
                self.pressed_tile = hits.tile_at(pointer.pos);
            } else {
                self.pressed_tile = None;
                self.button = ButtonState::Idle;
            }
        }

        Ok(())
    }

    /// Discards the board and starts over: fresh mine placement, all cells
    /// closed, counters and the elapsed-time origin reset, the
    /// size-dependent background re-baked.
    pub fn new_game(&mut self) -> Result<()> {
        self.renderer.rebake(self.config)?;
        self.board = Board::new(Minefield::random(self.config, &mut self.rng));
        self.pressed_tile = None;
        self.button = ButtonState::Idle;
        log::info!(
            "new game: {}x{} with {} mines",
            self.config.size().0,
            self.config.size().1,
            self.config.mines()
        );
        Ok(())
    }

    /// Renders the current state into `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        let hits = HitMap::compute(self.config);
        self.renderer
            .draw(canvas, &self.board, self.button, self.pressed_tile, &hits);
    }
}
