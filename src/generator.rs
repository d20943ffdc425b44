use ndarray::Array2;
use rand::Rng;
use rand::seq::index;

use crate::types::{self, Coord};
use crate::{GameConfig, Minefield};

impl Minefield {
    /// Generates a fresh minefield for `config` from the given random source.
    ///
    /// Placement draws `mines` distinct flat cell indices in one bounded
    /// pass (a partial shuffle), uniform over all mine-count-sized subsets,
    /// so generation terminates even at high mine density. Callers wanting
    /// reproducible boards seed `rng` themselves.
    pub fn random<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let (w, _) = config.size();
        let total = config.total_cells() as usize;
        debug_assert!((config.mines() as usize) < total);

        let mut mines: Array2<bool> = Array2::default(types::grid_dim(config.size()));
        for flat in index::sample(rng, total, config.mines() as usize) {
            let x = (flat % w as usize) as Coord;
            let y = (flat / w as usize) as Coord;
            mines[types::grid_index((x, y))] = true;
        }

        log::debug!(
            "generated {}x{} minefield with {} mines",
            config.size().0,
            config.size().1,
            config.mines()
        );
        Self::from_mine_mask(mines)
    }
}
