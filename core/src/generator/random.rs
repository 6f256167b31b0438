use ndarray::Array2;

use super::*;

/// Uniform mine placement without replacement, driven by an explicit seed.
///
/// The core performs no entropy I/O; seeds come from the embedding layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomFieldGenerator {
    seed: u64,
}

impl RandomFieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldGenerator for RandomFieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineField> {
        use rand::prelude::*;

        if !config.is_valid() {
            return Err(GameError::InvalidConfig);
        }

        let total = config.total_cells();

        // saturated board: nothing left to choose
        if config.mines == total {
            log::warn!("every cell is mined ({total} mines on {total} cells)");
            let mines = Array2::from_elem(config.size.grid_index(), true);
            return Ok(MineField::from_mine_mask(mines));
        }

        let mut mines: Array2<bool> = Array2::default(config.size.grid_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut free = total;

        {
            let cells = mines.as_slice_mut().expect("fresh mask is contiguous");
            for _ in 0..config.mines {
                // rank among the still-free cells; occupied cells shift the
                // target one slot to the right while walking
                let mut rank: Area = rng.random_range(0..free);
                for (i, cell) in cells.iter_mut().enumerate() {
                    if *cell {
                        rank += 1;
                    } else if i == usize::from(rank) {
                        *cell = true;
                        free -= 1;
                        break;
                    }
                }
            }
        }

        Ok(MineField::from_mine_mask(mines))
    }
}
