#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod types;

/// Mine placement for one game.
///
/// Only the mask is stored; clue values are derived on demand by counting
/// mine-neighbors, so the mask is the single source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    mines: Array2<bool>,
    mine_count: Area,
}

impl MineField {
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self { mines, mine_count }
    }

    /// Builds a field with mines at exactly the given positions, mostly
    /// useful for fixtures. Duplicate positions collapse into one mine.
    pub fn from_mine_coords(size: Pos, mine_coords: &[Pos]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.grid_index());

        for &pos in mine_coords {
            if !in_bounds(pos, size) {
                return Err(GameError::CoordOutOfRange);
            }
            mines[pos.grid_index()] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    pub fn size(&self) -> Pos {
        let (cols, rows) = self.mines.dim();
        (cols.try_into().unwrap(), rows.try_into().unwrap())
    }

    pub fn total_cells(&self) -> Area {
        self.mines.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> Area {
        self.mine_count
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn contains_mine(&self, pos: Pos) -> bool {
        self[pos]
    }

    /// Count of mine-neighbors of `pos`, 0 through 8.
    pub fn clue_at(&self, pos: Pos) -> u8 {
        self.mines
            .iter_neighbors(pos)
            .filter(|&neighbor| self[neighbor])
            .count()
            .try_into()
            .unwrap()
    }

    /// -1 for a mine, otherwise the clue. Panics on out-of-bounds input;
    /// callers are expected to only pass positions they enumerated from
    /// [`MineField::size`].
    pub fn value_at(&self, pos: Pos) -> i8 {
        if self[pos] {
            -1
        } else {
            self.clue_at(pos) as i8
        }
    }

    pub(crate) fn iter_neighbors(&self, pos: Pos) -> NeighborIter {
        self.mines.iter_neighbors(pos)
    }
}

impl Index<Pos> for MineField {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mines[pos.grid_index()]
    }
}

/// Outcome of a `reveal` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// One or more safe cells were disclosed.
    Revealed,
    /// A mine was disclosed and the game is lost.
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a `toggle_flag` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
    /// The flag set now covers exactly the mines and the game is won.
    Won,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn values_are_derived_from_the_mask() {
        let field = MineField::from_mine_coords((3, 3), &[(0, 0)]).unwrap();

        assert_eq!(field.value_at((0, 0)), -1);
        assert_eq!(field.value_at((1, 0)), 1);
        assert_eq!(field.value_at((1, 1)), 1);
        assert_eq!(field.value_at((2, 2)), 0);
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let field = MineField::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(field.mine_count(), 1);
    }

    #[test]
    fn rejects_out_of_range_mines() {
        let result = MineField::from_mine_coords((2, 2), &[(2, 0)]);
        assert_eq!(result, Err(GameError::CoordOutOfRange));
    }

    #[test]
    fn mask_constructor_counts_mines() {
        let mut mask: Array2<bool> = Array2::default((4, 2));
        mask[(0, 0)] = true;
        mask[(3, 1)] = true;

        let field = MineField::from_mine_mask(mask);
        assert_eq!(field.mine_count(), 2);
        assert_eq!(field.total_cells(), 8);
        assert_eq!(field.size(), (4, 2));
        assert_eq!(field.config(), GameConfig::new_unchecked((4, 2), 2));
    }

    #[test]
    fn clues_count_every_adjacent_mine() {
        let mines = vec![(0, 0), (1, 0), (2, 0)];
        let field = MineField::from_mine_coords((3, 3), &mines).unwrap();

        assert_eq!(field.clue_at((1, 1)), 3);
        assert_eq!(field.clue_at((0, 1)), 2);
        assert_eq!(field.clue_at((2, 2)), 0);
    }
}
