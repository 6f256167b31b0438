use serde::{Deserialize, Serialize};

use crate::types::{area, Area, Coord, Pos};

/// Board parameters: size as `(columns, rows)` plus the mine total.
///
/// Built once by the embedding layer and handed to generation; the engine
/// never reads configuration from anywhere else.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Pos,
    pub mines: Area,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Pos = (8, 8);
    pub const DEFAULT_MINES: Area = 8;

    pub const fn new_unchecked(size: Pos, mines: Area) -> Self {
        Self { size, mines }
    }

    /// Clamps both axes to at least 1 and the mine total to
    /// `[1, cols * rows]`.
    pub fn new((cols, rows): Pos, mines: Area) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mines = mines.clamp(1, area(cols, rows));
        Self::new_unchecked((cols, rows), mines)
    }

    /// Builds a config from `rows=16 cols=16 mines=40` style parameters.
    ///
    /// Keys are matched on their first letter (`r`, `c`, `m`), so the short
    /// forms `r=16 c=16 m=40` work too. Entries without `=`, with unknown
    /// keys, or with values that do not parse into the target type are
    /// ignored. The result is clamped as in [`GameConfig::new`].
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (mut cols, mut rows) = Self::DEFAULT_SIZE;
        let mut mines = Self::DEFAULT_MINES;

        for param in params {
            let Some((key, value)) = param.split_once('=') else {
                continue;
            };
            match key.bytes().next() {
                Some(b'r' | b'R') => {
                    if let Ok(value) = value.parse::<Coord>() {
                        rows = value;
                    }
                }
                Some(b'c' | b'C') => {
                    if let Ok(value) = value.parse::<Coord>() {
                        cols = value;
                    }
                }
                Some(b'm' | b'M') => {
                    if let Ok(value) = value.parse::<Area>() {
                        mines = value;
                    }
                }
                _ => {}
            }
        }

        Self::new((cols, rows), mines)
    }

    pub const fn total_cells(&self) -> Area {
        area(self.size.0, self.size.1)
    }

    /// Whether generation will accept this config: positive axes and a mine
    /// total within `[1, total_cells]`.
    pub fn is_valid(&self) -> bool {
        self.size.0 >= 1
            && self.size.1 >= 1
            && self.mines >= 1
            && self.mines <= self.total_cells()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_MINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_classic_eight_by_eight() {
        let config = GameConfig::default();
        assert_eq!(config.size, (8, 8));
        assert_eq!(config.mines, 8);
        assert!(config.is_valid());
    }

    #[test]
    fn clamps_degenerate_requests() {
        let config = GameConfig::new((0, 0), 0);
        assert_eq!(config.size, (1, 1));
        assert_eq!(config.mines, 1);
    }

    #[test]
    fn clamps_mines_to_the_cell_count() {
        let config = GameConfig::new((2, 2), 5);
        assert_eq!(config.mines, 4);
    }

    #[test]
    fn parses_long_and_short_keys() {
        let config = GameConfig::from_params(["rows=3", "c=10", "m=4"]);
        assert_eq!(config.size, (10, 3));
        assert_eq!(config.mines, 4);
    }

    #[test]
    fn ignores_malformed_parameters() {
        let config = GameConfig::from_params(["rows=abc", "width=5", "cols", "x=1"]);
        assert_eq!(config.size, GameConfig::DEFAULT_SIZE);
        assert_eq!(config.mines, GameConfig::DEFAULT_MINES);
    }

    #[test]
    fn ignores_values_that_overflow_the_axis_type() {
        let config = GameConfig::from_params(["rows=300"]);
        assert_eq!(config.size, GameConfig::DEFAULT_SIZE);
    }

    #[test]
    fn parsed_values_are_clamped_last() {
        let config = GameConfig::from_params(["r=2", "c=2", "mines=9"]);
        assert_eq!(config.mines, 4);
    }
}
