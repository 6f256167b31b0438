use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a game stands. `Won` and `Lost` are terminal: once reached, no
/// command mutates state anymore.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Authoritative state of one game: mine placement, per-cell marks, and
/// phase.
///
/// The engine is the single owner of all game state. A presentation layer
/// translates gestures into [`BoardEngine::reveal`],
/// [`BoardEngine::toggle_flag`] and [`BoardEngine::reset`], then polls
/// [`BoardEngine::cell_at`] and [`BoardEngine::phase`] to redraw; it holds
/// no authoritative state of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    field: MineField,
    marks: Array2<CellMarks>,
    flagged_count: Area,
    phase: GamePhase,
    triggered_mine: Option<Pos>,
}

impl BoardEngine {
    pub fn new(field: MineField) -> Self {
        let size = field.size();
        Self {
            field,
            marks: Array2::default(size.grid_index()),
            flagged_count: 0,
            phase: GamePhase::default(),
            triggered_mine: None,
        }
    }

    /// Generates a fresh field and wraps it in an engine.
    pub fn generate<G: FieldGenerator>(config: GameConfig, generator: G) -> Result<Self> {
        Ok(Self::new(generator.generate(config)?))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn size(&self) -> Pos {
        self.field.size()
    }

    pub fn mine_count(&self) -> Area {
        self.field.mine_count()
    }

    /// Mines minus flags; negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.field.mine_count()) - i32::from(self.flagged_count)
    }

    /// The mine whose reveal lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Pos> {
        self.triggered_mine
    }

    /// -1 for a mine, otherwise the 0..=8 clue.
    pub fn value_at(&self, pos: Pos) -> i8 {
        self.field.value_at(pos)
    }

    pub fn is_revealed(&self, pos: Pos) -> bool {
        self.marks[pos.grid_index()].is_revealed()
    }

    pub fn is_flagged(&self, pos: Pos) -> bool {
        self.marks[pos.grid_index()].is_flagged()
    }

    /// Per-cell display state. Disclosed mines render differently after a
    /// win than after a loss.
    pub fn cell_at(&self, pos: Pos) -> CellView {
        let marks = self.marks[pos.grid_index()];
        if marks.is_revealed() {
            match (self.field.contains_mine(pos), self.phase) {
                (true, GamePhase::Won) => CellView::Disarmed,
                (true, _) => CellView::Mine,
                (false, _) => CellView::Revealed(self.field.clue_at(pos)),
            }
        } else if marks.is_flagged() {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }

    /// Reveals a cell. No-op once the game has ended or on an already
    /// revealed cell; a flag does not protect a cell from being revealed.
    ///
    /// A mine loses the game and discloses the whole board. A blank opens
    /// its entire contiguous region plus the clue border in one step.
    pub fn reveal(&mut self, pos: Pos) -> RevealOutcome {
        if !self.phase.is_playing() || self.is_revealed(pos) {
            return RevealOutcome::NoChange;
        }

        match self.field.value_at(pos) {
            value if value < 0 => {
                log::debug!("mine hit at {pos:?}");
                self.triggered_mine = Some(pos);
                self.finish(GamePhase::Lost);
                RevealOutcome::HitMine
            }
            0 => {
                let region = self.flood_region(pos);
                log::debug!("blank at {pos:?} opened {} cells", region.len());
                for cell in region {
                    self.mark_revealed(cell);
                }
                RevealOutcome::Revealed
            }
            value => {
                log::debug!("revealed {pos:?}, clue {value}");
                self.mark_revealed(pos);
                RevealOutcome::Revealed
            }
        }
    }

    /// Flips the flag on a hidden cell, then re-evaluates the win rule.
    /// No-op once the game has ended or on a revealed cell.
    pub fn toggle_flag(&mut self, pos: Pos) -> FlagOutcome {
        if !self.phase.is_playing() || self.is_revealed(pos) {
            return FlagOutcome::NoChange;
        }

        self.set_flag(pos, !self.is_flagged(pos));

        if self.flagged_value_sum() == -i32::from(self.field.mine_count()) {
            self.finish(GamePhase::Won);
            FlagOutcome::Won
        } else {
            FlagOutcome::Changed
        }
    }

    /// Discards the whole board and starts a new game in `Playing`.
    pub fn reset<G: FieldGenerator>(&mut self, config: GameConfig, generator: G) -> Result<()> {
        *self = Self::new(generator.generate(config)?);
        Ok(())
    }

    /// The contiguous blank region around `start` plus its clue border.
    ///
    /// Explicit work list; the region can span the whole board and the
    /// neighbor graph reconverges on cells through multiple paths.
    /// Neighbors are pushed unfiltered, the visited check on pop is the
    /// only dedup.
    fn flood_region(&self, start: Pos) -> Vec<Pos> {
        let mut visited: HashSet<Pos> = HashSet::new();
        let mut region = Vec::new();
        let mut work = VecDeque::from([start]);

        while let Some(pos) = work.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            region.push(pos);

            // clue cells bound the region; only blanks keep expanding
            if self.field.value_at(pos) != 0 {
                continue;
            }
            log::trace!("expanding blank {pos:?}");
            work.extend(self.field.iter_neighbors(pos));
        }

        region
    }

    fn set_flag(&mut self, pos: Pos, flagged: bool) {
        let marks = &mut self.marks[pos.grid_index()];
        if marks.is_flagged() == flagged {
            return;
        }
        marks.toggle(CellMarks::FLAGGED);
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
    }

    /// Marking revealed drops any flag; a cell is never both.
    fn mark_revealed(&mut self, pos: Pos) {
        let marks = &mut self.marks[pos.grid_index()];
        if marks.is_flagged() {
            self.flagged_count -= 1;
        }
        *marks = CellMarks::REVEALED;
    }

    /// Ends the game and discloses the full layout, so the player sees
    /// every mine and clue.
    fn finish(&mut self, phase: GamePhase) {
        debug_assert!(phase.is_terminal());
        log::debug!("game over: {phase:?}");
        self.phase = phase;

        let (cols, rows) = self.field.size();
        for x in 0..cols {
            for y in 0..rows {
                self.mark_revealed((x, y));
            }
        }
    }

    /// The win rule: a flag on a mine contributes -1, a flag on a safe
    /// cell contributes its clue (>= 0), so the sum reaches `-mine_count`
    /// exactly when the flag set is the mine set.
    fn flagged_value_sum(&self) -> i32 {
        let (cols, rows) = self.field.size();
        let mut total = 0;
        for x in 0..cols {
            for y in 0..rows {
                if self.marks[(x, y).grid_index()].is_flagged() {
                    total += i32::from(self.field.value_at((x, y)));
                }
            }
        }
        total
    }
}
