use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Player-applied state of one cell. Clue values are derived from the
    /// mine mask on demand and never stored here.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CellMarks: u8 {
        const REVEALED = 1;
        const FLAGGED = 1 << 1;
    }
}

impl CellMarks {
    pub const fn is_revealed(self) -> bool {
        self.contains(Self::REVEALED)
    }

    pub const fn is_flagged(self) -> bool {
        self.contains(Self::FLAGGED)
    }
}

/// What the presentation layer should draw at one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    /// Open safe cell carrying its mine-neighbor count; 0 is a blank.
    Revealed(u8),
    /// Disclosed mine after a loss.
    Mine,
    /// Disclosed mine after a win.
    Disarmed,
}

impl CellView {
    /// Whether the cell still hides its content from the player.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_start_empty() {
        let marks = CellMarks::default();
        assert!(!marks.is_revealed());
        assert!(!marks.is_flagged());
    }

    #[test]
    fn hidden_views() {
        assert!(CellView::Hidden.is_hidden());
        assert!(CellView::Flagged.is_hidden());
        assert!(!CellView::Revealed(0).is_hidden());
        assert!(!CellView::Mine.is_hidden());
        assert!(!CellView::Disarmed.is_hidden());
    }
}
