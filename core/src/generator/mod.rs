use crate::*;
pub use random::*;

mod random;

/// Strategy seam for producing a mine placement from a config.
///
/// Implementations must refuse configs the caller failed to clamp (zero
/// axis, zero mines, more mines than cells).
pub trait FieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineField>;
}
