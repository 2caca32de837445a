use crate::distribution::Distribution;
use crate::error::DiceError;
use crate::pool::DicePool;

/// Trait implemented by the `DicePreset` derive macro.
///
/// Each variant names a dice pool in notation, e.g. `#[dice("4d6dl1")]`.
/// The notation is parsed when a pool is requested, so a typo surfaces as
/// [`DiceError::Notation`] rather than a panic.
pub trait DicePreset: Sized + 'static {
    /// All `(variant, notation)` pairs in declaration order.
    const ENTRIES: &'static [(Self, &'static str)];

    /// Notation attached to this variant.
    fn notation(&self) -> &'static str;

    fn pool(&self) -> Result<DicePool, DiceError> {
        self.notation().parse()
    }

    fn distribution(&self) -> Result<Distribution, DiceError> {
        self.pool()?.distribution()
    }
}
