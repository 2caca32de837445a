//! # dicedist
//!
//! Exact probability distributions for sums of dice, with drop-lowest.
//!
//! Give it the face count of every die and how many of the lowest results
//! to discard; it walks every possible roll and tells you how likely each
//! remaining sum is. Every distribution is exact; nothing is estimated.
//!
//! There are three ways in:
//!
//! 1. **Slices** with [`compute`].
//! 2. **Dice notation** parsed into a [`DicePool`] (`"4d6dl1"`, `"2d20kh1"`).
//! 3. **Compile-time enums** with the [`DicePreset`] derive macro (from the
//!    companion `dicedist_macros` crate).
//!
//! ## Quick start (slices)
//!
//! ```rust,ignore
//! let dist = dicedist::compute(&[6, 6], 0).unwrap();
//! assert!((dist.probability(7) - 6.0 / 36.0).abs() < 1e-12);
//! ```
//!
//! ## Quick start (notation + presets)
//!
//! ```rust,ignore
//! use dicedist::{DicePool, DicePreset};
//!
//! #[derive(Copy, Clone, Debug, DicePreset)]
//! enum Check {
//!     #[dice("4d6dl1")] AbilityScore,
//!     #[dice("2d20kh1")] Advantage,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stats = Check::AbilityScore.distribution()?;
//! let pool: DicePool = "3d6".parse()?;
//! let dist = pool.distribution()?;
//! println!("{} averages {:.2}", pool, dist.mean());
//! # Ok(()) }
//! ```
//!
//! ## Recomputing on input changes
//! [`Calculator::recompute`] is the hook for interactive callers: call it
//! with the new inputs every time they change. Identical inputs return the
//! cached result.
//!
//! ## Performance
//! * **Compute**: O(outcomes * n log n) where outcomes is the product of all
//!   face counts. Ten d20s is about 10^13 outcomes, which is out of reach;
//!   anything past [`LARGE_OUTCOME_HINT`] logs a warning.
//! * **Space**: O(n) while enumerating (the odometer reuses one buffer), plus
//!   one entry per distinct sum.
//!
//! ## Gotchas
//! * At least one die must be kept: `drop < dice`.
//! * A one-faced die is allowed and always shows 1.
//!
//! ## Logging
//! Enumeration reports through the `log` facade at `debug`; install any
//! logger to see it.

extern crate self as dicedist;

mod calculator;
mod distribution;
mod error;
mod outcomes;
mod pool;
mod preset;

pub use calculator::{Calculator, LARGE_OUTCOME_HINT, compute, reduced_sum};
pub use distribution::{Distribution, FrequencyTable};
pub use error::DiceError;
pub use outcomes::Outcomes;
pub use pool::{DicePool, MAX_POOL_DICE, Roll};
pub use preset::DicePreset;

/// Derive macro imported from `dicedist_macros`.
/// See the crate-level example for usage.
pub use dicedist_macros::DicePreset;
