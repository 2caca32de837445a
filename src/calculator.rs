//! Exhaustive enumeration of a dice pool into its exact sum distribution.

use log::{debug, trace, warn};

use crate::distribution::{Distribution, FrequencyTable};
use crate::error::DiceError;
use crate::outcomes::Outcomes;
use crate::pool::DicePool;

/// Outcome counts past this point take noticeably long to enumerate.
///
/// Not a limit; crossing it only logs a warning.
pub const LARGE_OUTCOME_HINT: u64 = 100_000_000;

/// Exact distribution of sums for `dice_sides` after dropping the `drop` lowest dice.
///
/// # Errors
/// See [`DicePool::new`]; additionally [`DiceError::Overflow`] when the
/// outcome count does not fit in a `u64`.
///
/// # Complexity
/// O(outcomes * n log n) time for `n` dice, O(n + distinct sums) space.
pub fn compute(dice_sides: &[u32], drop: usize) -> Result<Distribution, DiceError> {
    DicePool::new(dice_sides.iter().copied(), drop)?.distribution()
}

/// Sort `outcome` into `scratch`, skip the `drop` lowest faces and sum the rest.
///
/// Ties are immaterial: equal faces contribute equally whichever is dropped.
#[inline]
pub fn reduced_sum(outcome: &[u32], drop: usize, scratch: &mut Vec<u32>) -> u64 {
    scratch.clear();
    scratch.extend_from_slice(outcome);
    scratch.sort_unstable();
    scratch.iter().skip(drop).map(|&f| u64::from(f)).sum()
}

impl DicePool {
    /// Enumerate every outcome of this pool and normalize the sum counts.
    pub fn distribution(&self) -> Result<Distribution, DiceError> {
        let total = self.total_outcomes()?;
        debug!("enumerating {} outcomes for {}", total, self);
        if total > LARGE_OUTCOME_HINT {
            warn!(
                "{} has {} outcomes; exhaustive enumeration will be slow",
                self, total
            );
        }

        let mut table = FrequencyTable::new();
        let mut scratch = Vec::with_capacity(self.len());
        let mut outcomes = Outcomes::new(self.sides());
        while let Some(outcome) = outcomes.next_outcome() {
            table.record(reduced_sum(outcome, self.drop_count(), &mut scratch));
        }

        debug!("{}: {} distinct sums", self, table.len());
        table.into_distribution(total)
    }
}

/// Recomputes a distribution on demand, reusing the last result while the
/// inputs stay the same.
///
/// Meant to sit behind a form or other input source: call
/// [`Calculator::recompute`] whenever the inputs change and render what it
/// returns.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    last: Option<(DicePool, Distribution)>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distribution for the given inputs.
    ///
    /// On error the previous distribution is kept.
    pub fn recompute(&mut self, dice_sides: &[u32], drop: usize) -> Result<&Distribution, DiceError> {
        let pool = DicePool::new(dice_sides.iter().copied(), drop)?;
        self.recompute_pool(pool)
    }

    /// Same as [`Calculator::recompute`] for an already-built pool.
    pub fn recompute_pool(&mut self, pool: DicePool) -> Result<&Distribution, DiceError> {
        match self.last.take() {
            Some((last, dist)) if last == pool => {
                trace!("{pool} unchanged; reusing distribution");
                let (_, dist) = self.last.insert((last, dist));
                Ok(&*dist)
            }
            previous => match pool.distribution() {
                Ok(dist) => {
                    let (_, dist) = self.last.insert((pool, dist));
                    Ok(&*dist)
                }
                Err(e) => {
                    self.last = previous;
                    Err(e)
                }
            },
        }
    }

    /// The most recent successful result.
    pub fn current(&self) -> Option<&Distribution> {
        self.last.as_ref().map(|(_, d)| d)
    }

    /// Pool the current result belongs to.
    pub fn pool(&self) -> Option<&DicePool> {
        self.last.as_ref().map(|(p, _)| p)
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
