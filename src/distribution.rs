//! Sum counts and their normalized probabilities.

use std::collections::BTreeMap;

use crate::error::DiceError;

/// How many outcome tuples produced each reduced sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u64, u64>,
    tuples: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more tuple reducing to `sum`.
    #[inline]
    pub fn record(&mut self, sum: u64) {
        *self.counts.entry(sum).or_insert(0) += 1;
        self.tuples += 1;
    }

    pub fn count(&self, sum: u64) -> u64 {
        self.counts.get(&sum).copied().unwrap_or(0)
    }

    /// `(sum, count)` pairs in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Number of distinct sums.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tuples recorded so far.
    pub fn tuples(&self) -> u64 {
        self.tuples
    }

    /// Normalize every count by `total_outcomes`.
    ///
    /// # Errors
    /// [`DiceError::Empty`] if nothing was recorded or `total_outcomes` is zero.
    pub fn into_distribution(self, total_outcomes: u64) -> Result<Distribution, DiceError> {
        if self.counts.is_empty() || total_outcomes == 0 {
            return Err(DiceError::Empty);
        }
        let probs = self
            .counts
            .iter()
            .map(|(&s, &c)| (s, c as f64 / total_outcomes as f64))
            .collect();
        Ok(Distribution {
            probs,
            counts: self.counts,
            total_outcomes,
        })
    }
}

/// Exact probability of every reachable sum, ordered by ascending sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probs: BTreeMap<u64, f64>,
    counts: BTreeMap<u64, u64>,
    total_outcomes: u64,
}

impl Distribution {
    /// Probability of rolling exactly `sum`; `0.0` if unreachable.
    pub fn probability(&self, sum: u64) -> f64 {
        self.probs.get(&sum).copied().unwrap_or(0.0)
    }

    /// Number of outcome tuples reducing to `sum`.
    pub fn count(&self, sum: u64) -> u64 {
        self.counts.get(&sum).copied().unwrap_or(0)
    }

    pub fn total_outcomes(&self) -> u64 {
        self.total_outcomes
    }

    /// `(sum, probability)` pairs in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.probs.iter().map(|(&s, &p)| (s, p))
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn min_sum(&self) -> u64 {
        self.probs.keys().next().copied().unwrap_or(0)
    }

    pub fn max_sum(&self) -> u64 {
        self.probs.keys().next_back().copied().unwrap_or(0)
    }

    /// Expected sum.
    pub fn mean(&self) -> f64 {
        self.iter().map(|(s, p)| s as f64 * p).sum()
    }

    /// Most likely sum; the smallest one when several tie.
    pub fn mode(&self) -> u64 {
        let mut best = (0, 0);
        for (&s, &c) in &self.counts {
            if c > best.1 {
                best = (s, c);
            }
        }
        best.0
    }

    /// Probability of rolling `sum` or more.
    pub fn at_least(&self, sum: u64) -> f64 {
        self.probs.range(sum..).map(|(_, &p)| p).sum()
    }

    /// Probability of rolling `sum` or less.
    pub fn at_most(&self, sum: u64) -> f64 {
        self.probs.range(..=sum).map(|(_, &p)| p).sum()
    }

    /// Ascending x labels and the matching y series, ready to plot.
    pub fn chart_series(&self) -> (Vec<u64>, Vec<f64>) {
        self.iter().unzip()
    }
}
