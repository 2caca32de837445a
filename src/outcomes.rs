//! Mixed-radix odometer over every outcome of a set of dice.

/// Lazily walks the Cartesian product `[1..=sides[0]] x [1..=sides[1]] x ...`.
///
/// Die 0 is the fastest-moving digit. Stepping reuses one buffer, so
/// [`Outcomes::next_outcome`] allocates nothing; the [`Iterator`] impl
/// clones the buffer for callers that want owned tuples.
#[derive(Debug, Clone)]
pub struct Outcomes<'a> {
    sides: &'a [u32],
    current: Vec<u32>,
    started: bool,
    done: bool,
}

impl<'a> Outcomes<'a> {
    /// An empty `sides` slice yields nothing; a zero-faced die yields nothing.
    pub fn new(sides: &'a [u32]) -> Self {
        Self {
            sides,
            current: vec![1; sides.len()],
            started: false,
            done: sides.is_empty() || sides.contains(&0),
        }
    }

    /// Advance and borrow the next outcome.
    pub fn next_outcome(&mut self) -> Option<&[u32]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }

        let advanced = self
            .current
            .iter_mut()
            .zip(self.sides)
            .any(|(digit, &radix)| {
                if *digit < radix {
                    *digit += 1;
                    true
                } else {
                    *digit = 1;
                    false
                }
            });

        if advanced {
            Some(&self.current)
        } else {
            // every digit wrapped
            self.done = true;
            None
        }
    }

    /// Rewind to the first outcome.
    pub fn reset(&mut self) {
        self.current.fill(1);
        self.started = false;
        self.done = self.sides.is_empty() || self.sides.contains(&0);
    }
}

impl Iterator for Outcomes<'_> {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_outcome().map(<[u32]>::to_vec)
    }
}
