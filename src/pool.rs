//! A validated set of dice plus how many of the lowest results to drop.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::error::DiceError;

/// Most dice [`DicePool::uniform`] and notation parsing will build.
///
/// Far past what can be enumerated: 64 dice of two faces already overflow
/// the outcome count. Only one-faced dice get anywhere near it.
pub const MAX_POOL_DICE: usize = 4096;

/// Dice to roll together, summed after dropping the `drop` lowest results.
///
/// Construction validates the invariants the calculator relies on:
/// at least one die, every die has at least one face, and at least one
/// die is kept after dropping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DicePool {
    sides: Vec<u32>,
    drop: usize,
}

impl DicePool {
    /// Build a pool from per-die face counts.
    ///
    /// # Errors
    /// * [`DiceError::Empty`] if `sides` is empty.
    /// * [`DiceError::InvalidSides`] if any die has zero faces.
    /// * [`DiceError::InvalidDrop`] if `drop >= sides.len()`.
    pub fn new<I>(sides: I, drop: usize) -> Result<Self, DiceError>
    where
        I: IntoIterator<Item = u32>,
    {
        let sides: Vec<u32> = sides.into_iter().collect();
        if sides.is_empty() {
            return Err(DiceError::Empty);
        }
        if let Some((index, &value)) = sides.iter().enumerate().find(|&(_, &s)| s == 0) {
            return Err(DiceError::InvalidSides { index, value });
        }
        if drop >= sides.len() {
            return Err(DiceError::InvalidDrop {
                drop,
                dice: sides.len(),
            });
        }
        Ok(Self { sides, drop })
    }

    /// `count` identical dice with `sides` faces each.
    ///
    /// # Errors
    /// As [`DicePool::new`], plus [`DiceError::Overflow`] when `count`
    /// exceeds [`MAX_POOL_DICE`].
    pub fn uniform(count: usize, sides: u32, drop: usize) -> Result<Self, DiceError> {
        if count > MAX_POOL_DICE {
            return Err(DiceError::Overflow);
        }
        Self::new(std::iter::repeat_n(sides, count), drop)
    }

    pub fn sides(&self) -> &[u32] {
        &self.sides
    }

    pub fn drop_count(&self) -> usize {
        self.drop
    }

    /// Number of dice rolled.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    /// Number of dice contributing to the sum.
    pub fn kept(&self) -> usize {
        self.sides.len() - self.drop
    }

    /// Product of all face counts; independent of the drop count.
    ///
    /// # Errors
    /// [`DiceError::Overflow`] if the product does not fit in a `u64`.
    pub fn total_outcomes(&self) -> Result<u64, DiceError> {
        self.sides
            .iter()
            .try_fold(1u64, |acc, &s| acc.checked_mul(u64::from(s)))
            .ok_or(DiceError::Overflow)
    }

    /// Smallest and largest reachable sums.
    ///
    /// Every kept die shows at least 1; at best the kept dice are the
    /// largest ones, each showing its top face.
    pub fn sum_range(&self) -> RangeInclusive<u64> {
        let mut sorted = self.sides.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let max = sorted.iter().take(self.kept()).map(|&s| u64::from(s)).sum();
        self.kept() as u64..=max
    }

    /// Roll every die once and apply drop-lowest.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Roll {
        let faces: Vec<u32> = self
            .sides
            .iter()
            .map(|&s| rng.random_range(1..=s))
            .collect();

        // stable, so ties drop the lower die index first
        let mut order: Vec<usize> = (0..faces.len()).collect();
        order.sort_by_key(|&i| faces[i]);
        let mut dropped = order[..self.drop].to_vec();
        dropped.sort_unstable();

        let total = order[self.drop..]
            .iter()
            .map(|&i| u64::from(faces[i]))
            .sum();

        Roll {
            faces,
            dropped,
            total,
        }
    }
}

/// One concrete roll of a [`DicePool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    faces: Vec<u32>,
    dropped: Vec<usize>,
    total: u64,
}

impl Roll {
    /// Face shown by each die, in pool order.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Indices of the dice that were dropped, ascending.
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    /// Sum of the kept dice.
    pub fn total(&self) -> u64 {
        self.total
    }
}

fn notation_err(input: &str, reason: &'static str) -> DiceError {
    DiceError::Notation {
        input: input.to_owned(),
        reason,
    }
}

fn parse_number<T: FromStr>(digits: &str, input: &str, what: &'static str) -> Result<T, DiceError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(notation_err(input, what));
    }
    digits.parse().map_err(|_| notation_err(input, what))
}

/// Split off a trailing `dlK` / `khK` modifier.
enum Modifier {
    DropLowest(usize),
    KeepHighest(usize),
}

fn split_modifier<'a>(
    body: &'a str,
    input: &str,
) -> Result<(&'a str, Option<Modifier>), DiceError> {
    for tag in ["dl", "kh"] {
        let Some(pos) = body.rfind(tag) else {
            continue;
        };
        let digits = &body[pos + tag.len()..];
        let n = parse_number(digits, input, "modifier needs a count")?;
        let modifier = if tag == "dl" {
            Modifier::DropLowest(n)
        } else {
            Modifier::KeepHighest(n)
        };
        return Ok((&body[..pos], Some(modifier)));
    }
    Ok((body, None))
}

/// Parses dice notation such as `d20`, `3d6`, `2d6+1d8`, `4d6dl1` or `2d20kh1`.
///
/// Terms are joined with `+`; a single trailing `dlK` (drop K lowest) or
/// `khK` (keep K highest) applies to the whole pool. Case and whitespace
/// are ignored.
impl FromStr for DicePool {
    type Err = DiceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let body: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if body.is_empty() {
            return Err(DiceError::Empty);
        }

        let (terms, modifier) = split_modifier(&body, input)?;

        let mut sides = Vec::new();
        let mut dice = 0usize;
        for term in terms.split('+') {
            let (count, faces) = term
                .split_once('d')
                .ok_or_else(|| notation_err(input, "expected a term like 3d6"))?;
            let count: usize = if count.is_empty() {
                1
            } else {
                parse_number(count, input, "die count must be a number")?
            };
            if count == 0 {
                return Err(notation_err(input, "die count must be positive"));
            }
            dice = dice
                .checked_add(count)
                .filter(|&n| n <= MAX_POOL_DICE)
                .ok_or_else(|| notation_err(input, "too many dice"))?;
            let faces: u32 = parse_number(faces, input, "face count must be a number")?;
            sides.extend(std::iter::repeat_n(faces, count));
        }

        let drop = match modifier {
            None => 0,
            Some(Modifier::DropLowest(n)) => n,
            Some(Modifier::KeepHighest(n)) => {
                if n > sides.len() {
                    return Err(notation_err(input, "cannot keep more dice than are rolled"));
                }
                sides.len() - n
            }
        };

        DicePool::new(sides, drop)
    }
}

/// Canonical notation: runs of equal dice are grouped, `dlK` only when dropping.
impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for run in self.sides.chunk_by(|a, b| a == b) {
            if !first {
                write!(f, "+")?;
            }
            first = false;
            write!(f, "{}d{}", run.len(), run[0])?;
        }
        if self.drop > 0 {
            write!(f, "dl{}", self.drop)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_bad_pools() {
        assert!(matches!(DicePool::new([], 0), Err(DiceError::Empty)));
        assert!(matches!(
            DicePool::new([6, 0, 4], 0),
            Err(DiceError::InvalidSides { index: 1, value: 0 })
        ));
        assert!(matches!(
            DicePool::new([6], 1),
            Err(DiceError::InvalidDrop { drop: 1, dice: 1 })
        ));
        assert!(DicePool::new([1], 0).is_ok());
    }

    #[test]
    fn counts_and_bounds() {
        let pool = DicePool::new([4, 20, 6], 1).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.kept(), 2);
        assert_eq!(pool.total_outcomes().unwrap(), 480);
        assert_eq!(pool.sum_range(), 2..=26);

        let huge = DicePool::uniform(20, u32::MAX, 0).unwrap();
        assert!(matches!(huge.total_outcomes(), Err(DiceError::Overflow)));
    }

    #[test]
    fn caps_die_count_before_allocating() {
        assert!(matches!(
            DicePool::uniform(usize::MAX, 6, 0),
            Err(DiceError::Overflow)
        ));
        assert!(matches!(
            DicePool::uniform(MAX_POOL_DICE + 1, 1, 0),
            Err(DiceError::Overflow)
        ));
        assert_eq!(DicePool::uniform(MAX_POOL_DICE, 1, 0).unwrap().len(), MAX_POOL_DICE);

        for notation in [
            "10000000000000000000d6",
            "1000000000000d6",
            "4097d1",
            "4000d1+97d1",
            "18446744073709551615d6+2d6",
        ] {
            assert!(
                matches!(
                    notation.parse::<DicePool>(),
                    Err(DiceError::Notation { .. })
                ),
                "{notation}"
            );
        }
        assert!(matches!(
            "4097d1".parse::<DicePool>(),
            Err(DiceError::Notation { reason: "too many dice", .. })
        ));
        assert_eq!("4096d1".parse::<DicePool>().unwrap().len(), 4096);
    }

    #[test]
    fn parses_notation() {
        let pool: DicePool = "4d6dl1".parse().unwrap();
        assert_eq!(pool.sides(), &[6, 6, 6, 6]);
        assert_eq!(pool.drop_count(), 1);

        let pool: DicePool = " 2D20 kh1 ".parse().unwrap();
        assert_eq!(pool.sides(), &[20, 20]);
        assert_eq!(pool.drop_count(), 1);

        let pool: DicePool = "d8+2d4".parse().unwrap();
        assert_eq!(pool.sides(), &[8, 4, 4]);
        assert_eq!(pool.drop_count(), 0);
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(matches!("".parse::<DicePool>(), Err(DiceError::Empty)));
        assert!(matches!(
            "3x6".parse::<DicePool>(),
            Err(DiceError::Notation { .. })
        ));
        assert!(matches!(
            "0d6".parse::<DicePool>(),
            Err(DiceError::Notation { .. })
        ));
        assert!(matches!(
            "2d6kh3".parse::<DicePool>(),
            Err(DiceError::Notation { .. })
        ));
        assert!(matches!(
            "2d6dl".parse::<DicePool>(),
            Err(DiceError::Notation { .. })
        ));
        assert!(matches!(
            "2d6dl2".parse::<DicePool>(),
            Err(DiceError::InvalidDrop { drop: 2, dice: 2 })
        ));
        assert!(matches!(
            "2d0".parse::<DicePool>(),
            Err(DiceError::InvalidSides { index: 0, value: 0 })
        ));
    }

    #[test]
    fn display_is_canonical() {
        let pool = DicePool::new([6, 6, 8, 6], 2).unwrap();
        assert_eq!(pool.to_string(), "2d6+1d8+1d6dl2");
        assert_eq!(pool.to_string().parse::<DicePool>().unwrap(), pool);
        assert_eq!(DicePool::uniform(1, 20, 0).unwrap().to_string(), "1d20");
    }

    #[test]
    fn rolls_stay_in_range() {
        let pool = DicePool::new([4, 6, 8, 12], 2).unwrap();
        let range = pool.sum_range();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let roll = pool.roll(&mut rng);
            assert_eq!(roll.dropped().len(), 2);
            assert!(range.contains(&roll.total()));
            for (face, &sides) in roll.faces().iter().zip(pool.sides()) {
                assert!((1..=sides).contains(face));
            }
            let dropped_max = roll
                .dropped()
                .iter()
                .map(|&i| roll.faces()[i])
                .max()
                .unwrap();
            let kept_min = (0..4)
                .filter(|i| !roll.dropped().contains(i))
                .map(|i| roll.faces()[i])
                .min()
                .unwrap();
            assert!(dropped_max <= kept_min);
        }
    }
}
