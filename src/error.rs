#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    Empty,
    InvalidSides { index: usize, value: u32 },
    InvalidDrop { drop: usize, dice: usize },
    Overflow,
    Notation { input: String, reason: &'static str },
}

impl std::fmt::Display for DiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceError::Empty => write!(f, "dice pool is empty"),
            DiceError::InvalidSides { index, value } => {
                write!(
                    f,
                    "die at index {index} has an invalid face count: {value}"
                )
            }
            DiceError::InvalidDrop { drop, dice } => {
                write!(
                    f,
                    "cannot drop {drop} of {dice} dice; at least one die must be kept"
                )
            }
            DiceError::Overflow => write!(f, "number of outcomes does not fit in u64"),
            DiceError::Notation { input, reason } => {
                write!(f, "invalid dice notation {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for DiceError {}
