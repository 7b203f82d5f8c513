//! Counter actions.
//!
//! An [`Action`] is one call into `counter_core`. Controls, key bindings and
//! the `run` subcommand all resolve to actions.

use std::fmt;
use std::str::FromStr;

use counter_core::{INITIAL_VALUE, decrement, decrement_by, increment, increment_by, reset};

/// One transition of the counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `v + 1`
    Increment,
    /// `v - 1`
    Decrement,
    /// `0`
    Reset,
    /// `v + n`
    IncrementBy(i64),
    /// `v - n`
    DecrementBy(i64),
}

impl Action {
    /// The value after applying this action to `value`.
    pub const fn apply(self, value: i64) -> i64 {
        match self {
            Self::Increment => increment(value),
            Self::Decrement => decrement(value),
            Self::Reset => reset(),
            Self::IncrementBy(n) => increment_by(value, n),
            Self::DecrementBy(n) => decrement_by(value, n),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => f.write_str("inc"),
            Self::Decrement => f.write_str("dec"),
            Self::Reset => f.write_str("reset"),
            Self::IncrementBy(n) => write!(f, "add:{n}"),
            Self::DecrementBy(n) => write!(f, "sub:{n}"),
        }
    }
}

/// Error parsing an [`Action`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    /// Not one of the known action names.
    #[error("unknown action `{0}` (expected inc, dec, reset, add:<n> or sub:<n>)")]
    Unknown(String),
    /// `add:`/`sub:` followed by something that is not an integer.
    #[error("invalid amount in `{0}`")]
    InvalidAmount(String),
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let amount = |rest: &str| {
            rest.trim()
                .parse::<i64>()
                .map_err(|_| ActionParseError::InvalidAmount(s.to_owned()))
        };

        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "+" | "inc" | "increment" => return Ok(Self::Increment),
            "-" | "dec" | "decrement" => return Ok(Self::Decrement),
            "r" | "reset" => return Ok(Self::Reset),
            _ => {}
        }

        if let Some(rest) = lower.strip_prefix("add:") {
            return amount(rest).map(Self::IncrementBy);
        }
        if let Some(rest) = lower.strip_prefix("sub:") {
            return amount(rest).map(Self::DecrementBy);
        }

        Err(ActionParseError::Unknown(s.to_owned()))
    }
}

/// Apply `actions` in order, starting from the initial value.
pub fn apply_all<'a, I>(actions: I) -> i64
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(INITIAL_VALUE, |value, action| action.apply(value))
}
