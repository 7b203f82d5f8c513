//! Sign classification of a counter value.

use crate::ops::{is_negative, is_positive};

/// Which side of zero a value sits on.
///
/// Exactly one variant describes any `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly above zero.
    Positive,
}

impl Sign {
    /// Classify `value`.
    pub const fn of(value: i64) -> Self {
        if is_positive(value) {
            Self::Positive
        } else if is_negative(value) {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// Lowercase name, used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Zero => "zero",
            Self::Positive => "positive",
        }
    }
}

impl From<i64> for Sign {
    fn from(value: i64) -> Self {
        Self::of(value)
    }
}

impl core::fmt::Display for Sign {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies() {
        assert_eq!(Sign::of(0), Sign::Zero);
        assert_eq!(Sign::of(7), Sign::Positive);
        assert_eq!(Sign::of(-7), Sign::Negative);
        assert_eq!(Sign::of(i64::MIN), Sign::Negative);
        assert_eq!(Sign::of(i64::MAX), Sign::Positive);
    }

    #[test]
    fn from_and_display() {
        assert_eq!(Sign::from(-2), Sign::Negative);
        assert_eq!(Sign::Positive.to_string(), "positive");
        assert_eq!(Sign::Zero.as_str(), "zero");
    }
}
