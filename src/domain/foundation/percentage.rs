//! Percentage value object (0-100 scale).
//!
//! Every derived index in the platform (progress, load, mastery, fatigue,
//! cognitive axes) is expressed as a `Percentage`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Fifty percent, the neutral midpoint used by fallbacks.
    pub const HALF: Self = Self(50);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Rounds a raw score to the nearest integer (halves away from zero)
    /// and clamps it into `[0, 100]`. Non-finite input maps to zero.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            return Self::ZERO;
        }
        Self(score.round().clamp(0.0, 100.0) as u8)
    }

    /// Rounded arithmetic mean, `None` for an empty input.
    pub fn mean(values: impl IntoIterator<Item = Percentage>) -> Option<Self> {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v.as_f64(), count + 1));
        if count == 0 {
            None
        } else {
            Some(Self::from_score(sum / count as f64))
        }
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for use in weighted formulas.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns `100 - self`.
    pub fn inverse(&self) -> Self {
        Self(100 - self.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(42).value(), 42);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Percentage::try_new(-1).is_err());
        assert!(Percentage::try_new(101).is_err());
        assert_eq!(Percentage::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn from_score_rounds_half_away_from_zero() {
        assert_eq!(Percentage::from_score(66.5).value(), 67);
        assert_eq!(Percentage::from_score(66.49).value(), 66);
        assert_eq!(Percentage::from_score(66.666).value(), 67);
    }

    #[test]
    fn from_score_clamps() {
        assert_eq!(Percentage::from_score(250.0).value(), 100);
        assert_eq!(Percentage::from_score(-4.0).value(), 0);
        assert_eq!(Percentage::from_score(f64::NAN).value(), 0);
    }

    #[test]
    fn mean_rounds_and_handles_empty() {
        assert_eq!(Percentage::mean(Vec::new()), None);
        let values = [Percentage::new(50), Percentage::new(51)];
        assert_eq!(Percentage::mean(values), Some(Percentage::new(51)));
    }

    #[test]
    fn inverse_complements_to_100() {
        assert_eq!(Percentage::new(30).inverse().value(), 70);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }
}
