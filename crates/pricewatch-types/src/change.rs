//! Percentage change between two prices.

use serde::{Deserialize, Serialize};

use crate::ThresholdError;

/// Computes the percentage change from `previous` to `current`.
///
/// A zero previous price yields `0.0` rather than a division by zero.
///
/// # Example
///
/// ```
/// use pricewatch_types::percent_change;
///
/// assert!((percent_change(100_000.0, 106_000.0) - 6.0).abs() < 1e-9);
/// assert_eq!(percent_change(4.0, 5.0), 25.0);
/// assert_eq!(percent_change(0.0, 42.0), 0.0);
/// ```
#[must_use]
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Direction of a price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Price went up.
    Up,
    /// Price went down (or did not move).
    Down,
}

impl Direction {
    /// Classifies a percentage change. Anything not strictly positive is `Down`.
    #[must_use]
    pub fn of(change_pct: f64) -> Self {
        if change_pct > 0.0 { Self::Up } else { Self::Down }
    }

    /// Returns the direction as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A price move between the stored baseline and the current quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Baseline price.
    pub previous: f64,
    /// Current price.
    pub current: f64,
    /// Percentage change from `previous` to `current`.
    pub percent: f64,
}

impl PriceChange {
    /// Creates a price change from two prices.
    #[must_use]
    pub fn between(previous: f64, current: f64) -> Self {
        Self {
            previous,
            current,
            percent: percent_change(previous, current),
        }
    }

    /// Returns the direction of the move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::of(self.percent)
    }

    /// Returns true if the absolute move reaches the threshold.
    #[must_use]
    pub fn crosses(&self, threshold: Threshold) -> bool {
        self.percent.abs() >= threshold.percent()
    }
}

/// Alert threshold in percent. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Default alert threshold (5%).
    pub const DEFAULT: Self = Self(5.0);

    /// Creates a threshold, validating that it is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN, infinite, zero or negative.
    pub fn new(percent: f64) -> Result<Self, ThresholdError> {
        if !percent.is_finite() {
            return Err(ThresholdError::NotFinite(percent));
        }
        if percent <= 0.0 {
            return Err(ThresholdError::NotPositive(percent));
        }
        Ok(Self(percent))
    }

    /// Returns the threshold in percent.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_change_up() {
        assert_relative_eq!(percent_change(100_000.0, 106_000.0), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_percent_change_down() {
        assert_relative_eq!(percent_change(4_000.0, 3_900.0), -2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_percent_change_zero_previous() {
        assert_eq!(percent_change(0.0, 95_000.0), 0.0);
        assert_eq!(percent_change(-0.0, 1.0), 0.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::of(6.0), Direction::Up);
        assert_eq!(Direction::of(-2.5), Direction::Down);
        assert_eq!(Direction::of(0.0), Direction::Down);
        assert_eq!(Direction::Up.to_string(), "up");
    }

    #[test]
    fn test_crosses_threshold() {
        let threshold = Threshold::new(25.0).unwrap();

        // exactly on the threshold counts, in both directions
        assert!(PriceChange::between(4.0, 5.0).crosses(threshold));
        assert!(PriceChange::between(4.0, 3.0).crosses(threshold));
        assert!(!PriceChange::between(4.0, 4.99).crosses(threshold));
        assert!(!PriceChange::between(0.0, 1_000.0).crosses(threshold));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Threshold::new(0.5).is_ok());
        assert_eq!(Threshold::new(0.0), Err(ThresholdError::NotPositive(0.0)));
        assert!(matches!(Threshold::new(f64::NAN), Err(ThresholdError::NotFinite(_))));
        assert!(Threshold::new(-1.0).is_err());
    }

    #[test]
    fn test_threshold_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Threshold>("-3.0").is_err());
        let threshold: Threshold = serde_json::from_str("2.5").unwrap();
        assert_relative_eq!(threshold.percent(), 2.5);
    }
}
