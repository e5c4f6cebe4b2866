//! Validated caller input

use crate::error::PivotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest item quality, in percent
pub const MAX_QUALITY: f64 = 100.0;

/// Character attribute without gear, guaranteed positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct BaseStat(u64);

impl BaseStat {
    /// Shortest and longest accepted text input, in digits
    pub const MIN_DIGITS: usize = 2;
    pub const MAX_DIGITS: usize = 8;

    /// Create a base stat, rejecting zero and negatives
    pub fn new(value: i64) -> Result<Self, PivotError> {
        if value <= 0 {
            return Err(PivotError::NonPositiveBaseStat(value));
        }
        Ok(BaseStat(value as u64))
    }

    /// Derive the base stat from the total and bonus shown in game
    ///
    /// `base = total - bonus`
    pub fn from_displayed(total: i64, bonus: i64) -> Result<Self, PivotError> {
        BaseStat::new(total.saturating_sub(bonus))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<i64> for BaseStat {
    type Error = PivotError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        BaseStat::new(value)
    }
}

impl From<BaseStat> for u64 {
    fn from(stat: BaseStat) -> Self {
        stat.0
    }
}

impl fmt::Display for BaseStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseStat {
    type Err = PivotError;

    /// Parse a plain whole number of 2 to 8 digits, e.g. `126000`
    ///
    /// Only ASCII digits are accepted, after trimming surrounding whitespace.
    /// A leading `+` and `_` digit separators (`+126000`, `126_000`) are
    /// rejected even though a looser integer parser would take them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits_ok = (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&trimmed.len())
            && trimmed.bytes().all(|b| b.is_ascii_digit());
        if !digits_ok {
            return Err(PivotError::InvalidBaseStat(s.to_string()));
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| PivotError::InvalidBaseStat(s.to_string()))?;
        BaseStat::new(value)
    }
}

/// Check an item quality lies in `0..=100`
pub fn validate_quality(quality: f64) -> Result<f64, PivotError> {
    if (0.0..=MAX_QUALITY).contains(&quality) {
        Ok(quality)
    } else {
        Err(PivotError::QualityOutOfRange {
            value: quality,
            max: MAX_QUALITY,
        })
    }
}

/// Check a substat roll lies in `0..=max_substat`
pub fn validate_roll(roll: f64, max_substat: f64) -> Result<f64, PivotError> {
    if (0.0..=max_substat).contains(&roll) {
        Ok(roll)
    } else {
        Err(PivotError::RollOutOfRange {
            value: roll,
            max: max_substat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(BaseStat::new(0), Err(PivotError::NonPositiveBaseStat(0)));
        assert_eq!(BaseStat::new(-5), Err(PivotError::NonPositiveBaseStat(-5)));
        assert_eq!(BaseStat::new(126_000).unwrap().get(), 126_000);
    }

    #[test]
    fn test_from_displayed() {
        // 180000 shown, 54000 of it from gear
        let base = BaseStat::from_displayed(180_000, 54_000).unwrap();
        assert_eq!(base.get(), 126_000);

        assert!(BaseStat::from_displayed(50_000, 50_000).is_err());
        assert!(BaseStat::from_displayed(40_000, 50_000).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("126000".parse::<BaseStat>().unwrap().get(), 126_000);
        assert_eq!(" 42 ".parse::<BaseStat>().unwrap().get(), 42);
        assert_eq!("99999999".parse::<BaseStat>().unwrap().get(), 99_999_999);
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        for input in ["", "7", "123456789", "12a000", "126,000", "-12000", "1.5e5", "+126000", "126_000"] {
            assert!(
                matches!(input.parse::<BaseStat>(), Err(PivotError::InvalidBaseStat(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert_eq!("00".parse::<BaseStat>(), Err(PivotError::NonPositiveBaseStat(0)));
    }

    #[test]
    fn test_serde_validates() {
        let ok: BaseStat = serde_json::from_str("150000").unwrap();
        assert_eq!(ok.get(), 150_000);
        assert!(serde_json::from_str::<BaseStat>("0").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "150000");
    }

    #[test]
    fn test_validate_quality() {
        assert!(validate_quality(0.0).is_ok());
        assert!(validate_quality(100.0).is_ok());
        assert!(validate_quality(85.22).is_ok());
        assert!(validate_quality(-0.1).is_err());
        assert!(validate_quality(100.5).is_err());
        assert!(validate_quality(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_roll() {
        assert!(validate_roll(15.0, 15.0).is_ok());
        assert!(validate_roll(0.0, 15.0).is_ok());
        assert_eq!(
            validate_roll(15.01, 15.0),
            Err(PivotError::RollOutOfRange { value: 15.01, max: 15.0 })
        );
    }
}
