use scalescore_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Inclusive range of valid responses shared by every scored item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseRange {
    pub min: f64,
    pub max: f64,
}

impl ResponseRange {
    /// Create a range, rejecting non-finite bounds and `min >= max`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.check()?;
        Ok(range)
    }

    pub fn check(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reflect a response around the midpoint of the range
    #[inline]
    pub fn reflect(&self, value: f64) -> f64 {
        self.min + self.max - value
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a value in this range linearly onto 0-100
    #[inline]
    pub fn to_percent(&self, value: f64) -> f64 {
        (value - self.min) / self.span() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let range = ResponseRange::new(0.0, 4.0).unwrap();
        assert!(range.contains(0.0));
        assert!(range.contains(4.0));
        assert!(!range.contains(4.5));
        assert_eq!(range.span(), 4.0);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(ResponseRange::new(4.0, 4.0).is_err());
        assert!(ResponseRange::new(5.0, 1.0).is_err());
        assert!(ResponseRange::new(f64::NAN, 1.0).is_err());
        assert!(ResponseRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_reflect() {
        let range = ResponseRange::new(0.0, 4.0).unwrap();
        assert_eq!(range.reflect(1.0), 3.0);
        assert_eq!(range.reflect(range.reflect(2.5)), 2.5);

        let likert = ResponseRange::new(1.0, 5.0).unwrap();
        assert_eq!(likert.reflect(1.0), 5.0);
        assert_eq!(likert.reflect(3.0), 3.0);
    }

    #[test]
    fn test_to_percent() {
        let range = ResponseRange::new(0.0, 4.0).unwrap();
        assert_eq!(range.to_percent(3.0), 75.0);

        let likert = ResponseRange::new(1.0, 5.0).unwrap();
        assert_eq!(likert.to_percent(1.0), 0.0);
        assert_eq!(likert.to_percent(5.0), 100.0);
    }
}
