//! Saturation Clamp
//!
//! Bounds a raw reading to the calibrated window before the polynomial sees
//! it. Outside the window the quadratic fit is physically meaningless, so the
//! boundary temperature is reported instead of an extrapolated one. Clamping
//! first also keeps `x²` inside the range the generation-time overflow checks
//! were run against.

use crate::errors::{CalibrationError, CalibrationResult};

/// Inclusive raw-input window the calibration is valid for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SaturationLimits {
    low: i32,
    high: i32,
}

impl SaturationLimits {
    /// Create limits, requiring `low < high`
    pub const fn new(low: i32, high: i32) -> CalibrationResult<Self> {
        if low >= high {
            return Err(CalibrationError::InvalidLimits { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound (raw counts)
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Upper bound (raw counts)
    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Largest magnitude an accepted input can have
    pub const fn max_magnitude(&self) -> u32 {
        let low = self.low.unsigned_abs();
        let high = self.high.unsigned_abs();
        if low > high { low } else { high }
    }

    /// Whether `raw` lies inside the window (bounds included)
    pub const fn contains(&self, raw: i32) -> bool {
        raw >= self.low && raw <= self.high
    }

    /// Saturate `raw` to the window
    #[inline]
    pub const fn clamp(&self, raw: i32) -> i32 {
        if raw <= self.low {
            self.low
        } else if raw >= self.high {
            self.high
        } else {
            raw
        }
    }

    /// Saturate `raw` and report whether it was outside the window
    pub fn clamp_reported(&self, raw: i32) -> (i32, bool) {
        let clamped = self.clamp(raw);
        let saturated = !self.contains(raw);
        if saturated {
            log_trace!("raw input saturated ({} -> {})", raw, clamped);
        }
        (clamped, saturated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> SaturationLimits {
        SaturationLimits::new(814, 3200).unwrap()
    }

    #[test]
    fn passes_values_inside_window() {
        assert_eq!(limits().clamp(815), 815);
        assert_eq!(limits().clamp(2000), 2000);
        assert_eq!(limits().clamp(3199), 3199);
    }

    #[test]
    fn saturates_both_ends() {
        assert_eq!(limits().clamp(0), 814);
        assert_eq!(limits().clamp(i32::MIN), 814);
        assert_eq!(limits().clamp(5000), 3200);
        assert_eq!(limits().clamp(i32::MAX), 3200);
    }

    #[test]
    fn bounds_map_to_themselves() {
        assert_eq!(limits().clamp(814), 814);
        assert_eq!(limits().clamp(3200), 3200);
        assert_eq!(limits().clamp_reported(814), (814, false));
    }

    #[test]
    fn reports_saturation() {
        assert_eq!(limits().clamp_reported(100), (814, true));
        assert_eq!(limits().clamp_reported(4000), (3200, true));
        assert_eq!(limits().clamp_reported(1500), (1500, false));
    }

    #[test]
    fn rejects_empty_or_inverted_windows() {
        assert_eq!(
            SaturationLimits::new(10, 10),
            Err(CalibrationError::InvalidLimits { low: 10, high: 10 })
        );
        assert!(SaturationLimits::new(3200, 814).is_err());
    }

    #[test]
    fn magnitude_uses_the_larger_bound() {
        let window = SaturationLimits::new(-5000, 100).unwrap();
        assert_eq!(window.max_magnitude(), 5000);
        assert_eq!(limits().max_magnitude(), 3200);
    }
}
