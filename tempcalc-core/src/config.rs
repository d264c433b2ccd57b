//! Calibration Configuration
//!
//! Everything that defines a sensor calibration lives in one explicit value,
//! [`CalibrationConfig`]. Building it is the generation step: it validates
//! the configuration, quantizes the coefficients, proves the fixed-point
//! evaluation cannot overflow inside the saturation window, and returns an
//! immutable [`TemperatureCurve`]. Any failure aborts the build; there is no
//! partially valid curve.
//!
//! ## Validation Order
//!
//! 1. Fractional bits in `1..=30`
//! 2. `low_limit < high_limit`
//! 3. Each coefficient finite and storable after quantization
//! 4. Every input in `[low_limit, high_limit]` evaluates without overflow
//!
//! ## Serialized Form
//!
//! With the `std` feature the configuration is (de)serializable. `rounding`
//! is optional and defaults to `half_up`:
//!
//! ```json
//! {
//!   "fractional_bits": 23,
//!   "quadratic": 2.347383e-5,
//!   "linear": 0.01274251,
//!   "constant": -154.375,
//!   "low_limit": 814,
//!   "high_limit": 3200
//! }
//! ```

use crate::{
    constants::{
        DEFAULT_CONSTANT, DEFAULT_FRACTIONAL_BITS, DEFAULT_HIGH_LIMIT, DEFAULT_LINEAR,
        DEFAULT_LOW_LIMIT, DEFAULT_QUADRATIC,
    },
    curve::TemperatureCurve,
    errors::CalibrationResult,
    format::QFormat,
    polynomial::PolynomialQ,
    reference::ReferencePolynomial,
    rounding::RoundingMode,
    saturation::SaturationLimits,
};

/// Generation-time parameters of a sensor calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationConfig {
    /// Q format width of the constants and of the fixed-point result
    pub fractional_bits: u32,
    /// `A` in `A*x² + B*x + C`
    pub quadratic: f64,
    /// `B` in `A*x² + B*x + C`
    pub linear: f64,
    /// `C` in `A*x² + B*x + C`
    pub constant: f64,
    /// Readings at or below this value report the temperature at this value
    pub low_limit: i32,
    /// Readings at or above this value report the temperature at this value
    pub high_limit: i32,
    /// Tie-breaking rule for whole-degree output
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: RoundingMode,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            fractional_bits: DEFAULT_FRACTIONAL_BITS,
            quadratic: DEFAULT_QUADRATIC,
            linear: DEFAULT_LINEAR,
            constant: DEFAULT_CONSTANT,
            low_limit: DEFAULT_LOW_LIMIT,
            high_limit: DEFAULT_HIGH_LIMIT,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl CalibrationConfig {
    /// Validate, quantize and check the calibration
    pub fn build(&self) -> CalibrationResult<TemperatureCurve> {
        let format = QFormat::new(self.fractional_bits)?;
        let limits = SaturationLimits::new(self.low_limit, self.high_limit)?;
        let fixed = PolynomialQ::quantize(self.quadratic, self.linear, self.constant, format)?;
        fixed.check_envelope(&limits)?;

        log_debug!(
            "calibration Q{}.{}: A_Q={} B_Q={} C_Q={} limits [{}, {}]",
            format.integer_bits(),
            format.fractional_bits(),
            fixed.a_q(),
            fixed.b_q(),
            fixed.c_q(),
            limits.low(),
            limits.high()
        );

        Ok(TemperatureCurve::from_parts(
            limits,
            fixed,
            ReferencePolynomial::new(self.quadratic, self.linear, self.constant),
            self.rounding,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CalibrationError, ErrorKind};
    use crate::quantize::CoefficientRole;

    #[test]
    fn default_calibration_builds() {
        let curve = CalibrationConfig::default().build().unwrap();
        assert_eq!(curve.format().fractional_bits(), 23);
        assert_eq!(curve.fixed().a_q(), 197);
        assert_eq!(curve.fixed().b_q(), 106_892);
        assert_eq!(curve.fixed().c_q(), -1_294_991_360);
        assert_eq!(curve.limits().low(), 814);
        assert_eq!(curve.limits().high(), 3200);
        assert_eq!(curve.rounding(), RoundingMode::HalfUp);
    }

    #[test]
    fn inverted_limits_are_configuration_errors() {
        let config = CalibrationConfig {
            low_limit: 3200,
            high_limit: 3200,
            ..CalibrationConfig::default()
        };
        let err = config.build().unwrap_err();
        assert_eq!(err, CalibrationError::InvalidLimits { low: 3200, high: 3200 });
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn fractional_bits_are_checked_first() {
        let config = CalibrationConfig {
            fractional_bits: 31,
            low_limit: 10,
            high_limit: 0,
            ..CalibrationConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(CalibrationError::FractionalBitsOutOfRange { bits: 31, .. })
        ));
    }

    #[test]
    fn oversized_coefficient_is_an_overflow() {
        // 300 * 2^23 does not fit in 32 bits
        let config = CalibrationConfig {
            linear: 300.0,
            ..CalibrationConfig::default()
        };
        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::CoefficientOverflow { role: CoefficientRole::Linear, .. }
        ));
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn window_wider_than_the_output_is_an_overflow() {
        let config = CalibrationConfig {
            high_limit: 5000,
            ..CalibrationConfig::default()
        };
        assert_eq!(config.build().unwrap_err().kind(), ErrorKind::Overflow);
    }

    #[test]
    fn nan_coefficient_is_rejected() {
        let config = CalibrationConfig {
            constant: f64::NAN,
            ..CalibrationConfig::default()
        };
        assert_eq!(
            config.build(),
            Err(CalibrationError::NonFiniteCoefficient { role: CoefficientRole::Constant })
        );
    }

    #[test]
    fn rounding_mode_is_carried_into_the_curve() {
        let config = CalibrationConfig {
            rounding: RoundingMode::HalfAwayFromZero,
            ..CalibrationConfig::default()
        };
        assert_eq!(config.build().unwrap().rounding(), RoundingMode::HalfAwayFromZero);
    }
}
