//! Generation-Time Error Types
//!
//! ## Two Regimes
//!
//! tempcalc has exactly two places where things can go wrong, and they are
//! treated very differently:
//!
//! 1. **Generation time** (building a [`TemperatureCurve`] from a
//!    [`CalibrationConfig`]): every problem is fatal. A curve with a wrapped
//!    coefficient or an inverted saturation window would silently corrupt the
//!    physical calibration, so no curve (and no generated constants file) is
//!    ever produced from a bad configuration.
//!
//! 2. **Runtime** (`evaluate_fixed`, `evaluate_rounded`): there are no errors.
//!    Readings outside the calibrated window are saturated, never rejected,
//!    which keeps the hot path allocation-free and safe in interrupt context.
//!
//! Consequently this module only describes generation-time failures.
//!
//! ## Error Kinds
//!
//! Every variant belongs to one of two kinds:
//!
//! - [`ErrorKind::Overflow`]: a value does not fit the integer width chosen
//!   for it (a quantized coefficient, an intermediate product, the final sum).
//! - [`ErrorKind::Configuration`]: the configuration itself is malformed
//!   (fractional bits outside `1..=30`, `low >= high`, NaN coefficients).
//!
//! ```rust
//! use tempcalc_core::{CalibrationConfig, ErrorKind};
//!
//! let config = CalibrationConfig {
//!     low_limit: 3200,
//!     high_limit: 814,
//!     ..CalibrationConfig::default()
//! };
//!
//! let err = config.build().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Configuration);
//! ```
//!
//! [`TemperatureCurve`]: crate::curve::TemperatureCurve
//! [`CalibrationConfig`]: crate::config::CalibrationConfig

use thiserror_no_std::Error;

use crate::quantize::CoefficientRole;

/// Result type for generation-time operations
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Coarse classification of a [`CalibrationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value exceeds the integer width it must be stored in
    Overflow,
    /// The configuration is malformed
    Configuration,
}

/// Errors raised while turning a calibration into fixed-point constants
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// Quantized coefficient does not fit its storage width
    #[error("{role} coefficient {value} does not fit in {bits} bits at {fractional_bits} fractional bits")]
    CoefficientOverflow {
        /// Which coefficient overflowed
        role: CoefficientRole,
        /// The floating-point value before quantization
        value: f64,
        /// Storage width of the coefficient
        bits: u32,
        /// Q format in use
        fractional_bits: u32,
    },

    /// A 64-bit intermediate product or sum would overflow inside the limits
    #[error("64-bit intermediate overflows at raw input {raw}")]
    IntermediateOverflow {
        /// Raw input at which the overflow was detected
        raw: i32,
    },

    /// The 64-bit result would not survive truncation to 32 bits inside the limits
    #[error("result {value} at raw input {raw} does not fit in 32 bits")]
    OutputOverflow {
        /// Raw input at which the overflow was detected
        raw: i32,
        /// The untruncated fixed-point result
        value: i64,
    },

    /// Fractional bits outside the supported range
    #[error("fractional bits {bits} outside supported range [{min}, {max}]")]
    FractionalBitsOutOfRange {
        /// Requested fractional bits
        bits: u32,
        /// Smallest supported value
        min: u32,
        /// Largest supported value
        max: u32,
    },

    /// Saturation window is empty or inverted
    #[error("saturation limits invalid: low {low} must be below high {high}")]
    InvalidLimits {
        /// Requested lower limit
        low: i32,
        /// Requested upper limit
        high: i32,
    },

    /// Coefficient is NaN or infinite
    #[error("{role} coefficient is not a finite number")]
    NonFiniteCoefficient {
        /// Which coefficient was invalid
        role: CoefficientRole,
    },
}

impl CalibrationError {
    /// Classify the error as an overflow or a configuration problem
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CoefficientOverflow { .. }
            | Self::IntermediateOverflow { .. }
            | Self::OutputOverflow { .. } => ErrorKind::Overflow,
            Self::FractionalBitsOutOfRange { .. }
            | Self::InvalidLimits { .. }
            | Self::NonFiniteCoefficient { .. } => ErrorKind::Configuration,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CalibrationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::CoefficientOverflow { role, value, bits, fractional_bits } =>
                defmt::write!(fmt, "{} coefficient {} overflows {} bits at Q{}",
                    role.name(), value, bits, fractional_bits),
            Self::IntermediateOverflow { raw } =>
                defmt::write!(fmt, "Intermediate overflow at raw {}", raw),
            Self::OutputOverflow { raw, value } =>
                defmt::write!(fmt, "Result {} at raw {} exceeds 32 bits", value, raw),
            Self::FractionalBitsOutOfRange { bits, min, max } =>
                defmt::write!(fmt, "Fractional bits {} outside [{}, {}]", bits, min, max),
            Self::InvalidLimits { low, high } =>
                defmt::write!(fmt, "Limits invalid: {} >= {}", low, high),
            Self::NonFiniteCoefficient { role } =>
                defmt::write!(fmt, "{} coefficient not finite", role.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_variants_classify_as_overflow() {
        let err = CalibrationError::CoefficientOverflow {
            role: CoefficientRole::Quadratic,
            value: 1e12,
            bits: 32,
            fractional_bits: 23,
        };
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(CalibrationError::IntermediateOverflow { raw: 1 }.kind(), ErrorKind::Overflow);
        assert_eq!(
            CalibrationError::OutputOverflow { raw: 1, value: i64::MAX }.kind(),
            ErrorKind::Overflow
        );
    }

    #[test]
    fn configuration_variants_classify_as_configuration() {
        assert_eq!(
            CalibrationError::InvalidLimits { low: 5, high: 5 }.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            CalibrationError::NonFiniteCoefficient { role: CoefficientRole::Linear }.kind(),
            ErrorKind::Configuration
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_coefficient() {
        let err = CalibrationError::NonFiniteCoefficient { role: CoefficientRole::Constant };
        assert_eq!(err.to_string(), "constant coefficient is not a finite number");
    }
}
