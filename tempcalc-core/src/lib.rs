//! Fixed-point temperature conversion for FPU-less microcontrollers
//!
//! Converts a raw sensor reading (millivolts) into a temperature by
//! evaluating a calibrated quadratic with integer arithmetic only.
//!
//! Key constraints:
//! - No floating point on the runtime path
//! - No heap allocation, no blocking, no shared mutable state
//! - Readings outside the calibrated window saturate, never fail
//!
//! ```text
//! raw ─► SaturationLimits::clamp ─► PolynomialQ::evaluate ─► round_to_int ─► °C
//! ```
//!
//! Building a calibration is the only fallible step and happens before the
//! curve is ever used:
//!
//! ```rust
//! use tempcalc_core::CalibrationConfig;
//!
//! let curve = CalibrationConfig::default().build().expect("valid calibration");
//! assert_eq!(curve.evaluate_rounded(2500), 24);
//! assert_eq!(curve.evaluate_rounded(0), curve.evaluate_rounded(814));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod curve;
pub mod errors;
pub mod format;
pub mod polynomial;
pub mod quantize;
pub mod reference;
pub mod rounding;
pub mod saturation;
pub mod sensor;

// Public API
pub use config::CalibrationConfig;
pub use curve::TemperatureCurve;
pub use errors::{CalibrationError, CalibrationResult, ErrorKind};
pub use format::QFormat;
pub use polynomial::PolynomialQ;
pub use quantize::{dequantize, quantize, CoefficientRole, QuantizedCoefficient};
pub use reference::ReferencePolynomial;
pub use rounding::{round_to_int, RoundingMode};
pub use saturation::SaturationLimits;
pub use sensor::{evaluate_fixed, evaluate_reference, evaluate_rounded, CURVE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
