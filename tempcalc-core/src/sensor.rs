//! The Shipped Sensor Curve
//!
//! Constants in `generated_calibration.rs` are produced offline by
//! `tempcalc-gen` from a [`CalibrationConfig`](crate::CalibrationConfig)
//! and committed alongside the crate. They are assembled into [`CURVE`] at
//! compile time; the free functions below are the runtime surface used by
//! firmware.
//!
//! ```rust
//! use tempcalc_core::{evaluate_fixed, evaluate_rounded, evaluate_reference};
//!
//! let celsius = evaluate_rounded(2000);
//! assert_eq!(celsius, -35);
//!
//! // Readings above the calibrated window report the boundary temperature
//! assert_eq!(evaluate_rounded(5000), evaluate_rounded(3200));
//!
//! // Offline: compare against the float polynomial
//! let fixed = evaluate_fixed(2000) as f64 / (1u32 << 23) as f64;
//! assert!((fixed - evaluate_reference(2000.0)).abs() < 0.05);
//! ```

use static_assertions::const_assert;

use crate::{
    constants::{MAX_FRACTIONAL_BITS, MIN_FRACTIONAL_BITS},
    curve::TemperatureCurve,
    format::QFormat,
    polynomial::PolynomialQ,
    reference::ReferencePolynomial,
    saturation::SaturationLimits,
};

mod generated {
    use crate::rounding::RoundingMode;

    include!("../generated_calibration.rs");
}

pub use generated::{
    A, A_Q, B, B_Q, C, C_Q, FRACTIONAL_BITS, HIGH_LIMIT, LOW_LIMIT, ROUNDING,
};

const_assert!(FRACTIONAL_BITS >= MIN_FRACTIONAL_BITS);
const_assert!(FRACTIONAL_BITS <= MAX_FRACTIONAL_BITS);
const_assert!(LOW_LIMIT < HIGH_LIMIT);

const FORMAT: QFormat = match QFormat::new(FRACTIONAL_BITS) {
    Ok(format) => format,
    Err(_) => panic!("generated fractional bits out of range"),
};

const LIMITS: SaturationLimits = match SaturationLimits::new(LOW_LIMIT, HIGH_LIMIT) {
    Ok(limits) => limits,
    Err(_) => panic!("generated saturation limits inverted"),
};

/// Curve built from the generated constants
pub const CURVE: TemperatureCurve = TemperatureCurve::from_parts(
    LIMITS,
    PolynomialQ::from_raw(A_Q, B_Q, C_Q, FORMAT),
    ReferencePolynomial::new(A, B, C),
    ROUNDING,
);

/// Saturate `raw` and evaluate the shipped curve in Q`FRACTIONAL_BITS`
#[inline]
pub fn evaluate_fixed(raw: i32) -> i32 {
    CURVE.evaluate_fixed(raw)
}

/// Saturate `raw` and return the shipped curve's temperature in whole degrees
#[inline]
pub fn evaluate_rounded(raw: i32) -> i32 {
    CURVE.evaluate_rounded(raw)
}

/// Float reference of the shipped curve (offline validation only)
pub fn evaluate_reference(raw: f64) -> f64 {
    CURVE.evaluate_reference(raw)
}
