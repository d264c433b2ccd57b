//! Calibration Constants
//!
//! Centralized numeric values for tempcalc. The defaults describe the shipped
//! sensor: a quadratic fit of temperature (°C) against the sensor output in
//! millivolts, valid between 814 mV and 3200 mV.

// ===== Q FORMAT =====

/// Smallest supported number of fractional bits.
pub const MIN_FRACTIONAL_BITS: u32 = 1;

/// Largest supported number of fractional bits.
///
/// With 30 fractional bits a 32-bit result still has a sign bit and one
/// integer bit, and the 64-bit intermediates keep 33 bits of headroom for
/// the squared input.
pub const MAX_FRACTIONAL_BITS: u32 = 30;

/// Storage width of the quadratic and linear coefficients (bits).
pub const NARROW_COEFFICIENT_BITS: u32 = 32;

/// Storage width of the constant coefficient and the intermediates (bits).
pub const WIDE_COEFFICIENT_BITS: u32 = 64;

/// Width of the fixed-point result handed to callers (bits).
pub const OUTPUT_BITS: u32 = 32;

// ===== DEFAULT SENSOR CALIBRATION =====

/// Fractional bits of the shipped calibration (Q8.23).
pub const DEFAULT_FRACTIONAL_BITS: u32 = 23;

/// Quadratic term, °C per mV².
pub const DEFAULT_QUADRATIC: f64 = 2.347383e-5;

/// Linear term, °C per mV.
pub const DEFAULT_LINEAR: f64 = 1.274251e-2;

/// Constant term, °C.
pub const DEFAULT_CONSTANT: f64 = -154.375;

/// Lowest calibrated sensor output (mV).
///
/// Chosen so the rounded temperature at the limit still fits an `i8`.
pub const DEFAULT_LOW_LIMIT: i32 = 814;

/// Highest calibrated sensor output (mV).
pub const DEFAULT_HIGH_LIMIT: i32 = 3200;
