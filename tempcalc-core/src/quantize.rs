//! Coefficient Quantizer
//!
//! Turns the floating-point polynomial coefficients into Q-format integers.
//! This runs once, before the curve is used (at generation time or while
//! building a [`TemperatureCurve`](crate::curve::TemperatureCurve)), never on
//! the runtime path.
//!
//! ## Rounding
//!
//! `q = round(v * 2^f)` with ties rounded away from zero. Multiplying by a
//! power of two is exact in binary floating point, so the only error
//! introduced is the final rounding, at most half a unit in the last place:
//!
//! ```text
//! |q / 2^f - v| <= 2^-(f+1)
//! ```
//!
//! `libm::round` is used so the quantizer behaves identically with and
//! without `std`.
//!
//! ## Storage Widths
//!
//! | Role      | Storage | Reason                                        |
//! |-----------|---------|-----------------------------------------------|
//! | Quadratic | `i32`   | multiplied by `x²` in a 64-bit intermediate   |
//! | Linear    | `i32`   | multiplied by `x` in a 64-bit intermediate    |
//! | Constant  | `i64`   | added directly to the 64-bit sum              |
//!
//! A quantized value outside its storage width is an overflow error. It is
//! never wrapped: a wrapped coefficient would still compile and run, but
//! would report nonsense temperatures.

use core::fmt;

use crate::{
    constants::{NARROW_COEFFICIENT_BITS, WIDE_COEFFICIENT_BITS},
    errors::{CalibrationError, CalibrationResult},
    format::QFormat,
};

/// Position of a coefficient in `A*x² + B*x + C`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoefficientRole {
    /// `A`, multiplies `x²`
    Quadratic,
    /// `B`, multiplies `x`
    Linear,
    /// `C`
    Constant,
}

impl CoefficientRole {
    /// Lower-case name used in messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quadratic => "quadratic",
            Self::Linear => "linear",
            Self::Constant => "constant",
        }
    }

    /// Width of the signed integer the quantized value is stored in
    pub const fn storage_bits(&self) -> u32 {
        match self {
            Self::Quadratic | Self::Linear => NARROW_COEFFICIENT_BITS,
            Self::Constant => WIDE_COEFFICIENT_BITS,
        }
    }

    /// Smallest and largest storable value, as floats for range checks
    fn storage_range(&self) -> (f64, f64) {
        match self {
            Self::Quadratic | Self::Linear => (i32::MIN as f64, i32::MAX as f64),
            // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
            Self::Constant => (i64::MIN as f64, i64::MAX as f64),
        }
    }
}

impl fmt::Display for CoefficientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A coefficient together with its Q-format representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizedCoefficient {
    /// Which term this is
    pub role: CoefficientRole,
    /// Original floating-point value
    pub value: f64,
    /// `round(value * 2^f)`
    pub q: i64,
}

impl QuantizedCoefficient {
    /// Narrow the quantized value to `i32` storage.
    ///
    /// Only valid for 32-bit roles; [`quantize`] has already checked the range.
    pub fn narrow(&self) -> i32 {
        debug_assert_eq!(self.role.storage_bits(), NARROW_COEFFICIENT_BITS);
        self.q as i32
    }
}

/// Quantize `value` into `format`, checking it fits the role's storage width
pub fn quantize(
    value: f64,
    format: QFormat,
    role: CoefficientRole,
) -> CalibrationResult<QuantizedCoefficient> {
    if !value.is_finite() {
        return Err(CalibrationError::NonFiniteCoefficient { role });
    }

    let scaled = libm::round(value * format.scale() as f64);
    let (min, max) = role.storage_range();

    let in_range = match role {
        CoefficientRole::Constant => scaled >= min && scaled < max,
        _ => scaled >= min && scaled <= max,
    };
    if !in_range {
        return Err(CalibrationError::CoefficientOverflow {
            role,
            value,
            bits: role.storage_bits(),
            fractional_bits: format.fractional_bits(),
        });
    }

    Ok(QuantizedCoefficient {
        role,
        value,
        q: scaled as i64,
    })
}

/// Convert a quantized value back to floating point
pub fn dequantize(q: i64, format: QFormat) -> f64 {
    format.to_float(q)
}
