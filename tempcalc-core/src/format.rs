//! Q-format description
//!
//! A value `v` in a Q format with `f` fractional bits is stored as the
//! integer `round(v * 2^f)`. The format is fixed when the calibration is
//! generated and never changes afterwards.

use crate::{
    constants::{MAX_FRACTIONAL_BITS, MIN_FRACTIONAL_BITS, OUTPUT_BITS},
    errors::{CalibrationError, CalibrationResult},
};

/// Fixed-point format with a given number of fractional bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QFormat {
    fractional_bits: u32,
}

impl QFormat {
    /// Create a format, rejecting widths outside `1..=30`
    pub const fn new(fractional_bits: u32) -> CalibrationResult<Self> {
        if fractional_bits < MIN_FRACTIONAL_BITS || fractional_bits > MAX_FRACTIONAL_BITS {
            return Err(CalibrationError::FractionalBitsOutOfRange {
                bits: fractional_bits,
                min: MIN_FRACTIONAL_BITS,
                max: MAX_FRACTIONAL_BITS,
            });
        }
        Ok(Self { fractional_bits })
    }

    /// Number of fractional bits
    pub const fn fractional_bits(&self) -> u32 {
        self.fractional_bits
    }

    /// `2^fractional_bits`, the fixed-point representation of 1.0
    pub const fn scale(&self) -> i64 {
        1i64 << self.fractional_bits
    }

    /// Half of [`scale`](Self::scale), the round-to-nearest bias
    pub const fn half(&self) -> i64 {
        self.scale() >> 1
    }

    /// Integer bits left in a signed 32-bit result (the `m` in `Qm.f`)
    pub const fn integer_bits(&self) -> u32 {
        OUTPUT_BITS - self.fractional_bits - 1
    }

    /// Convert a fixed-point value back to floating point
    pub fn to_float(&self, q: i64) -> f64 {
        q as f64 / self.scale() as f64
    }
}
