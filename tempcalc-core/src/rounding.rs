//! Rounding Converter
//!
//! Collapses a Q`f` value to the nearest integer.
//!
//! ## Half-Up (default)
//!
//! ```text
//! (q + 2^(f-1)) >> f        (arithmetic shift)
//! ```
//!
//! Adding half and shifting is `floor(v + 0.5)`, so every tie moves towards
//! positive infinity. For positive values that is the familiar "round half
//! up"; for negative values it is not symmetric with the positive side:
//!
//! ```text
//!  value   half-up   half-away-from-zero
//!   1.5       2             2
//!   0.5       1             1
//!  -0.5       0            -1
//!  -1.5      -1            -2
//! ```
//!
//! This is the behavior deployed firmware has always had, and it stays the
//! default so rounded temperatures match existing devices bit for bit.
//!
//! ## Half-Away-From-Zero
//!
//! Symmetric rounding, selectable per calibration. Differs from half-up only
//! on negative ties.
//!
//! Both modes compute in 64 bits, so adding the bias to a value near
//! `i32::MAX` cannot overflow.

use crate::format::QFormat;

/// Tie-breaking rule used when collapsing a fixed-point value to an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundingMode {
    /// `(q + half) >> f`, ties towards positive infinity
    #[default]
    HalfUp,
    /// Ties away from zero on both sides
    HalfAwayFromZero,
}

/// Round a Q`f` value to the nearest integer
#[inline]
pub const fn round_to_int(q: i32, format: QFormat, mode: RoundingMode) -> i32 {
    let q = q as i64;
    let bits = format.fractional_bits();
    let half = format.half();

    let rounded = match mode {
        RoundingMode::HalfUp => (q + half) >> bits,
        RoundingMode::HalfAwayFromZero => {
            if q >= 0 {
                (q + half) >> bits
            } else {
                -((-q + half) >> bits)
            }
        }
    };

    rounded as i32
}
