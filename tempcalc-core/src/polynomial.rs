//! Fixed-Point Quadratic Evaluator
//!
//! ## Arithmetic
//!
//! The raw input `x` is an integer (Q0). The coefficients are in Q`f`:
//!
//! ```text
//! A_Q ≈ A * 2^f        B_Q ≈ B * 2^f        C_Q ≈ C * 2^f
//! ```
//!
//! Multiplying a Q`f` value by a Q0 value keeps it in Q`f`, so every term
//! already carries the result scale and no shift is needed:
//!
//! ```text
//! A_Q * x² ≈ (A * x²) * 2^f
//! B_Q * x  ≈ (B * x)  * 2^f
//! result   = A_Q*x² + B_Q*x + C_Q    (Q`f`)
//! ```
//!
//! ## Widths
//!
//! `A_Q` and `B_Q` are stored in 32 bits, `x²` alone needs up to 62 bits,
//! so all products and the running sum are computed in `i64`. The sum is
//! then truncated to `i32`. The truncation is part of the contract: the
//! calibration is only accepted when, for every input inside the saturation
//! window, nothing overflows and the truncation is lossless
//! ([`PolynomialQ::check_envelope`]).
//!
//! Evaluation itself uses wrapping arithmetic. Inside the envelope that is
//! identical to plain arithmetic; outside it (unclamped diagnostics) it
//! reproduces two's-complement truncation instead of panicking.

use crate::{
    errors::{CalibrationError, CalibrationResult},
    format::QFormat,
    quantize::{quantize, CoefficientRole},
    saturation::SaturationLimits,
};

/// Quantized coefficients of `A*x² + B*x + C`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PolynomialQ {
    a_q: i32,
    b_q: i32,
    c_q: i64,
    format: QFormat,
}

impl PolynomialQ {
    /// Assemble already-quantized coefficients
    pub const fn from_raw(a_q: i32, b_q: i32, c_q: i64, format: QFormat) -> Self {
        Self { a_q, b_q, c_q, format }
    }

    /// Quantize floating-point coefficients into `format`
    pub fn quantize(a: f64, b: f64, c: f64, format: QFormat) -> CalibrationResult<Self> {
        let a = quantize(a, format, CoefficientRole::Quadratic)?;
        let b = quantize(b, format, CoefficientRole::Linear)?;
        let c = quantize(c, format, CoefficientRole::Constant)?;
        Ok(Self::from_raw(a.narrow(), b.narrow(), c.q, format))
    }

    /// Quadratic coefficient in Q`f`
    pub const fn a_q(&self) -> i32 {
        self.a_q
    }

    /// Linear coefficient in Q`f`
    pub const fn b_q(&self) -> i32 {
        self.b_q
    }

    /// Constant coefficient in Q`f`
    pub const fn c_q(&self) -> i64 {
        self.c_q
    }

    /// Q format of the coefficients and of the result
    pub const fn format(&self) -> QFormat {
        self.format
    }

    /// Evaluate in 64 bits without truncating the result
    #[inline]
    pub const fn evaluate_wide(&self, x: i32) -> i64 {
        let x = x as i64;
        let ax2 = (self.a_q as i64).wrapping_mul(x).wrapping_mul(x);
        let bx = (self.b_q as i64).wrapping_mul(x);
        ax2.wrapping_add(bx).wrapping_add(self.c_q)
    }

    /// Evaluate and truncate the Q`f` result to 32 bits
    #[inline]
    pub const fn evaluate(&self, x: i32) -> i32 {
        self.evaluate_wide(x) as i32
    }

    /// Checked evaluation, `None` if any 64-bit step overflows
    pub fn evaluate_checked(&self, x: i32) -> Option<i64> {
        let x = x as i64;
        let ax2 = (self.a_q as i64).checked_mul(x)?.checked_mul(x)?;
        let bx = (self.b_q as i64).checked_mul(x)?;
        ax2.checked_add(bx)?.checked_add(self.c_q)
    }

    /// Verify evaluation is exact for every input inside `limits`.
    ///
    /// Intermediates are bounded by `|A_Q|·M² + |B_Q|·M + |C_Q|` with `M` the
    /// largest input magnitude. The result of a quadratic over an interval
    /// takes its extremes at the endpoints or next to the vertex, so those
    /// are the only inputs whose 32-bit fit needs checking.
    pub fn check_envelope(&self, limits: &SaturationLimits) -> CalibrationResult<()> {
        let m = limits.max_magnitude() as u64;
        let worst_raw = if limits.low().unsigned_abs() >= limits.high().unsigned_abs() {
            limits.low()
        } else {
            limits.high()
        };

        let bound = (self.a_q.unsigned_abs() as u64)
            .checked_mul(m)
            .and_then(|v| v.checked_mul(m))
            .and_then(|v| v.checked_add(self.b_q.unsigned_abs() as u64 * m))
            .and_then(|v| v.checked_add(self.c_q.unsigned_abs()))
            .filter(|v| *v <= i64::MAX as u64);
        if bound.is_none() {
            return Err(CalibrationError::IntermediateOverflow { raw: worst_raw });
        }

        for raw in self.extreme_candidates(limits).into_iter().flatten() {
            let value = self
                .evaluate_checked(raw)
                .ok_or(CalibrationError::IntermediateOverflow { raw })?;
            if i32::try_from(value).is_err() {
                return Err(CalibrationError::OutputOverflow { raw, value });
            }
        }

        Ok(())
    }

    /// Inputs at which the result can reach its extremes over `limits`
    fn extreme_candidates(&self, limits: &SaturationLimits) -> [Option<i32>; 4] {
        let mut candidates = [Some(limits.low()), Some(limits.high()), None, None];

        if self.a_q != 0 {
            let vertex = -(self.b_q as f64) / (2.0 * self.a_q as f64);
            let below = libm::floor(vertex);
            let above = libm::ceil(vertex);
            for (slot, x) in candidates[2..].iter_mut().zip([below, above]) {
                if x > limits.low() as f64 && x < limits.high() as f64 {
                    *slot = Some(x as i32);
                }
            }
        }

        candidates
    }
}
