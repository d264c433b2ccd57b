//! Calibrated Temperature Curve
//!
//! [`TemperatureCurve`] owns everything the runtime needs: the Q format, the
//! saturation window, the quantized polynomial, the rounding rule and (for
//! validation) the original float coefficients. It is `Copy`, has no
//! interior mutability and can be built in `const` context, so a curve can
//! live in flash and be read from any execution context, interrupts
//! included, without locking.
//!
//! ```text
//! raw ──► clamp ──► A_Q·x² + B_Q·x + C_Q ──► (q + half) >> f ──► °C
//!          │              evaluate_fixed          evaluate_rounded
//!          └─ reference: A·x² + B·x + C (f64, validation only)
//! ```
//!
//! Curves are normally obtained from [`CalibrationConfig::build`], which
//! performs every generation-time check.
//!
//! [`CalibrationConfig::build`]: crate::config::CalibrationConfig::build

use crate::{
    format::QFormat,
    polynomial::PolynomialQ,
    reference::ReferencePolynomial,
    rounding::{round_to_int, RoundingMode},
    saturation::SaturationLimits,
};

/// Immutable fixed-point temperature conversion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureCurve {
    limits: SaturationLimits,
    fixed: PolynomialQ,
    reference: ReferencePolynomial,
    rounding: RoundingMode,
}

impl TemperatureCurve {
    /// Assemble a curve from validated parts.
    ///
    /// No checks are performed here; use
    /// [`CalibrationConfig::build`](crate::config::CalibrationConfig::build)
    /// unless the parts come from generated constants.
    pub const fn from_parts(
        limits: SaturationLimits,
        fixed: PolynomialQ,
        reference: ReferencePolynomial,
        rounding: RoundingMode,
    ) -> Self {
        Self { limits, fixed, reference, rounding }
    }

    /// Q format of `evaluate_fixed` results
    pub const fn format(&self) -> QFormat {
        self.fixed.format()
    }

    /// Saturation window
    pub const fn limits(&self) -> SaturationLimits {
        self.limits
    }

    /// Quantized coefficients
    pub const fn fixed(&self) -> PolynomialQ {
        self.fixed
    }

    /// Unquantized coefficients
    pub const fn reference(&self) -> ReferencePolynomial {
        self.reference
    }

    /// Tie-breaking rule of `evaluate_rounded`
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Temperature in Q`f` after saturating `raw`
    #[inline]
    pub const fn evaluate_fixed(&self, raw: i32) -> i32 {
        self.fixed.evaluate(self.limits.clamp(raw))
    }

    /// Temperature rounded to a whole degree after saturating `raw`
    #[inline]
    pub const fn evaluate_rounded(&self, raw: i32) -> i32 {
        round_to_int(self.evaluate_fixed(raw), self.format(), self.rounding)
    }

    /// Float reference for `raw`, without saturation
    pub fn evaluate_reference(&self, raw: f64) -> f64 {
        self.reference.evaluate(raw)
    }

    /// Fixed-point evaluation without saturation.
    ///
    /// Outside the window the 32-bit result may have wrapped; meant for
    /// diagnostics and sweeps only.
    pub const fn evaluate_unclamped(&self, raw: i32) -> i32 {
        self.fixed.evaluate(raw)
    }

    /// Convert a Q`f` result to floating point
    pub fn fixed_to_float(&self, q: i32) -> f64 {
        self.format().to_float(q as i64)
    }

    /// Smallest and largest rounded temperature the curve can report.
    ///
    /// The rounded output is monotonic between the limits only if the
    /// polynomial is, so the vertex is taken into account as well.
    pub fn output_range(&self) -> (i32, i32) {
        let low = self.evaluate_rounded(self.limits.low());
        let high = self.evaluate_rounded(self.limits.high());
        let (mut min, mut max) = if low <= high { (low, high) } else { (high, low) };

        let a = self.fixed.a_q();
        if a != 0 {
            let vertex = -(self.fixed.b_q() as f64) / (2.0 * a as f64);
            for x in [libm::floor(vertex), libm::ceil(vertex)] {
                if x > self.limits.low() as f64 && x < self.limits.high() as f64 {
                    let t = self.evaluate_rounded(x as i32);
                    min = min.min(t);
                    max = max.max(t);
                }
            }
        }

        (min, max)
    }
}
