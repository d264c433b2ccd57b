//! Reference float evaluator
//!
//! The unquantized polynomial, evaluated in `f64`. It is the ground truth
//! the fixed-point path is compared against during offline validation and is
//! never called on the deployed target.

/// Floating-point coefficients of `A*x² + B*x + C`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReferencePolynomial {
    /// Quadratic term
    pub a: f64,
    /// Linear term
    pub b: f64,
    /// Constant term
    pub c: f64,
}

impl ReferencePolynomial {
    /// Build from the three coefficients
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `A*x² + B*x + C`
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x * x) + (self.b * x) + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_shipped_curve() {
        let reference = ReferencePolynomial::new(2.347383e-5, 1.274251e-2, -154.375);
        assert_eq!(reference.evaluate(0.0), -154.375);
        assert!((reference.evaluate(2000.0) - (-34.99466)).abs() < 1e-9);
        assert!((reference.evaluate(3200.0) - 126.7730512).abs() < 1e-9);
    }

    #[test]
    fn linear_when_quadratic_term_is_zero() {
        let reference = ReferencePolynomial::new(0.0, 2.0, 1.0);
        assert_eq!(reference.evaluate(3.0), 7.0);
        assert_eq!(reference.evaluate(-0.5), 0.0);
    }
}
