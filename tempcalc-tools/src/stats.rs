//! Error statistics of a sweep
//!
//! Summarises how far the fixed-point results drift from the float
//! reference: mean squared error, worst case and a paired t-test of the
//! per-reading differences (t statistic, two-sided p-value and the verdict
//! at [`SIGNIFICANCE_LEVEL`]).

use statrs::distribution::{ContinuousCDF, StudentsT};
use tempcalc_core::{RoundingMode, SaturationLimits, TemperatureCurve};

use crate::sweep::SweepRow;

/// Threshold below which the p-value counts as a significant difference
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Summary of `reference_float - fixed_as_float` over a set of rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    /// Rows summarised
    pub count: usize,
    /// Mean of the squared differences
    pub mse: f64,
    /// Largest absolute difference
    pub worst_abs_error: f64,
    /// Raw reading of the largest absolute difference
    pub worst_at: i32,
    /// Mean difference (negative when fixed point reads high)
    pub mean_difference: f64,
    /// Paired t statistic; `None` with fewer than two rows or zero variance
    pub t_statistic: Option<f64>,
    /// Two-sided p-value of `t_statistic` with `count - 1` degrees of freedom
    pub p_value: Option<f64>,
    /// Rows whose whole-degree result differs from the reference rounded
    /// with the same rule
    pub rounded_mismatches: usize,
}

/// Round a float reference with the tie rule the fixed-point path uses
fn round_reference(value: f64, rounding: RoundingMode) -> f64 {
    match rounding {
        RoundingMode::HalfUp => (value + 0.5).floor(),
        RoundingMode::HalfAwayFromZero => value.round(),
    }
}

/// Two-sided Student-t p-value
fn two_sided_p_value(t: f64, degrees_of_freedom: f64) -> Option<f64> {
    let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom).ok()?;
    Some((2.0 * distribution.sf(t.abs())).min(1.0))
}

impl ErrorStats {
    /// Summarise every row; `None` for an empty set
    pub fn from_rows<'a, I>(rows: I, rounding: RoundingMode) -> Option<Self>
    where
        I: IntoIterator<Item = &'a SweepRow>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut worst_abs_error = 0.0;
        let mut worst_at = 0;
        let mut rounded_mismatches = 0usize;
        let mut differences = Vec::new();

        for row in rows {
            let difference = row.difference();
            count += 1;
            sum += difference;
            sum_sq += difference * difference;
            differences.push(difference);

            if count == 1 || difference.abs() > worst_abs_error {
                worst_abs_error = difference.abs();
                worst_at = row.raw;
            }
            if round_reference(row.reference_float, rounding) != row.fixed_rounded as f64 {
                rounded_mismatches += 1;
            }
        }

        if count == 0 {
            return None;
        }

        let n = count as f64;
        let mean_difference = sum / n;

        // Sample variance (n - 1 denominator)
        let t_statistic = if count > 1 {
            let variance = differences
                .iter()
                .map(|d| (d - mean_difference) * (d - mean_difference))
                .sum::<f64>()
                / (n - 1.0);
            if variance > 0.0 {
                Some(mean_difference / (variance / n).sqrt())
            } else {
                None
            }
        } else {
            None
        };
        let p_value = t_statistic.and_then(|t| two_sided_p_value(t, n - 1.0));

        Some(Self {
            count,
            mse: sum_sq / n,
            worst_abs_error,
            worst_at,
            mean_difference,
            t_statistic,
            p_value,
            rounded_mismatches,
        })
    }

    /// Summarise only the rows inside `limits`
    pub fn within_limits(
        rows: &[SweepRow],
        limits: &SaturationLimits,
        rounding: RoundingMode,
    ) -> Option<Self> {
        Self::from_rows(rows.iter().filter(|row| limits.contains(row.raw)), rounding)
    }

    /// Summarise the rows inside the saturation window of `curve`
    pub fn for_curve(rows: &[SweepRow], curve: &TemperatureCurve) -> Option<Self> {
        Self::within_limits(rows, &curve.limits(), curve.rounding())
    }

    /// Whether the mean difference is significant at [`SIGNIFICANCE_LEVEL`]
    pub fn is_significant(&self) -> Option<bool> {
        self.p_value.map(|p| p < SIGNIFICANCE_LEVEL)
    }

    /// Log the summary at info level
    pub fn log_summary(&self) {
        log::info!("readings: {}", self.count);
        log::info!("mean squared error: {:.6}", self.mse);
        log::info!(
            "worst absolute error: {:.4} at raw {}",
            self.worst_abs_error,
            self.worst_at
        );
        log::info!("mean difference: {:.6}", self.mean_difference);
        match (self.t_statistic, self.p_value) {
            (Some(t), Some(p)) => {
                log::info!("paired t statistic: {:.4}, p-value: {:.6}", t, p);
            }
            (Some(t), None) => log::info!("paired t statistic: {:.4}, p-value: undefined", t),
            _ => log::info!("paired t statistic: undefined"),
        }
        match self.is_significant() {
            Some(true) => log::info!(
                "difference between float and fixed point is statistically significant (p < {})",
                SIGNIFICANCE_LEVEL
            ),
            Some(false) => log::info!(
                "difference between float and fixed point is not statistically significant (p >= {})",
                SIGNIFICANCE_LEVEL
            ),
            None => {}
        }
        log::info!("rounded mismatches: {}", self.rounded_mismatches);
    }
}
