//! Validation sweep
//!
//! Evaluates a curve over a range of raw readings and records, per reading,
//! the float reference next to the fixed-point result. The CSV written here
//! is the input of any offline plotting.

use std::io::Write;

use tempcalc_core::TemperatureCurve;

use crate::errors::{ToolError, ToolResult};

/// Header line of the sweep CSV
pub const CSV_HEADER: &str = "raw,reference_float,fixed_as_float,fixed_rounded";

/// Inclusive range of raw readings to sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    start: i32,
    end: i32,
    step: u32,
}

impl SweepRange {
    /// Create a range, rejecting `start > end` and a zero step
    pub fn new(start: i32, end: i32, step: u32) -> ToolResult<Self> {
        if start > end {
            return Err(ToolError::InvalidArgument(format!(
                "sweep start {} is above end {}",
                start, end
            )));
        }
        if step == 0 {
            return Err(ToolError::InvalidArgument("sweep step must be positive".to_string()));
        }
        Ok(Self { start, end, step })
    }

    /// First reading
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last reading (inclusive)
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Distance between readings
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Readings in the range, in ascending order
    pub fn readings(&self) -> impl Iterator<Item = i32> {
        let end = self.end as i64;
        (self.start as i64..=end)
            .step_by(self.step as usize)
            .map(|raw| raw as i32)
    }

}

impl Default for SweepRange {
    /// `0..=5000` millivolts in steps of one
    fn default() -> Self {
        Self { start: 0, end: 5000, step: 1 }
    }
}

/// One line of the sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    /// Raw reading
    pub raw: i32,
    /// Float reference at `raw`, unclamped
    pub reference_float: f64,
    /// Saturated fixed-point result converted to degrees
    pub fixed_as_float: f64,
    /// Saturated whole-degree result
    pub fixed_rounded: i32,
}

impl SweepRow {
    /// `reference_float - fixed_as_float`
    pub fn difference(&self) -> f64 {
        self.reference_float - self.fixed_as_float
    }
}

/// Evaluate `curve` at every reading of `range`
pub fn sweep(curve: &TemperatureCurve, range: SweepRange) -> Vec<SweepRow> {
    let rows: Vec<SweepRow> = range
        .readings()
        .map(|raw| SweepRow {
            raw,
            reference_float: curve.evaluate_reference(raw as f64),
            fixed_as_float: curve.fixed_to_float(curve.evaluate_fixed(raw)),
            fixed_rounded: curve.evaluate_rounded(raw),
        })
        .collect();

    log::debug!(
        "swept {} readings from {} to {} step {}",
        rows.len(),
        range.start(),
        range.end(),
        range.step()
    );
    rows
}

/// Write `rows` as CSV, header first, floats with six decimals
pub fn write_csv<W: Write>(mut writer: W, rows: &[SweepRow]) -> ToolResult<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(
            writer,
            "{},{:.6},{:.6},{}",
            row.raw, row.reference_float, row.fixed_as_float, row.fixed_rounded
        )?;
    }
    writer.flush()?;
    Ok(())
}
