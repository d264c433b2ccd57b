//! Workstation tools for tempcalc
//!
//! - `tempcalc-gen` turns a calibration into the constants module compiled
//!   into `tempcalc-core`, refusing calibrations that could overflow.
//! - `tempcalc-sweep` evaluates a curve over a range of readings, writes the
//!   float/fixed comparison as CSV and summarises the error.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod args;
pub mod calibration;
pub mod codegen;
pub mod errors;
pub mod stats;
pub mod sweep;

pub use args::{parse_gen_args, parse_sweep_args, GenArgs, SweepArgs};
pub use calibration::{load_config, load_curve};
pub use codegen::{check_constants, render, write_constants, DEFAULT_OUTPUT};
pub use errors::{ToolError, ToolResult};
pub use stats::{ErrorStats, SIGNIFICANCE_LEVEL};
pub use sweep::{sweep, write_csv, SweepRange, SweepRow, CSV_HEADER};
