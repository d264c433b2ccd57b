//! Command line parsing for the tool binaries
//!
//! Both parsers take the arguments after the program name and return
//! `Ok(None)` when `--help` was requested.

use std::path::PathBuf;

use crate::codegen::DEFAULT_OUTPUT;
use crate::errors::{ToolError, ToolResult};
use crate::sweep::SweepRange;

/// Usage text of `tempcalc-gen`
pub const GEN_USAGE: &str = "\
Usage: tempcalc-gen [options]

Options:
  --config <path>   Calibration JSON (default: shipped calibration)
  --output <path>   Constants file to write (default: tempcalc-core/generated_calibration.rs)
  --check           Fail if the constants file is out of date instead of writing it
  --help            Print this message";

/// Usage text of `tempcalc-sweep`
pub const SWEEP_USAGE: &str = "\
Usage: tempcalc-sweep [options]

Options:
  --config <path>   Calibration JSON (default: shipped calibration)
  --start <raw>     First reading (default: 0)
  --end <raw>       Last reading, inclusive (default: 5000)
  --step <n>        Distance between readings (default: 1)
  --output <path>   CSV file to write (default: stdout)
  --summary         Log error statistics over the calibrated window
  --help            Print this message";

/// Arguments of `tempcalc-gen`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenArgs {
    /// Calibration file, `None` for the shipped calibration
    pub config: Option<PathBuf>,
    /// Constants file
    pub output: PathBuf,
    /// Compare instead of writing
    pub check: bool,
}

impl Default for GenArgs {
    fn default() -> Self {
        Self {
            config: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            check: false,
        }
    }
}

/// Arguments of `tempcalc-sweep`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SweepArgs {
    /// Calibration file, `None` for the shipped calibration
    pub config: Option<PathBuf>,
    /// Readings to evaluate
    pub range: SweepRange,
    /// CSV file, `None` for stdout
    pub output: Option<PathBuf>,
    /// Log error statistics after the sweep
    pub summary: bool,
}

fn value<I>(args: &mut I, flag: &str) -> ToolResult<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ToolError::InvalidArgument(format!("{} requires a value", flag)))
}

fn number<I, T>(args: &mut I, flag: &str) -> ToolResult<T>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
{
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| ToolError::InvalidArgument(format!("invalid {} value: {}", flag, raw)))
}

/// Parse `tempcalc-gen` arguments
pub fn parse_gen_args<I>(args: I) -> ToolResult<Option<GenArgs>>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = GenArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value(&mut args, "--config")?)),
            "--output" => parsed.output = PathBuf::from(value(&mut args, "--output")?),
            "--check" => parsed.check = true,
            "--help" | "-h" => return Ok(None),
            _ => {
                return Err(ToolError::InvalidArgument(format!("unknown argument: {}", arg)));
            }
        }
    }

    Ok(Some(parsed))
}

/// Parse `tempcalc-sweep` arguments
pub fn parse_sweep_args<I>(args: I) -> ToolResult<Option<SweepArgs>>
where
    I: IntoIterator<Item = String>,
{
    let defaults = SweepRange::default();
    let mut start = defaults.start();
    let mut end = defaults.end();
    let mut step = defaults.step();
    let mut config = None;
    let mut output = None;
    let mut summary = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(value(&mut args, "--config")?)),
            "--start" => start = number(&mut args, "--start")?,
            "--end" => end = number(&mut args, "--end")?,
            "--step" => step = number(&mut args, "--step")?,
            "--output" => output = Some(PathBuf::from(value(&mut args, "--output")?)),
            "--summary" => summary = true,
            "--help" | "-h" => return Ok(None),
            _ => {
                return Err(ToolError::InvalidArgument(format!("unknown argument: {}", arg)));
            }
        }
    }

    Ok(Some(SweepArgs {
        config,
        range: SweepRange::new(start, end, step)?,
        output,
        summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn gen_defaults() {
        let parsed = parse_gen_args(args("")).unwrap().unwrap();
        assert_eq!(parsed, GenArgs::default());
        assert_eq!(parsed.output, PathBuf::from("tempcalc-core/generated_calibration.rs"));
    }

    #[test]
    fn gen_all_options() {
        let parsed = parse_gen_args(args("--config cal.json --output out.rs --check"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("cal.json")));
        assert_eq!(parsed.output, PathBuf::from("out.rs"));
        assert!(parsed.check);
    }

    #[test]
    fn gen_rejects_unknown_and_missing_values() {
        assert!(matches!(
            parse_gen_args(args("--frobnicate")),
            Err(ToolError::InvalidArgument(_))
        ));
        let err = parse_gen_args(args("--output")).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: --output requires a value");
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_gen_args(args("--check --help --bogus")).unwrap(), None);
        assert_eq!(parse_sweep_args(args("-h")).unwrap(), None);
    }

    #[test]
    fn sweep_defaults() {
        let parsed = parse_sweep_args(args("")).unwrap().unwrap();
        assert_eq!(parsed.range, SweepRange::default());
        assert_eq!(parsed.output, None);
        assert!(!parsed.summary);
    }

    #[test]
    fn sweep_range_and_output() {
        let parsed = parse_sweep_args(args("--start -100 --end 4000 --step 10 --output s.csv --summary"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.range, SweepRange::new(-100, 4000, 10).unwrap());
        assert_eq!(parsed.output, Some(PathBuf::from("s.csv")));
        assert!(parsed.summary);
    }

    #[test]
    fn sweep_rejects_bad_numbers_and_ranges() {
        let err = parse_sweep_args(args("--step ten")).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: invalid --step value: ten");
        assert!(parse_sweep_args(args("--step -1")).is_err());
        assert!(parse_sweep_args(args("--start 10 --end 5")).is_err());
    }
}
