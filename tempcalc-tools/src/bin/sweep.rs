//! Evaluate a calibration over a range of readings and write the CSV
//!
//! Usage: tempcalc-sweep [--config <json>] [--start N] [--end N] [--step N]
//!                       [--output <path>] [--summary]

use std::fs::File;
use std::io::{self, BufWriter};
use std::process;

use log::{error, info, warn};
use tempcalc_tools::{
    args::SWEEP_USAGE, load_curve, parse_sweep_args, sweep, write_csv, ErrorStats, SweepArgs,
    ToolResult,
};

fn run(args: SweepArgs) -> ToolResult<()> {
    let curve = load_curve(args.config.as_deref())?;
    let rows = sweep(&curve, args.range);

    match &args.output {
        Some(path) => {
            write_csv(BufWriter::new(File::create(path)?), &rows)?;
            info!("wrote {} rows to {}", rows.len(), path.display());
        }
        None => write_csv(io::stdout().lock(), &rows)?,
    }

    if args.summary {
        match ErrorStats::for_curve(&rows, &curve) {
            Some(stats) => stats.log_summary(),
            None => warn!("no readings inside the calibrated window"),
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = match parse_sweep_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", SWEEP_USAGE);
            return;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", SWEEP_USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}
