//! Generate the calibration constants compiled into `tempcalc-core`
//!
//! Usage: tempcalc-gen [--config <json>] [--output <path>] [--check]

use std::process;

use log::{error, info};
use tempcalc_tools::{
    args::GEN_USAGE, check_constants, load_curve, parse_gen_args, render, write_constants,
    GenArgs, ToolResult,
};

fn run(args: GenArgs) -> ToolResult<()> {
    let curve = load_curve(args.config.as_deref())?;

    let fixed = curve.fixed();
    let (min, max) = curve.output_range();
    info!(
        "Q{}: A_Q = {}, B_Q = {}, C_Q = {}",
        curve.format().fractional_bits(),
        fixed.a_q(),
        fixed.b_q(),
        fixed.c_q()
    );
    info!(
        "window [{}, {}] maps to [{}, {}] degrees",
        curve.limits().low(),
        curve.limits().high(),
        min,
        max
    );

    let rendered = render(&curve);
    if args.check {
        check_constants(&args.output, &rendered)
    } else {
        write_constants(&args.output, &rendered)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = match parse_gen_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", GEN_USAGE);
            return;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", GEN_USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}
