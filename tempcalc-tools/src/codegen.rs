//! Rust constants generation
//!
//! Renders a built [`TemperatureCurve`] as the `generated_calibration.rs`
//! module that `tempcalc-core` compiles in. Only a curve can be rendered,
//! and a curve only exists once every generation-time check has passed, so
//! an invalid calibration can never produce a constants file.
//!
//! Floats are written in exponent form (`{:e}`), which round-trips exactly
//! and is always a valid Rust float literal.

use std::fs;
use std::path::Path;

use tempcalc_core::{RoundingMode, TemperatureCurve};

use crate::errors::{ToolError, ToolResult};

/// Default location of the generated module, relative to the workspace root
pub const DEFAULT_OUTPUT: &str = "tempcalc-core/generated_calibration.rs";

/// Render the constants module for `curve`
pub fn render(curve: &TemperatureCurve) -> String {
    let format = curve.format();
    let fixed = curve.fixed();
    let reference = curve.reference();
    let limits = curve.limits();
    let bits = format.fractional_bits();

    let mut output = String::new();

    // Header
    output.push_str("// Auto-generated calibration constants for tempcalc\n");
    output.push_str(&format!(
        "// Regenerate with: cargo run -p tempcalc-tools --bin tempcalc-gen -- --output {}\n",
        DEFAULT_OUTPUT
    ));
    output.push_str("//\n");
    output.push_str(&format!(
        "// Coefficients (Q{}.{}):\n",
        format.integer_bits(),
        bits
    ));
    output.push_str(&format!(
        "//   A = {:e} * 2^{} ≈ {}\n",
        reference.a, bits, fixed.a_q()
    ));
    output.push_str(&format!(
        "//   B = {:e} * 2^{} ≈ {}\n",
        reference.b, bits, fixed.b_q()
    ));
    output.push_str(&format!(
        "//   C = {:e} * 2^{} ≈ {}\n",
        reference.c, bits, fixed.c_q()
    ));
    output.push_str(&format!(
        "// Saturation limits: [{}, {}]\n\n",
        limits.low(),
        limits.high()
    ));

    // Q format
    output.push_str("/// Fractional bits of every Q-format constant below\n");
    output.push_str(&format!("pub const FRACTIONAL_BITS: u32 = {};\n\n", bits));

    // Quantized coefficients
    output.push_str(&format!("/// Quadratic coefficient in Q{}\n", bits));
    output.push_str(&format!("pub const A_Q: i32 = {};\n\n", fixed.a_q()));
    output.push_str(&format!("/// Linear coefficient in Q{}\n", bits));
    output.push_str(&format!("pub const B_Q: i32 = {};\n\n", fixed.b_q()));
    output.push_str(&format!("/// Constant coefficient in Q{}\n", bits));
    output.push_str(&format!("pub const C_Q: i64 = {};\n\n", fixed.c_q()));

    // Saturation window
    output.push_str("/// Lowest calibrated raw reading\n");
    output.push_str(&format!("pub const LOW_LIMIT: i32 = {};\n\n", limits.low()));
    output.push_str("/// Highest calibrated raw reading\n");
    output.push_str(&format!("pub const HIGH_LIMIT: i32 = {};\n\n", limits.high()));

    // Reference coefficients
    output.push_str("/// Unquantized quadratic coefficient (validation only)\n");
    output.push_str(&format!("pub const A: f64 = {:e};\n\n", reference.a));
    output.push_str("/// Unquantized linear coefficient (validation only)\n");
    output.push_str(&format!("pub const B: f64 = {:e};\n\n", reference.b));
    output.push_str("/// Unquantized constant coefficient (validation only)\n");
    output.push_str(&format!("pub const C: f64 = {:e};\n\n", reference.c));

    // Rounding
    output.push_str("/// Rounding rule of the whole-degree output\n");
    output.push_str(&format!(
        "pub const ROUNDING: RoundingMode = RoundingMode::{};\n",
        rounding_variant(curve.rounding())
    ));

    output
}

fn rounding_variant(mode: RoundingMode) -> &'static str {
    match mode {
        RoundingMode::HalfUp => "HalfUp",
        RoundingMode::HalfAwayFromZero => "HalfAwayFromZero",
    }
}

/// Write the rendered module to `path`
pub fn write_constants(path: &Path, rendered: &str) -> ToolResult<()> {
    fs::write(path, rendered)?;
    log::info!("wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}

/// Compare the rendered module with the file at `path`
pub fn check_constants(path: &Path, rendered: &str) -> ToolResult<()> {
    let existing = fs::read_to_string(path)?;
    if existing != rendered {
        return Err(ToolError::StaleConstants {
            path: path.display().to_string(),
        });
    }
    log::info!("{} is up to date", path.display());
    Ok(())
}
