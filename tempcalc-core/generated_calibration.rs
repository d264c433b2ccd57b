// Auto-generated calibration constants for tempcalc
// Regenerate with: cargo run -p tempcalc-tools --bin tempcalc-gen -- --output tempcalc-core/generated_calibration.rs
//
// Coefficients (Q8.23):
//   A = 2.347383e-5 * 2^23 ≈ 197
//   B = 1.274251e-2 * 2^23 ≈ 106892
//   C = -1.54375e2 * 2^23 ≈ -1294991360
// Saturation limits: [814, 3200]

/// Fractional bits of every Q-format constant below
pub const FRACTIONAL_BITS: u32 = 23;

/// Quadratic coefficient in Q23
pub const A_Q: i32 = 197;

/// Linear coefficient in Q23
pub const B_Q: i32 = 106892;

/// Constant coefficient in Q23
pub const C_Q: i64 = -1294991360;

/// Lowest calibrated raw reading
pub const LOW_LIMIT: i32 = 814;

/// Highest calibrated raw reading
pub const HIGH_LIMIT: i32 = 3200;

/// Unquantized quadratic coefficient (validation only)
pub const A: f64 = 2.347383e-5;

/// Unquantized linear coefficient (validation only)
pub const B: f64 = 1.274251e-2;

/// Unquantized constant coefficient (validation only)
pub const C: f64 = -1.54375e2;

/// Rounding rule of the whole-degree output
pub const ROUNDING: RoundingMode = RoundingMode::HalfUp;
