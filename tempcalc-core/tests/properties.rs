//! Property tests for the quantizer, clamp, evaluator and rounding
//!
//! Covers the numeric guarantees of the crate over randomly generated
//! calibrations rather than the shipped one:
//! - Quantization error is at most half a unit in the last place
//! - Saturated inputs report the boundary temperature
//! - Fixed-point results stay within the quantization error bound
//! - Rounding matches its floating-point definition

use proptest::prelude::*;

use tempcalc_core::{
    dequantize, quantize, round_to_int, CalibrationConfig, CoefficientRole, QFormat,
    RoundingMode, SaturationLimits, TemperatureCurve, CURVE,
};

fn random_calibration() -> impl Strategy<Value = CalibrationConfig> {
    (
        -1.0e-3f64..1.0e-3,
        -1.0f64..1.0,
        -100.0f64..100.0,
        -2000i32..2000,
        1i32..4000,
        0u32..8,
    )
        .prop_map(|(a, b, c, low, width, slack)| {
            let high = low + width;
            // Pick the widest format whose result still has a spare bit over the window
            let x = low.unsigned_abs().max(high.unsigned_abs()) as f64;
            let magnitude = (a.abs() * x * x + b.abs() * x + c.abs()).max(1e-9);
            let widest = (((1u64 << 30) as f64 / magnitude).log2().floor() as i64).clamp(1, 30);
            let bits = (widest - slack as i64).max(1) as u32;

            CalibrationConfig {
                fractional_bits: bits,
                quadratic: a,
                linear: b,
                constant: c,
                low_limit: low,
                high_limit: high,
                rounding: RoundingMode::HalfUp,
            }
        })
}

/// Input at relative position `t` of the curve's saturation window
fn point_in_window(curve: &TemperatureCurve, t: f64) -> i32 {
    let limits = curve.limits();
    let span = (limits.high() - limits.low()) as f64;
    (limits.low() + (span * t) as i32).min(limits.high())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_quantize_round_trip_within_half_lsb(
        bits in 1u32..=30,
        value in -100.0f64..100.0,
    ) {
        let format = QFormat::new(bits).unwrap();
        let q = quantize(value, format, CoefficientRole::Constant).unwrap().q;
        let error = (dequantize(q, format) - value).abs();
        prop_assert!(error <= 0.5 / format.scale() as f64);
    }

    #[test]
    fn prop_narrow_coefficients_round_trip(
        bits in 1u32..=30,
        value in -1.9f64..1.9,
    ) {
        let format = QFormat::new(bits).unwrap();
        let coefficient = quantize(value, format, CoefficientRole::Linear).unwrap();
        let error = (dequantize(coefficient.narrow() as i64, format) - value).abs();
        prop_assert!(error <= 0.5 / format.scale() as f64);
    }

    #[test]
    fn prop_below_low_limit_reports_low_limit(raw in i32::MIN..=814) {
        prop_assert_eq!(CURVE.evaluate_rounded(raw), CURVE.evaluate_rounded(814));
        prop_assert_eq!(CURVE.evaluate_fixed(raw), CURVE.evaluate_fixed(814));
    }

    #[test]
    fn prop_above_high_limit_reports_high_limit(raw in 3200..=i32::MAX) {
        prop_assert_eq!(CURVE.evaluate_rounded(raw), CURVE.evaluate_rounded(3200));
        prop_assert_eq!(CURVE.evaluate_fixed(raw), CURVE.evaluate_fixed(3200));
    }

    #[test]
    fn prop_clamp_stays_in_window(low in -10_000i32..10_000, width in 1i32..10_000, raw: i32) {
        let limits = SaturationLimits::new(low, low + width).unwrap();
        let clamped = limits.clamp(raw);
        prop_assert!(limits.contains(clamped));
        prop_assert_eq!(limits.clamp(clamped), clamped);
    }

    #[test]
    fn prop_fixed_point_error_is_bounded(config in random_calibration(), t in 0.0f64..=1.0) {
        let curve = config.build();
        prop_assume!(curve.is_ok());
        let curve = curve.unwrap();

        let x = point_in_window(&curve, t);
        let xf = x as f64;
        let reference = curve.evaluate_reference(xf);
        let fixed = curve.fixed_to_float(curve.evaluate_fixed(x));

        // Each coefficient is off by at most half an LSB
        let quantization = 0.5 / curve.format().scale() as f64 * (xf * xf + xf.abs() + 1.0);
        let magnitude = config.quadratic.abs() * xf * xf
            + config.linear.abs() * xf.abs()
            + config.constant.abs();
        let float_noise = 1e-9 * (1.0 + magnitude);

        prop_assert!(
            (reference - fixed).abs() <= quantization + float_noise,
            "x = {}, reference = {}, fixed = {}", x, reference, fixed
        );
    }

    #[test]
    fn prop_evaluation_is_pure(config in random_calibration(), t in 0.0f64..=1.0, raw: i32) {
        let curve = config.build();
        prop_assume!(curve.is_ok());
        let curve = curve.unwrap();

        let x = point_in_window(&curve, t);
        prop_assert_eq!(curve.evaluate_fixed(x), curve.evaluate_fixed(x));
        prop_assert_eq!(curve.evaluate_rounded(raw), curve.evaluate_rounded(raw));
    }

    #[test]
    fn prop_half_up_is_floor_of_value_plus_half(bits in 1u32..=30, q: i32) {
        let format = QFormat::new(bits).unwrap();
        let expected = (format.to_float(q as i64) + 0.5).floor();
        prop_assert_eq!(round_to_int(q, format, RoundingMode::HalfUp) as f64, expected);
    }

    #[test]
    fn prop_half_away_from_zero_is_odd(bits in 1u32..=30, q in (i32::MIN + 1)..=i32::MAX) {
        let format = QFormat::new(bits).unwrap();
        prop_assert_eq!(
            round_to_int(-q, format, RoundingMode::HalfAwayFromZero),
            -round_to_int(q, format, RoundingMode::HalfAwayFromZero)
        );
    }
}

