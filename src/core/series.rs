use crate::domain::model::PiPrecision;
use crate::utils::error::{CalcError, Result};

/// Number of terms in the partial sum. Fixed; not read from configuration.
pub const SINE_TERMS: u32 = 10;

/// Recursive factorial. `21!` and above overflow a `u64` and are reported as errors.
pub fn factorial(n: u32) -> Result<u64> {
    if n == 0 || n == 1 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(u64::from(n))
        .ok_or(CalcError::FactorialOverflow { n })
}

pub fn degrees_to_radians(degrees: f64, pi: PiPrecision) -> f64 {
    degrees * pi.value() / 180.0
}

/// Maclaurin partial sum `x - x^3/3! + x^5/5! - ...` with [`SINE_TERMS`] terms.
///
/// There is no range reduction: the result drifts away from `sin(x)` once |x| is
/// well past a full turn, and angles large enough to overflow the powers are errors.
pub fn sine_series(radians: f64) -> Result<f64> {
    if !radians.is_finite() {
        return Err(CalcError::NonFiniteAngle { value: radians });
    }

    let mut sum = 0.0;
    for i in 0..SINE_TERMS {
        let power = 2 * i + 1;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * radians.powi(power as i32) / factorial(power)? as f64;
    }

    if !sum.is_finite() {
        return Err(CalcError::SeriesOverflow { radians });
    }
    Ok(sum)
}

pub fn sine_degrees(degrees: f64, pi: PiPrecision) -> Result<f64> {
    if !degrees.is_finite() {
        return Err(CalcError::NonFiniteAngle { value: degrees });
    }
    let radians = degrees_to_radians(degrees, pi);
    if !radians.is_finite() {
        return Err(CalcError::AngleOutOfRange { degrees });
    }
    sine_series(radians)
}
