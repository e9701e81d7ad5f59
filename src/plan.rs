use crate::error::{SweepError, SweepResult};

/// Evenly spaced sample values between `start` and `end`, inclusive on both ends.
///
/// The first sample equals `start` and the last equals `end` exactly (up to
/// floating-point rounding). `start == end` yields `step_count` identical
/// samples. `step_count` must be at least 2; the step size divides by
/// `step_count - 1`.
pub fn plan_samples(start: f64, end: f64, step_count: u32) -> SweepResult<Vec<f64>> {
    validate_bounds(start, end, step_count)?;

    let step = (end - start) / f64::from(step_count - 1);
    Ok((0..step_count)
        .map(|i| start + f64::from(i) * step)
        .collect())
}

/// Per-step yaw angle for a rotation sweep, in degrees.
///
/// The rotation primitive is relative: the camera is first yawed by the full
/// `start` angle away from its current pose, so the stepped distance back past
/// the pose covers `start + end` degrees total. Hence `(end + start)` in the
/// numerator, not `(end - start)` as in the absolute offset sweep.
pub fn rotation_step_size(start: f64, end: f64, step_count: u32) -> SweepResult<f64> {
    validate_bounds(start, end, step_count)?;
    Ok((end + start) / f64::from(step_count - 1))
}

fn validate_bounds(start: f64, end: f64, step_count: u32) -> SweepResult<()> {
    if step_count < 2 {
        return Err(SweepError::invalid_parameter(format!(
            "step count must be at least 2, got {step_count}"
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(SweepError::invalid_parameter(
            "sweep bounds must be finite numbers",
        ));
    }
    Ok(())
}
