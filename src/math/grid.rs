use crate::io::error::{Result, invalid_parameter};

/// Exponentially spaced grid on `[min, max]` with its densest region at `center`
///
/// The first `M = round(points / 2)` points approach `center` from below and
/// the remaining ones leave it towards `max`:
///
/// - `x_n = A_l (e^{-B_l n} - 1) + min` for `n < M`, with `B_l = decay / M`
/// - `x_n = A_r (e^{B_r (n - M)} - 1) + center` otherwise, with
///   `B_r = decay / (points - M - 1)`
///
/// where `A_l` and `A_r` are chosen so the grid hits `min`, `center` and
/// `max` exactly. A larger `decay` packs more points around `center`.
/// With `round_digits > 0` every point is truncated to that many decimals.
///
/// # Errors
///
/// Returns an error if `center` is not strictly inside `(min, max)`,
/// `points < 4`, or `decay` is not positive and finite
pub fn exponential_centered_grid(
    min: f64,
    max: f64,
    center: f64,
    points: usize,
    decay: f64,
    round_digits: u32,
) -> Result<Vec<f64>> {
    if !(min < center && center < max) {
        return Err(invalid_parameter(
            "center",
            &center,
            &format!("must lie strictly inside ({min}, {max})"),
        ));
    }
    // Both halves need at least one step
    if points < 4 {
        return Err(invalid_parameter(
            "points",
            &points,
            &"grid needs at least 4 points",
        ));
    }
    if !(decay.is_finite() && decay > 0.0) {
        return Err(invalid_parameter(
            "decay",
            &decay,
            &"must be positive and finite",
        ));
    }

    let total = points as f64;
    let left_count = (total / 2.0).round() as usize;

    // Dividing by M rather than M - 1 keeps `center` from appearing twice
    let left_rate = decay / left_count as f64;
    let left_scale = (center - min) / ((-decay).exp() - 1.0);

    let right_rate = decay / (points - left_count - 1) as f64;
    let right_scale = (max - center) / (decay.exp() - 1.0);

    let scale = 10f64.powi(round_digits as i32);

    Ok((0..points)
        .map(|n| {
            let value = if n < left_count {
                left_scale.mul_add((-left_rate * n as f64).exp() - 1.0, min)
            } else {
                right_scale.mul_add((right_rate * (n - left_count) as f64).exp() - 1.0, center)
            };

            if round_digits > 0 {
                (value * scale).trunc() / scale
            } else {
                value
            }
        })
        .collect())
}
