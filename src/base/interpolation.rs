use super::{BcjError, BcjResult};

/// Interpolates linearly the piecewise-linear function (xs, ys) at x
///
/// The abscissae must be non-decreasing. Values outside the range are clamped
/// to the first or last ordinate. Returns zero if there are no points.
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> BcjResult<f64> {
    if !x.is_finite() {
        return Err(BcjError::Domain("interpolation abscissa must be finite"));
    }
    let n = usize::min(xs.len(), ys.len());
    if n == 0 {
        return Ok(0.0);
    }
    if x <= xs[0] {
        return Ok(ys[0]);
    }
    if x >= xs[n - 1] {
        return Ok(ys[n - 1]);
    }
    // xs[j-1] < x ≤ xs[j]
    let j = xs[..n].partition_point(|&v| v < x);
    if j == 0 || j >= n {
        return Err(BcjError::Domain("interpolation abscissae must be finite and non-decreasing"));
    }
    let (x0, x1) = (xs[j - 1], xs[j]);
    let (y0, y1) = (ys[j - 1], ys[j]);
    let y = y0 + (y1 - y0) * (x - x0) / (x1 - x0);
    if !y.is_finite() {
        return Err(BcjError::Domain("interpolation abscissae must be finite and non-decreasing"));
    }
    Ok(y)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
