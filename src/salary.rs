/// Estimate a single salary figure from an optional lower and upper bound.
///
/// A lone lower bound is scaled up by 20%, a lone upper bound down by 20%,
/// and a full range yields its midpoint. Results truncate toward zero.
pub fn estimate(from: Option<i64>, to: Option<i64>) -> Option<i64> {
    match (from, to) {
        (None, None) => None,
        (Some(from), None) => Some((from as f64 * 1.2) as i64),
        (None, Some(to)) => Some((to as f64 * 0.8) as i64),
        (Some(from), Some(to)) => Some(((from as i128 + to as i128) as f64 / 2.0) as i64),
    }
}
