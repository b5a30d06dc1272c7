use crate::ScgError;

/// The test statistic Dq: the largest absolute pointwise gap between two Betti-0
/// curves evaluated on the same threshold axis. Symmetric in its arguments.
///
/// # Examples
/// ```
///use scg_inference::sup_distance;
///
///assert_eq!(sup_distance(&[3, 2, 1, 1], &[3, 3, 2, 1]).unwrap(), 1);
///assert_eq!(sup_distance(&[5, 1], &[1, 1]).unwrap(), 4);
/// ```
pub fn sup_distance(curve_a: &[usize], curve_b: &[usize]) -> Result<usize, ScgError> {
    if curve_a.len() != curve_b.len() {
        return Err(ScgError::LengthMismatch(format!(
            "curve A has {} thresholds, but curve B has {}",
            curve_a.len(),
            curve_b.len()
        )));
    }
    Ok(curve_a
        .iter()
        .zip(curve_b)
        .map(|(&a, &b)| a.abs_diff(b))
        .max()
        .unwrap_or(0))
}

/// Fraction of the null distribution at least as extreme as the observed statistic,
/// with one pseudo-count: `(#{null >= observed} + 1) / (T + 1)`. Never zero, and at
/// most one.
///
/// # Examples
/// ```
///use scg_inference::p_value;
///
///assert_eq!(p_value(&[0, 1, 2, 3], 2), 3.0 / 5.0);
///assert_eq!(p_value(&[0, 0, 0], 5), 0.25);
///assert_eq!(p_value(&[], 5), 1.0);
/// ```
pub fn p_value(null_distribution: &[usize], observed: usize) -> f64 {
    let as_extreme = null_distribution.iter().filter(|&&dq| dq >= observed).count();
    (as_extreme + 1) as f64 / (null_distribution.len() + 1) as f64
}
