/// Mean squared error between two equal-length signals.
///
/// # Panics
/// Panics if the signals differ in length.
pub fn mean_squared_error(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "signal lengths differ");
    if a.is_empty() {
        return 0.0;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        / a.len() as f64
}

/// Error-power improvement of `filtered` over `noisy`, both measured
/// against `clean`, in dB. Positive means the filter helped.
pub fn noise_reduction_db(clean: &[f64], noisy: &[f64], filtered: &[f64]) -> f64 {
    let before = mean_squared_error(clean, noisy);
    let after = mean_squared_error(clean, filtered);
    10.0 * (before / after.max(f64::MIN_POSITIVE)).log10()
}
