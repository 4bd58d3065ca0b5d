//! Least-squares trend slope.

use super::mean;

/// OLS slope of `values` against the index `0..len`.
///
/// Zero when the index has no variance (fewer than two values).
pub fn linear_slope(values: &[f64]) -> f64 {
    let len = values.len();
    if len < 2 {
        return 0.0;
    }

    let x_mean = (len - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_of_line() {
        let values: Vec<f64> = (0..14).map(|i| 3.0 + 2.5 * i as f64).collect();
        assert!((linear_slope(&values) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_slope_flat_and_degenerate() {
        assert_eq!(linear_slope(&[7.0; 10]), 0.0);
        assert_eq!(linear_slope(&[7.0]), 0.0);
        assert_eq!(linear_slope(&[]), 0.0);
    }

    #[test]
    fn test_slope_negative() {
        let values = [10.0, 8.0, 6.0, 4.0];
        assert!((linear_slope(&values) + 2.0).abs() < 1e-9);
    }
}
