/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    (actual - expected).abs(),
    tolerance
  );
}

/// Assert that a series of values sums to `expected`
pub fn assert_sum_eq<I>(values: I, expected: f64)
where
  I: IntoIterator<Item = f64>,
{
  let total: f64 = values.into_iter().sum();
  assert_approx_eq(total, expected, DEFAULT_TOLERANCE);
}
