use std::ops::RangeInclusive;

/// Integrate `f` over `range` with the trapezoidal rule.
///
/// `n_steps` must be non-zero.
#[must_use]
pub fn trapezoid(range: RangeInclusive<f64>, n_steps: usize, f: impl Fn(f64) -> f64) -> f64 {
    let (start, end) = range.into_inner();
    #[expect(clippy::cast_precision_loss)]
    let step = (end - start) / n_steps as f64;
    let edges = (f(start) + f(end)) / 2.0;
    #[expect(clippy::cast_precision_loss)]
    let inner: f64 = (1..n_steps).map(|i| f(start + i as f64 * step)).sum();
    step * (edges + inner)
}
