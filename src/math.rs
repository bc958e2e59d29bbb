#[must_use]
#[inline]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter().zip(y).fold(0.0, |dot, (xi, yi)| dot + xi * yi)
}

/// Left-to-right arithmetic mean. `NaN` for an empty input.
#[must_use]
pub fn mean(x: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = x
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), xi| (sum + xi, count + 1));
    sum / count as f64
}
