use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// The most frequent value, choosing the largest among equally frequent ones.
///
/// # Examples
///
/// ```
/// use mesonet_wind::aggregate::mode::mode_max;
///
/// assert_eq!(mode_max(["SCT", "BKN", "SCT", "BKN", "FEW"]), Some("SCT"));
/// assert_eq!(mode_max(Vec::<u32>::new()), None);
/// ```
pub fn mode_max<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let top = counts.values().copied().max()?;
    counts
        .into_iter()
        .filter(|(_, count)| *count == top)
        .map(|(value, _)| value)
        .max()
}

/// [`mode_max`] for floats. NaN values are ignored.
pub fn mode_max_f64<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    mode_max(
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .map(OrderedFloat),
    )
    .map(OrderedFloat::into_inner)
}

/// Arithmetic mean of the present values; `None` when nothing is present.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
