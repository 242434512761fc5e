//! Descriptive statistics over small in-memory samples.
//!
//! Every function reports [`StatsError::EmptyInput`] instead of returning
//! `NaN` when handed zero observations. Variance is the *population*
//! variance (denominator `n`), not the sample variance.

use std::collections::HashMap;
use std::hash::Hash;

use super::error::StatsError;

/// Arithmetic mean: the sum divided by the number of observations.
///
/// # Examples
/// ```
/// use empstats::domain::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// ```
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value of the sorted sample.
///
/// For an even number of observations this is the mean of the two middle
/// values.
///
/// # Examples
/// ```
/// use empstats::domain::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Population variance: mean squared deviation from the mean (divides by `n`).
///
/// Returns exactly `0.0` for a constant sample so that rounding in the mean
/// never yields a tiny positive variance.
///
/// # Examples
/// ```
/// use empstats::domain::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(population_variance(&v), Ok(4.0));
/// ```
pub fn population_variance(values: &[f64]) -> Result<f64, StatsError> {
    let m = mean(values)?;
    if values.windows(2).all(|w| w[0] == w[1]) {
        return Ok(0.0);
    }
    let squared: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    Ok(squared / values.len() as f64)
}

/// Most frequent value of the sample.
///
/// Fails with [`StatsError::NoUniqueMode`] when the sample is empty or when
/// two or more values share the highest frequency.
///
/// # Examples
/// ```
/// use empstats::domain::stats::mode;
/// assert_eq!(mode(&[5, 5, 3]), Ok(5));
/// assert!(mode(&["Ann", "Bob"]).is_err());
/// ```
pub fn mode<T>(values: &[T]) -> Result<T, StatsError>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let top = counts.values().copied().max().ok_or(StatsError::NoUniqueMode)?;
    let mut leaders = counts.into_iter().filter(|(_, count)| *count == top);

    match (leaders.next(), leaders.next()) {
        (Some((value, _)), None) => Ok(value.clone()),
        _ => Err(StatsError::NoUniqueMode),
    }
}
