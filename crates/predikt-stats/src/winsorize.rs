//! Winsorization and winsorized moments.

use std::collections::HashMap;
use std::hash::Hash;

use predikt_core::config::defaults;

/// Clamp the `alpha` tail on each side of `sample` to the nearest retained value.
///
/// Returns a copy of the input, unchanged, when the sample is empty, when
/// `alpha` is outside the open interval (0, 0.5), or when
/// `floor(n * alpha) == 0`. Otherwise every value is clamped to
/// `[sorted[k], sorted[n - k - 1]]` with `k = floor(n * alpha)`; length and
/// order are preserved.
pub fn winsorize(sample: &[f64], alpha: f64) -> Vec<f64> {
    if sample.is_empty() || !(alpha > 0.0 && alpha < 0.5) {
        return sample.to_vec();
    }

    let n = sample.len();
    let trim_count = (n as f64 * alpha).floor() as usize;
    if trim_count == 0 {
        return sample.to_vec();
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    let lower = sorted[trim_count];
    let upper = sorted[n - trim_count - 1];

    sample.iter().map(|&v| clamp_to(v, lower, upper)).collect()
}

// `f64::clamp` would propagate NaN; a NaN sorted into the tail is replaced
// by the bound on that side instead.
fn clamp_to(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        return if value.is_sign_negative() { lower } else { upper };
    }
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Winsorize `(group, value)` pairs independently per group.
///
/// Each group is trimmed using only its own values; output keeps the input
/// positions, so `out[i].0 == returns[i].0` for every `i`.
pub fn winsorize_by_pair<K>(returns: &[(K, f64)], alpha: f64) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
{
    let mut groups: HashMap<&K, Vec<usize>> = HashMap::new();
    for (i, (key, _)) in returns.iter().enumerate() {
        groups.entry(key).or_default().push(i);
    }

    let mut out: Vec<(K, f64)> = returns.to_vec();
    for indices in groups.values() {
        let values: Vec<f64> = indices.iter().map(|&i| returns[i].1).collect();
        for (&i, w) in indices.iter().zip(winsorize(&values, alpha)) {
            out[i].1 = w;
        }
    }
    out
}

/// 0.10 for samples smaller than 20, 0.05 otherwise.
pub fn get_alpha_for_sample_size(n: usize) -> f64 {
    if n < defaults::DEFAULT_SMALL_SAMPLE_THRESHOLD {
        defaults::DEFAULT_SMALL_SAMPLE_ALPHA
    } else {
        defaults::DEFAULT_LARGE_SAMPLE_ALPHA
    }
}

/// Arithmetic mean of the winsorized sample. Empty input yields 0.
pub fn winsorized_mean(sample: &[f64], alpha: f64) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let w = winsorize(sample, alpha);
    w.iter().sum::<f64>() / w.len() as f64
}

/// Population standard deviation of the winsorized sample. Empty input yields 0.
///
/// The sample is winsorized once; the mean is then taken with alpha 0 so
/// the already-clamped values are not clipped again.
pub fn winsorized_std(sample: &[f64], alpha: f64) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let w = winsorize(sample, alpha);
    let mean = winsorized_mean(&w, 0.0);
    let variance = w.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / w.len() as f64;
    variance.sqrt()
}
