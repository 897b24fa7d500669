//! Derived per-ticker fields over a chronological close series.
//!
//! Every function returns one entry per input close; entries without enough history
//! for their lookback are `None`.

/// Window of the rolling volatility, in trading days.
pub const VOLATILITY_WINDOW: usize = 5;

/// Percentage change over `periods` rows: `(close[i] / close[i - periods] - 1) * 100`.
///
/// A non-finite result (zero base close) is reported as `None`.
pub fn pct_change(closes: &[f64], periods: usize) -> Vec<Option<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if periods == 0 || i < periods {
                return None;
            }
            let pct = (c / closes[i - periods] - 1.0) * 100.0;
            pct.is_finite().then_some(pct)
        })
        .collect()
}

/// Sample standard deviation (n - 1 denominator) of each trailing `window` of closes.
pub fn rolling_std(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        if window < 2 || i + 1 < window {
            out.push(None);
            continue;
        }
        out.push(sample_std_dev(&closes[i + 1 - window..=i]));
    }
    out
}

/// Sample standard deviation, `None` for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    let sd = (ss / (n - 1.0)).sqrt();
    sd.is_finite().then_some(sd)
}
