use super::ema::ema;

/// MACD (Moving Average Convergence/Divergence) line and signal line.
///
/// MACD line = EMA(fast) − EMA(slow) of closes, signal = EMA(signal_period)
/// of the MACD line. Both are defined at every bar once there are at least
/// two bars; shorter series yield `None` throughout.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    if closes.len() < 2 {
        return (vec![None; closes.len()], vec![None; closes.len()]);
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);
    let line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema(&line, signal_period);

    (
        line.into_iter().map(Some).collect(),
        signal.into_iter().map(Some).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_up(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64 * 0.5).collect()
    }

    #[test]
    fn macd_undefined_with_single_bar() {
        let (line, signal) = macd(&[100.0], 12, 26, 9);
        assert_eq!(line, vec![None]);
        assert_eq!(signal, vec![None]);
    }

    #[test]
    fn macd_defined_for_every_bar_from_two() {
        let (line, signal) = macd(&[100.0, 101.0], 12, 26, 9);
        assert!(line.iter().all(Option::is_some));
        assert!(signal.iter().all(Option::is_some));
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let (line, signal) = macd(&[25.0; 60], 12, 26, 9);
        assert!(line.iter().all(|v| *v == Some(0.0)));
        assert!(signal.iter().all(|v| *v == Some(0.0)));
    }

    #[test]
    fn macd_positive_and_above_signal_in_uptrend() {
        let (line, signal) = macd(&trending_up(60), 12, 26, 9);
        let last_line = line[59].unwrap();
        let last_signal = signal[59].unwrap();
        assert!(last_line > 0.0);
        assert!(last_line > last_signal);
    }
}
