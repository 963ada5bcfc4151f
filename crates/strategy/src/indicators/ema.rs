/// Exponential moving average over `values`, one output per input.
///
/// Seeded with the first value and smoothed with `alpha = 2 / (period + 1)`,
/// so every element has a defined average.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    let k = 2.0 / (period as f64 + 1.0);

    let mut out = Vec::with_capacity(values.len());
    let mut ema_val = first;
    out.push(ema_val);
    for &value in &values[1..] {
        ema_val += (value - ema_val) * k;
        out.push(ema_val);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_of_empty_input_is_empty() {
        assert!(ema(&[], 20).is_empty());
    }

    #[test]
    fn ema_starts_at_first_value() {
        let out = ema(&[42.0], 20);
        assert_eq!(out, vec![42.0]);
    }

    #[test]
    fn ema_known_values() {
        // period 3 => alpha 0.5
        let out = ema(&[2.0, 5.0, 8.0, 11.0], 3);
        let expected = [2.0, 3.5, 5.75, 8.375];
        for (got, want) in out.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn ema_of_constant_series_is_constant() {
        let out = ema(&[7.5; 40], 50);
        assert!(out.iter().all(|&v| v == 7.5));
    }

    #[test]
    fn shorter_period_reacts_faster() {
        let mut prices = vec![10.0; 10];
        prices.push(20.0);
        let fast = ema(&prices, 5);
        let slow = ema(&prices, 20);
        assert!(fast[10] > slow[10]);
    }
}
