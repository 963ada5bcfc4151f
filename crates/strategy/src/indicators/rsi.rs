/// RSI (Relative Strength Index) over a series of closes, oldest first.
///
/// Gains and losses are averaged with a simple rolling mean of the last
/// `period` deltas between consecutive closes, so the first value appears
/// at index `period`. A window with no losses (flat windows included) is 100.
///
/// Series shorter than two bars have no RSI at all.
pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    if n < 2 || period == 0 {
        return vec![None; n];
    }

    // deltas[j] is the change from bar j to bar j + 1
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = deltas.iter().map(|&d| if d > 0.0 { d } else { 0.0 }).collect();
    let losses: Vec<f64> = deltas.iter().map(|&d| if d < 0.0 { -d } else { 0.0 }).collect();

    (0..n)
        .map(|i| {
            if i < period {
                return None;
            }
            let range = i - period..i;
            let avg_gain = gains[range.clone()].iter().sum::<f64>() / period as f64;
            let avg_loss = losses[range].iter().sum::<f64>() / period as f64;
            Some(rsi_value(avg_gain, avg_loss))
        })
        .collect()
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_needs_a_full_window_of_deltas() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let out = rsi(&prices, 14);
        assert!(out[..14].iter().all(Option::is_none));
        assert!(out[14].is_some());
    }

    #[test]
    fn rsi_undefined_with_only_thirteen_deltas() {
        let prices: Vec<f64> = (0..14)
            .map(|i| if i % 2 == 0 { 100.0 } else { 103.0 })
            .collect();
        assert!(rsi(&prices, 14).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_single_bar_is_undefined() {
        assert_eq!(rsi(&[100.0], 1), vec![None]);
    }

    #[test]
    fn rsi_all_gains_returns_100() {
        let prices = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        let out = rsi(&prices, 3);
        for v in out[3..].iter().map(|v| v.unwrap()) {
            assert!((v - 100.0).abs() < 1e-9, "Expected 100, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses_returns_0() {
        let prices = vec![14.0, 13.0, 12.0, 11.0, 10.0];
        let out = rsi(&prices, 3);
        for v in out[3..].iter().map(|v| v.unwrap()) {
            assert!(v.abs() < 1e-9, "Expected 0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_window_is_100() {
        let out = rsi(&[50.0; 20], 14);
        assert_eq!(out[13], None);
        assert_eq!(out[14], Some(100.0));
        assert_eq!(out[19], Some(100.0));
    }

    #[test]
    fn rsi_known_value() {
        // deltas: +2, -1, +1 => avg_gain 1.0, avg_loss 1/3
        let out = rsi(&[10.0, 12.0, 11.0, 12.0], 3);
        let v = out[3].unwrap();
        assert!((v - 75.0).abs() < 1e-9, "Expected 75, got {v}");
    }

    #[test]
    fn rsi_window_rolls_forward() {
        // window at index 4: +2, -1, +1, -2
        let out = rsi(&[10.0, 12.0, 11.0, 12.0, 10.0], 4);
        let v = out[4].unwrap();
        assert!((v - 50.0).abs() < 1e-9, "Expected 50, got {v}");
    }
}
