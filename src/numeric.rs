//! Small numeric helpers shared by the operators.
//!
//! Rounding is pinned to **round-half-away-from-zero** ([`f64::round`]),
//! so `round_to(0.00005, 4) == 0.0001` and `round_to(-0.00005, 4) == -0.0001`.
//! Fitness comparisons and reported means are computed on rounded values.

/// Rounds `x` to `digits` decimal places, half away from zero.
pub fn round_to(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    // `+ 0.0` turns a rounded `-0.0` into `0.0`.
    (x * scale).round() / scale + 0.0
}

/// Index of the first maximum. `None` for an empty slice.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v <= values[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Index of the first minimum. `None` for an empty slice.
pub fn argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v >= values[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Arithmetic mean. `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(-50.63656, 4), -50.6366);
    }

    #[test]
    fn test_round_never_yields_negative_zero() {
        let r = round_to(-0.00001, 4);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
        assert_eq!(format!("{}", r), "0");
        assert_eq!(format!("{}", round_to(-0.0, 4)), "0");
    }

    #[test]
    fn test_round_zero_digits_passthrough_integers() {
        assert_eq!(round_to(42.0, 4), 42.0);
        assert_eq!(round_to(0.0, 4), 0.0);
    }

    #[test]
    fn test_argmax_first_occurrence() {
        assert_eq!(argmax(&[1.0, 3.0, 2.0, 3.0]), Some(1));
        assert_eq!(argmax(&[-1.0]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmin_first_occurrence() {
        assert_eq!(argmin(&[4.0, -2.0, 7.0, -2.0]), Some(1));
        assert_eq!(argmin(&[]), None);
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
        assert_eq!(mean(&[]), 0.0);
    }
}
