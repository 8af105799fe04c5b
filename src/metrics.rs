use crate::models::{Growth, MONTH_COUNT};

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn half_year_delta(visits: &[f64; MONTH_COUNT]) -> f64 {
    visits[MONTH_COUNT - 1] - visits[0]
}

/// Growth between the first and last month of the window.
///
/// A zero January baseline yields `NotApplicable` when June has traffic;
/// zero-to-zero counts as flat 0.0%, not unknown. Track-level series use
/// different zero-baseline rules on purpose (see `rollup`).
pub fn half_year_growth(visits: &[f64; MONTH_COUNT]) -> Growth {
    let first = visits[0];
    let last = visits[MONTH_COUNT - 1];
    if first > 0.0 {
        Growth::Pct(round1((last - first) / first * 100.0))
    } else if last == 0.0 {
        Growth::Pct(0.0)
    } else {
        Growth::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_last_minus_first() {
        assert_eq!(half_year_delta(&[100.0, 0.0, 0.0, 0.0, 0.0, 150.0]), 50.0);
        assert_eq!(half_year_delta(&[200.0, 0.0, 0.0, 0.0, 0.0, 80.0]), -120.0);
    }

    #[test]
    fn growth_with_positive_baseline() {
        assert_eq!(
            half_year_growth(&[100.0, 110.0, 120.0, 130.0, 140.0, 150.0]),
            Growth::Pct(50.0)
        );
        assert_eq!(
            half_year_growth(&[300.0, 0.0, 0.0, 0.0, 0.0, 100.0]),
            Growth::Pct(-66.7)
        );
    }

    #[test]
    fn growth_rounds_to_one_decimal() {
        assert_eq!(half_year_growth(&[3.0, 0.0, 0.0, 0.0, 0.0, 1.0]), Growth::Pct(-66.7));
        assert_eq!(half_year_growth(&[7.0, 0.0, 0.0, 0.0, 0.0, 9.0]), Growth::Pct(28.6));
    }

    #[test]
    fn zero_to_zero_is_flat_not_unknown() {
        assert_eq!(half_year_growth(&[0.0, 5.0, 9.0, 2.0, 1.0, 0.0]), Growth::Pct(0.0));
    }

    #[test]
    fn zero_baseline_with_traffic_is_not_applicable() {
        assert_eq!(
            half_year_growth(&[0.0, 0.0, 0.0, 0.0, 0.0, 100.0]),
            Growth::NotApplicable
        );
    }
}
