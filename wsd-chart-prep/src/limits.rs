//! Finite y-axis bounds for chart rendering.

use serde::Serialize;

use crate::point::{DataPoint, Series};

/// Inclusive y-axis bounds.
///
/// Always finite: inputs with nothing to measure (no points, or only
/// non-finite values) collapse to `{0, 0}` so the axis still renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    /// Bounds of a single run of points.
    pub fn of_points(data: &[DataPoint]) -> Limits {
        Self::from_values(data.iter().map(|point| point.value))
    }

    /// Bounds across every series, flattened.
    pub fn of_series(series: &[Series]) -> Limits {
        Self::from_values(
            series
                .iter()
                .flat_map(|series| series.data.iter().map(|point| point.value)),
        )
    }

    fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Limits {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
        }

        if min.is_finite() && max.is_finite() {
            Limits { min, max }
        } else {
            Limits { min: 0.0, max: 0.0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(value: f64) -> DataPoint {
        DataPoint {
            time: String::new(),
            full_time: None,
            value,
        }
    }

    #[test]
    fn test_limits_of_points() {
        let data = vec![pt(4.5), pt(-2.0), pt(9.25), pt(0.0)];
        assert_eq!(Limits::of_points(&data), Limits { min: -2.0, max: 9.25 });
    }

    #[test]
    fn test_empty_input_collapses_to_zero() {
        assert_eq!(Limits::of_points(&[]), Limits { min: 0.0, max: 0.0 });
        assert_eq!(Limits::of_series(&[]), Limits { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let data = vec![pt(f64::NAN), pt(3.0), pt(f64::INFINITY), pt(1.0)];
        assert_eq!(Limits::of_points(&data), Limits { min: 1.0, max: 3.0 });

        let all_bad = vec![pt(f64::NAN), pt(f64::NEG_INFINITY)];
        assert_eq!(Limits::of_points(&all_bad), Limits { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_limits_flatten_across_series() {
        let series = vec![
            Series {
                site_name: "North Ridge".to_string(),
                data: vec![pt(10.0), pt(12.0)],
            },
            Series {
                site_name: "Harbor".to_string(),
                data: vec![pt(-4.0), pt(7.0)],
            },
        ];
        assert_eq!(Limits::of_series(&series), Limits { min: -4.0, max: 12.0 });
    }
}
