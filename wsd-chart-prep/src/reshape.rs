//! Row-oriented reshaping for the chart scripts.
//!
//! The D3 side consumes "wide" rows: one object per axis position carrying
//! the time fields plus one numeric field per plotted series. Sibling
//! series are joined by array index on the first series' axis; they are
//! assumed to share one position-to-time mapping.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::point::{DataPoint, Series};

/// Field name used when a chart plots a single unnamed series.
pub const SINGLE_SERIES_KEY: &str = "Value";

/// One axis position across every plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub time: String,
    pub full_time: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

/// Reshape a single run of points, keyed by `label` (default "Value").
pub fn rows_from_points(data: &[DataPoint], label: Option<&str>) -> Vec<ChartRow> {
    let key = label.unwrap_or(SINGLE_SERIES_KEY);
    data.iter()
        .map(|point| ChartRow {
            time: point.time.clone(),
            full_time: point.axis_label().to_string(),
            values: BTreeMap::from([(key.to_string(), point.value)]),
        })
        .collect()
}

/// Reshape index-aligned series into wide rows on the first series' axis.
///
/// Sibling values are read positionally; a series shorter than the first
/// contributes no field at the positions it is missing.
pub fn rows_from_series(series: &[Series]) -> Vec<ChartRow> {
    let Some(first) = series.first() else {
        return Vec::new();
    };

    first
        .data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let mut values = BTreeMap::new();
            for sibling in series {
                if let Some(p) = sibling.data.get(index) {
                    values.insert(sibling.site_name.clone(), p.value);
                }
            }
            ChartRow {
                time: point.time.clone(),
                full_time: point.axis_label().to_string(),
                values,
            }
        })
        .collect()
}

/// Cap a run of points for display.
///
/// Stride-samples down to roughly `max_points`, re-appending the final
/// point when the stride would drop it so the line always reaches the
/// newest observation. Inputs at or under the cap come back unchanged;
/// a cap of 0 disables the cap.
pub fn downsample(data: &[DataPoint], max_points: usize) -> Vec<DataPoint> {
    if max_points == 0 || data.len() <= max_points {
        return data.to_vec();
    }

    let step = data.len() as f64 / max_points as f64;
    let mut result = Vec::with_capacity(max_points + 1);
    let mut idx = 0.0;
    while (idx as usize) < data.len() {
        result.push(data[idx as usize].clone());
        idx += step;
    }
    if result.last() != data.last() {
        if let Some(last) = data.last() {
            result.push(last.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(stamp: &str, value: f64) -> DataPoint {
        DataPoint::from_full_time(stamp, value)
    }

    #[test]
    fn test_single_series_rows_use_value_key() {
        let data = vec![pt("05-06-2024 00:00:00", 1.5), pt("05-06-2024 01:00:00", 2.5)];
        let rows = rows_from_points(&data, None);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, "00:00:00");
        assert_eq!(rows[0].full_time, "05-06-2024 00:00:00");
        assert_eq!(rows[0].values.get(SINGLE_SERIES_KEY), Some(&1.5));

        let labeled = rows_from_points(&data, Some("Harbor"));
        assert_eq!(labeled[1].values.get("Harbor"), Some(&2.5));
    }

    #[test]
    fn test_multi_series_rows_join_by_index() {
        let series = vec![
            Series {
                site_name: "North Ridge".to_string(),
                data: vec![pt("05-06-2024 00:00:00", 10.0), pt("05-06-2024 01:00:00", 11.0)],
            },
            Series {
                site_name: "Harbor".to_string(),
                data: vec![pt("05-06-2024 00:00:00", 20.0), pt("05-06-2024 01:00:00", 21.0)],
            },
        ];
        let rows = rows_from_series(&series);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values.get("North Ridge"), Some(&10.0));
        assert_eq!(rows[0].values.get("Harbor"), Some(&20.0));
        assert_eq!(rows[1].values.get("Harbor"), Some(&21.0));
    }

    #[test]
    fn test_short_sibling_series_skips_missing_positions() {
        let series = vec![
            Series {
                site_name: "North Ridge".to_string(),
                data: vec![pt("05-06-2024 00:00:00", 10.0), pt("05-06-2024 01:00:00", 11.0)],
            },
            Series {
                site_name: "Harbor".to_string(),
                data: vec![pt("05-06-2024 00:00:00", 20.0)],
            },
        ];
        let rows = rows_from_series(&series);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].values.get("North Ridge"), Some(&11.0));
        assert_eq!(rows[1].values.get("Harbor"), None);
    }

    #[test]
    fn test_row_serialization_flattens_series_fields() {
        let data = vec![pt("05-06-2024 00:00:00", 1.5)];
        let rows = rows_from_points(&data, Some("Harbor"));
        let json = serde_json::to_value(&rows[0]).unwrap();

        assert_eq!(json["time"], "00:00:00");
        assert_eq!(json["fullTime"], "05-06-2024 00:00:00");
        assert_eq!(json["Harbor"], 1.5);
    }

    #[test]
    fn test_downsample_respects_cap_and_keeps_last_point() {
        let data: Vec<DataPoint> = (0..5000)
            .map(|i| pt(&format!("05-06-2024 00:00:{:02}", i % 60), i as f64))
            .collect();
        let sampled = downsample(&data, 2000);

        assert!(sampled.len() <= 2001);
        assert_eq!(sampled.first(), data.first());
        assert_eq!(sampled.last(), data.last());
    }

    #[test]
    fn test_downsample_passes_small_inputs_through() {
        let data = vec![pt("05-06-2024 00:00:00", 1.0), pt("05-06-2024 01:00:00", 2.0)];
        assert_eq!(downsample(&data, 2000), data);
        assert_eq!(downsample(&data, 0), data);
    }
}
