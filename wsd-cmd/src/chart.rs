//! Chart payload assembly.
//!
//! Produces the JSON handed to the chart scripts: a `data` array of wide
//! rows plus a `config` object carrying the title, axis labels, tick plan
//! and y-axis limits.

use anyhow::Context;
use log::info;
use serde_json::json;

use wsd_chart_prep::limits::Limits;
use wsd_chart_prep::point::Series;
use wsd_chart_prep::reshape;
use wsd_chart_prep::ticks::{self, Timeframe};

use crate::load;

/// Default series color, matching the dashboard line style.
const DEFAULT_COLOR: &str = "#2196F3";

/// Default display cap before stride down-sampling.
pub const DEFAULT_MAX_POINTS: usize = 2000;

/// Run the `chart` command: load observations, prepare the chart pieces
/// and write the payload JSON.
pub fn run_chart(
    observations_csv: &str,
    station: Option<&str>,
    timeframe: Option<Timeframe>,
    title: &str,
    y_axis_label: &str,
    max_points: usize,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let mut series = load::load_observations(observations_csv)?;

    if let Some(station) = station {
        series.retain(|s| s.site_name == station);
        if series.is_empty() {
            anyhow::bail!("station '{station}' not present in {observations_csv}");
        }
    }

    let payload = build_payload(&series, timeframe, title, y_axis_label, max_points);
    let rendered = serde_json::to_string_pretty(&payload)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write chart payload to {path}"))?;
            info!("Chart payload written to {path}");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Assemble the `data`/`config` payload for the chart scripts.
///
/// Every series is down-sampled with the same cap; index-aligned series
/// have equal lengths, so they keep identical strides and stay aligned.
/// The tick plan and the rows are computed over the down-sampled axis.
pub fn build_payload(
    series: &[Series],
    timeframe: Option<Timeframe>,
    title: &str,
    y_axis_label: &str,
    max_points: usize,
) -> serde_json::Value {
    let display: Vec<Series> = series
        .iter()
        .map(|s| Series {
            site_name: s.site_name.clone(),
            data: reshape::downsample(&s.data, max_points),
        })
        .collect();

    let rows = if display.len() == 1 {
        reshape::rows_from_points(&display[0].data, Some(&display[0].site_name))
    } else {
        reshape::rows_from_series(&display)
    };

    let axis = display.first().map(|s| s.data.as_slice()).unwrap_or(&[]);
    let tick_plan = ticks::plan_ticks(axis, timeframe);
    let limits = Limits::of_series(&display);

    json!({
        "data": rows,
        "config": {
            "title": title,
            "yAxisLabel": y_axis_label,
            "color": DEFAULT_COLOR,
            "limits": limits,
            "ticks": tick_plan,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsd_chart_prep::point::DataPoint;

    fn series(name: &str, stamps: &[(&str, f64)]) -> Series {
        Series {
            site_name: name.to_string(),
            data: stamps
                .iter()
                .map(|(stamp, value)| DataPoint::from_full_time(*stamp, *value))
                .collect(),
        }
    }

    #[test]
    fn test_payload_carries_rows_config_and_ticks() {
        let input = vec![
            series(
                "Harbor",
                &[
                    ("05-06-2024 00:00:00", 13.2),
                    ("05-06-2024 01:00:00", 13.5),
                ],
            ),
            series(
                "North Ridge",
                &[
                    ("05-06-2024 00:00:00", 9.8),
                    ("05-06-2024 01:00:00", 9.4),
                ],
            ),
        ];
        let payload = build_payload(&input, None, "Temperatures", "Celsius", 2000);

        assert_eq!(payload["data"].as_array().unwrap().len(), 2);
        assert_eq!(payload["data"][0]["Harbor"], 13.2);
        assert_eq!(payload["data"][0]["North Ridge"], 9.8);
        assert_eq!(payload["config"]["title"], "Temperatures");
        assert_eq!(payload["config"]["yAxisLabel"], "Celsius");
        assert_eq!(payload["config"]["limits"]["min"], 9.4);
        assert_eq!(payload["config"]["limits"]["max"], 13.5);
        assert_eq!(payload["config"]["ticks"]["dataKey"], "fullTime");
        assert_eq!(payload["config"]["ticks"]["interval"], 0);
    }

    #[test]
    fn test_single_series_rows_are_keyed_by_station() {
        let input = vec![series("Harbor", &[("05-06-2024 00:00:00", 13.2)])];
        let payload = build_payload(&input, None, "t", "v", 2000);

        assert_eq!(payload["data"][0]["Harbor"], 13.2);
        // A single point is labeled with its full stamp.
        assert_eq!(
            payload["config"]["ticks"]["labels"][0],
            "05-06-2024 00:00:00"
        );
    }

    #[test]
    fn test_empty_series_payload_has_null_ticks() {
        let payload = build_payload(&[], None, "t", "v", 2000);

        assert_eq!(payload["data"].as_array().unwrap().len(), 0);
        assert!(payload["config"]["ticks"].is_null());
        assert_eq!(payload["config"]["limits"]["min"], 0.0);
    }
}
