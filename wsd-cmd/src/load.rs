//! Observation CSV loading.
//!
//! Input rows are `station_id,timestamp,value` with the timestamp in the
//! "DD-MM-YYYY HH:MM:SS" display format, ordered oldest-first per station.
//! Rows that fail to parse are skipped (and counted) rather than failing
//! the whole load.

use std::collections::BTreeMap;

use anyhow::Context;
use chrono::NaiveDateTime;
use log::{info, warn};

use wsd_chart_prep::point::{DataPoint, Series};
use wsd_chart_prep::timefmt::FULL_TIME_FORMAT;

/// Load per-station observation series from an observations CSV file.
pub fn load_observations(path: &str) -> anyhow::Result<Vec<Series>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read observations CSV {path}"))?;

    let series = parse_observations_csv(&raw);
    if series.is_empty() {
        anyhow::bail!("no usable observations in {path}");
    }

    info!(
        "Loaded {} stations ({} observations) from {}",
        series.len(),
        series.iter().map(|s| s.data.len()).sum::<usize>(),
        path
    );
    Ok(series)
}

/// Parse observation CSV text into per-station series.
///
/// Stations come back in stable name order; observations keep their input
/// order within a station (the chart layer expects ascending stamps and
/// does not sort).
pub fn parse_observations_csv(raw: &str) -> Vec<Series> {
    let mut by_station: BTreeMap<String, Vec<DataPoint>> = BTreeMap::new();
    let mut skipped = 0usize;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    for result in rdr.records() {
        let Ok(record) = result else {
            skipped += 1;
            continue;
        };

        let station = record.get(0).unwrap_or("").trim();
        let stamp = record.get(1).unwrap_or("").trim();
        let value_str = record.get(2).unwrap_or("").trim();

        if station.is_empty() {
            skipped += 1;
            continue;
        }
        if NaiveDateTime::parse_from_str(stamp, FULL_TIME_FORMAT).is_err() {
            skipped += 1;
            continue;
        }
        let Ok(value) = value_str.parse::<f64>() else {
            skipped += 1;
            continue;
        };

        by_station
            .entry(station.to_string())
            .or_default()
            .push(DataPoint::from_full_time(stamp, value));
    }

    if skipped > 0 {
        warn!("Skipped {skipped} malformed observation rows");
    }

    by_station
        .into_iter()
        .map(|(site_name, data)| Series { site_name, data })
        .collect()
}
