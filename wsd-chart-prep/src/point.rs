//! Observation point and series types shared by the chart preparation steps.

use serde::{Deserialize, Serialize};

use crate::timefmt;

/// A single charted observation.
///
/// `time` is the short label shown in tooltips; `full_time` is the
/// "DD-MM-YYYY HH:MM:SS" display stamp the tick strategies key off.
/// Points within a series are expected in ascending stamp order; nothing
/// downstream sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_time: Option<String>,
    pub value: f64,
}

impl DataPoint {
    /// Build a point from a display stamp, deriving the short label from
    /// the stamp's time half.
    pub fn from_full_time(full_time: impl Into<String>, value: f64) -> DataPoint {
        let full_time = full_time.into();
        let time = timefmt::time_part(&full_time).to_string();
        DataPoint {
            time,
            full_time: Some(full_time),
            value,
        }
    }

    /// The label used on the time axis: the full display stamp when
    /// present, otherwise the raw `time` field.
    pub fn axis_label(&self) -> &str {
        self.full_time.as_deref().unwrap_or(&self.time)
    }
}

/// A named series of observations.
///
/// Sibling series on one chart share a position-to-time mapping: they are
/// joined by array index, not by stamp equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub site_name: String,
    pub data: Vec<DataPoint>,
}
