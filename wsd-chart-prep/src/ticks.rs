//! Adaptive tick planning for station time axes.
//!
//! Given an ordered run of observations and, optionally, the dashboard
//! range control that produced it, compute how many axis slots to skip and
//! what label each surviving slot shows. Label granularity widens with the
//! span of the data: time-of-day within a day, day boundaries across a
//! week, month names across a year.
//!
//! The dashboard knows its own cadence, so its range controls pick a
//! strategy directly. Custom report ranges pass no hint and the distinct
//! calendar days present in the data pick one instead.

use std::collections::HashSet;

use serde::Serialize;

use crate::point::DataPoint;
use crate::timefmt;

/// Axis field the tick labels are keyed on in the chart payload.
pub const TICK_DATA_KEY: &str = "fullTime";

/// Hours that keep a time-of-day marker on week-scale axes.
const WEEK_MARKER_HOURS: [u32; 3] = [6, 12, 18];

/// Hours that keep a time-of-day marker on multi-day automatic axes.
const MULTI_DAY_MARKER_HOURS: [u32; 2] = [6, 18];

/// The dashboard range control driving a chart, when one is active.
///
/// This is a hint, not a measurement: it reflects which control the user
/// picked, independent of the actual span of the data behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Timeframe {
    Live,
    LastDay,
    LastWeek,
    LastMonth,
    LastYear,
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(Timeframe::Live),
            "last-day" => Ok(Timeframe::LastDay),
            "last-week" => Ok(Timeframe::LastWeek),
            "last-month" => Ok(Timeframe::LastMonth),
            "last-year" => Ok(Timeframe::LastYear),
            other => Err(format!(
                "unknown timeframe '{other}' (expected live, last-day, last-week, last-month or last-year)"
            )),
        }
    }
}

/// A computed tick layout for one chart render.
///
/// `interval` is the 0-based skip count handed to the charting library: a
/// tick survives every `interval + 1` points. `labels` is a per-index
/// lookup table built once per plan; an empty string hides a slot while
/// keeping its position on the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPlan {
    pub data_key: &'static str,
    pub interval: usize,
    labels: Vec<String>,
}

impl TickPlan {
    fn new(interval: usize, labels: Vec<String>) -> TickPlan {
        TickPlan {
            data_key: TICK_DATA_KEY,
            interval,
            labels,
        }
    }

    /// Label for the slot at `index`; "" for hidden or out-of-range slots.
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    /// The full per-index label table.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Compute the tick layout for `data` under an optional range hint.
///
/// Returns `None` for an empty dataset: there is nothing to configure and
/// the caller renders its no-data state instead. A single point is always
/// labeled with its full display stamp, hint or no hint.
pub fn plan_ticks(data: &[DataPoint], timeframe: Option<Timeframe>) -> Option<TickPlan> {
    if data.is_empty() {
        return None;
    }
    if data.len() == 1 {
        let label = data[0].axis_label().to_string();
        return Some(TickPlan::new(0, vec![label]));
    }

    let plan = match timeframe {
        Some(timeframe) => hinted_plan(data, timeframe),
        None => automatic_plan(data),
    };
    Some(plan)
}

/// Skip stride for `len` points aiming at `target` visible ticks.
fn stride(len: usize, target: usize) -> usize {
    (len / target).max(1)
}

fn hinted_plan(data: &[DataPoint], timeframe: Timeframe) -> TickPlan {
    let len = data.len();
    match timeframe {
        Timeframe::Live | Timeframe::LastDay => labeled_plan(data, stride(len, 8), |point, _| {
            timefmt::time_part(point.axis_label()).to_string()
        }),
        Timeframe::LastWeek => {
            let target = (len / 12).clamp(8, 15);
            day_boundary_plan(data, stride(len, target), &WEEK_MARKER_HOURS)
        }
        Timeframe::LastMonth => labeled_plan(data, stride(len, 8), |point, _| {
            timefmt::day_month(timefmt::date_part(point.axis_label()))
        }),
        Timeframe::LastYear => labeled_plan(data, stride(len, 12), |point, _| {
            timefmt::month_year(timefmt::date_part(point.axis_label()))
        }),
    }
}

/// Strategy for datasets with no range hint: bucket on how many distinct
/// calendar days the data spans.
fn automatic_plan(data: &[DataPoint]) -> TickPlan {
    let len = data.len();

    // One ordered scan: distinct dates, and the first index of each.
    let mut seen_dates: HashSet<&str> = HashSet::new();
    let mut date_change_indices: HashSet<usize> = HashSet::new();
    for (index, point) in data.iter().enumerate() {
        let date = timefmt::date_part(point.axis_label());
        if seen_dates.insert(date) {
            date_change_indices.insert(index);
        }
    }
    let day_count = seen_dates.len();

    match day_count {
        1 => {
            let step = stride(len, 12);
            // The sampled slot nearest the visual center carries the full
            // stamp; everything else shows time-of-day only.
            let center = len / 2;
            let full_slot = (0..len)
                .step_by(step)
                .min_by_key(|index| index.abs_diff(center))
                .unwrap_or(0);
            labeled_plan(data, step, |point, index| {
                let stamp = point.axis_label();
                if index == full_slot {
                    stamp.to_string()
                } else {
                    timefmt::time_part(stamp).to_string()
                }
            })
        }
        2 => labeled_plan(data, stride(len, 10), |point, index| {
            let stamp = point.axis_label();
            if index == 0 || date_change_indices.contains(&index) {
                stamp.to_string()
            } else {
                timefmt::time_part(stamp).to_string()
            }
        }),
        3..=7 => {
            let target = (day_count * 2).clamp(8, 15);
            day_boundary_plan(data, stride(len, target), &MULTI_DAY_MARKER_HOURS)
        }
        8..=30 => labeled_plan(data, stride(len, 8), |point, _| {
            timefmt::day_month(timefmt::date_part(point.axis_label()))
        }),
        31..=90 => labeled_plan(data, stride(len, 6), |point, _| {
            timefmt::day_month_year(timefmt::date_part(point.axis_label()))
        }),
        _ => labeled_plan(data, stride(len, 12), |point, _| {
            timefmt::month_year(timefmt::date_part(point.axis_label()))
        }),
    }
}

/// Plan where every sampled slot gets a label from `label_for`.
fn labeled_plan<F>(data: &[DataPoint], step: usize, label_for: F) -> TickPlan
where
    F: Fn(&DataPoint, usize) -> String,
{
    let mut labels = vec![String::new(); data.len()];
    for index in (0..data.len()).step_by(step) {
        labels[index] = label_for(&data[index], index);
    }
    TickPlan::new(step - 1, labels)
}

/// Two-pass plan for week-scale axes: the first sampled slot on each new
/// date carries a "DD Www" day label; later slots on an already-seen date
/// keep a time-of-day marker only at the given hours and are hidden
/// otherwise. One day label per distinct date, never more.
fn day_boundary_plan(data: &[DataPoint], step: usize, marker_hours: &[u32]) -> TickPlan {
    let mut seen_dates: HashSet<&str> = HashSet::new();
    let mut labels = vec![String::new(); data.len()];

    for index in (0..data.len()).step_by(step) {
        let stamp = data[index].axis_label();
        let date = timefmt::date_part(stamp);
        let time = timefmt::time_part(stamp);

        if seen_dates.insert(date) {
            labels[index] = timefmt::day_with_weekday(date);
        } else if timefmt::hour_of(time).is_some_and(|hour| marker_hours.contains(&hour)) {
            labels[index] = time.to_string();
        }
    }

    TickPlan::new(step - 1, labels)
}
