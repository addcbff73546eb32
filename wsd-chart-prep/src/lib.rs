//! Chart preparation for WSD station time-series.
//!
//! This crate turns ordered station observations into the pieces the D3
//! chart scripts need:
//! - `ticks`: adaptive tick planning (skip interval + per-slot labels)
//! - `limits`: finite y-axis bounds
//! - `reshape`: wide row output and display down-sampling
//! - `timefmt`: helpers over the "DD-MM-YYYY HH:MM:SS" display stamp
//!
//! Everything here is pure computation over in-memory slices: no I/O, no
//! shared state, each call independent of the last.

pub mod limits;
pub mod point;
pub mod reshape;
pub mod ticks;
pub mod timefmt;

pub use limits::Limits;
pub use point::{DataPoint, Series};
pub use reshape::ChartRow;
pub use ticks::{plan_ticks, TickPlan, Timeframe};
