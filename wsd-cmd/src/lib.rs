//! Command implementations for the WSD CLI.
//!
//! Provides subcommands for turning station observation CSVs into chart
//! payloads for the D3 bridge, and for summarizing a dataset before
//! charting it.

use clap::Subcommand;

use wsd_chart_prep::ticks::Timeframe;

pub mod chart;
pub mod load;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Build a chart payload (rows + axis config) from observation data
    Chart {
        /// Path to the observations CSV (station_id,timestamp,value)
        #[arg(short = 'o', long)]
        observations_csv: String,

        /// Only chart this station (default: all stations, index-aligned)
        #[arg(long)]
        station: Option<String>,

        /// Active range control: live, last-day, last-week, last-month or
        /// last-year (default: derive granularity from the data span)
        #[arg(long)]
        timeframe: Option<Timeframe>,

        /// Chart title
        #[arg(long, default_value = "Station observations")]
        title: String,

        /// Y-axis label
        #[arg(long, default_value = "Value")]
        y_axis_label: String,

        /// Display cap before stride down-sampling (0 disables the cap)
        #[arg(long, default_value_t = chart::DEFAULT_MAX_POINTS)]
        max_points: usize,

        /// Output path for the payload JSON (default: stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Summarize an observations CSV (stations, spans, value bounds)
    Summary {
        /// Path to the observations CSV (station_id,timestamp,value)
        #[arg(short = 'o', long)]
        observations_csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Chart {
            observations_csv,
            station,
            timeframe,
            title,
            y_axis_label,
            max_points,
            output,
        } => chart::run_chart(
            &observations_csv,
            station.as_deref(),
            timeframe,
            &title,
            &y_axis_label,
            max_points,
            output.as_deref(),
        ),
        Command::Summary { observations_csv } => summary::run_summary(&observations_csv),
    }
}
