//! Dataset summary: per-station counts, spans and value bounds.

use wsd_chart_prep::limits::Limits;

use crate::load;

/// Run the `summary` command: print one line per station.
pub fn run_summary(observations_csv: &str) -> anyhow::Result<()> {
    let series = load::load_observations(observations_csv)?;

    println!("{} stations in {}", series.len(), observations_csv);
    for s in &series {
        let limits = Limits::of_points(&s.data);
        let first = s.data.first().map(|p| p.axis_label()).unwrap_or("-");
        let last = s.data.last().map(|p| p.axis_label()).unwrap_or("-");
        println!(
            "  {}: {} observations, {} .. {}, min {:.2}, max {:.2}",
            s.site_name,
            s.data.len(),
            first,
            last,
            limits.min,
            limits.max
        );
    }
    Ok(())
}
