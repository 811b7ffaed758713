//! End-of-run text report.

use std::fmt::{self, Write};

use rb_sim::StatsSnapshot;

const WIDTH: usize = 70;

/// Render the detailed statistics block printed at the end of a run.
pub fn render_report(stats: &StatsSnapshot) -> String {
    let mut out = String::new();
    // Formatting into a String only fails if a Display impl does.
    let _ = write_report(&mut out, stats);
    out
}

fn write_report(out: &mut String, s: &StatsSnapshot) -> fmt::Result {
    let rule = "=".repeat(WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "{:^width$}", "SIMULATION STATISTICS", width = WIDTH)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Time Elapsed: {:.1}s", s.time)?;

    writeln!(out, "\nFire Status:")?;
    writeln!(out, "  Active Fires: {}", s.active_fires)?;
    writeln!(out, "  Total Started: {}", s.fires_started)?;
    writeln!(out, "  Extinguished: {}", s.fires_extinguished)?;
    writeln!(out, "  Structures Destroyed: {}", s.structures_destroyed)?;
    writeln!(out, "  Total Fire Intensity: {:.1}", s.total_fire_intensity)?;

    writeln!(out, "\nAgent Status:")?;
    writeln!(out, "  Fighting Fires: {}", s.agents_fighting)?;
    writeln!(out, "  Refilling Water: {}", s.agents_refilling)?;
    writeln!(out, "  Idle: {}", s.agents_idle)?;
    writeln!(out, "  Avg Water Level: {:.1}", s.avg_water)?;

    writeln!(out, "\nPerformance:")?;
    writeln!(out, "  Avg Response Time: {:.1}s", s.avg_response_time)?;

    writeln!(out, "\nFleet Composition:")?;
    writeln!(
        out,
        "  Scouts: {} | Standard: {} | Heavy: {}",
        s.fleet.scout, s.fleet.standard, s.fleet.heavy
    )?;
    writeln!(out, "{rule}")
}
