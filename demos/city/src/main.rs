//! rescue: run the city fire-response scenario from the command line.
//!
//! Loads a scenario (TOML file and/or flags), runs it to completion, prints
//! a progress line every `output_interval_ticks` ticks and a statistics
//! report at the end, then writes `tick_summaries.csv` and
//! `simulation_state.json` to the output directory.
//!
//! Logging goes through `tracing`; set `RUST_LOG=rb_fire=debug` to see every
//! ignition, spread and destruction.

mod cli;


use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rb_core::Tick;
use rb_output::{CsvWriter, SimOutputObserver, render_report, write_state_json};
use rb_sim::{RunOutcome, SimBuilder, SimObserver, StatsSnapshot, TickReport};
use tracing_subscriber::EnvFilter;

use cli::Args;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints a one-line status on every snapshot and forwards everything to
/// the CSV observer when exporting.
struct ProgressObserver {
    csv: Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for ProgressObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(csv) = &mut self.csv {
            csv.on_tick_start(tick);
        }
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        for id in &report.fire.destroyed {
            tracing::info!(structure = %id, tick = %report.tick, "structure lost");
        }
        if let Some(csv) = &mut self.csv {
            csv.on_tick_end(report);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, stats: &StatsSnapshot) {
        println!(
            "[{:6.1}s] Fires: {:3} | Fighting: {:2} | Refilling: {:2} | Destroyed: {:2}",
            stats.time,
            stats.active_fires,
            stats.agents_fighting,
            stats.agents_refilling,
            stats.structures_destroyed,
        );
        if let Some(csv) = &mut self.csv {
            csv.on_snapshot(tick, stats);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &StatsSnapshot) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(final_tick, stats);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rescue=info,rb_sim=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.resolve()?;

    println!("=== rescue: city fire response ===");
    println!("City: {0} × {0}", config.city_size);
    println!("Agents: {} | Structures: {}", config.num_agents, config.num_structures);
    println!("Initial fires: {} | Depots: {}", config.num_fires, config.num_depots);
    println!("{}", "-".repeat(70));

    // 1. Build.
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Output.
    let csv = if args.no_export {
        None
    } else {
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("creating {}", args.out_dir.display()))?;
        Some(SimOutputObserver::new(CsvWriter::new(&args.out_dir)?))
    };
    let mut obs = ProgressObserver { csv };

    // 3. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs);
    let elapsed = t0.elapsed().as_secs_f64();

    println!();
    match outcome {
        RunOutcome::AllFiresOut => println!("All fires extinguished."),
        RunOutcome::DestructionLimit => {
            println!("Stopped: too many structures destroyed.");
            println!("Consider more agents or fewer initial fires.");
        }
        RunOutcome::TickLimit => println!("Tick limit reached."),
    }

    // 4. Report.
    println!();
    print!("{}", render_report(&sim.stats()));
    println!();
    println!("Completed in {elapsed:.2} real seconds");
    if elapsed > 0.0 {
        println!("Simulation speed: {:.1}x real-time", sim.time() / elapsed);
    }

    // 5. Export.
    if let Some(csv) = obs.csv.as_mut() {
        if let Some(e) = csv.take_error() {
            eprintln!("output error: {e}");
        }
        let path = args.out_dir.join("simulation_state.json");
        write_state_json(&path, &sim.dump())?;
        println!("  tick_summaries.csv    : {} rows", csv.rows_written());
        println!("  simulation_state.json : {}", path.display());
    }

    Ok(())
}
