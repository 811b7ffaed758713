//! Integration tests for rb-output.

use rb_core::{SimConfig, Tick};
use rb_sim::{FleetComposition, Sim, SimBuilder, StatsSnapshot};
use tempfile::TempDir;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn stats(time: f64) -> StatsSnapshot {
    StatsSnapshot {
        time,
        active_fires:         12,
        agents_fighting:      30,
        agents_refilling:     8,
        agents_idle:          12,
        fires_started:        104,
        fires_extinguished:   90,
        structures_destroyed: 2,
        avg_water:            87.25,
        total_fire_intensity: 640.5,
        avg_response_time:    31.04,
        fleet:                FleetComposition { scout: 9, standard: 26, heavy: 15 },
    }
}

fn small_sim() -> Sim {
    let config = SimConfig {
        city_size:             50.0,
        num_agents:            4,
        num_structures:        30,
        num_fires:             3,
        num_depots:            1,
        max_ticks:             40,
        output_interval_ticks: 10,
        ..SimConfig::default()
    };
    SimBuilder::new(config).build().unwrap()
}

fn read_rows(dir: &TempDir) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{CsvWriter, SUMMARY_HEADER};
    use crate::row::TickSummaryRow;
    use crate::writer::OutputWriter;

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SUMMARY_HEADER);
        assert!(read_rows(&dir).is_empty());
    }

    #[test]
    fn summary_row_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&TickSummaryRow::from_stats(Tick(99), &stats(10.0))).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir);
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(&r[0], "99");     // tick
        assert_eq!(&r[1], "10.0");   // time
        assert_eq!(&r[2], "12");     // active_fires
        assert_eq!(&r[8], "2");      // structures_destroyed
        assert_eq!(&r[9], "87.25");  // avg_water
        assert_eq!(&r[10], "640.50");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver, TickSummaryRow};

    /// Fails every write after the first `ok` rows.
    struct FlakyWriter {
        ok:   usize,
        seen: Vec<u64>,
    }

    impl OutputWriter for FlakyWriter {
        fn write_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.seen.len() >= self.ok {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.seen.push(row.tick);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn run_writes_snapshots_and_final_row() {
        let dir = tmp();
        let mut sim = small_sim();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let rows = read_rows(&dir);
        assert_eq!(rows.len(), obs.rows_written());
        assert_eq!(&rows[0][0], "10");
        let last = rows.last().unwrap();
        assert_eq!(&last[0], sim.clock.current_tick.0.to_string().as_str());
    }

    fn run_to_limit(max_ticks: u64) -> Vec<csv::StringRecord> {
        let dir = tmp();
        let config = SimConfig {
            city_size:             50.0,
            num_agents:            4,
            num_structures:        30,
            num_fires:             10,
            num_depots:            1,
            max_ticks,
            output_interval_ticks: 10,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        assert_eq!(sim.run(&mut obs), rb_sim::RunOutcome::TickLimit);
        assert!(obs.take_error().is_none());
        read_rows(&dir)
    }

    #[test]
    fn every_row_has_its_own_tick_and_time() {
        let rows = run_to_limit(21);
        let ticks: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
        let times: Vec<&str> = rows.iter().map(|r| &r[1]).collect();
        assert_eq!(ticks, ["10", "20", "21"]);
        assert_eq!(times, ["1.0", "2.0", "2.1"]);
    }

    #[test]
    fn final_row_is_not_repeated_after_a_snapshot() {
        let rows = run_to_limit(20);
        let ticks: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
        assert_eq!(ticks, ["10", "20"]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = small_sim();
        let mut obs = SimOutputObserver::new(FlakyWriter { ok: 2, seen: Vec::new() });
        sim.run_ticks(40, &mut obs);
        assert_eq!(obs.rows_written(), 2);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().seen, vec![10, 20]);
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::write_state_json;

    #[test]
    fn state_dump_round_trips_through_json() {
        let dir = tmp();
        let path = dir.path().join("simulation_state.json");
        let mut sim = small_sim();
        sim.run_ticks(5, &mut rb_sim::NoopObserver);
        write_state_json(&path, &sim.dump()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["structures"].as_array().unwrap().len(), 30);
        assert_eq!(v["agents"].as_array().unwrap().len(), 4);
        assert_eq!(v["depots"].as_array().unwrap().len(), 1);
        assert_eq!(v["stats"]["fires_started"], serde_json::json!(sim.stats().fires_started));
        assert!((v["time"].as_f64().unwrap() - 0.5).abs() < 1e-9);

        let kind = v["agents"][0]["kind"].as_str().unwrap();
        assert!(["scout", "standard", "heavy"].contains(&kind));
        let target = v["agents"][0]["target"]["kind"].as_str().unwrap();
        assert!(["none", "depot", "structure"].contains(&target));
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tmp();
        let sim = small_sim();
        let err = write_state_json(&dir.path().join("a/b.json"), &sim.dump());
        assert!(err.is_err());
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::render_report;

    #[test]
    fn report_lists_every_statistic() {
        let text = render_report(&stats(123.0));
        assert!(text.contains("SIMULATION STATISTICS"));
        assert!(text.contains("Time Elapsed: 123.0s"));
        assert!(text.contains("Active Fires: 12"));
        assert!(text.contains("Total Started: 104"));
        assert!(text.contains("Extinguished: 90"));
        assert!(text.contains("Structures Destroyed: 2"));
        assert!(text.contains("Total Fire Intensity: 640.5"));
        assert!(text.contains("Fighting Fires: 30"));
        assert!(text.contains("Refilling Water: 8"));
        assert!(text.contains("Idle: 12"));
        assert!(text.contains("Avg Response Time: 31.0s"));
        assert!(text.contains("Scouts: 9 | Standard: 26 | Heavy: 15"));
    }

    #[test]
    fn report_is_framed_by_rules() {
        let text = render_report(&stats(0.0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(70));
        assert_eq!(*lines.last().unwrap(), "=".repeat(70));
        assert_eq!(lines[1].trim(), "SIMULATION STATISTICS");
        assert_eq!(lines[1].len(), 70);
    }
}
