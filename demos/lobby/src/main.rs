//! lobby: morning rush in a ten-storey office building.
//!
//! A scripted rush (everyone called from the lobby, a maintenance window, an
//! emergency drill) is merged with seeded random traffic and replayed against
//! one car.  Trips, metrics samples, and the operator log are written to
//! `output/lobby/`; the final snapshot is printed as JSON.
//!
//! Set `RUST_LOG=debug` to watch dispatch decisions and stale timer fires.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use lift_core::{LiftConfig, Tick};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_schedule::{RandomTraffic, load_script_reader};
use lift_sim::{LogEntry, SimBuilder, SimObserver, Snapshot, TripRecord};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOORS:         u8  = 10;
const MS_PER_FLOOR:   u64 = 1_200;
const SEED:           u64 = 42;
const MEAN_GAP_MS:    u64 = 4_000;
const TRAFFIC_END_MS: u64 = 10 * 60_000; // ten simulated minutes
const IDLE_LIMIT_MS:  u64 = 5 * 60_000;

// ── Rush script ───────────────────────────────────────────────────────────────

// Columns: at_ms,action,value,extra.  Actions are listed in lift_schedule::loader.
const RUSH_CSV: &str = "\
at_ms,action,value,extra\n\
0,call,7,\n\
1500,call,4,\n\
3000,call,9,\n\
4000,call,2,\n\
20000,down,8,\n\
45000,up,1,\n\
60000,speed,900,\n\
180000,maintenance,,\n\
240000,maintenance,,\n\
300000,call,10,\n\
300500,emergency,,\n\
330000,emergency,,\n\
420000,call,5,\n\
";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    trip_rows:    usize,
    metrics_rows: usize,
    event_rows:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, trip_rows: 0, metrics_rows: 0, event_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_log(&mut self, entry: &LogEntry) {
        self.event_rows += 1;
        self.inner.on_log(entry);
    }

    fn on_trip_end(&mut self, record: &TripRecord) {
        self.trip_rows += 1;
        self.inner.on_trip_end(record);
    }

    fn on_metrics(&mut self, snapshot: &Snapshot) {
        self.metrics_rows += 1;
        self.inner.on_metrics(snapshot);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== lobby: rust_lift elevator simulator ===");
    println!("Floors: {FLOORS}  |  Speed: {MS_PER_FLOOR} ms/floor  |  Seed: {SEED}");
    println!();

    // 1. Script: the rush plus random background traffic.
    let rush = load_script_reader(Cursor::new(RUSH_CSV))?;
    let traffic = RandomTraffic::new(FLOORS, MEAN_GAP_MS, SEED)
        .with_ground_bias(0.4)
        .generate(Tick::ZERO, Tick(TRAFFIC_END_MS));
    println!("Script: {} scripted + {} random commands", rush.len(), traffic.len());
    let script = rush.merge(traffic);

    // 2. Sim.
    let config = LiftConfig {
        floor_count:     FLOORS,
        ms_per_floor:    MS_PER_FLOOR,
        start_unix_secs: 1_700_000_000,
        ..LiftConfig::default()
    };
    let mut sim = SimBuilder::new(config.clone()).build()?;

    // 3. Output.
    std::fs::create_dir_all("output/lobby")?;
    let writer = CsvWriter::new(Path::new("output/lobby"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 4. Run.
    let t0 = Instant::now();
    let report = sim.run_script(script, &mut obs);
    let settled = sim.run_until_idle(IDLE_LIMIT_MS, &mut obs);
    let elapsed = t0.elapsed();
    if !settled {
        info!("car still busy after {IDLE_LIMIT_MS} ms of drain time");
    }
    if let Err(e) = obs.inner.finish() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock());
    println!("  commands applied   : {}", report.applied);
    println!("  commands rejected  : {}", report.rejected);
    println!("  stale timer fires  : {}", sim.stale_timer_fires());
    println!("  trips.csv          : {} rows", obs.trip_rows);
    println!("  metrics.csv        : {} rows", obs.metrics_rows);
    println!("  events.csv         : {} rows", obs.event_rows);
    println!();

    println!("Last log lines:");
    for entry in sim.journal().iter().take(5) {
        println!("  {entry}");
    }
    println!();

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}
