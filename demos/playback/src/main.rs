//! playback: replays a geofence scenario against the wall clock.
//!
//! ```text
//! playback [SCENARIO.json] [--out DIR] [--speed X] [--instant]
//! ```
//!
//! Without a scenario path the embedded Ho Chi Minh City scenario is used.
//! Zone transitions are logged as they happen (`RUST_LOG=geofence=debug`
//! adds every movement step).  While playing, stdin accepts `start NAME`,
//! `stop NAME`, `fleet`, `halt`, `status` and `quit`; Ctrl-C stops
//! everything and prints the summary.

mod commands;
mod scenario;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tokio::signal;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gf_core::SimTime;
use gf_output::{CsvEventWriter, EventLog, EventOutputObserver, TracingObserver};
use gf_sim::{Engine, EngineEvent, EngineObserver};

use commands::{Command, apply, spawn_stdin_reader, stop_all};
use scenario::Scenario;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct Args {
    scenario: Option<PathBuf>,
    out:      Option<PathBuf>,
    speed:    f64,
    instant:  bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Args { scenario: None, out: None, speed: 1.0, instant: false };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    parsed.out = Some(args.next().context("--out needs a directory")?.into());
                }
                "--speed" => {
                    let raw = args.next().context("--speed needs a factor")?;
                    let speed: f64 = raw.parse().with_context(|| format!("bad --speed {raw:?}"))?;
                    if !speed.is_finite() || speed <= 0.0 {
                        bail!("--speed must be positive, got {raw}");
                    }
                    parsed.speed = speed;
                }
                "--instant" => parsed.instant = true,
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                path if parsed.scenario.is_none() => parsed.scenario = Some(PathBuf::from(path)),
                extra => bail!("unexpected argument {extra:?}"),
            }
        }
        Ok(parsed)
    }
}

// ── Real-time driver ──────────────────────────────────────────────────────────

/// Virtual time reached after `elapsed` of wall time at `speed`.
fn virtual_time(elapsed: Duration, speed: f64) -> SimTime {
    SimTime((elapsed.as_secs_f64() * 1_000.0 * speed) as u64)
}

/// Wall-clock offset at which virtual time `at` is due.
fn wall_offset(at: SimTime, speed: f64) -> Duration {
    Duration::from_secs_f64(at.as_millis() as f64 / 1_000.0 / speed)
}

/// Sleep until each pending deadline and fire it, applying console
/// commands in between.  Returns when nothing is scheduled, on `quit`, or
/// on Ctrl-C.
async fn drive<O: EngineObserver>(
    engine:       &mut Engine<O>,
    speed:        f64,
    mut commands: mpsc::Receiver<Command>,
) {
    let origin = Instant::now();
    loop {
        let Some(deadline) = engine.next_deadline() else {
            info!(at = %engine.now(), "nothing left to play");
            return;
        };
        tokio::select! {
            _ = sleep_until(origin + wall_offset(deadline, speed)) => {
                engine.advance_to(deadline);
            }
            Some(cmd) = commands.recv() => {
                // Catch the engine up to the wall clock before acting.
                engine.advance_to(virtual_time(origin.elapsed(), speed));
                if apply(engine, cmd).is_break() {
                    stop_all(engine);
                    return;
                }
            }
            _ = signal::ctrl_c() => {
                warn!(at = %engine.now(), "interrupted");
                stop_all(engine);
                return;
            }
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let scenario = match &args.scenario {
        Some(path) => Scenario::from_path(path)?,
        None => Scenario::embedded()?,
    };

    println!("=== playback: geofence simulation ===");
    println!(
        "Zones: {}  |  Agents: {}  |  Mode: {}  |  Speed: {}x",
        scenario.zones.len(),
        scenario.agents.len(),
        if scenario.fleet { "fleet" } else { "solo" },
        args.speed,
    );
    println!();

    // 1. Sinks: live log, in-memory timeline, optional CSV.
    let csv = match &args.out {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            Some(EventOutputObserver::new(CsvEventWriter::new(dir)?))
        }
        None => None,
    };
    let observer = (TracingObserver::new(), (EventLog::new(), csv));

    // 2. World and agents.
    let mut engine = scenario.build(observer)?;
    scenario.start(&mut engine)?;

    // 3. Play.
    let t0 = std::time::Instant::now();
    if args.instant {
        let fired = engine.run_until_idle();
        info!(fired, "played instantly");
    } else {
        let (tx, rx) = mpsc::channel(16);
        spawn_stdin_reader(tx);
        drive(&mut engine, args.speed, rx).await;
    }

    // 4. Summary.
    let log = &engine.observer.1.0;
    println!();
    println!("=== Summary ===");
    println!("Virtual time: {}  |  Wall time: {:.2?}", engine.now(), t0.elapsed());
    for agent in engine.agents() {
        let (entered, exited) = log.for_agent(agent.id).fold((0, 0), |(n, x), e| match e.event {
            EngineEvent::Entered { .. } => (n + 1, x),
            EngineEvent::Exited { .. } => (n, x + 1),
            _ => (n, x),
        });
        println!(
            "  {:<12} {:?}  steps {}/{}  entered {}  exited {}",
            agent.name,
            agent.state(),
            agent.cursor(),
            agent.path().len(),
            entered,
            exited,
        );
    }
    println!("Transitions: {}", log.transitions().count());

    if let Some(out) = engine.observer.1.1.as_mut() {
        out.finish();
        if let Some(e) = out.take_error() {
            return Err(e).context("writing the event CSV");
        }
        if let Some(dir) = &args.out {
            println!("Events: {} rows → {}", out.written(), dir.join(gf_output::csv::EVENTS_FILE).display());
        }
    }
    Ok(())
}
