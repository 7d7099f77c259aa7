//! Console commands read from stdin while the playback runs.

use std::io::{self, BufRead};
use std::ops::ControlFlow;
use std::str::FromStr;
use std::thread;

use anyhow::{Error, Result, anyhow, bail};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use gf_core::AgentId;
use gf_sim::{Engine, EngineObserver, SimError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(String),
    Stop(String),
    StartFleet,
    StopFleet,
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let name = words.next();
        let cmd = match (verb, name) {
            ("start", Some(n)) => Command::Start(n.to_owned()),
            ("stop", Some(n)) => Command::Stop(n.to_owned()),
            ("fleet", None) => Command::StartFleet,
            ("halt", None) => Command::StopFleet,
            ("status", None) => Command::Status,
            ("quit" | "q", None) => Command::Quit,
            _ => bail!("unknown command {line:?}; try start NAME, stop NAME, fleet, halt, status, quit"),
        };
        if words.next().is_some() {
            bail!("too many arguments in {line:?}");
        }
        Ok(cmd)
    }
}

/// Read commands on a plain thread; stdin has no async reader in our tokio
/// feature set.  The thread ends at EOF, on `quit`, or when the receiver
/// is dropped.
pub fn spawn_stdin_reader(tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(cmd) => {
                    let quit = cmd == Command::Quit;
                    if tx.blocking_send(cmd).is_err() || quit {
                        break;
                    }
                }
                Err(e) => warn!("{e}"),
            }
        }
    });
}

/// Run one command against the engine.  Rejections are logged, not fatal.
pub fn apply<O: EngineObserver>(engine: &mut Engine<O>, cmd: Command) -> ControlFlow<()> {
    if cmd == Command::Quit {
        return ControlFlow::Break(());
    }
    if let Err(e) = run(engine, cmd) {
        let informational = e.downcast_ref::<SimError>().is_some_and(SimError::is_informational);
        if informational {
            info!("{e}");
        } else {
            warn!("{e:#}");
        }
    }
    ControlFlow::Continue(())
}

fn run<O: EngineObserver>(engine: &mut Engine<O>, cmd: Command) -> Result<()> {
    match cmd {
        Command::Start(name) => {
            let agent = by_name(engine, &name)?;
            engine.start(agent)?;
        }
        Command::Stop(name) => {
            let agent = by_name(engine, &name)?;
            engine.stop(agent)?;
        }
        Command::StartFleet => engine.start_fleet()?,
        Command::StopFleet => engine.stop_fleet()?,
        Command::Status => print_status(engine),
        Command::Quit => {}
    }
    Ok(())
}

/// Stop whatever is still moving.
pub fn stop_all<O: EngineObserver>(engine: &mut Engine<O>) {
    if engine.fleet_running() {
        if let Err(e) = engine.stop_fleet() {
            debug!(error = %e, "fleet stop failed during shutdown");
        }
    }
    let running: Vec<_> = engine.agents().iter().filter(|a| a.is_running()).map(|a| a.id).collect();
    for agent in running {
        if let Err(e) = engine.stop(agent) {
            debug!(%agent, error = %e, "stop failed during shutdown");
        }
    }
}

fn by_name<O: EngineObserver>(engine: &Engine<O>, name: &str) -> Result<AgentId> {
    engine.agent_id(name).ok_or_else(|| anyhow!("no agent named {name:?}"))
}

fn print_status<O: EngineObserver>(engine: &Engine<O>) {
    println!("[{}]", engine.now());
    for agent in engine.agents() {
        let at = agent.position().map_or_else(|| "-".to_owned(), |p| p.to_string());
        println!(
            "  {:<12} {:?}  step {}/{}  at {}",
            agent.name,
            agent.state(),
            agent.cursor(),
            agent.path().len(),
            at,
        );
    }
}
