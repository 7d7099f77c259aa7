//! In-memory event timeline.

use std::collections::HashMap;

use gf_core::{AgentId, SimTime};
use gf_sim::{EngineEvent, EngineObserver};

/// Agent display names, learned from `AgentCreated` events.
#[derive(Default, Debug, Clone)]
pub(crate) struct AgentNames {
    names: HashMap<AgentId, String>,
}

impl AgentNames {
    pub(crate) fn observe(&mut self, event: &EngineEvent) {
        if let EngineEvent::AgentCreated { agent, name } = event {
            self.names.insert(*agent, name.clone());
        }
    }

    /// The agent's name, or its `AgentN` label if it was created before the
    /// observer was attached.
    pub(crate) fn get(&self, agent: AgentId) -> String {
        self.names.get(&agent).cloned().unwrap_or_else(|| agent.to_string())
    }

    /// One log line for `event`, using agent names where the engine's own
    /// `Display` would print ids.
    pub(crate) fn describe(&self, event: &EngineEvent) -> String {
        match *event {
            EngineEvent::Entered { agent, zone } => format!("{} ENTERED {zone}", self.get(agent)),
            EngineEvent::Exited { agent, zone } => format!("{} EXITED {zone}", self.get(agent)),
            EngineEvent::Started { agent } => format!("{} simulation started.", self.get(agent)),
            EngineEvent::Finished { agent } => format!("{} reached the end of its path.", self.get(agent)),
            EngineEvent::Stopped { agent } => format!("{} simulation stopped.", self.get(agent)),
            EngineEvent::NotRunning { agent } => format!("{} simulation is not running.", self.get(agent)),
            EngineEvent::Moved { agent, step, point } => {
                format!("{} step {step} at {point}.", self.get(agent))
            }
            EngineEvent::PathSet { agent, len } => {
                format!("{} path generated with {len} points.", self.get(agent))
            }
            EngineEvent::PathCleared { agent } => format!("{} path cleared.", self.get(agent)),
            _ => event.to_string(),
        }
    }
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at:    SimTime,
    pub event: EngineEvent,
}

/// Records every event in emission order and renders the timestamped,
/// human-readable log the demo prints:
///
/// ```text
/// 00:00.000 Vehicle1 simulation started.
/// 00:00.000 Vehicle1 ENTERED Zone1
/// 00:03.600 Vehicle1 EXITED Zone1
/// ```
///
/// `Moved` events are kept in the timeline but left out of
/// [`lines`](Self::lines) unless [`with_moves`](Self::with_moves) is set.
#[derive(Default, Debug, Clone)]
pub struct EventLog {
    entries:    Vec<LogEntry>,
    names:      AgentNames,
    with_moves: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include one line per movement step in [`lines`](Self::lines).
    pub fn with_moves(mut self) -> Self {
        self.with_moves = true;
        self
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget recorded events.  Agent names are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Events concerning one agent, in order.
    pub fn for_agent(&self, agent: AgentId) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(move |e| e.event.agent() == Some(agent))
    }

    /// `Entered` / `Exited` events only.
    pub fn transitions(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(|e| e.event.is_transition())
    }

    /// The recorded timeline as log lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| self.with_moves || !matches!(e.event, EngineEvent::Moved { .. }))
            .map(|e| format!("{} {}", e.at, self.names.describe(&e.event)))
            .collect()
    }
}

impl EngineObserver for EventLog {
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        self.names.observe(event);
        self.entries.push(LogEntry { at, event: event.clone() });
    }
}
