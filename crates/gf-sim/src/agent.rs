//! Per-agent playback state.

use gf_core::{AgentId, Coordinate, TimerId};
use gf_path::Route;
use gf_tracker::ZoneStates;

/// Lifecycle of an agent's playback.
///
/// ```text
/// Idle ──start──▶ Running ──path end──▶ Finished
///                    │
///                    └──stop / fault──▶ Stopped
/// ```
///
/// `Finished` and `Stopped` agents can be started again, which restarts from
/// the first path point.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Finished,
    Stopped,
}

/// Which loop advances a running agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Driver {
    /// Own timer.  `None` only while the tick that will reschedule it runs.
    Solo(Option<TimerId>),
    /// The shared fleet timer.
    Fleet,
}

/// A simulated vehicle: identity, path, playback cursor and per-zone
/// occupancy flags.
#[derive(Debug)]
pub struct Agent {
    pub id:   AgentId,
    pub name: String,

    pub(crate) path:        Vec<Coordinate>,
    pub(crate) cursor:      usize,
    pub(crate) zone_states: ZoneStates,
    pub(crate) state:       RunState,
    pub(crate) driver:      Option<Driver>,
    pub(crate) route:       Route,
    pub(crate) cadence_ms:  Option<u64>,
}

impl Agent {
    pub(crate) fn new(id: AgentId, name: String, zone_count: usize) -> Self {
        Self {
            id,
            name,
            path: Vec::new(),
            cursor: 0,
            zone_states: ZoneStates::new(zone_count),
            state: RunState::Idle,
            driver: None,
            route: Route::default(),
            cadence_ms: None,
        }
    }

    /// The generated path.  Empty until one is set.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Index of the next path point to visit.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The most recently emitted position, if playback has moved at all.
    pub fn position(&self) -> Option<Coordinate> {
        self.cursor.checked_sub(1).and_then(|i| self.path.get(i)).copied()
    }

    /// Path points not yet visited.
    pub fn remaining(&self) -> usize {
        self.path.len().saturating_sub(self.cursor)
    }

    pub fn zone_states(&self) -> &ZoneStates {
        &self.zone_states
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// `true` while the agent is advanced by the shared fleet timer.
    pub fn in_fleet(&self) -> bool {
        self.driver == Some(Driver::Fleet)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Per-agent tick interval override, if any.
    pub fn cadence_ms(&self) -> Option<u64> {
        self.cadence_ms
    }

    /// Rewind for a fresh run: cursor to 0, every zone flag to outside.
    pub(crate) fn rewind(&mut self, zone_count: usize) {
        self.cursor = 0;
        self.zone_states.resize(zone_count);
        self.zone_states.reset();
    }

    /// Replace the path and return to `Idle`.
    pub(crate) fn replace_path(&mut self, path: Vec<Coordinate>, zone_count: usize) {
        self.path = path;
        self.rewind(zone_count);
        self.state = RunState::Idle;
    }

    /// Leave `Running` for `state`, returning the solo timer to cancel.
    pub(crate) fn halt(&mut self, state: RunState) -> Option<TimerId> {
        self.state = state;
        match self.driver.take() {
            Some(Driver::Solo(timer)) => timer,
            _ => None,
        }
    }
}
