//! Playback loops and the virtual clock.
//!
//! A solo tick and a fleet tick share [`Engine::step_agent`]: emit the next
//! position, run the zone tracker, emit transitions.  They differ only in who
//! owns the timer and in the fleet's two-phase split:
//!
//! 1. **Containment phase** (optionally parallel with the `parallel`
//!    feature): every fleet agent's next point is tested against all zones.
//! 2. **Apply phase** (sequential, registration order): flags are updated
//!    and events emitted, so event order never depends on thread timing.

use gf_core::{AgentId, SimTime};
use gf_tracker::{TrackerResult, Transition};
use tracing::{debug, error, info, warn};

use crate::agent::{Agent, Driver, RunState};
use crate::timer::TimerTarget;
use crate::{Engine, EngineEvent, EngineObserver, SimError, SimResult};

/// Outcome of advancing one agent by one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Step {
    Moved,
    Finished,
    Faulted,
}

impl<O: EngineObserver> Engine<O> {
    // ── Solo playback ─────────────────────────────────────────────────────

    /// Start (or restart from the beginning) one agent's playback.
    ///
    /// Emits `Started` and the first position immediately; later positions
    /// follow every cadence interval of virtual time.
    ///
    /// # Errors
    ///
    /// `UnknownAgent`, `AlreadyRunning` (also when the agent runs in the
    /// fleet), `InsufficientPath` when the path has fewer than 2 points.
    pub fn start(&mut self, agent: AgentId) -> SimResult<()> {
        let a = self.known(agent)?;
        if a.is_running() {
            warn!(%agent, "start rejected: already running");
            return Err(SimError::AlreadyRunning(agent));
        }
        if a.path.len() < 2 {
            warn!(%agent, len = a.path.len(), "start rejected: path too short");
            return Err(SimError::InsufficientPath { agent, len: a.path.len() });
        }

        let zones = self.geometry.len();
        let a = &mut self.agents[agent.index()];
        a.rewind(zones);
        a.state = RunState::Running;
        a.driver = Some(Driver::Solo(None));
        info!(%agent, points = a.path.len(), "playback started");

        self.emit(EngineEvent::Started { agent });
        self.solo_tick(agent);
        Ok(())
    }

    /// Stop a running agent, solo or fleet.  Its pending tick is canceled,
    /// so no event for it follows `Stopped`.
    ///
    /// # Errors
    ///
    /// `UnknownAgent`, or `NotRunning` (after emitting the `NotRunning`
    /// event) when there is nothing to stop.  The engine is unchanged then.
    pub fn stop(&mut self, agent: AgentId) -> SimResult<()> {
        if !self.known(agent)?.is_running() {
            warn!(%agent, "stop requested but not running");
            self.emit(EngineEvent::NotRunning { agent });
            return Err(SimError::NotRunning(agent));
        }

        let a = &mut self.agents[agent.index()];
        let in_fleet = a.in_fleet();
        if let Some(timer) = a.halt(RunState::Stopped) {
            self.timers.cancel(timer);
        }
        info!(%agent, "playback stopped");
        self.emit(EngineEvent::Stopped { agent });

        if in_fleet && !self.agents.iter().any(Agent::in_fleet) {
            self.end_fleet();
        }
        Ok(())
    }

    fn solo_tick(&mut self, agent: AgentId) {
        if self.step_agent(agent, None) != Step::Moved {
            return;
        }
        let a = &self.agents[agent.index()];
        let cadence = a.cadence_ms.unwrap_or(self.config.tick_interval_ms);
        let timer = self.timers.push(self.clock.after_ms(cadence), TimerTarget::Agent(agent));
        self.agents[agent.index()].driver = Some(Driver::Solo(Some(timer)));
    }

    // ── Fleet playback ────────────────────────────────────────────────────

    /// Start every agent that has a path from one shared timer.
    ///
    /// Agents with an empty path are left out and never finish.  The run ends
    /// with `AllFinished` once every participant reached its path end; if any
    /// of them was stopped or faulted on the way it ends without it.
    ///
    /// # Errors
    ///
    /// `FleetAlreadyRunning`, `FleetEmpty` when no agent has a path, or
    /// `AlreadyRunning` for the first participant already playing solo.
    pub fn start_fleet(&mut self) -> SimResult<()> {
        if self.fleet_running {
            warn!("fleet start rejected: already running");
            return Err(SimError::FleetAlreadyRunning);
        }
        let members: Vec<AgentId> =
            self.agents.iter().filter(|a| !a.path.is_empty()).map(|a| a.id).collect();
        if members.is_empty() {
            warn!("fleet start rejected: no agent has a path");
            return Err(SimError::FleetEmpty);
        }
        if let Some(&busy) = members.iter().find(|id| self.agents[id.index()].is_running()) {
            warn!(agent = %busy, "fleet start rejected: agent already running");
            return Err(SimError::AlreadyRunning(busy));
        }

        let zones = self.geometry.len();
        self.fleet_running = true;
        self.fleet_members = members.clone();
        for &agent in &members {
            let a = &mut self.agents[agent.index()];
            a.rewind(zones);
            a.state = RunState::Running;
            a.driver = Some(Driver::Fleet);
            self.emit(EngineEvent::Started { agent });
        }
        info!(agents = members.len(), "fleet started");

        self.fleet_tick();
        Ok(())
    }

    /// Stop every agent of the fleet run and cancel the shared timer.
    pub fn stop_fleet(&mut self) -> SimResult<()> {
        if !self.fleet_running {
            warn!("fleet stop requested but not running");
            return Err(SimError::FleetNotRunning);
        }
        let members: Vec<AgentId> =
            self.agents.iter().filter(|a| a.in_fleet()).map(|a| a.id).collect();
        for agent in members {
            self.agents[agent.index()].halt(RunState::Stopped);
            self.emit(EngineEvent::Stopped { agent });
        }
        self.end_fleet();
        info!("fleet stopped");
        Ok(())
    }

    fn fleet_tick(&mut self) {
        let members: Vec<AgentId> =
            self.agents.iter().filter(|a| a.in_fleet()).map(|a| a.id).collect();
        let checks = self.fleet_containment(&members);
        for (agent, check) in members.into_iter().zip(checks) {
            self.step_agent(agent, check);
        }

        if self.agents.iter().any(Agent::in_fleet) {
            let at = self.clock.after_ms(self.config.tick_interval_ms);
            self.fleet = Some(self.timers.push(at, TimerTarget::Fleet));
            return;
        }

        // A member that was stopped or faulted still has path left.
        let all_finished = self
            .fleet_members
            .iter()
            .all(|id| self.agents[id.index()].state == RunState::Finished);
        self.end_fleet();
        if all_finished {
            info!("fleet finished");
            self.emit(EngineEvent::AllFinished);
        } else {
            info!("fleet ended with unfinished members");
        }
    }

    /// Containment phase of a fleet tick: the zone flags each member would
    /// take at its next point, or `None` for members already at their end.
    fn fleet_containment(&self, members: &[AgentId]) -> Vec<Option<TrackerResult<Vec<bool>>>> {
        let zones = self.geometry.zones();
        let agents = &self.agents;
        let check = |id: &AgentId| {
            let a = &agents[id.index()];
            a.path.get(a.cursor).map(|&point| a.zone_states.check(zones, point))
        };

        #[cfg(not(feature = "parallel"))]
        {
            members.iter().map(check).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            members.par_iter().map(check).collect()
        }
    }

    fn end_fleet(&mut self) {
        if let Some(timer) = self.fleet.take() {
            self.timers.cancel(timer);
        }
        self.fleet_running = false;
        self.fleet_members.clear();
    }

    // ── Shared tick step ──────────────────────────────────────────────────

    /// Advance one running agent by one path point.
    ///
    /// `contained` carries flags precomputed by the fleet's containment
    /// phase; solo ticks pass `None` and compute them here.
    fn step_agent(&mut self, agent: AgentId, contained: Option<TrackerResult<Vec<bool>>>) -> Step {
        let a = &mut self.agents[agent.index()];
        let Some(&point) = a.path.get(a.cursor) else {
            a.halt(RunState::Finished);
            info!(%agent, "playback finished");
            self.emit(EngineEvent::Finished { agent });
            return Step::Finished;
        };
        let step = a.cursor;
        a.cursor += 1;
        self.emit(EngineEvent::Moved { agent, step, point });

        let zones = self.geometry.zones();
        let a = &mut self.agents[agent.index()];
        match contained.unwrap_or_else(|| a.zone_states.check(zones, point)) {
            Ok(flags) => {
                for transition in a.zone_states.apply(&flags) {
                    self.emit(match transition {
                        Transition::Entered(zone) => EngineEvent::Entered { agent, zone },
                        Transition::Exited(zone) => EngineEvent::Exited { agent, zone },
                    });
                }
                Step::Moved
            }
            Err(e) => {
                error!(%agent, error = %e, "zone tracking failed, stopping playback");
                a.halt(RunState::Stopped);
                self.emit(EngineEvent::Stopped { agent });
                Step::Faulted
            }
        }
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    /// Fire every timer due at or before `until`, in deadline order, then
    /// move the clock to `until`.  Returns the number of ticks run.
    ///
    /// The clock never moves backwards; an `until` in the past only fires
    /// overdue timers.
    pub fn advance_to(&mut self, until: SimTime) -> usize {
        let mut fired = 0;
        while let Some((at, timer, target)) = self.timers.pop_due(until) {
            self.clock = self.clock.max(at);
            match target {
                TimerTarget::Agent(agent) => {
                    let owner = self.agents.get_mut(agent.index());
                    match owner {
                        Some(a) if a.driver == Some(Driver::Solo(Some(timer))) => {
                            a.driver = Some(Driver::Solo(None));
                        }
                        _ => {
                            debug!(%timer, %agent, "stale timer ignored");
                            continue;
                        }
                    }
                    self.solo_tick(agent);
                }
                TimerTarget::Fleet => {
                    if self.fleet != Some(timer) {
                        debug!(%timer, "stale fleet timer ignored");
                        continue;
                    }
                    self.fleet = None;
                    self.fleet_tick();
                }
            }
            fired += 1;
        }
        self.clock = self.clock.max(until);
        fired
    }

    /// [`advance_to`](Self::advance_to) `ms` milliseconds from now.
    pub fn advance_by(&mut self, ms: u64) -> usize {
        self.advance_to(self.clock.after_ms(ms))
    }

    /// Keep firing timers until none is pending.  Every loop ends because
    /// paths are finite, so this always returns.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(at) = self.timers.next_deadline() {
            fired += self.advance_to(at);
        }
        fired
    }

    /// When the next tick is due, for hosts that sleep in real time.
    pub fn next_deadline(&self) -> Option<SimTime> {
        self.timers.next_deadline()
    }

    /// Number of pending timers.  Zero once every playback has ended.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
