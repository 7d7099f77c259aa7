//! The `Engine` struct and its authoring commands.
//!
//! Playback (start/stop, fleet, clock advancement) lives in `playback.rs`.

use std::collections::HashMap;

use gf_core::{AgentId, Coordinate, CoreError, EngineConfig, SimTime, TimerId, ZoneId};
use gf_geometry::{Boundary, Zone, ZoneSet};
use gf_path::{interpolate, validate_waypoints};
use tracing::{debug, info, warn};

use crate::agent::Agent;
use crate::timer::TimerQueue;
use crate::{EngineEvent, EngineObserver, NoopObserver, SimError, SimResult};

/// The geofence simulation engine.
///
/// Owns the boundary, zones, agents and the timer queue, and publishes every
/// state change as an [`EngineEvent`] to its observer.  Every command either
/// applies fully or is rejected with a [`SimError`] and leaves the engine
/// unchanged.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder] or [`Engine::new`].
#[derive(Debug)]
pub struct Engine<O: EngineObserver = NoopObserver> {
    /// Validated engine-wide configuration.
    pub config: EngineConfig,

    /// Receives every event.  Public so hosts can read back what they
    /// installed (a log, a renderer) between commands.
    pub observer: O,

    pub(crate) geometry: ZoneSet,
    pub(crate) agents:   Vec<Agent>,
    pub(crate) names:    HashMap<String, AgentId>,
    pub(crate) timers:   TimerQueue,
    pub(crate) clock:    SimTime,
    /// Pending shared timer while a fleet run is in progress.
    pub(crate) fleet:    Option<TimerId>,
    pub(crate) fleet_running: bool,
    /// Agents that joined the current fleet run.
    pub(crate) fleet_members: Vec<AgentId>,
}

impl Engine<NoopObserver> {
    /// Engine without an observer.
    pub fn new(config: EngineConfig) -> SimResult<Self> {
        Engine::with_observer(config, NoopObserver)
    }
}

impl<O: EngineObserver> Engine<O> {
    pub fn with_observer(config: EngineConfig, observer: O) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            geometry: ZoneSet::new(config.max_zones, config.circle_segments),
            config,
            observer,
            agents: Vec::new(),
            names: HashMap::new(),
            timers: TimerQueue::new(),
            clock: SimTime::ZERO,
            fleet: None,
            fleet_running: false,
            fleet_members: Vec::new(),
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.clock
    }

    pub fn boundary(&self) -> Option<&Boundary> {
        self.geometry.boundary()
    }

    pub fn zones(&self) -> &[Zone] {
        self.geometry.zones()
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.geometry.zone(id)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Look an agent up by its unique name.
    pub fn agent_id(&self, name: &str) -> Option<AgentId> {
        self.names.get(name).copied()
    }

    /// `true` while the shared fleet loop is active.
    pub fn fleet_running(&self) -> bool {
        self.fleet_running
    }

    /// Default steps per leg for generated paths.
    pub fn steps_per_leg(&self) -> usize {
        self.config.default_steps_per_leg
    }

    // ── Geometry commands ─────────────────────────────────────────────────

    /// Replace the boundary.  Existing zones are dropped (they were placed
    /// inside the old boundary) and every agent's zone flags shrink to match.
    pub fn set_boundary(&mut self, ring: Vec<Coordinate>) -> SimResult<()> {
        let cleared = self
            .geometry
            .set_boundary(ring)
            .map_err(SimError::from)
            .inspect_err(|e| warn!(error = %e, "boundary rejected"))?;
        if cleared > 0 {
            self.resize_zone_states();
            self.emit(EngineEvent::ZonesCleared { count: cleared });
        }
        let vertices = self.geometry.boundary().map_or(0, |b| b.vertices().len());
        info!(vertices, zones_cleared = cleared, "boundary set");
        self.emit(EngineEvent::BoundarySet { vertices });
        Ok(())
    }

    /// Remove the boundary and every zone.  Returns `false` if there was no
    /// boundary to clear.
    pub fn clear_boundary(&mut self) -> bool {
        let Some(cleared) = self.geometry.clear_boundary() else {
            debug!("no boundary to clear");
            return false;
        };
        if cleared > 0 {
            self.resize_zone_states();
            self.emit(EngineEvent::ZonesCleared { count: cleared });
        }
        info!(zones_cleared = cleared, "boundary cleared");
        self.emit(EngineEvent::BoundaryCleared);
        true
    }

    /// Add a circular zone.  Running agents start tracking it on their next
    /// tick, starting from "outside".
    pub fn add_zone(&mut self, center: Coordinate, radius_m: f64) -> SimResult<ZoneId> {
        let zone = self
            .geometry
            .add_zone(center, radius_m)
            .map_err(SimError::from)
            .inspect_err(|e| warn!(error = %e, "zone rejected"))?;
        let (zone, center, radius_m) = (zone.id, zone.center, zone.radius_m);
        self.resize_zone_states();
        info!(%zone, %center, radius_m, "zone added");
        self.emit(EngineEvent::ZoneAdded { zone, center, radius_m });
        Ok(zone)
    }

    // ── Agent commands ────────────────────────────────────────────────────

    /// Register a new agent.  Names are unique.
    pub fn create_agent(&mut self, name: impl Into<String>) -> SimResult<AgentId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            warn!(%name, "duplicate agent name");
            return Err(SimError::DuplicateAgent(name));
        }
        let id = AgentId::try_from(self.agents.len())
            .map_err(|_| CoreError::Config("agent id space exhausted".into()))?;
        self.agents.push(Agent::new(id, name.clone(), self.geometry.len()));
        self.names.insert(name.clone(), id);
        self.emit(EngineEvent::AgentCreated { agent: id, name });
        Ok(id)
    }

    /// Interpolate `waypoints` into the agent's path, replacing any previous
    /// one.  Returns the number of path points.
    ///
    /// # Errors
    ///
    /// `UnknownAgent`, `AlreadyRunning`, then the path errors
    /// (`InsufficientWaypoints`, `InvalidStepCount`, `BoundaryNotSet`,
    /// `OutOfBounds`).
    pub fn set_agent_path(
        &mut self,
        agent: AgentId,
        waypoints: &[Coordinate],
        steps_per_leg: usize,
    ) -> SimResult<usize> {
        self.editable(agent)?;
        let path = interpolate(waypoints, steps_per_leg)
            .and_then(|path| validate_waypoints(self.geometry.boundary(), waypoints).map(|()| path))
            .map_err(SimError::from)
            .inspect_err(|e| warn!(%agent, error = %e, "path rejected"))?;
        Ok(self.install_path(agent, path))
    }

    /// Drop the agent's path.  The route is kept.
    pub fn clear_agent_path(&mut self, agent: AgentId) -> SimResult<()> {
        self.editable(agent)?;
        let zones = self.geometry.len();
        self.agents[agent.index()].replace_path(Vec::new(), zones);
        self.emit(EngineEvent::PathCleared { agent });
        Ok(())
    }

    /// Set the route's start point.  Allowed while running: the route only
    /// feeds the next generated path.
    pub fn set_agent_start(&mut self, agent: AgentId, point: Coordinate) -> SimResult<()> {
        self.check_route_point(agent, point)?;
        self.agents[agent.index()].route.set_start(point);
        debug!(%agent, %point, "route start set");
        Ok(())
    }

    /// Append a destination to the agent's route.  Returns its index.
    pub fn add_agent_destination(&mut self, agent: AgentId, point: Coordinate) -> SimResult<usize> {
        self.check_route_point(agent, point)?;
        let route = &mut self.agents[agent.index()].route;
        route.push_destination(point);
        debug!(%agent, %point, "destination added");
        Ok(route.destinations.len() - 1)
    }

    /// Reorder the route's destinations; see [`gf_path::Route::reorder`].
    pub fn reorder_agent_destinations(&mut self, agent: AgentId, order: &[usize]) -> SimResult<()> {
        self.known(agent)?;
        self.agents[agent.index()]
            .route
            .reorder(order)
            .map_err(SimError::from)
            .inspect_err(|e| warn!(%agent, error = %e, "reorder rejected"))
    }

    /// Generate the agent's path from its route (start, then destinations in
    /// order).
    pub fn generate_agent_route(&mut self, agent: AgentId, steps_per_leg: usize) -> SimResult<usize> {
        self.known(agent)?;
        let waypoints = self.agents[agent.index()]
            .route
            .waypoints()
            .map_err(SimError::from)
            .inspect_err(|e| warn!(%agent, error = %e, "route incomplete"))?;
        self.set_agent_path(agent, &waypoints, steps_per_leg)
    }

    /// Forget the route's destinations and the generated path.
    pub fn clear_agent_route(&mut self, agent: AgentId) -> SimResult<()> {
        self.editable(agent)?;
        self.agents[agent.index()].route.clear_destinations();
        self.clear_agent_path(agent)
    }

    /// Override the tick interval for one agent's solo playback.  `None`
    /// restores the engine default.  Takes effect from the next scheduled
    /// tick.
    pub fn set_agent_cadence(&mut self, agent: AgentId, cadence_ms: Option<u64>) -> SimResult<()> {
        self.known(agent)?;
        if cadence_ms == Some(0) {
            return Err(CoreError::Config("cadence must be positive".into()).into());
        }
        self.agents[agent.index()].cadence_ms = cadence_ms;
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Publish one event: trace it, then hand it to the observer.
    pub(crate) fn emit(&mut self, event: EngineEvent) {
        debug!(at = %self.clock, kind = event.kind(), "{event}");
        self.observer.on_event(self.clock, &event);
    }

    pub(crate) fn known(&self, agent: AgentId) -> SimResult<&Agent> {
        self.agents.get(agent.index()).ok_or_else(|| {
            warn!(%agent, "unknown agent");
            SimError::UnknownAgent(agent)
        })
    }

    /// The agent exists and is not running.
    fn editable(&self, agent: AgentId) -> SimResult<()> {
        if self.known(agent)?.is_running() {
            warn!(%agent, "path edit rejected while running");
            return Err(SimError::AlreadyRunning(agent));
        }
        Ok(())
    }

    fn check_route_point(&self, agent: AgentId, point: Coordinate) -> SimResult<()> {
        self.known(agent)?;
        validate_waypoints(self.geometry.boundary(), &[point])
            .map_err(SimError::from)
            .inspect_err(|e| warn!(%agent, error = %e, "route point rejected"))
    }

    fn install_path(&mut self, agent: AgentId, path: Vec<Coordinate>) -> usize {
        let len = path.len();
        let zones = self.geometry.len();
        self.agents[agent.index()].replace_path(path, zones);
        self.emit(EngineEvent::PathSet { agent, len });
        len
    }

    /// Bring every agent's zone flags in line with the current zone count.
    /// New zones start as "outside".
    fn resize_zone_states(&mut self) {
        let zones = self.geometry.len();
        for agent in &mut self.agents {
            agent.zone_states.resize(zones);
        }
    }
}
