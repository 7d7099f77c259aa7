//! The authoring controller and its click modes.

use gf_core::{AgentId, Coordinate, ZoneId};
use gf_geometry::GeometryError;
use gf_path::validate_waypoints;
use gf_sim::{Engine, EngineObserver, SimError};
use tracing::{debug, info, warn};

use crate::{AuthoringError, AuthoringResult};

/// What the next map click does.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ClickMode {
    /// Clicks are ignored.
    #[default]
    Idle,
    /// Place a zone of this radius at the click.
    PlaceZone { radius_m: f64 },
    /// First click sets A, second sets B.
    SetEndpoints,
    SetAgentStart(AgentId),
    AddDestination(AgentId),
}

/// What a click did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Ignored,
    ZonePlaced(ZoneId),
    PointASet(Coordinate),
    PointBSet(Coordinate),
    StartSet { agent: AgentId, point: Coordinate },
    DestinationAdded { agent: AgentId, index: usize },
}

/// The two clicked endpoints of a single A→B path.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Endpoints {
    pub a: Option<Coordinate>,
    pub b: Option<Coordinate>,
}

impl Endpoints {
    pub fn both(&self) -> Option<[Coordinate; 2]> {
        Some([self.a?, self.b?])
    }
}

/// Step count to use when the user asked for `requested`: anything missing
/// or below 2 falls back to `default`.
pub fn steps_or_default(requested: Option<usize>, default: usize) -> usize {
    requested.filter(|&n| n >= 2).unwrap_or(default)
}

/// Turns map clicks into engine commands.
///
/// The controller holds only UI-side state: the armed mode, the A/B
/// endpoints and the selected agent.  Everything else lives in the engine,
/// which is passed to every call.
#[derive(Debug, Default)]
pub struct Authoring {
    mode:      ClickMode,
    endpoints: Endpoints,
    selected:  Option<AgentId>,
}

impl Authoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ClickMode {
        self.mode
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    pub fn selected(&self) -> Option<AgentId> {
        self.selected
    }

    /// Disarm without doing anything.
    pub fn cancel(&mut self) {
        self.mode = ClickMode::Idle;
    }

    // ── Arming ────────────────────────────────────────────────────────────

    /// Arm zone placement.  The checks that do not depend on the click
    /// position run now, so a doomed mode is never armed.
    pub fn begin_zone<O: EngineObserver>(
        &mut self,
        engine: &Engine<O>,
        radius_m: f64,
    ) -> AuthoringResult<()> {
        let rejected = if engine.boundary().is_none() {
            Some(GeometryError::BoundaryNotSet)
        } else if engine.zones().len() >= engine.config.max_zones {
            Some(GeometryError::ZoneLimitReached { max: engine.config.max_zones })
        } else if !radius_m.is_finite() || radius_m <= 0.0 {
            Some(GeometryError::InvalidRadius(radius_m))
        } else {
            None
        };
        if let Some(e) = rejected {
            warn!(error = %e, "zone placement not armed");
            return Err(SimError::from(e).into());
        }
        self.arm(ClickMode::PlaceZone { radius_m });
        Ok(())
    }

    /// Arm A/B selection.  Previously clicked endpoints are forgotten.
    pub fn begin_endpoints<O: EngineObserver>(&mut self, engine: &Engine<O>) -> AuthoringResult<()> {
        require_boundary(engine)?;
        self.endpoints = Endpoints::default();
        self.arm(ClickMode::SetEndpoints);
        Ok(())
    }

    pub fn begin_agent_start<O: EngineObserver>(&mut self, engine: &Engine<O>) -> AuthoringResult<()> {
        let agent = self.selected.ok_or(AuthoringError::NoAgentSelected)?;
        require_boundary(engine)?;
        self.arm(ClickMode::SetAgentStart(agent));
        Ok(())
    }

    pub fn begin_destination<O: EngineObserver>(&mut self, engine: &Engine<O>) -> AuthoringResult<()> {
        let agent = self.selected.ok_or(AuthoringError::NoAgentSelected)?;
        require_boundary(engine)?;
        self.arm(ClickMode::AddDestination(agent));
        Ok(())
    }

    fn arm(&mut self, mode: ClickMode) {
        debug!(?mode, "click mode armed");
        self.mode = mode;
    }

    // ── Clicks ────────────────────────────────────────────────────────────

    /// Interpret one map click.
    ///
    /// On success the mode returns to `Idle`, except after the first of the
    /// two endpoint clicks.  On error the mode stays armed.
    pub fn click<O: EngineObserver>(
        &mut self,
        engine: &mut Engine<O>,
        point: Coordinate,
    ) -> AuthoringResult<ClickOutcome> {
        let outcome = match self.mode {
            ClickMode::Idle => return Ok(ClickOutcome::Ignored),
            ClickMode::PlaceZone { radius_m } => {
                ClickOutcome::ZonePlaced(engine.add_zone(point, radius_m)?)
            }
            ClickMode::SetEndpoints => {
                validate_waypoints(engine.boundary(), &[point]).map_err(SimError::from)?;
                if self.endpoints.a.is_none() {
                    self.endpoints.a = Some(point);
                    info!(%point, "point A set");
                    // Stay armed for B.
                    return Ok(ClickOutcome::PointASet(point));
                }
                self.endpoints.b = Some(point);
                info!(%point, "point B set");
                ClickOutcome::PointBSet(point)
            }
            ClickMode::SetAgentStart(agent) => {
                engine.set_agent_start(agent, point)?;
                ClickOutcome::StartSet { agent, point }
            }
            ClickMode::AddDestination(agent) => {
                let index = engine.add_agent_destination(agent, point)?;
                ClickOutcome::DestinationAdded { agent, index }
            }
        };
        self.mode = ClickMode::Idle;
        Ok(outcome)
    }

    // ── Agents and paths ──────────────────────────────────────────────────

    /// Create the next `VehicleN` agent and select it.
    pub fn add_vehicle<O: EngineObserver>(&mut self, engine: &mut Engine<O>) -> AuthoringResult<AgentId> {
        let mut n = engine.agents().len() + 1;
        while engine.agent_id(&format!("Vehicle{n}")).is_some() {
            n += 1;
        }
        let agent = engine.create_agent(format!("Vehicle{n}"))?;
        self.selected = Some(agent);
        Ok(agent)
    }

    /// Select an existing agent for start/destination clicks.
    pub fn select<O: EngineObserver>(&mut self, engine: &Engine<O>, agent: AgentId) -> AuthoringResult<()> {
        if engine.agent(agent).is_none() {
            return Err(SimError::UnknownAgent(agent).into());
        }
        self.selected = Some(agent);
        Ok(())
    }

    /// Interpolate the A→B path into `agent`'s path.
    pub fn generate_path<O: EngineObserver>(
        &mut self,
        engine: &mut Engine<O>,
        agent: AgentId,
        steps: Option<usize>,
    ) -> AuthoringResult<usize> {
        let waypoints = self.endpoints.both().ok_or(AuthoringError::EndpointsNotSet)?;
        let steps = steps_or_default(steps, engine.steps_per_leg());
        Ok(engine.set_agent_path(agent, &waypoints, steps)?)
    }

    /// Generate the selected agent's multi-leg route.
    pub fn generate_route<O: EngineObserver>(
        &mut self,
        engine: &mut Engine<O>,
        steps: Option<usize>,
    ) -> AuthoringResult<usize> {
        let agent = self.selected.ok_or(AuthoringError::NoAgentSelected)?;
        let steps = steps_or_default(steps, engine.steps_per_leg());
        Ok(engine.generate_agent_route(agent, steps)?)
    }
}

fn require_boundary<O: EngineObserver>(engine: &Engine<O>) -> AuthoringResult<()> {
    if engine.boundary().is_none() {
        warn!("click mode needs a boundary");
        return Err(SimError::from(GeometryError::BoundaryNotSet).into());
    }
    Ok(())
}
