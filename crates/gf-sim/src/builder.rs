//! Fluent builder for constructing an [`Engine`].

use gf_core::{Coordinate, EngineConfig};

use crate::{Engine, EngineObserver, NoopObserver, SimResult};

/// Fluent builder for [`Engine<O>`].
///
/// # Optional inputs
///
/// | Method                 | Default                               |
/// |------------------------|---------------------------------------|
/// | `.observer(o)`         | [`NoopObserver`]                      |
/// | `.boundary(ring)`      | No boundary                           |
/// | `.zone(center, r)`     | No zones                              |
/// | `.agent(name, points)` | No agents; empty `points` = no path   |
///
/// Initial geometry and agents are applied through the regular engine
/// commands in the order boundary, zones, agents, so the observer sees the
/// same events a user session would produce and every input is validated
/// the same way.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(EngineConfig::default())
///     .observer(EventLog::default())
///     .boundary(ring)
///     .zone(center, 150.0)
///     .agent("Vehicle1", vec![a, b])
///     .build()?;
/// engine.start_fleet()?;
/// ```
pub struct EngineBuilder<O: EngineObserver = NoopObserver> {
    config:   EngineConfig,
    observer: O,
    boundary: Option<Vec<Coordinate>>,
    zones:    Vec<(Coordinate, f64)>,
    agents:   Vec<(String, Vec<Coordinate>)>,
}

impl EngineBuilder<NoopObserver> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
            boundary: None,
            zones:    Vec::new(),
            agents:   Vec::new(),
        }
    }
}

impl<O: EngineObserver> EngineBuilder<O> {
    /// Install the observer that receives every event, including those from
    /// the initial setup.
    pub fn observer<P: EngineObserver>(self, observer: P) -> EngineBuilder<P> {
        EngineBuilder {
            config:   self.config,
            observer,
            boundary: self.boundary,
            zones:    self.zones,
            agents:   self.agents,
        }
    }

    pub fn boundary(mut self, ring: Vec<Coordinate>) -> Self {
        self.boundary = Some(ring);
        self
    }

    pub fn zone(mut self, center: Coordinate, radius_m: f64) -> Self {
        self.zones.push((center, radius_m));
        self
    }

    /// Register an agent.  Non-empty `waypoints` are interpolated with the
    /// configured default steps per leg.
    pub fn agent(mut self, name: impl Into<String>, waypoints: Vec<Coordinate>) -> Self {
        self.agents.push((name.into(), waypoints));
        self
    }

    /// Validate the configuration, apply the initial setup and return an
    /// idle engine at time zero.
    pub fn build(self) -> SimResult<Engine<O>> {
        let mut engine = Engine::with_observer(self.config, self.observer)?;

        if let Some(ring) = self.boundary {
            engine.set_boundary(ring)?;
        }
        for (center, radius_m) in self.zones {
            engine.add_zone(center, radius_m)?;
        }
        let steps = engine.steps_per_leg();
        for (name, waypoints) in self.agents {
            let id = engine.create_agent(name)?;
            if !waypoints.is_empty() {
                engine.set_agent_path(id, &waypoints, steps)?;
            }
        }

        Ok(engine)
    }
}
