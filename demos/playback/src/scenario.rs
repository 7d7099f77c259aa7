//! Scenario files: boundary, zones and agents as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use gf_authoring::steps_or_default;
use gf_core::{Coordinate, EngineConfig};
use gf_sim::{Engine, EngineBuilder, EngineObserver};

/// The scenario shipped with the binary, around Ho Chi Minh City.
pub const EMBEDDED: &str = include_str!("../scenario.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneSpec {
    pub center:   Coordinate,
    pub radius_m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    /// Corner points of the path.  Empty means the agent is created idle.
    #[serde(default)]
    pub waypoints: Vec<Coordinate>,
    #[serde(default)]
    pub steps_per_leg: Option<usize>,
    #[serde(default)]
    pub cadence_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config:   EngineConfig,
    #[serde(default)]
    pub boundary: Vec<Coordinate>,
    #[serde(default)]
    pub zones:    Vec<ZoneSpec>,
    #[serde(default)]
    pub agents:   Vec<AgentSpec>,
    /// Drive every agent from one shared timer.
    #[serde(default)]
    pub fleet:    bool,
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing scenario JSON")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Build an engine with the scenario's world and agents in place.
    /// Nothing is started yet.
    pub fn build<O: EngineObserver>(&self, observer: O) -> Result<Engine<O>> {
        let mut builder = EngineBuilder::new(self.config.clone()).observer(observer);
        if !self.boundary.is_empty() {
            builder = builder.boundary(self.boundary.clone());
        }
        for zone in &self.zones {
            builder = builder.zone(zone.center, zone.radius_m);
        }
        let mut engine = builder.build().context("building the engine")?;

        for spec in &self.agents {
            let agent = engine.create_agent(spec.name.as_str())?;
            if !spec.waypoints.is_empty() {
                let steps = steps_or_default(spec.steps_per_leg, engine.steps_per_leg());
                engine
                    .set_agent_path(agent, &spec.waypoints, steps)
                    .with_context(|| format!("path for {}", spec.name))?;
            }
            if spec.cadence_ms.is_some() {
                engine
                    .set_agent_cadence(agent, spec.cadence_ms)
                    .with_context(|| format!("cadence for {}", spec.name))?;
            }
        }
        Ok(engine)
    }

    /// Start the fleet, or every agent that has a path.
    pub fn start<O: EngineObserver>(&self, engine: &mut Engine<O>) -> Result<()> {
        if self.fleet {
            engine.start_fleet().context("starting the fleet")?;
            return Ok(());
        }
        let ready: Vec<_> = engine
            .agents()
            .iter()
            .filter(|a| a.path().len() >= 2)
            .map(|a| a.id)
            .collect();
        for agent in ready {
            engine.start(agent)?;
        }
        Ok(())
    }
}
