//! Events pushed to the engine's observer.

use std::fmt;

use gf_core::{AgentId, Coordinate, ZoneId};

/// Something observable happened inside the engine.
///
/// Geometry events come from authoring commands; the rest form each agent's
/// playback lifecycle:
///
/// ```text
/// Started → (Moved → Entered*/Exited*)+ → Finished | Stopped
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EngineEvent {
    BoundarySet { vertices: usize },
    BoundaryCleared,
    /// Zones dropped together with the boundary they were placed in.
    ZonesCleared { count: usize },
    ZoneAdded { zone: ZoneId, center: Coordinate, radius_m: f64 },
    AgentCreated { agent: AgentId, name: String },
    PathSet { agent: AgentId, len: usize },
    PathCleared { agent: AgentId },
    Started { agent: AgentId },
    /// `step` is the index of `point` in the agent's path.
    Moved { agent: AgentId, step: usize, point: Coordinate },
    Entered { agent: AgentId, zone: ZoneId },
    Exited { agent: AgentId, zone: ZoneId },
    Finished { agent: AgentId },
    Stopped { agent: AgentId },
    /// `stop` was called on an agent that was not running.
    NotRunning { agent: AgentId },
    /// Every agent of a fleet run has reached the end of its path.
    AllFinished,
}

impl EngineEvent {
    /// Short snake_case label, used as the `kind` column in exports.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineEvent::BoundarySet { .. }  => "boundary_set",
            EngineEvent::BoundaryCleared     => "boundary_cleared",
            EngineEvent::ZonesCleared { .. } => "zones_cleared",
            EngineEvent::ZoneAdded { .. }    => "zone_added",
            EngineEvent::AgentCreated { .. } => "agent_created",
            EngineEvent::PathSet { .. }      => "path_set",
            EngineEvent::PathCleared { .. }  => "path_cleared",
            EngineEvent::Started { .. }      => "started",
            EngineEvent::Moved { .. }        => "moved",
            EngineEvent::Entered { .. }      => "entered",
            EngineEvent::Exited { .. }       => "exited",
            EngineEvent::Finished { .. }     => "finished",
            EngineEvent::Stopped { .. }      => "stopped",
            EngineEvent::NotRunning { .. }   => "not_running",
            EngineEvent::AllFinished         => "all_finished",
        }
    }

    /// The agent the event concerns, if any.
    pub fn agent(&self) -> Option<AgentId> {
        match *self {
            EngineEvent::AgentCreated { agent, .. }
            | EngineEvent::PathSet { agent, .. }
            | EngineEvent::PathCleared { agent }
            | EngineEvent::Started { agent }
            | EngineEvent::Moved { agent, .. }
            | EngineEvent::Entered { agent, .. }
            | EngineEvent::Exited { agent, .. }
            | EngineEvent::Finished { agent }
            | EngineEvent::Stopped { agent }
            | EngineEvent::NotRunning { agent } => Some(agent),
            _ => None,
        }
    }

    /// The zone the event concerns, if any.
    pub fn zone(&self) -> Option<ZoneId> {
        match *self {
            EngineEvent::ZoneAdded { zone, .. }
            | EngineEvent::Entered { zone, .. }
            | EngineEvent::Exited { zone, .. } => Some(zone),
            _ => None,
        }
    }

    /// The coordinate carried by the event, if any.
    pub fn point(&self) -> Option<Coordinate> {
        match *self {
            EngineEvent::ZoneAdded { center, .. } => Some(center),
            EngineEvent::Moved { point, .. } => Some(point),
            _ => None,
        }
    }

    /// `true` for `Entered` / `Exited`.
    pub fn is_transition(&self) -> bool {
        matches!(self, EngineEvent::Entered { .. } | EngineEvent::Exited { .. })
    }
}

/// One-line human-readable form, as shown in the demo's log panel.
impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineEvent::BoundarySet { vertices } => write!(f, "Boundary set ({vertices} vertices)."),
            EngineEvent::BoundaryCleared => f.write_str("Boundary cleared."),
            EngineEvent::ZonesCleared { count } => write!(f, "{count} zone(s) cleared."),
            EngineEvent::ZoneAdded { zone, center, radius_m } => {
                write!(f, "{zone} created at {center} with radius {radius_m}m.")
            }
            EngineEvent::AgentCreated { agent, name } => write!(f, "{name} added as {agent}."),
            EngineEvent::PathSet { agent, len } => write!(f, "{agent} path generated with {len} points."),
            EngineEvent::PathCleared { agent } => write!(f, "{agent} path cleared."),
            EngineEvent::Started { agent } => write!(f, "{agent} simulation started."),
            EngineEvent::Moved { agent, step, point } => write!(f, "{agent} step {step} at {point}."),
            EngineEvent::Entered { agent, zone } => write!(f, "{agent} ENTERED {zone}"),
            EngineEvent::Exited { agent, zone } => write!(f, "{agent} EXITED {zone}"),
            EngineEvent::Finished { agent } => write!(f, "{agent} reached the end of its path."),
            EngineEvent::Stopped { agent } => write!(f, "{agent} simulation stopped."),
            EngineEvent::NotRunning { agent } => write!(f, "{agent} simulation is not running."),
            EngineEvent::AllFinished => f.write_str("All vehicles finished."),
        }
    }
}
