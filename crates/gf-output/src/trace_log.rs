//! `TracingObserver`: the human-readable event log as `tracing` events.

use gf_core::SimTime;
use gf_sim::{EngineEvent, EngineObserver};
use tracing::{debug, info};

use crate::log::AgentNames;

/// Emits one `tracing` event per engine event, under the `geofence` target.
///
/// Zone transitions and lifecycle changes log at `info`, movement at
/// `debug`, so the default `info` filter shows the same log a user of the
/// map sees ("Vehicle1 ENTERED Zone1").
#[derive(Default, Debug, Clone)]
pub struct TracingObserver {
    names: AgentNames,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EngineObserver for TracingObserver {
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        self.names.observe(event);
        let line = self.names.describe(event);
        match event {
            EngineEvent::Moved { .. } => debug!(target: "geofence", %at, "{line}"),
            _ => info!(target: "geofence", %at, kind = event.kind(), "{line}"),
        }
    }
}
