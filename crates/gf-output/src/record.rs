//! Flat row type written by export backends.

use gf_core::SimTime;
use gf_sim::EngineEvent;

/// One event flattened into export columns.
///
/// Ids are the raw 0-based indices; `lat`/`lon` carry the moved-to point or
/// the zone center when the event has one.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub time_ms: u64,
    pub kind:    &'static str,
    pub agent:   Option<u32>,
    pub zone:    Option<u32>,
    pub lat:     Option<f64>,
    pub lon:     Option<f64>,
}

impl EventRecord {
    pub fn new(at: SimTime, event: &EngineEvent) -> Self {
        let point = event.point();
        Self {
            time_ms: at.as_millis(),
            kind:    event.kind(),
            agent:   event.agent().map(|a| a.0),
            zone:    event.zone().map(|z| z.0),
            lat:     point.map(|p| p.lat),
            lon:     point.map(|p| p.lon),
        }
    }
}
