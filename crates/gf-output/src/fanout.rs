//! Forward events to a runtime-assembled list of observers.

use gf_core::SimTime;
use gf_sim::{EngineEvent, EngineObserver};

/// Forwards every event to each subscriber, in insertion order.
///
/// For a fixed pair of observers a tuple `(A, B)` is enough; `Fanout` is for
/// hosts that decide at runtime which sinks to attach.
#[derive(Default)]
pub struct Fanout {
    observers: Vec<Box<dyn EngineObserver + Send>>,
}

impl Fanout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber.
    pub fn with(mut self, observer: impl EngineObserver + Send + 'static) -> Self {
        self.push(observer);
        self
    }

    pub fn push(&mut self, observer: impl EngineObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl EngineObserver for Fanout {
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        for observer in &mut self.observers {
            observer.on_event(at, event);
        }
    }
}
