//! Observer trait through which collaborators receive engine events.

use gf_core::SimTime;

use crate::EngineEvent;

/// Receives every [`EngineEvent`] together with the virtual time it happened
/// at.
///
/// Events arrive synchronously, in emission order, from inside the engine
/// command or tick that produced them.  The default implementation ignores
/// everything, so implementors only override what they care about.
///
/// # Example: transition counter
///
/// ```rust,ignore
/// struct Alerts(usize);
///
/// impl EngineObserver for Alerts {
///     fn on_event(&mut self, _at: SimTime, event: &EngineEvent) {
///         if event.is_transition() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    fn on_event(&mut self, _at: SimTime, _event: &EngineEvent) {}
}

/// An [`EngineObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

impl<O: EngineObserver + ?Sized> EngineObserver for &mut O {
    #[inline]
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        (**self).on_event(at, event);
    }
}

impl<O: EngineObserver + ?Sized> EngineObserver for Box<O> {
    #[inline]
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        (**self).on_event(at, event);
    }
}

/// Fan out to two observers, left first.  Nest pairs for more.
impl<A: EngineObserver, B: EngineObserver> EngineObserver for (A, B) {
    #[inline]
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        self.0.on_event(at, event);
        self.1.on_event(at, event);
    }
}

/// A missing observer ignores every event.
impl<O: EngineObserver> EngineObserver for Option<O> {
    #[inline]
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        if let Some(o) = self {
            o.on_event(at, event);
        }
    }
}
