//! The `EventWriter` trait implemented by export backends.

use crate::{EventRecord, OutputResult};

/// Trait implemented by export backends.
///
/// Errors never reach the engine: [`EventOutputObserver`] stores the first
/// one for [`take_error`].
///
/// [`EventOutputObserver`]: crate::EventOutputObserver
/// [`take_error`]: crate::EventOutputObserver::take_error
pub trait EventWriter {
    /// Append one event.
    fn write_event(&mut self, record: &EventRecord) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
