//! `EventOutputObserver<W>`: bridges `EngineObserver` to an `EventWriter`.

use gf_core::SimTime;
use gf_sim::{EngineEvent, EngineObserver};

use crate::writer::EventWriter;
use crate::{EventRecord, OutputError, OutputResult};

/// An [`EngineObserver`] that writes every event to any [`EventWriter`]
/// backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Call [`finish`][Self::finish] once playback is
/// over, then check for errors with [`take_error`][Self::take_error].
pub struct EventOutputObserver<W: EventWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Number of events written successfully.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the writer.  Any error is stored for `take_error`.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::error!(error = %e, "event export failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> EngineObserver for EventOutputObserver<W> {
    fn on_event(&mut self, at: SimTime, event: &EngineEvent) {
        let result = self.writer.write_event(&EventRecord::new(at, event));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }
}
