//! Log Sink
//!
//! Destination for heartbeat records. The task owns its sink, so tests can
//! hand in a recorder instead of the process wide defmt logger.

/// Informational log output
///
/// Emitting is infallible from the caller's point of view; a sink that can
/// fail has to swallow the error itself.
pub trait LogSink {
    /// Emits one informational record under `tag`
    fn emit(&mut self, tag: &str, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn emit(&mut self, tag: &str, message: &str) {
        (**self).emit(tag, message)
    }
}
