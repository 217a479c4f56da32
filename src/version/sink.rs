//! Log capability used to report unsupported N-API versions

#[cfg(test)]
use mockall::automock;

/// Anything that can receive advisory warnings
///
/// Each warning is one call carrying a fixed message and the version it is about.
#[cfg_attr(test, automock)]
pub trait LogSink {
    fn warn(&self, message: &str, version: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn warn(&self, message: &str, version: &str) {
        (**self).warn(message, version)
    }
}

/// Forwards warnings to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn warn(&self, message: &str, version: &str) {
        tracing::warn!("{} {}", message, version);
    }
}
