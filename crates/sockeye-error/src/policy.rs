//! Policies routing library errors to application sinks.
//!
//! Library code never logs or prints directly; it returns [`crate::Result`]
//! and boundaries emit through an installed [`ErrorPolicy`]. Emission can be
//! anything: tracing logs, a UI event bus, telemetry.

use crate::Error;

/// How an application routes library errors to its own sinks.
pub trait ErrorPolicy: Send + Sync {
    /// Emit the error according to the policy.
    fn emit(&self, error: &Error);
}

/// A policy that discards every error.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn emit(&self, _error: &Error) {
        // Intentionally do nothing
    }
}

/// A policy that emits errors as `tracing` events, carrying the numeric
/// code and kind slug alongside the rendered error.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn emit(&self, error: &Error) {
        let kind = error.kind();
        tracing::error!(code = kind.code(), kind = kind.as_str(), error = %error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn noop_policy_accepts_any_error() {
        let policy = NoopPolicy;
        policy.emit(&Error::new("boom", ErrorKind::Test));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_policy_emits_without_panicking() {
        let _ = tracing_subscriber::fmt::try_init();
        let policy = TracingPolicy;
        policy.emit(&Error::new("queue at capacity", ErrorKind::SendQueueFull));
    }
}
