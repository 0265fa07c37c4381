//! Extension traits for `Result` to reduce boilerplate at boundaries.

use std::fmt::Display;

use crate::policy::ErrorPolicy;
use crate::{Error, ErrorKind, Result};

/// Policy-driven emission without contaminating control flow.
///
/// At subsystem boundaries, call [`emit`](ResultExt::emit) to report an
/// error through the application's policy while preserving the original
/// result for further handling.
pub trait ResultExt<T> {
    /// Emit the error using the provided policy and return the result
    /// unchanged.
    fn emit(self, policy: &impl ErrorPolicy) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn emit(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }
}

/// Fold foreign errors into the taxonomy at a boundary.
pub trait ClassifyExt<T> {
    /// Replace the error with a library [`Error`] of `kind`, keeping the
    /// original error's rendering as the diagnostic text.
    fn classify(self, kind: ErrorKind) -> Result<T>;
}

impl<T, E: Display> ClassifyExt<T> for std::result::Result<T, E> {
    fn classify(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|e| Error::new(e.to_string(), kind))
    }
}
