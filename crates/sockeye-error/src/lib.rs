//! Error taxonomy for the sockeye WebSocket library.
//!
//! Failures are reported through one uniform channel that callers inspect
//! programmatically, by code, instead of parsing strings:
//!
//! - [`ErrorKind`]: the closed, stably numbered registry of failure kinds.
//! - [`ErrorCategory`] / [`category`]: the process-wide translator from a
//!   numeric code to its canonical message and disambiguating name.
//! - [`Error`]: the propagated value pairing a free-text diagnostic with a
//!   registry kind.
//! - [`ErrorCode`]: a generic `(category, code)` pair for embedders funneling
//!   several subsystems through one status-code channel.
//!
//! ```
//! use sockeye_error::{category, Error, ErrorCategory, ErrorKind};
//!
//! let err = Error::new("ws://bad host/", ErrorKind::InvalidUri);
//! assert_eq!(err.message(), "ws://bad host/");
//! assert_eq!(category().message(err.kind().code()), "invalid uri");
//! assert_eq!(err.to_string(), "invalid uri: ws://bad host/");
//! ```
//!
//! Feature flags: `serde` (derives on [`ErrorKind`] and [`Error`]),
//! `tracing` (the [`policy::TracingPolicy`] emitter), `diagnostic`
//! (`miette::Diagnostic` for [`Error`]).

pub mod category;
pub mod code;
pub mod error;
pub mod kind;
pub mod policy;
pub mod result_ext;

// public exports
pub use category::{ErrorCategory, SockeyeCategory, category};
pub use code::{ErrorCode, ErrorCodeEnum};
pub use error::Error;
pub use kind::ErrorKind;
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use policy::{ErrorPolicy, NoopPolicy};
pub use result_ext::{ClassifyExt, ResultExt};

/// Result alias used by all public interfaces of the library.
pub type Result<T> = std::result::Result<T, Error>;
