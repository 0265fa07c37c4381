use crate::category::{ErrorCategory, category};

/// The closed set of failure codes reported by the library.
///
/// Discriminants are append-only: each kind keeps its numeric identity
/// forever, since embedders persist and compare the raw values. New kinds go
/// at the end with the next free discriminant. 0 is never assigned; it means
/// "no error" under the generic status-code convention.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Catch-all library error.
    #[default]
    General = 1,

    /// Send attempted while the endpoint's outgoing queue was at capacity.
    SendQueueFull = 2,

    /// Payload failed a well-formedness check, e.g. a text message carrying
    /// malformed UTF-8.
    PayloadViolation = 3,

    /// A secure operation was attempted on an insecure endpoint.
    EndpointNotSecure = 4,

    /// Operation referenced an endpoint that no longer exists. Usually the
    /// endpoint was dropped before a connection it created.
    EndpointUnavailable = 5,

    /// The supplied URI failed validation.
    InvalidUri = 6,

    /// The endpoint has exhausted its outgoing message buffers.
    NoOutgoingBuffers = 7,

    /// The connection state machine forbids this operation right now.
    InvalidState = 8,

    /// A close code could not be parsed from its wire representation.
    BadCloseCode = 9,

    /// The parsed close code falls in a protocol-reserved range.
    ReservedCloseCode = 10,

    /// The parsed close code is outside the valid range entirely.
    InvalidCloseCode = 11,

    /// A byte sequence required to be UTF-8 failed validation.
    InvalidUtf8 = 12,

    /// The connection itself is unusable: never initialized, already
    /// closed, or corrupt.
    BadConnection = 13,

    /// Induced failure for the test harness. Must never surface from
    /// production code paths.
    Test = 14,
}

impl ErrorKind {
    /// Every registered kind, in discriminant order.
    pub const ALL: [ErrorKind; 14] = [
        ErrorKind::General,
        ErrorKind::SendQueueFull,
        ErrorKind::PayloadViolation,
        ErrorKind::EndpointNotSecure,
        ErrorKind::EndpointUnavailable,
        ErrorKind::InvalidUri,
        ErrorKind::NoOutgoingBuffers,
        ErrorKind::InvalidState,
        ErrorKind::BadCloseCode,
        ErrorKind::ReservedCloseCode,
        ErrorKind::InvalidCloseCode,
        ErrorKind::InvalidUtf8,
        ErrorKind::BadConnection,
        ErrorKind::Test,
    ];

    /// Numeric identity of this kind within the category's code space.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Checked inverse of [`code`](Self::code). `None` for 0 and for any
    /// value the registry has never assigned.
    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => ErrorKind::General,
            2 => ErrorKind::SendQueueFull,
            3 => ErrorKind::PayloadViolation,
            4 => ErrorKind::EndpointNotSecure,
            5 => ErrorKind::EndpointUnavailable,
            6 => ErrorKind::InvalidUri,
            7 => ErrorKind::NoOutgoingBuffers,
            8 => ErrorKind::InvalidState,
            9 => ErrorKind::BadCloseCode,
            10 => ErrorKind::ReservedCloseCode,
            11 => ErrorKind::InvalidCloseCode,
            12 => ErrorKind::InvalidUtf8,
            13 => ErrorKind::BadConnection,
            14 => ErrorKind::Test,
            _ => return None,
        })
    }

    /// Stable snake_case identifier, for structured log fields and
    /// diagnostic codes.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::General => "general",
            ErrorKind::SendQueueFull => "send_queue_full",
            ErrorKind::PayloadViolation => "payload_violation",
            ErrorKind::EndpointNotSecure => "endpoint_not_secure",
            ErrorKind::EndpointUnavailable => "endpoint_unavailable",
            ErrorKind::InvalidUri => "invalid_uri",
            ErrorKind::NoOutgoingBuffers => "no_outgoing_buffers",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::BadCloseCode => "bad_close_code",
            ErrorKind::ReservedCloseCode => "reserved_close_code",
            ErrorKind::InvalidCloseCode => "invalid_close_code",
            ErrorKind::InvalidUtf8 => "invalid_utf8",
            ErrorKind::BadConnection => "bad_connection",
            ErrorKind::Test => "test",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(category().message(self.code()))
    }
}
