//! The category translating registry codes into display messages.

use std::sync::OnceLock;

use crate::kind::ErrorKind;

/// A named translator from numeric codes to canonical messages.
///
/// Object-safe so a category can ride along inside an
/// [`ErrorCode`](crate::code::ErrorCode) as `&'static dyn ErrorCategory`,
/// letting codes from unrelated subsystems share one generic code space
/// without colliding.
pub trait ErrorCategory: Send + Sync {
    /// Fixed identifier disambiguating this category's code space.
    fn name(&self) -> &'static str;

    /// Canonical message for `code`.
    ///
    /// Total over the whole numeric domain: unregistered values map to
    /// `"Unknown"`. Never allocates and never panics; callers are usually
    /// already in the middle of handling a failure.
    fn message(&self, code: u16) -> &'static str;
}

/// The category for [`ErrorKind`] codes.
///
/// Not constructible outside this module; the one instance per process is
/// handed out by [`category`].
pub struct SockeyeCategory(());

impl ErrorCategory for SockeyeCategory {
    fn name(&self) -> &'static str {
        "sockeye"
    }

    fn message(&self, code: u16) -> &'static str {
        let Some(kind) = ErrorKind::from_code(code) else {
            return "Unknown";
        };
        match kind {
            ErrorKind::General => "Generic error",
            ErrorKind::SendQueueFull => "send queue full",
            ErrorKind::PayloadViolation => "payload violation",
            ErrorKind::EndpointNotSecure => "endpoint not secure",
            ErrorKind::EndpointUnavailable => "endpoint not available",
            ErrorKind::InvalidUri => "invalid uri",
            ErrorKind::NoOutgoingBuffers => "no outgoing message buffers",
            ErrorKind::InvalidState => "invalid state",
            ErrorKind::BadCloseCode => "Unable to extract close code",
            ErrorKind::ReservedCloseCode => "Extracted close code is in a reserved range",
            ErrorKind::InvalidCloseCode => "Extracted close code is in an invalid range",
            ErrorKind::InvalidUtf8 => "Invalid UTF-8",
            ErrorKind::BadConnection => "Bad Connection",
            ErrorKind::Test => "Test Error",
        }
    }
}

static CATEGORY: OnceLock<SockeyeCategory> = OnceLock::new();

/// The process-wide category instance, created on first use.
///
/// Immutable and stateless once built; racing first accesses from multiple
/// threads still observe a single instance.
pub fn category() -> &'static SockeyeCategory {
    CATEGORY.get_or_init(|| SockeyeCategory(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_constant_and_non_empty() {
        assert_eq!(category().name(), "sockeye");
        assert_eq!(category().name(), category().name());
    }

    #[test]
    fn every_kind_has_a_non_empty_stable_message() {
        for kind in ErrorKind::ALL {
            let first = category().message(kind.code());
            let second = category().message(kind.code());
            assert!(!first.is_empty());
            assert_eq!(first, second);
            assert_ne!(first, "Unknown");
        }
    }

    #[test]
    fn unregistered_codes_map_to_unknown() {
        for code in [0, 15, 100, u16::MAX] {
            assert_eq!(category().message(code), "Unknown");
        }
    }

    #[test]
    fn message_table_is_exact() {
        let expected = [
            (ErrorKind::General, "Generic error"),
            (ErrorKind::SendQueueFull, "send queue full"),
            (ErrorKind::PayloadViolation, "payload violation"),
            (ErrorKind::EndpointNotSecure, "endpoint not secure"),
            (ErrorKind::EndpointUnavailable, "endpoint not available"),
            (ErrorKind::InvalidUri, "invalid uri"),
            (ErrorKind::NoOutgoingBuffers, "no outgoing message buffers"),
            (ErrorKind::InvalidState, "invalid state"),
            (ErrorKind::BadCloseCode, "Unable to extract close code"),
            (
                ErrorKind::ReservedCloseCode,
                "Extracted close code is in a reserved range",
            ),
            (
                ErrorKind::InvalidCloseCode,
                "Extracted close code is in an invalid range",
            ),
            (ErrorKind::InvalidUtf8, "Invalid UTF-8"),
            (ErrorKind::BadConnection, "Bad Connection"),
            (ErrorKind::Test, "Test Error"),
        ];
        for (kind, text) in expected {
            assert_eq!(category().message(kind.code()), text);
        }
    }

    #[test]
    fn concurrent_first_use_yields_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let cat = category();
                    (cat as *const SockeyeCategory as usize, cat.message(6))
                })
            })
            .collect();
        let seen: Vec<(usize, &'static str)> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        let (addr, msg) = seen[0];
        assert_eq!(addr, category() as *const SockeyeCategory as usize);
        for (other_addr, other_msg) in seen {
            assert_eq!(other_addr, addr);
            assert_eq!(other_msg, msg);
        }
    }
}
