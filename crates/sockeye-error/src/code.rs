//! Generic `(category, code)` pairs for embedders that funnel several
//! subsystems through one status-code channel.

use std::fmt;
use std::ptr;

use crate::category::{ErrorCategory, category};
use crate::kind::ErrorKind;

/// A numeric code paired with the category that can interpret it.
///
/// Two codes are equal when they carry the same numeric value *and* the same
/// category instance; numerically overlapping codes from different
/// subsystems never compare equal.
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value: u16,
    category: &'static dyn ErrorCategory,
}

impl ErrorCode {
    /// Build the pair for a registered enumeration value.
    pub fn new<E: ErrorCodeEnum>(e: E) -> Self {
        ErrorCode {
            value: e.value(),
            category: e.category(),
        }
    }

    /// The raw numeric value.
    pub fn value(self) -> u16 {
        self.value
    }

    /// The owning category.
    pub fn category(self) -> &'static dyn ErrorCategory {
        self.category
    }

    /// Canonical message, via the owning category's table.
    pub fn message(self) -> &'static str {
        self.category.message(self.value)
    }

    /// The registered [`ErrorKind`], if this code belongs to the library's
    /// own category. Codes from foreign categories return `None` even when
    /// the numeric value overlaps the registry.
    pub fn kind(self) -> Option<ErrorKind> {
        if ptr::addr_eq(self.category, category()) {
            ErrorKind::from_code(self.value)
        } else {
            None
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && ptr::addr_eq(self.category, other.category)
    }
}

impl Eq for ErrorCode {}

impl PartialEq<ErrorKind> for ErrorCode {
    fn eq(&self, other: &ErrorKind) -> bool {
        *self == ErrorCode::new(*other)
    }
}

impl PartialEq<ErrorCode> for ErrorKind {
    fn eq(&self, other: &ErrorCode) -> bool {
        other == self
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("category", &self.category.name())
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {}",
            self.category.name(),
            self.value,
            self.message()
        )
    }
}

/// Marks a fieldless enumeration as registered within an error category, so
/// generic pairs can be built from its values.
pub trait ErrorCodeEnum: Copy {
    /// Numeric identity of this value.
    fn value(self) -> u16;

    /// The category owning this value's code space.
    fn category(self) -> &'static dyn ErrorCategory;
}

impl ErrorCodeEnum for ErrorKind {
    fn value(self) -> u16 {
        self.code()
    }

    fn category(self) -> &'static dyn ErrorCategory {
        crate::category::category()
    }
}

impl<E: ErrorCodeEnum> From<E> for ErrorCode {
    fn from(e: E) -> Self {
        ErrorCode::new(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_reproduces_the_table_entry() {
        for kind in ErrorKind::ALL {
            let code = ErrorCode::new(kind);
            assert_eq!(code.value(), kind.code());
            assert_eq!(code.kind(), Some(kind));
            assert_eq!(code.message(), category().message(kind.code()));
        }
    }

    #[test]
    fn equality_requires_same_category_and_value() {
        let a = ErrorCode::new(ErrorKind::InvalidUri);
        let b: ErrorCode = ErrorKind::InvalidUri.into();
        let c = ErrorCode::new(ErrorKind::BadConnection);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, ErrorKind::InvalidUri);
        assert_eq!(ErrorKind::InvalidUri, a);
    }

    #[test]
    fn foreign_categories_never_resolve_to_a_kind() {
        struct OtherCategory;
        impl ErrorCategory for OtherCategory {
            fn name(&self) -> &'static str {
                "other"
            }
            fn message(&self, _code: u16) -> &'static str {
                "other error"
            }
        }
        static OTHER: OtherCategory = OtherCategory;

        let foreign = ErrorCode {
            value: ErrorKind::InvalidUri.code(),
            category: &OTHER,
        };
        assert_eq!(foreign.kind(), None);
        assert_ne!(foreign, ErrorCode::new(ErrorKind::InvalidUri));
    }

    #[test]
    fn display_names_the_category() {
        let code = ErrorCode::new(ErrorKind::InvalidUri);
        assert_eq!(code.to_string(), "[sockeye:6] invalid uri");
    }
}
