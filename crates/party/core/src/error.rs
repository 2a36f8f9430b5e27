//! Common error infrastructure for party-core.
//!
//! Domain-specific errors (e.g. [`ProteinError`](crate::state::ProteinError),
//! [`HeldItemError`](crate::state::HeldItemError)) are defined next to the
//! operations they reject; this module holds the shared classification.
//!
//! Nothing in this core is fatal to the host: every rejection degrades to
//! "no state change plus a notice", and malformed external data is corrected
//! silently with defaults.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed later without changed input.
    ///
    /// Examples: the ledger ran out of an item
    Recoverable,

    /// Validation error - invalid request, should not retry without changes.
    ///
    /// Examples: item not usable by the species, holder cap reached
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all party-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
