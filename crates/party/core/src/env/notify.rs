/// Severity of a user-facing notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

/// Answer to a confirmation request routed to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Accepted,
    /// A normal negative outcome, not an error.
    Declined,
    /// The host will answer later. The caller leaves state untouched and
    /// re-drives the continuation once the user accepts.
    Pending,
}

/// Notification and confirmation channel to the host's presentation layer.
///
/// The core never blocks on the user: a confirmation may resolve
/// immediately or report [`ConfirmOutcome::Pending`] and settle at an
/// arbitrary later point.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);

    fn confirm(&self, message: &str) -> ConfirmOutcome;
}
