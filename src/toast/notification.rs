// ABOUTME: Toast data model - a single transient notification with a severity and lifetime
// Toasts are immutable once created; the manager hands out copies of them in snapshots

use std::fmt;
use std::time::{Duration, Instant};

/// Lifetime used when a toast is created without an explicit duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Identifier of a toast, unique within the manager that created it.
///
/// Ids come from a monotonically increasing counter, so an id that has been
/// removed is never handed out again by the same manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the numeric value of this id.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification category. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✗",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    duration: Duration,
    created_at: Instant,
}

impl Toast {
    pub(crate) fn new(id: ToastId, kind: ToastKind, message: String, duration: Duration) -> Self {
        Self {
            id,
            kind,
            message,
            duration,
            created_at: Instant::now(),
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Time left before the scheduled auto-removal, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.created_at.elapsed())
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}
