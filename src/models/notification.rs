use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Toast surface. The admin panel shows one message at a time for five
/// seconds; the calculator stacks them for three.
#[derive(Debug, Clone)]
pub struct Notifier {
    ttl: Duration,
    single: bool,
    entries: Vec<Notification>,
}

impl Notifier {
    pub fn new(ttl: Duration, single: bool) -> Self {
        Self {
            ttl,
            single,
            entries: Vec::new(),
        }
    }

    pub fn admin() -> Self {
        Self::new(Duration::seconds(5), true)
    }

    pub fn crafting() -> Self {
        Self::new(Duration::seconds(3), false)
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Utc::now());
    }

    /// Adds a message, dropping any that have expired by `now`.
    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        if self.single {
            self.entries.clear();
        } else {
            self.entries.retain(|n| !n.is_expired(now));
        }
        self.entries.push(Notification {
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + self.ttl,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn all(&self) -> &[Notification] {
        &self.entries
    }

    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.entries.iter().filter(|n| !n.is_expired(now)).collect()
    }
}
