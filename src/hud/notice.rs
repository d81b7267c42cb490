//! Short-lived messages shown to the user
//!
//! Refused operations and failed saves end up here instead of aborting
//! anything. Each notice disappears after `NOTICE_LIFETIME_MS`.

use super::error::HudError;
use std::collections::VecDeque;

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME_MS: i64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub expires_at: i64,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: &'static str, message: impl Into<String>, now: i64) {
        self.notices.push_back(Notice {
            title,
            message: message.into(),
            expires_at: now + NOTICE_LIFETIME_MS,
        });
    }

    /// Queues a notice describing `error`.
    pub fn report(&mut self, error: &HudError, now: i64) {
        let title = match error {
            HudError::PersistenceWriteFailed { .. } => "Warning",
            _ => "Notice",
        };
        self.push(title, error.to_string(), now);
    }

    /// Drops notices whose time is up.
    pub fn prune(&mut self, now: i64) {
        self.notices.retain(|notice| notice.expires_at > now);
    }

    /// Live notices, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
