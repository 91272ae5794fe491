// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it says, how it looks, when it goes away.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Visual tone of a toast and its default display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Confirms a save.
    Success,
    /// The configuration or translations could not be used as-is.
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS,
            Severity::Warning => palette::WARNING,
        }
    }

    /// Warnings stay longer so a startup problem is not missed.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

/// What a toast displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Fluent message id, resolved in the active locale when drawn.
    Localized(String),
    /// Text shown as-is whatever the locale.
    Verbatim(String),
}

/// A toast waiting in, or shown by, the [`Manager`](super::Manager).
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    body: Body,
    /// Start of the display time; reset when the toast leaves the queue.
    shown_at: Instant,
    duration: Option<Duration>,
}

impl Notification {
    fn new(severity: Severity, body: Body) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            body,
            shown_at: Instant::now(),
            duration: None,
        }
    }

    /// Success toast carrying literal text, such as a save summary.
    pub fn confirmation(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, Body::Verbatim(text.into()))
    }

    /// Warning toast whose text is the translation of `message_key`.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, Body::Localized(message_key.into()))
    }

    /// Overrides the display time of the severity.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        match &self.body {
            Body::Localized(key) => i18n.tr(key),
            Body::Verbatim(text) => text.clone(),
        }
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        self.duration
            .unwrap_or_else(|| self.severity.default_duration())
    }

    /// Starts the display time over. Called when the toast becomes visible.
    pub(super) fn restart_timer(&mut self) {
        self.shown_at = Instant::now();
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.shown_at.elapsed() >= self.dismiss_after()
    }
}
