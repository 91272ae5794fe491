// SPDX-License-Identifier: MPL-2.0
//! Which toasts are on screen, which wait, and when they leave.
//!
//! At most [`MAX_VISIBLE`] toasts show at once, newest on top. Extra toasts
//! wait in arrival order and start their display time only once shown, so
//! every save gets its full confirmation however fast the user clicks.

use super::notification::{Body, Notification, NotificationId, Severity};
use std::collections::VecDeque;

pub const MAX_VISIBLE: usize = 3;

/// Emitted by a toast's dismiss button.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    /// Oldest first.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    pub fn push(&mut self, mut notification: Notification) {
        let label = match notification.body() {
            Body::Localized(key) => key.as_str(),
            Body::Verbatim(text) => text.as_str(),
        };
        match notification.severity() {
            Severity::Warning => tracing::warn!(toast = label, "notification"),
            Severity::Success => tracing::debug!(toast = label, "notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            notification.restart_timer();
            self.visible.push_front(notification);
        } else {
            tracing::debug!(queued = self.queue.len() + 1, "toast slots full");
            self.queue.push_back(notification);
        }
    }

    /// Removes the toast with `id`, visible or queued.
    ///
    /// Returns `false` if no such toast exists.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            true
        } else if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drops visible toasts whose display time is over.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Whether anything is shown or waiting; drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.restart_timer();
            self.visible.push_front(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn texts(manager: &Manager) -> Vec<String> {
        manager
            .visible()
            .map(|n| match n.body() {
                Body::Verbatim(text) | Body::Localized(text) => text.clone(),
            })
            .collect()
    }

    fn fill(manager: &mut Manager) {
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::confirmation(format!("visible-{i}")));
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        fill(&mut manager);
        assert!(manager.queue.is_empty());

        manager.push(Notification::confirmation("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queue.len(), 1);
        assert!(manager.has_notifications());
    }

    #[test]
    fn newest_visible_notification_comes_first() {
        let mut manager = Manager::new();
        manager.push(Notification::confirmation("first"));
        manager.push(Notification::confirmation("second"));

        assert_eq!(texts(&manager), ["second", "first"]);
    }

    #[test]
    fn promoted_toast_is_shown_on_top() {
        let mut manager = Manager::new();
        let oldest = Notification::confirmation("visible-0");
        let oldest_id = oldest.id();
        manager.push(oldest);
        manager.push(Notification::confirmation("visible-1"));
        manager.push(Notification::confirmation("visible-2"));
        manager.push(Notification::confirmation("queued-a"));
        manager.push(Notification::confirmation("queued-b"));

        assert!(manager.dismiss(oldest_id));

        assert_eq!(texts(&manager), ["queued-a", "visible-2", "visible-1"]);
        assert_eq!(manager.queue.len(), 1);
    }

    #[test]
    fn queued_toast_gets_its_own_display_time() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(
                Notification::confirmation(format!("save-{i}"))
                    .auto_dismiss(Duration::from_millis(200)),
            );
        }

        thread::sleep(Duration::from_millis(250));
        manager.tick();
        assert_eq!(texts(&manager), ["save-3"]);

        manager.tick();
        assert_eq!(texts(&manager), ["save-3"]);
    }

    #[test]
    fn dismiss_removes_from_queue() {
        let mut manager = Manager::new();
        fill(&mut manager);
        let queued = Notification::confirmation("queued");
        let queued_id = queued.id();
        manager.push(queued);

        assert!(manager.dismiss(queued_id));
        assert!(manager.queue.is_empty());
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let stranger = Notification::confirmation("elsewhere").id();

        assert!(!manager.dismiss(stranger));
    }

    #[test]
    fn tick_removes_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::confirmation("expired").auto_dismiss(Duration::ZERO));
        manager.push(Notification::confirmation("fresh"));

        manager.tick();

        assert_eq!(texts(&manager), ["fresh"]);
    }

    #[test]
    fn dismiss_message_removes_the_toast() {
        let mut manager = Manager::new();
        let warning = Notification::warning("notification-config-read-error");
        let id = warning.id();
        manager.push(warning);

        manager.handle_message(&Message::Dismiss(id));

        assert!(!manager.has_notifications());
    }
}
