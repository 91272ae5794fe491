// SPDX-License-Identifier: MPL-2.0
//! Toasts: the save confirmation and startup warnings.
//!
//! A toast appears in the bottom-right corner above the save button and
//! leaves on its own after a few seconds, or earlier through its dismiss
//! button. It never blocks the form.
//!
//! # Usage
//!
//! ```
//! use settings_panel::ui::notifications::{Manager, Notification};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new();
//! manager.push(
//!     Notification::confirmation("Settings saved: Notifications=true")
//!         .auto_dismiss(Duration::from_secs(3)),
//! );
//! assert_eq!(manager.visible_count(), 1);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Body, Notification, NotificationId, Severity};
pub use toast::Toast;
