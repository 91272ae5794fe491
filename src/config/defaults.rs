// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Defaults of the form values themselves live with their domain types
//! (see [`crate::domain::settings`]); this module covers the launcher
//! configuration only.
//!
//! # Categories
//!
//! - **Notifications**: Toast auto-dismiss duration bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for the "settings saved" toast (in seconds).
pub const DEFAULT_NOTIFICATION_DURATION_SECS: u32 = 3;

/// Minimum auto-dismiss delay (in seconds).
pub const MIN_NOTIFICATION_DURATION_SECS: u32 = 1;

/// Maximum auto-dismiss delay (in seconds).
pub const MAX_NOTIFICATION_DURATION_SECS: u32 = 30;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Notification duration validation
    assert!(MIN_NOTIFICATION_DURATION_SECS > 0);
    assert!(MAX_NOTIFICATION_DURATION_SECS >= MIN_NOTIFICATION_DURATION_SECS);
    assert!(DEFAULT_NOTIFICATION_DURATION_SECS >= MIN_NOTIFICATION_DURATION_SECS);
    assert!(DEFAULT_NOTIFICATION_DURATION_SECS <= MAX_NOTIFICATION_DURATION_SECS);
};
