// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for config.toml).
    /// Takes precedence over `SETTINGS_PANEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
