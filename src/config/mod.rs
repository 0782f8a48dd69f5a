// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Starting language and theme mode
//! - `[community]` - Meetup threshold, simulated submission delay, default location
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `STORY_CIRCLE_CONFIG_DIR` (or pass `--config-dir`)
//! 3. Falls back to the platform-specific config directory
//!
//! The file is never written by the application: changing the language in
//! the UI lasts for the session only.
//!
//! # Examples
//!
//! ```no_run
//! use story_circle::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("meetups start at {} neighbors", config.meetup_threshold());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Notification key shown when the settings file exists but cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "configLoadError";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Starting UI language as a BCP-47 tag (e.g., "so", "es-MX").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Community behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityConfig {
    /// Interested neighbors needed before a story circle is announced.
    #[serde(
        default = "default_meetup_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub meetup_threshold: Option<u32>,

    /// Simulated latency for suggestion submissions, in milliseconds.
    #[serde(
        default = "default_submission_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub submission_delay_ms: Option<u64>,

    /// Location slug to open with when `--location` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            meetup_threshold: default_meetup_threshold(),
            submission_delay_ms: default_submission_delay_ms(),
            default_location: None,
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub community: CommunityConfig,
}

impl Config {
    /// Effective meetup threshold, clamped to the supported range.
    #[must_use]
    pub fn meetup_threshold(&self) -> u32 {
        self.community
            .meetup_threshold
            .unwrap_or(DEFAULT_MEETUP_THRESHOLD)
            .clamp(MIN_MEETUP_THRESHOLD, MAX_MEETUP_THRESHOLD)
    }

    /// Effective simulated submission delay.
    #[must_use]
    pub fn submission_delay(&self) -> Duration {
        let millis = self
            .community
            .submission_delay_ms
            .unwrap_or(DEFAULT_SUBMISSION_DELAY_MS)
            .min(MAX_SUBMISSION_DELAY_MS);
        Duration::from_millis(millis)
    }
}

fn default_meetup_threshold() -> Option<u32> {
    Some(DEFAULT_MEETUP_THRESHOLD)
}

fn default_submission_delay_ms() -> Option<u64> {
    Some(DEFAULT_SUBMISSION_DELAY_MS)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning_key). A missing file is not
/// an error; an unreadable one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
