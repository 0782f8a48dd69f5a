// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Community**: meetup threshold and simulated submission latency
//! - **Notifications**: toast queue limits

// ==========================================================================
// Community Defaults
// ==========================================================================

/// Number of interested neighbors after which a story circle is announced.
pub const DEFAULT_MEETUP_THRESHOLD: u32 = 3;

/// Smallest accepted meetup threshold.
pub const MIN_MEETUP_THRESHOLD: u32 = 1;

/// Largest accepted meetup threshold.
pub const MAX_MEETUP_THRESHOLD: u32 = 50;

/// Simulated network latency for suggestion submissions (milliseconds).
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1000;

/// Upper bound on the simulated latency (milliseconds).
pub const MAX_SUBMISSION_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Interval at which toast timers are checked (milliseconds).
pub const TOAST_TICK_MS: u64 = 250;
