// SPDX-License-Identifier: MPL-2.0
//! Domain layer - community data and form rules with no UI dependencies.
//!
//! # Modules
//!
//! - [`location`]: Community gathering places and location-specific prompts
//! - [`prompt`]: Story prompts, the word bank and predefined emotions
//! - [`story`]: Sample stories, emotion filtering and feed ordering
//! - [`submission`]: Contact details, residency and the payloads that get logged

pub mod location;
pub mod prompt;
pub mod story;
pub mod submission;
