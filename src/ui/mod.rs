// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each screen-level component follows the same shape: a `State`, a
//! `Message` it handles, an `Event` it reports to the app, and a `view`
//! taking a `ViewContext`.

pub mod design_tokens;
pub mod feed;
pub mod form;
pub mod interest;
pub mod language_toggle;
pub mod modal;
pub mod notifications;
pub mod share_story;
pub mod story_card;
pub mod styles;
pub mod suggest_space;
pub mod theming;
