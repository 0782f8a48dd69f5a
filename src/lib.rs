// SPDX-License-Identifier: MPL-2.0
//! `story_circle` is a neighborhood storytelling app built with the Iced GUI
//! framework.
//!
//! Residents browse community stories, filter them by emotion, share their
//! own, ask to meet storytellers and suggest places to gather, in English,
//! Somali or Spanish.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
