// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions.

use super::Message;
use crate::config::TOAST_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Drives toast auto-dismiss. Only active while notifications exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TOAST_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
