// SPDX-License-Identifier: MPL-2.0
//! Simulated submission backend.
//!
//! Nothing leaves the machine: submissions are logged and, for space
//! suggestions, acknowledged after an artificial delay.

use crate::domain::submission::{is_filled, SpaceSuggestion};
use crate::error::{Error, Result};
use std::time::Duration;

/// Waits `delay`, then accepts the suggestion.
///
/// # Errors
///
/// Returns [`Error::Submission`] when the suggestion text is blank.
pub async fn submit_space_suggestion(
    suggestion: SpaceSuggestion,
    delay: Duration,
) -> Result<SpaceSuggestion> {
    tokio::time::sleep(delay).await;

    if !is_filled(&suggestion.suggestion) {
        return Err(Error::Submission("suggestion is empty".to_string()));
    }

    tracing::info!(?suggestion, "space suggestion submitted");
    Ok(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(text: &str) -> SpaceSuggestion {
        SpaceSuggestion {
            suggestion: text.to_string(),
            email: String::new(),
        }
    }

    #[tokio::test]
    async fn accepts_filled_suggestion() {
        let result = submit_space_suggestion(suggestion("Hillman City library"), Duration::ZERO).await;
        assert_eq!(result, Ok(suggestion("Hillman City library")));
    }

    #[tokio::test]
    async fn rejects_blank_suggestion() {
        let result = submit_space_suggestion(suggestion("   "), Duration::ZERO).await;
        assert!(matches!(result, Err(Error::Submission(_))));
    }

    #[tokio::test]
    async fn waits_for_the_delay() {
        let delay = Duration::from_millis(20);
        let started = std::time::Instant::now();
        let _ = submit_space_suggestion(suggestion("Park"), delay).await;
        assert!(started.elapsed() >= delay);
    }
}
