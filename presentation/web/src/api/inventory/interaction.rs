use std::sync::Mutex;

use business::domain::inventory::services::{Confirmer, Notifier};

/// Confirmer and notifier for a single HTTP request.
///
/// Without an answer from the page every prompt is declined and recorded, so
/// the response can hand it back for the user to confirm.
pub struct RequestInteraction {
    answer: Option<bool>,
    pending: Mutex<Option<String>>,
    alert: Mutex<Option<String>>,
}

impl RequestInteraction {
    pub fn new(answer: Option<bool>) -> Self {
        Self {
            answer,
            pending: Mutex::new(None),
            alert: Mutex::new(None),
        }
    }

    /// Returns (alert, pending confirmation prompt).
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        let alert = self.alert.into_inner().unwrap_or_else(|e| e.into_inner());
        let pending = self.pending.into_inner().unwrap_or_else(|e| e.into_inner());
        (alert, pending)
    }
}

impl Confirmer for RequestInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        match self.answer {
            Some(answer) => answer,
            None => {
                if let Ok(mut pending) = self.pending.lock() {
                    *pending = Some(prompt.to_string());
                }
                false
            }
        }
    }
}

impl Notifier for RequestInteraction {
    fn alert(&self, message: &str) {
        if let Ok(mut alert) = self.alert.lock() {
            *alert = Some(message.to_string());
        }
    }
}
