pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";
pub const CLEAR_ALL_PROMPT: &str =
    "Are you sure you want to clear all products? This action cannot be undone.";

/// Service port for interactive yes/no confirmation before destructive operations.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Service port for blocking user-facing messages (validation alerts).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Confirmer with a fixed answer, for hosts that collect the answer up front.
#[derive(Debug, Clone, Copy)]
pub struct PresetConfirmation(pub bool);

impl Confirmer for PresetConfirmation {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
