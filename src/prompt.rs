pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this task?";

/// Blocking yes/no question put to the user.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
