use anyhow::Result;

/// The interaction shell seen by the orchestrator. Keeping prompts and
/// printing behind this trait lets the decision core run in tests without
/// a console attached.
pub trait UserPrompter: Send + Sync {
    /// Ask for a free-form line of input, returned trimmed.
    fn ask_line(&self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question; only an affirmative answer returns true.
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Show an informational message to the user.
    fn notify(&self, message: &str);
}
