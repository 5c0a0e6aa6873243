use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::PromptPort;

/// Secondary prompts rendered on the terminal with dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompts;

impl PromptPort for TerminalPrompts {
    fn enter_output_path(&self) -> Result<String, AppError> {
        let path: String = Input::new()
            .with_prompt("Provide a path to write GitOps resources")
            .interact_text()?;
        Ok(path)
    }
}
