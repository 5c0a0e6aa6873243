use crate::domain::AppError;

/// Secondary prompts that validators may trigger while a primary prompt is
/// still in flight.
///
/// A user interrupt surfaces as `AppError::Interrupted`, the same
/// distinguished value the primary prompt loop sees.
pub trait PromptPort {
    /// Ask the operator for an alternate output path.
    fn enter_output_path(&self) -> Result<String, AppError>;
}

impl<T: PromptPort + ?Sized> PromptPort for &T {
    fn enter_output_path(&self) -> Result<String, AppError> {
        (**self).enter_output_path()
    }
}
