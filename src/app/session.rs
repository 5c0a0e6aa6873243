//! Process-wide policy for errors surfaced from the interactive session.

use crate::domain::AppError;

/// Outcome of classifying a prompt-session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// No error occurred.
    Clean,
    /// User interrupt; the top-level loop must terminate the process.
    Fatal,
    /// Recorded at debug level; the caller decides whether to retry or abort.
    Logged,
}

/// The single choke point for prompt-session errors.
///
/// Validators never terminate the process; they hand their errors here and
/// only the top-level loop acts on a [`Disposition::Fatal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle(err: Option<&AppError>) -> Disposition {
        match err {
            None => Disposition::Clean,
            Some(err) if err.is_interrupt() => Disposition::Fatal,
            Some(err) => {
                tracing::debug!(error = %err, "encountered an error processing prompt");
                Disposition::Logged
            }
        }
    }
}
