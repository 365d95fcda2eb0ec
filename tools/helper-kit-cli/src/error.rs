//! Errors surfaced by the `helper-kit` command.

use helper_kit::FormatError;
use thiserror::Error;

/// Failure running a `helper-kit` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The helper rejected its input.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
}
