//! # Errors
//!
//! `AppError` covers the three ways a conversion run can fail: reading or writing
//! files, decoding the YAML document, and anything the CLI reports with its own
//! context. Rendering itself never fails.

use derive_more::{Display, From};

/// Failure of a conversion run.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Unwrapped I/O failure, e.g. writing the generated text to stdout.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// The input is not a readable OpenAPI/Swagger document.
    /// Excluded from `From<String>`, which targets `General`.
    #[from(ignore)]
    #[display("Invalid document: {_0}")]
    Parse(String),

    /// A message that already names the file and action involved.
    #[display("{_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// `Result` alias used by parsing and the CLI.
pub type AppResult<T> = Result<T, AppError>;
