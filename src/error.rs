use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AutocompleteError {
    /// The dropdown must be able to show at least one row.
    #[error("Invalid window size {0}: the dropdown needs at least one row")]
    InvalidWindowSize(usize),
    /// Io Error
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config: {0}")]
    Config(#[from] ConfigError),
}
