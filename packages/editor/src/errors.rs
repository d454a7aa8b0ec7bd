//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Language host rejected extra lib '{path}': {reason}")]
    Host { path: String, reason: String },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),
}
