use thiserror::Error;

/// Errors raised at the text boundary of the synthesizer.
///
/// Inference over an already-parsed value never fails; only turning
/// scope text into a value can.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Scope is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Scope must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

pub type InferenceResult<T> = Result<T, InferenceError>;
