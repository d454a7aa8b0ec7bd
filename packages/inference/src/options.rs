use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOT_NAME: &str = "RootObject";

/// Configuration options for scope inference and declaration output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceOptions {
    /// Name of the root definition; every `declare const` indexes into it
    #[serde(default = "default_root_name")]
    pub root_name: String,

    /// Indentation used for fields inside emitted interfaces
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            indent: default_indent(),
        }
    }
}

impl InferenceOptions {
    /// Create options with a custom root definition name
    pub fn with_root_name(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            ..Default::default()
        }
    }
}
