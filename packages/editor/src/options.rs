//! # Editor configuration
//!
//! Fixed option sets applied when an expression editor mounts, plus the
//! per-instance [`EditorConfig`]. Field names serialize in the camelCase shape
//! the browser-side language service expects, so a host can forward them
//! as-is.

use scopetype_inference::InferenceOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptTarget {
    ES5,
    ES2015,
    ES2020,
    ESNext,
    Latest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleResolutionKind {
    Classic,
    NodeJs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleKind {
    None,
    CommonJS,
    ESNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsxEmit {
    None,
    Preserve,
    React,
}

/// Compiler options for the host's TypeScript/JavaScript checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: ScriptTarget,
    pub allow_non_ts_extensions: bool,
    pub module_resolution: ModuleResolutionKind,
    pub module: ModuleKind,
    pub no_emit: bool,
    pub es_module_interop: bool,
    pub jsx: JsxEmit,
    pub react_namespace: String,
    pub allow_js: bool,
    pub type_roots: Vec<String>,
}

impl CompilerOptions {
    /// Options for checking user expressions: latest language level, JS
    /// allowed, nothing emitted
    pub fn for_expressions() -> Self {
        Self {
            target: ScriptTarget::Latest,
            allow_non_ts_extensions: true,
            module_resolution: ModuleResolutionKind::NodeJs,
            module: ModuleKind::CommonJS,
            no_emit: true,
            es_module_interop: true,
            jsx: JsxEmit::React,
            react_namespace: "React".to_string(),
            allow_js: true,
            type_roots: vec!["node_modules/@types".to_string()],
        }
    }
}

/// Diagnostics toggles; both validations stay on for expressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsOptions {
    pub no_semantic_validation: bool,
    pub no_syntax_validation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimapOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilitySupport {
    Auto,
    Off,
    On,
}

/// Options applied to the editor surface itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub minimap: MinimapOptions,
    pub accessibility_support: AccessibilitySupport,
    pub fixed_overflow_widgets: bool,
    pub read_only: bool,
}

impl EditorOptions {
    pub fn for_expressions(read_only: bool) -> Self {
        Self {
            minimap: MinimapOptions { enabled: false },
            accessibility_support: AccessibilitySupport::Off,
            fixed_overflow_widgets: true,
            read_only,
        }
    }
}

/// A key combination bound to an editor command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyChord {
    /// Ctrl on Windows/Linux, Cmd on macOS
    pub ctrl_cmd: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: char,
}

impl KeyChord {
    pub const fn ctrl_cmd(key: char) -> Self {
        Self {
            ctrl_cmd: true,
            shift: false,
            alt: false,
            key,
        }
    }
}

/// Ctrl/Cmd+S commits the expression
pub const COMMIT_CHORD: KeyChord = KeyChord::ctrl_cmd('S');

/// Per-instance editor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Inference/synthesis settings for the scope declarations
    #[serde(default)]
    pub inference: InferenceOptions,

    /// Pin the virtual path declarations are installed under. When absent
    /// every editor instance gets its own path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compiler_options_wire_shape() {
        let value = serde_json::to_value(CompilerOptions::for_expressions()).unwrap();

        assert_eq!(value["target"], json!("Latest"));
        assert_eq!(value["noEmit"], json!(true));
        assert_eq!(value["allowJs"], json!(true));
        assert_eq!(value["moduleResolution"], json!("NodeJs"));
        assert_eq!(value["module"], json!("CommonJS"));
        assert_eq!(value["reactNamespace"], json!("React"));
        assert_eq!(value["typeRoots"], json!(["node_modules/@types"]));
    }

    #[test]
    fn test_diagnostics_enabled_by_default() {
        let options = DiagnosticsOptions::default();
        assert!(!options.no_semantic_validation);
        assert!(!options.no_syntax_validation);
    }

    #[test]
    fn test_editor_options_follow_read_only() {
        let value = serde_json::to_value(EditorOptions::for_expressions(true)).unwrap();

        assert_eq!(value["minimap"], json!({ "enabled": false }));
        assert_eq!(value["accessibilitySupport"], json!("off"));
        assert_eq!(value["fixedOverflowWidgets"], json!(true));
        assert_eq!(value["readOnly"], json!(true));
    }

    #[test]
    fn test_parse_editor_config() {
        let json = r#"{
            "inference": { "rootName": "Globals" },
            "libPath": "file:///globals.d.ts"
        }"#;

        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.inference.root_name, "Globals");
        assert_eq!(config.inference.indent, "  ");
        assert_eq!(config.lib_path.as_deref(), Some("file:///globals.d.ts"));
    }

    #[test]
    fn test_default_editor_config() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert!(config.lib_path.is_none());
    }
}
