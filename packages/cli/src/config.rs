use anyhow::Context;
use scopetype_inference::InferenceOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "scopetype.config.json";

/// Scopetype configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root definition name and indentation
    #[serde(flatten)]
    pub inference: InferenceOptions,

    /// Where `declarations` writes when no `--out` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_file: Option<String>,
}

impl Config {
    /// Load config from a directory, falling back to defaults
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load an explicit config file; it must exist
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the output file against `cwd`
    pub fn get_out_file(&self, cwd: &str) -> Option<PathBuf> {
        self.out_file.as_ref().map(|f| PathBuf::from(cwd).join(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "rootName": "Globals",
            "indent": "    ",
            "outFile": "types/scope.d.ts"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.inference.root_name, "Globals");
        assert_eq!(config.inference.indent, "    ");
        assert_eq!(config.out_file.as_deref(), Some("types/scope.d.ts"));
        assert_eq!(
            config.get_out_file("/project"),
            Some(PathBuf::from("/project/types/scope.d.ts"))
        );
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.inference.root_name, "RootObject");
        assert!(config.out_file.is_none());
    }

    #[test]
    fn test_load_missing_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "rootName": "Scope" }"#).unwrap();

        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.inference.root_name, "Scope");
    }

    #[test]
    fn test_load_file_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ nope").unwrap();

        assert!(Config::load_file(&path).is_err());
    }
}
