pub mod contrast;
pub mod declarations;
pub mod init;
pub mod types;

pub use contrast::{contrast, ContrastArgs};
pub use declarations::{declarations, DeclarationsArgs};
pub use init::{init, InitArgs};
pub use types::{types, TypesArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use scopetype_inference::{parse_scope, Scope};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a scope from a JSON file, or stdin when the path is `-`
pub fn read_scope(input: &Path) -> Result<Scope> {
    let source = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Cannot read scope from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Cannot read scope {}", input.display()))?
    };

    let scope = parse_scope(&source)
        .with_context(|| format!("Invalid scope {}", input.display()))?;
    Ok(scope)
}

/// Load `--config` if given, else the project config in `cwd`
pub fn resolve_config(config: Option<&PathBuf>, cwd: &str) -> Result<Config> {
    match config {
        Some(path) => Config::load_file(path),
        None => Config::load(cwd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_scope_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scope.json");
        std::fs::write(&path, r#"{ "page": { "id": "p1" }, "count": 3 }"#).unwrap();

        let scope = read_scope(&path).unwrap();
        assert_eq!(scope.keys().collect::<Vec<_>>(), vec!["page", "count"]);
    }

    #[test]
    fn test_read_scope_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = read_scope(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("list.json"));
        assert!(read_scope(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        assert!(resolve_config(None, &cwd).is_ok());
        assert!(resolve_config(Some(&dir.path().join("nope.json")), &cwd).is_err());
    }
}
