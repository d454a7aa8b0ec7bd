use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scopetype_inference::InferenceOptions;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Root definition name
    #[arg(long, default_value = "RootObject")]
    pub root_name: String,

    /// Output file for generated declarations
    #[arg(short, long, default_value = "scope.d.ts")]
    pub out_file: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing scopetype config...".bright_blue().bold());

    // Create example scope if it doesn't exist
    let example_file = PathBuf::from(cwd).join("scope.json");
    if !example_file.exists() {
        let example_content = r#"{
  "page": { "id": "p1", "title": "Home" },
  "users": [{ "name": "Ada", "admin": true }]
}
"#;
        fs::write(&example_file, example_content)?;
        println!("  {} Created scope.json", "✓".green());
    }

    let config = Config {
        inference: InferenceOptions::with_root_name(args.root_name),
        out_file: Some(args.out_file.clone()),
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Config initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit scope.json");
    println!("  2. Run: scopetype declarations scope.json");
    println!("  3. Check output in {}", args.out_file);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(
            InitArgs {
                root_name: "Globals".to_string(),
                out_file: "scope.d.ts".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.inference.root_name, "Globals");
        assert_eq!(config.out_file.as_deref(), Some("scope.d.ts"));
        assert!(dir.path().join("scope.json").exists());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "rootName": "Mine" }"#).unwrap();

        init(
            InitArgs {
                root_name: "Globals".to_string(),
                out_file: "scope.d.ts".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        assert_eq!(Config::load(&cwd).unwrap().inference.root_name, "Mine");
    }
}
