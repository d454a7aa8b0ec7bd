use super::{read_scope, resolve_config};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use scopetype_inference::synthesize_scope_with;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct DeclarationsArgs {
    /// Scope JSON file (`-` for stdin)
    pub input: PathBuf,

    /// Root definition name (overrides config)
    #[arg(long)]
    pub root_name: Option<String>,

    /// Write the document to a file instead of stdout (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Always print to stdout, even if the config names an output file
    #[arg(long)]
    pub stdout: bool,

    /// Config file (defaults to scopetype.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn declarations(args: DeclarationsArgs, cwd: &str) -> Result<()> {
    let config = resolve_config(args.config.as_ref(), cwd)?;
    let mut options = config.inference.clone();
    if let Some(root_name) = args.root_name {
        options.root_name = root_name;
    }

    let scope = read_scope(&args.input)?;
    let document = synthesize_scope_with(&scope, &options);
    info!(keys = scope.len(), root = %options.root_name, "Synthesized declarations");

    let out = if args.stdout {
        None
    } else {
        args.out.or_else(|| config.get_out_file(cwd))
    };

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, document.as_str())
                .with_context(|| format!("Cannot write {}", path.display()))?;
            eprintln!(
                "  {} {} bindings → {}",
                "✓".green(),
                document.bindings().len(),
                path.display()
            );
        }
        None => print!("{}", document),
    }

    Ok(())
}
