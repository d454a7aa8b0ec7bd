mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    contrast, declarations, init, types, ContrastArgs, DeclarationsArgs, InitArgs, TypesArgs,
};
use tracing_subscriber::EnvFilter;

/// Scopetype CLI - TypeScript declarations for live data scopes
#[derive(Parser, Debug)]
#[command(name = "scopetype")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log inference and synthesis details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a scopetype.config.json and an example scope
    Init(InitArgs),

    /// Print the declaration document for a scope
    Declarations(DeclarationsArgs),

    /// Print the inferred definitions for a scope
    Types(TypesArgs),

    /// Pick readable palette text colors for backgrounds
    Contrast(ContrastArgs),
}

/// `--verbose` forces debug output, otherwise `RUST_LOG` or warnings only
fn log_filter<E>(verbose: bool, from_env: Result<EnvFilter, E>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    from_env.unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, EnvFilter::try_from_default_env()))
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Declarations(args) => declarations(args, &cwd),
        Command::Types(args) => types(args, &cwd),
        Command::Contrast(args) => contrast(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
