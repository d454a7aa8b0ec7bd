use super::{read_scope, resolve_config};
use anyhow::Result;
use clap::Args;
use scopetype_inference::{CodeGenerator, StructuralTypeInferer, TypeScriptGenerator};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Scope JSON file (`-` for stdin)
    pub input: PathBuf,

    /// Root definition name (overrides config)
    #[arg(long)]
    pub root_name: Option<String>,

    /// Print definitions as JSON instead of TypeScript
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to scopetype.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn types(args: TypesArgs, cwd: &str) -> Result<()> {
    let config = resolve_config(args.config.as_ref(), cwd)?;
    let mut options = config.inference;
    if let Some(root_name) = args.root_name {
        options.root_name = root_name;
    }

    let scope = read_scope(&args.input)?;
    let types = StructuralTypeInferer::new(options.clone()).infer_scope(&scope);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else {
        let gen = TypeScriptGenerator::with_options(&options);
        let interfaces: Vec<String> = types
            .definitions()
            .iter()
            .map(|def| gen.generate_interface(def))
            .collect();
        println!("{}", interfaces.join("\n\n"));
    }

    Ok(())
}
