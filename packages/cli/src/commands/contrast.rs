use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scopetype_editor::theme::contrast_text;

#[derive(Debug, Args)]
pub struct ContrastArgs {
    /// Background colors (#rgb, #rgba, #rrggbb, #rrggbbaa, rgb(), rgba())
    #[arg(required = true)]
    pub colors: Vec<String>,
}

pub fn contrast(args: ContrastArgs) -> Result<()> {
    for color in &args.colors {
        let text = contrast_text(color)?;
        println!("{} {} {}", color.bold(), "→".dimmed(), text);
    }
    Ok(())
}
