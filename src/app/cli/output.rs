//! Output command implementation: show, clear, sample, limits, copy, export.

use std::path::PathBuf;

use clap::Args;

use crate::app::api;
use crate::domain::{AppError, CHAR_LIMIT_PRESETS, ExportFormat};

#[derive(Args)]
pub struct ExportArgs {
    /// File type: txt or md (defaults to the configured format)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ExportFormat>,
    /// Target directory (defaults to the configured directory, then the working directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

fn parse_format(value: &str) -> Result<ExportFormat, AppError> {
    value.parse()
}

pub fn run_show() -> Result<(), AppError> {
    println!("{}", api::current_output()?);
    Ok(())
}

pub fn run_clear() -> Result<(), AppError> {
    api::clear()?;
    eprintln!("✅ Cleared current input and output");
    Ok(())
}

pub fn run_sample() -> Result<(), AppError> {
    let session = api::load_sample()?;
    eprintln!("✅ Test data loaded into template '{}'.", session.selected_template_id);
    eprintln!("  Run 'promptkit generate --reuse' to build a prompt from it.");
    Ok(())
}

pub fn run_limits() -> Result<(), AppError> {
    let presets: Vec<String> = CHAR_LIMIT_PRESETS.iter().map(u32::to_string).collect();
    println!("{}", presets.join(" "));
    Ok(())
}

pub fn run_copy() -> Result<(), AppError> {
    let chars = api::copy()?;
    eprintln!("Copied! ✅ ({} characters)", chars);
    Ok(())
}

pub fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let path = api::export(args.format, args.dir)?;
    eprintln!("✅ Exported as {}", path.display());
    Ok(())
}
