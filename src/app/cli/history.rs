//! History command implementation.

use chrono::Local;
use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, HistoryEntry};

const PREVIEW_CHARS: usize = 60;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent prompts (1 = newest)
    #[clap(visible_alias = "ls")]
    List,
    /// Load a recent prompt back as the current input and output
    #[clap(visible_alias = "r")]
    Restore {
        /// Position in the list (1 = newest)
        position: usize,
    },
    /// Forget all recent prompts
    Clear,
}

pub fn run_history(command: Option<HistoryCommands>) -> Result<(), AppError> {
    match command.unwrap_or(HistoryCommands::List) {
        HistoryCommands::List => run_list(),
        HistoryCommands::Restore { position } => run_restore(position),
        HistoryCommands::Clear => {
            let removed = api::history_clear()?;
            eprintln!("✅ Cleared {} recent prompt(s)", removed);
            Ok(())
        }
    }
}

fn run_list() -> Result<(), AppError> {
    let entries = api::history()?;
    if entries.is_empty() {
        println!("No recent prompts");
        return Ok(());
    }
    for (index, entry) in entries.iter().enumerate() {
        println!(
            "{}. [{}] {} - {}",
            index + 1,
            recorded_label(entry),
            entry.template_name,
            preview(&entry.user_content)
        );
    }
    Ok(())
}

fn run_restore(position: usize) -> Result<(), AppError> {
    let (entry, outcome) = api::history_restore(position)?;
    if !outcome.template_restored {
        eprintln!("ℹ️  Original template missing, restoring content only.");
    }
    eprintln!("✅ Restored from history: {} ({})", entry.template_name, recorded_label(&entry));
    Ok(())
}

fn recorded_label(entry: &HistoryEntry) -> String {
    entry
        .recorded_at()
        .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}

/// First line of the input, shortened for one-line listings.
fn preview(content: &str) -> String {
    let line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if line.chars().count() <= PREVIEW_CHARS {
        return line.to_string();
    }
    let cut: String = line.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut)
}
