//! Template command implementation.

use std::fs;
use std::io::{BufRead, ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::{ArgGroup, Args};
use dialoguer::{Error as DialoguerError, Select};

use crate::app::api;
use crate::domain::{AppError, TemplateDraft};

#[derive(Args)]
#[command(group(ArgGroup::new("body").required(true).args(["content", "file"])))]
pub struct CreateArgs {
    /// Template name (3-30 characters)
    #[arg(short, long)]
    name: String,
    /// Short description (at most 100 characters)
    #[arg(short, long, default_value = "")]
    description: String,
    /// Template body; use {{content}} where your input goes
    #[arg(short, long)]
    content: Option<String>,
    /// Read the template body from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn run_list() -> Result<(), AppError> {
    for listing in api::templates()? {
        let marker = if listing.selected { "*" } else { " " };
        let kind = if listing.template.is_custom { " [custom]" } else { "" };
        println!("{} {}{} - {}", marker, listing.template.id, kind, listing.template.name);
        if !listing.template.description.is_empty() {
            println!("    {}", listing.template.description);
        }
    }
    Ok(())
}

pub fn run_select(id: Option<String>) -> Result<(), AppError> {
    let id = match id {
        Some(id) => id,
        None => match prompt_template_id()? {
            Some(id) => id,
            None => return Ok(()),
        },
    };
    let template = api::template_select(&id)?;
    eprintln!("✅ Selected '{}' ({})", template.name, template.id);
    Ok(())
}

pub fn run_create(args: CreateArgs) -> Result<(), AppError> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    let template = api::template_create(TemplateDraft::new(args.name, args.description, content))?;
    eprintln!("✅ Template saved as {} and selected ★", template.id);
    Ok(())
}

pub fn run_delete(id: &str) -> Result<(), AppError> {
    let outcome = api::template_delete(id)?;
    eprintln!("✅ Template '{}' deleted.", outcome.removed.name);
    if let Some(selected) = outcome.reselected {
        eprintln!("  Selection reset to {}", selected);
    }
    Ok(())
}

/// Pick a template id from a menu, or read one line from stdin when not interactive.
fn prompt_template_id() -> Result<Option<String>, AppError> {
    let listings = api::templates()?;

    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        let mut input = String::new();
        std::io::stdin().lock().read_line(&mut input)?;
        let id = input.trim();
        return Ok((!id.is_empty()).then(|| id.to_string()));
    }

    let items: Vec<String> = listings
        .iter()
        .map(|l| format!("{} - {}", l.template.name, l.template.description))
        .collect();
    let default = listings.iter().position(|l| l.selected).unwrap_or(0);

    match Select::new().with_prompt("Select template").items(&items).default(default).interact_opt()
    {
        Ok(selection) => Ok(selection.map(|index| listings[index].template.id.clone())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Template selection failed: {}", err))),
    }
}
