//! Generate command implementation.

use std::fs;
use std::io::{ErrorKind, IsTerminal, Read};
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input};

use crate::adapters::SystemClipboard;
use crate::app::api::{self, GenerateRequest};
use crate::domain::{AppError, ResolveOptions};
use crate::ports::ClipboardWriter;

#[derive(Args)]
pub struct GenerateArgs {
    /// Text to splice into the template (read from --file or stdin when omitted)
    #[arg(conflicts_with_all = ["file", "reuse"])]
    content: Option<String>,
    /// Read the input text from a file
    #[arg(short, long, conflicts_with = "reuse")]
    file: Option<PathBuf>,
    /// Reuse the current input (after `sample` or `history restore`)
    #[arg(short, long)]
    reuse: bool,
    /// Template id to select before generating
    #[arg(short, long)]
    template: Option<String>,
    /// Ask for 4 numbered variations of the result
    #[arg(short, long)]
    examples: bool,
    /// Ask for a result of approximately N characters
    #[arg(short = 'l', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    char_limit: Option<u32>,
    /// Also copy the result to the clipboard
    #[arg(short, long)]
    copy: bool,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let content = if args.reuse { Some(api::session()?.user_content) } else { args.content };
    let Some(user_content) = read_content(content, args.file)? else {
        return Ok(());
    };

    let request = GenerateRequest {
        template_id: args.template,
        user_content,
        options: ResolveOptions { include_examples: args.examples, char_limit: args.char_limit },
    };

    let outcome = api::generate(request)?;

    println!("{}", outcome.generated);
    eprintln!("✨ Prompt generated from '{}'", outcome.template_name);

    if args.copy {
        let copied = SystemClipboard::open().and_then(|mut c| c.write_text(&outcome.generated));
        match copied {
            Ok(()) => eprintln!("Copied! ✅"),
            Err(err) => eprintln!("⚠️  {}", err),
        }
    }
    Ok(())
}

/// Content from the argument, a file, piped stdin, or an interactive prompt.
fn read_content(
    content: Option<String>,
    file: Option<PathBuf>,
) -> Result<Option<String>, AppError> {
    if let Some(content) = content {
        return Ok(Some(content));
    }
    if let Some(path) = file {
        return Ok(Some(fs::read_to_string(path)?));
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.lock().read_to_string(&mut buffer)?;
        return Ok(Some(buffer));
    }

    match Input::<String>::new().with_prompt("Content").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read content: {}", err))),
    }
}
