//! CLI Adapter.

mod generate;
mod history;
mod output;
mod template;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "promptkit")]
#[command(version)]
#[command(
    about = "Splice text into prompt templates, keep a short history, copy or export the result",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available templates (the selected one is marked)
    #[clap(visible_aliases = ["ls", "t"])]
    Templates,
    /// Select the template used by `generate`
    #[clap(visible_alias = "sel")]
    Select {
        /// Template id (prompts interactively when omitted)
        id: Option<String>,
    },
    /// Create a custom template (max 10)
    #[clap(visible_alias = "new")]
    Create(template::CreateArgs),
    /// Delete a custom template
    #[clap(visible_alias = "rm")]
    Delete {
        /// Template id
        id: String,
    },
    /// Generate a prompt from the selected template
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Print the current generated prompt
    Show,
    /// Clear the current input and output
    Clear,
    /// Load a code sample as the current input
    Sample,
    /// List suggested target lengths for --char-limit
    Limits,
    /// Show, restore or clear recent prompts
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: Option<history::HistoryCommands>,
    },
    /// Copy the current generated prompt to the clipboard
    #[clap(visible_alias = "cp")]
    Copy,
    /// Save the current generated prompt as a .txt or .md file
    #[clap(visible_alias = "x")]
    Export(output::ExportArgs),
}

pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Templates => template::run_list(),
        Commands::Select { id } => template::run_select(id),
        Commands::Create(args) => template::run_create(args),
        Commands::Delete { id } => template::run_delete(&id),
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Show => output::run_show(),
        Commands::Clear => output::run_clear(),
        Commands::Sample => output::run_sample(),
        Commands::Limits => output::run_limits(),
        Commands::History { command } => history::run_history(command),
        Commands::Copy => output::run_copy(),
        Commands::Export(args) => output::run_export(args),
    };

    if let Err(e) = result {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
