pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tripdesk",
    about = "Tripdesk action server operator CLI",
    long_about = "Inspect configuration, check readiness, and run form validators offline.",
    after_help = "Examples:\n  tripdesk doctor --json\n  tripdesk actions\n  \
                  tripdesk validate validate_find_hotels_form --slots '{\"amenity\":\"spa\"}'"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config and form validator registration")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List enabled validation actions with their form slots")]
    Actions,
    #[command(about = "Run one form validator against a slot map and print the webhook response")]
    Validate {
        #[arg(help = "Action name, e.g. validate_find_hotels_form")]
        action: String,
        #[arg(long, conflicts_with = "file", help = "Slot map as an inline JSON object")]
        slots: Option<String>,
        #[arg(long, help = "Path to a JSON file holding the slot map")]
        file: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Actions => commands::actions::run(),
        Command::Validate { action, slots, file } => {
            let input = match (slots, file) {
                (Some(inline), _) => commands::validate::SlotInput::Inline(inline),
                (None, Some(path)) => commands::validate::SlotInput::File(path),
                (None, None) => commands::validate::SlotInput::Empty,
            };
            commands::validate::run(&action, input)
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
