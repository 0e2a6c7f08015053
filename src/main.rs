use std::path::Path;

use clap::Parser;
use vaultfetch::cli::{self, output, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Resolve config early so every command sees the same settings.
    let settings = match cli::resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Logging is observational only: if it cannot be set up, warn and
    // carry on rather than fail the fetch.
    if cli.log {
        if let Err(e) = vaultfetch::logging::init(Path::new(&settings.log_dir)) {
            output::warning(&format!("diagnostic logging disabled: {e}"));
        }
    }

    let result = match cli.command {
        Commands::Get { ref name } => cli::commands::get::execute(&settings, name),
        Commands::Batch => cli::commands::batch::execute(&settings),
        Commands::Completions { ref shell } => cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
