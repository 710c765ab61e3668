//! Tablo CLI - drive the guest photo-selection workflow over a JSON store

use clap::Parser;
use tablo_workflow::cli::commands::{finalize, init, navigate, select, status};
use tablo_workflow::cli::{Cli, Commands};
use tablo_workflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays pure JSON
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> tablo_workflow::Result<bool> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => init::run(cwd, force),
        Some(Commands::Claim { target, ids }) => select::claim(cwd, &target, &ids),
        Some(Commands::Retouch { target, ids }) => select::retouch(cwd, &target, &ids),
        Some(Commands::TabloPhoto { target, id }) => select::tablo_photo(cwd, &target, id),
        Some(Commands::ClearTablo { target }) => select::clear_tablo(cwd, &target),
        Some(Commands::Next { target }) => navigate::next(cwd, &target),
        Some(Commands::Previous { target }) => navigate::previous(cwd, &target),
        Some(Commands::Goto { target, step }) => navigate::goto(cwd, &target, step),
        Some(Commands::Finalize { target, comment }) => {
            finalize::finalize(cwd, &target, comment)
        }
        Some(Commands::RequestModification { target }) => {
            finalize::request_modification(cwd, &target)
        }
        Some(Commands::Status { target }) => status::run(cwd, &target),
        Some(Commands::StepData { target, step }) => status::step_data(cwd, &target, step),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(true)
        }
    }
}
