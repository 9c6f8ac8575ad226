//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to `UpdaterCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use clawup_cli::error::exit_code_for;
use clawup_cli::{Cli, CliConfig, CliError, Commands, OutputMode, StateCommand, bootstrap, handlers};

/// Default log filter when `RUST_LOG` is unset.
///
/// The heartbeat stays quiet so a scheduler only ever sees the update
/// announcement.
fn default_filter(command: Option<&Commands>, verbose: bool) -> &'static str {
    match (verbose, command) {
        (true, _) => "debug",
        (false, Some(Commands::Heartbeat)) => "off",
        (false, _) => "warn",
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.command.as_ref(), cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.clone() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if command == Commands::Paths {
        return handlers::paths::execute(cli.state_file);
    }

    let output = match command {
        Commands::Heartbeat => OutputMode::Heartbeat,
        _ => OutputMode::Interactive,
    };

    // Bootstrap the CLI context (composition root)
    let ctx = match bootstrap(CliConfig::new(cli.settings_update(), output)) {
        Ok(ctx) => ctx,
        // No workspace means nothing to throttle against; a heartbeat skips quietly.
        Err(CliError::Workspace(reason)) if output == OutputMode::Heartbeat => {
            debug!(%reason, "Skipping heartbeat");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match command {
        Commands::Check => handlers::check::execute(&ctx).await,
        Commands::Heartbeat => handlers::heartbeat::execute(&ctx).await,
        Commands::State(StateCommand::Show) => handlers::state::show(&ctx).await,
        Commands::State(StateCommand::Reset { key }) => {
            handlers::state::reset(&ctx, key.as_deref()).await
        }
        Commands::Paths => Ok(()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before parsing so `env = ...` args see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Check failures were already printed by the console emitter
            if !matches!(e.downcast_ref::<CliError>(), Some(CliError::Check(_))) {
                eprintln!("Error: {e:#}");
            }
            let code = u8::try_from(exit_code_for(&e)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
