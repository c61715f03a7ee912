//! devrun CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devrun::cli::{Cli, CommandDispatcher};
use devrun::config::load_settings;
use devrun::ui::{create_ui, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so only confirmations reach the user
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devrun=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devrun=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> devrun::Result<i32> {
    // Determine project root
    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let settings = load_settings(&project_root, cli.config.as_deref(), cli.overrides())?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let dispatcher = CommandDispatcher::new(project_root, settings).with_dry_run(cli.dry_run);
    let result = dispatcher.dispatch(cli.command.as_deref(), ui)?;
    Ok(result.exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("devrun starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(cli.output_mode());

    match run(&cli, ui.as_mut()) {
        // Codes outside 0-255 (e.g. Windows NTSTATUS values) still mean failure.
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
