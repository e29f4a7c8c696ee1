//! extcheck CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use extcheck::cli::{Cli, CommandDispatcher, Commands};
use extcheck::config::{load_config, Overrides, Settings};
use extcheck::ui::{should_use_colors, OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code when the check itself could not run.
const EXIT_UNAVAILABLE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never interleave with the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("extcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("extcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn overrides_from(cli: &Cli) -> Overrides {
    let driver_uri = match &cli.command {
        Some(Commands::Driver(args)) => args.uri.clone(),
        _ => None,
    };
    Overrides {
        php_binary: cli.php.clone(),
        format: cli.format,
        driver_uri,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("extcheck starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::with_colors(output_mode, !cli.no_color && should_use_colors());

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match load_config(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(EXIT_UNAVAILABLE);
        }
    };

    let settings = Settings::resolve(&config, &overrides_from(&cli));
    tracing::debug!("Using PHP binary {}", settings.php_binary.display());

    let dispatcher = CommandDispatcher::new(settings);
    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_UNAVAILABLE)
        }
    }
}
