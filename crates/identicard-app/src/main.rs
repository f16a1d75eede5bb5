use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use identicard_app::cli::{Cli, Commands};
use identicard_app::commands::{run_build, run_dial_codes, run_export, run_links, run_validate};
use identicard_app::error::{AppError, AppResult};
use identicard_app::export::DirectoryTarget;
use identicard_core::config::{Settings, load_config};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let initial_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(initial_level));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = match load_config(cli.config.as_deref()).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(config = ?config, "Configuration loaded");

    // -v flags win over the configured level
    if cli.verbose == 0 {
        if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        } else {
            tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
        }
    }

    match run(cli.command, &config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &Settings) -> AppResult<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match command {
        Commands::Validate(args) => run_validate(&args.into_record()?, &mut out)?,
        Commands::Build(args) => run_build(&args.into_record()?, &mut out)?,
        Commands::Links(args) => run_links(&args.into_record()?, &mut out)?,
        Commands::DialCodes => run_dial_codes(&mut out)?,
        Commands::Export(args) => {
            let target = DirectoryTarget::new(
                args.output_dir
                    .unwrap_or_else(|| config.export.output_dir.clone()),
                config.export.default_filename.trim(),
            );
            let record = args.record.into_record()?;
            run_export(&record, args.filename.as_deref(), &target, &mut out)?
        }
    };

    out.flush()?;
    Ok(code)
}

fn report(error: &AppError) {
    tracing::error!("{error}");

    eprintln!("error: {error}");

    if let AppError::ValidationFailed(result) = error {
        for field in result.errors() {
            eprintln!("  {}: {}", field.field, field.message);
        }
    }
}
