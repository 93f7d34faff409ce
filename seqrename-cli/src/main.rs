use anyhow::Result;
use clap::Parser;
use seqrename_core::{Config, RenameError, RenameOptions};
use std::io;
use std::process;
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod rename;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    let result = run(&cli);

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            let exit_code = match e.downcast_ref::<RenameError>() {
                Some(err) if err.is_invalid_input() => {
                    eprintln!("Error: {err}");
                    2
                },
                Some(err) => {
                    eprintln!("An unexpected error occurred: {err}");
                    if err.is_conflict() {
                        1
                    } else {
                        3
                    }
                },
                None => {
                    eprintln!("An unexpected error occurred: {e:#}");
                    3
                },
            };

            process::exit(exit_code);
        },
    }
}

fn init_logging(cli: &Cli) {
    // stdout carries the progress report, so diagnostics go to stderr
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => Config::load_from_path(path),
        None => Ok(Config::load().unwrap_or_else(|e| {
            warn!("ignoring unreadable config: {e:#}");
            Config::default()
        })),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let options = RenameOptions {
        prefix: cli
            .prefix
            .clone()
            .unwrap_or_else(|| config.defaults.prefix.clone()),
        extension: cli
            .extension
            .clone()
            .unwrap_or_else(|| config.defaults.extension.clone()),
    };
    let output = cli.output.map_or(config.defaults.output, Into::into);

    debug!(
        folder = %cli.folder.display(),
        prefix = %options.prefix,
        extension = %options.extension,
        ?output,
        "resolved options"
    );

    rename::handle_rename(
        &cli.folder,
        &options,
        output,
        cli.quiet,
        &mut io::stdout().lock(),
    )
}
