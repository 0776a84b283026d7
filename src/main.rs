//! spm-helper - Swift Package Manager dependency helper
//!
//! Searches GitHub for Swift packages and prints `.package(url: ..., ...),`
//! lines ready to paste into a `Package.swift` manifest.

use clap::Parser;
use spm_helper::cli::{CliArgs, Command};
use spm_helper::config::Config;
use spm_helper::error::{AppError, GenerateError};
use spm_helper::github::GithubClient;
use spm_helper::output::{create_formatter, OutputConfig};
use spm_helper::workflow::{self, Helper};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code reported when a revision is not a valid commit hash
const EXIT_INVALID_HASH: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_tracing(&args);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries results
fn init_tracing(args: &CliArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = resolve_config(&args)?;

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, args.quiet));
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Generate {
            ref url,
            ref constraint,
        } => match workflow::generate(url, constraint.kind, &constraint.fields()) {
            Ok(generated) => formatter.format_entry(&generated, &mut stdout)?,
            Err(e) => return Ok(report_generate_error(e)),
        },
        Command::Search { ref query, limit } => {
            let mut helper = build_helper(&config, &args)?;
            let repositories = helper.search(&query.join(" "), limit).await?;
            formatter.format_repositories(&repositories, &mut stdout)?;
        }
        Command::Tags { ref repository } => {
            let mut helper = build_helper(&config, &args)?;
            let tags = helper.tags(repository).await?;
            formatter.format_tags(repository, &tags, &mut stdout)?;
        }
        Command::Add {
            ref repository,
            ref constraint,
        } => {
            let mut helper = build_helper(&config, &args)?;
            match helper
                .add(repository, constraint.kind, &constraint.fields())
                .await
            {
                Ok(generated) => formatter.format_entry(&generated, &mut stdout)?,
                Err(AppError::Generate(e)) => return Ok(report_generate_error(e)),
                Err(e) => return Err(e.into()),
            }
        }
    }

    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Defaults, then the config file, then command line overrides
fn resolve_config(args: &CliArgs) -> Result<Config, AppError> {
    let config = Config::load(args.config.as_deref())?
        .with_overrides(args.api_url.clone(), args.language.clone());
    config.validate()?;
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}

fn build_helper(config: &Config, args: &CliArgs) -> anyhow::Result<Helper> {
    let client = GithubClient::from_config(config)?;
    Ok(Helper::new(Box::new(client), args.show_progress()))
}

fn report_generate_error(error: GenerateError) -> ExitCode {
    eprintln!("{}", error);
    ExitCode::from(EXIT_INVALID_HASH)
}
