mod cli;
mod config;

use clap::Parser;
use cli::Args;
use diggity_bom::adapters::outbound::console::StderrProgressReporter;
use diggity_bom::adapters::outbound::filesystem::FileSystemReader;
use diggity_bom::application::dto::{DispatchRequest, SbomRequest};
use diggity_bom::application::use_cases::{DispatchOutputsUseCase, GenerateSbomUseCase};
use diggity_bom::shared::error::ExitCode;
use diggity_bom::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; stdout is reserved for rendered documents.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = config::resolve_config(args.config.as_deref(), Path::new("."))?;
    let options = config::merge(&args, config);

    tracing::debug!(?options, "resolved options");

    let reporter = || {
        if options.quiet {
            StderrProgressReporter::quiet()
        } else {
            StderrProgressReporter::new()
        }
    };

    let generate = GenerateSbomUseCase::new(FileSystemReader::new(), reporter());
    let response = generate.execute(SbomRequest::new(args.input.clone()))?;

    let request = DispatchRequest::from_tokens(&options.output, options.output_file.clone());
    let dispatch = DispatchOutputsUseCase::new(reporter());
    dispatch.execute(&response, &request)?;

    Ok(())
}
