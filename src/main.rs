// ABOUTME: Entry point for the docker-check-tags CLI application.
// ABOUTME: Parses arguments, loads the compose file and runs the checks.

mod cli;

use clap::Parser;
use cli::Cli;
use docker_check_tags::check::Checker;
use docker_check_tags::commands::{check_image, check_services, columns_for};
use docker_check_tags::compose::ComposeFile;
use docker_check_tags::diagnostics::Diagnostics;
use docker_check_tags::error::Result;
use docker_check_tags::output::Output;
use docker_check_tags::registry::HubClient;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output);

    if let Err(e) = run(&cli, output).await {
        Output::new(cli.output).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, output: Output) -> Result<()> {
    let checker = Checker::new(HubClient::new(cli.fetch_options()), cli.filters());

    if let Some(ref image) = cli.image {
        check_image(&checker, image, &output).await?;
        return Ok(());
    }

    let Some(ref path) = cli.compose_file else {
        return Ok(());
    };

    let compose = ComposeFile::load(path)?;
    let services = compose.services();
    tracing::debug!(path = %path.display(), services = services.len(), "loaded compose file");

    let output = output.with_columns(columns_for(&services));
    let mut diagnostics = Diagnostics::default();
    check_services(&checker, &services, &output, &mut diagnostics).await?;

    if diagnostics.has_warnings() {
        tracing::debug!(
            skipped = diagnostics.warnings().len(),
            "some services could not be checked"
        );
    }

    Ok(())
}
