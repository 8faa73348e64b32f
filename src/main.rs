use std::process::ExitCode;

use clap::Parser;
use news_report::argument_parsing::Args;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let target = match args.target() {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Invalid connection string: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match news_report::run_report(
        &target,
        args.timeout(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
    {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Unable to write report: {e}");
            return ExitCode::FAILURE;
        }
    };

    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
