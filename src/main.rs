use anyhow::Result;
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use imgfix::application::dto::ProcessOptions;
use imgfix::presentation::cli::{Cli, ConsoleReporter};
use imgfix::{FormatDetector, ProcessDirectoryUseCase};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout only carries the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let reporter = ConsoleReporter::new(cli.quiet, cli.verbose);
    reporter.start(&cli.directory);

    let use_case = ProcessDirectoryUseCase::new(
        FormatDetector::with_default_signatures(),
        ProcessOptions::default().with_batch_size(cli.batch_size),
    );

    match use_case
        .execute(&cli.directory, Some(reporter.event_callback()))
        .await
    {
        Ok(report) => reporter.finish(&report),
        Err(e) => reporter.directory_failed(&e),
    }

    Ok(())
}
