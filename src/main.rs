use clap::Parser;
use job_board::utils::{logger, validation::Validate};
use job_board::{CliConfig, ConfigProvider, FileRegion, HttpJobSource, JobBoard, UiEvent};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting job-board");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        anyhow::bail!("invalid configuration: {}", e);
    }

    let output = Path::new(config.output_path());
    let job_list_region = FileRegion::new(output.join("jobs.html"));
    let filter_bar_region = FileRegion::new(output.join("filters.html"));

    let source = HttpJobSource::new(config.data_url());
    let mut board = JobBoard::new(job_list_region, filter_bar_region);
    board.start(&source).await;

    for tag in &config.filters {
        board.dispatch(UiEvent::TagClick(tag.clone()));
    }

    tracing::info!(
        "Rendered {} of {} jobs to {}",
        board.visible().len(),
        board.jobs().len(),
        output.display()
    );
    println!(
        "Rendered {} of {} jobs to {}",
        board.visible().len(),
        board.jobs().len(),
        output.display()
    );

    Ok(())
}
