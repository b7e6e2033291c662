use clap::Parser;
use cli::Args;
use loader::transport::DefaultTransport;

mod app;
mod cli;
mod loader;
mod locations;
mod logging;
mod map;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();
    tracing::info!(input = %args.input, "Loading location history.");

    let summary = app::run(&args, DefaultTransport::new()).await?;
    tracing::info!(
        points = summary.points,
        output = %summary.output.display(),
        "Heatmap written."
    );
    Ok(())
}
