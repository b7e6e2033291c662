use crate::cli::Args;
use crate::loader::errors::LoadError;
use crate::loader::transport::Transport;
use crate::loader::FileLoader;
use crate::locations;
use crate::locations::errors::ParseError;
use crate::map::errors::RenderError;
use crate::map::leaflet::LeafletBackend;
use crate::map::MapRenderer;
use std::path::PathBuf;
use std::time::Instant;
#[cfg(test)]
pub mod tests;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq)]
pub struct RunSummary {
    pub points: usize,
    pub output: PathBuf,
}

/// Loads the location file, converts it and writes the heatmap page.
pub async fn run<T: Transport>(args: &Args, transport: T) -> Result<RunSummary, AppError> {
    let mut loader = FileLoader::new(transport);
    if let Some(stall_timeout) = args.stall_timeout() {
        loader = loader.with_stall_timeout(stall_timeout);
    }
    let content = loader.load(&args.input).await?;

    let start_time = Instant::now();
    let coordinates = locations::parse_text(content.as_str())?;
    tracing::info!(
        task = "parse",
        points = coordinates.len(),
        processing_time_ms = start_time.elapsed().as_millis(),
    );

    let renderer = MapRenderer::new(LeafletBackend::new());
    let html = renderer
        .draw_heatmap(&args.map_view(), &coordinates)?
        .to_html()?;
    tokio::fs::write(&args.output, html)
        .await
        .map_err(|source| AppError::Write {
            path: args.output.clone(),
            source,
        })?;
    tracing::info!(task = "render", output = %args.output.display());

    Ok(RunSummary {
        points: coordinates.len(),
        output: args.output.clone(),
    })
}
