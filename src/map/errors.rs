#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("`{0}` is not a usable container id.")]
    InvalidContainerId(String),
    #[error("Failed to serialize map data: {0}")]
    Serialization(#[from] serde_json::Error),
}
