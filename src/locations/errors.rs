#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Location file is malformed: {0}")]
    MalformedInput(#[from] serde_json::Error),
}
