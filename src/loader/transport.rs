use crate::loader::errors::TransportError;
use crate::loader::file::FileTransport;
use crate::loader::http::HttpTransport;
use crate::loader::models::TransportResponse;
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single GET and reports the state the request ended in.
    async fn get(&self, locator: &str) -> Result<TransportResponse, TransportError>;
}

/// Sends `http(s)` URLs over the network and reads everything else from disk.
#[derive(Clone, Debug, Default)]
pub struct DefaultTransport {
    http: HttpTransport,
    file: FileTransport,
}

impl DefaultTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for DefaultTransport {
    async fn get(&self, locator: &str) -> Result<TransportResponse, TransportError> {
        match Url::parse(locator) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.http.get(locator).await,
            _ => self.file.get(locator).await,
        }
    }
}
