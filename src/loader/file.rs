use crate::loader::errors::TransportError;
use crate::loader::models::TransportResponse;
use crate::loader::transport::Transport;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use url::Url;

/// Reads plain paths and `file://` URLs, answering with HTTP-like statuses.
#[derive(Clone, Debug, Default)]
pub struct FileTransport {}

#[async_trait]
impl Transport for FileTransport {
    async fn get(&self, locator: &str) -> Result<TransportResponse, TransportError> {
        let path = local_path(locator)?;
        match tokio::fs::read(&path).await {
            // Invalid UTF-8 is replaced, as a browser or `reqwest` would decode it.
            Ok(bytes) => Ok(TransportResponse::done(
                200,
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok(TransportResponse::done(404, String::new()))
            }
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Ok(TransportResponse::done(403, String::new()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn local_path(locator: &str) -> Result<PathBuf, TransportError> {
    match Url::parse(locator) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|()| TransportError::InvalidLocator(locator.to_string())),
        _ => Ok(PathBuf::from(locator)),
    }
}
