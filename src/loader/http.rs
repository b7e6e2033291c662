use crate::loader::errors::TransportError;
use crate::loader::models::TransportResponse;
use crate::loader::transport::Transport;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, locator: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(locator)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        // The body is handed on as JSON text whatever `Content-Type` the server declared.
        let body = response.text().await?;
        Ok(TransportResponse::done(status, body))
    }
}
