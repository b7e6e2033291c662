use crate::loader::errors::{LoadError, TransportError};
use crate::loader::models::ResponseContent;
use crate::loader::transport::Transport;
use std::future;
use std::time::Duration;
use tokio::time::Instant;

pub mod consts;
pub mod errors;
pub mod file;
pub mod http;
pub mod models;
pub mod transport;

pub struct FileLoader<T: Transport> {
    transport: T,
    stall_timeout: Option<Duration>,
}

enum Attempt {
    Settled(Result<ResponseContent, LoadError>),
    Unsettled {
        status: u16,
        cause: Option<TransportError>,
    },
}

impl<T> FileLoader<T>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            stall_timeout: None,
        }
    }

    /// Without a stall timeout, a request that never completes with status 200 leaves `load`
    /// pending forever. With one, `load` gives up with `LoadError::Stalled` once the timeout
    /// has passed since the call, whether or not the transport ever answered.
    pub fn with_stall_timeout(mut self, stall_timeout: Duration) -> Self {
        self.stall_timeout = Some(stall_timeout);
        self
    }

    pub async fn load(&self, url: &str) -> Result<ResponseContent, LoadError> {
        let start_time = Instant::now();
        let attempt = match self.stall_timeout {
            None => self.attempt(url, start_time).await,
            Some(waited) => {
                match tokio::time::timeout_at(start_time + waited, self.attempt(url, start_time))
                    .await
                {
                    Ok(attempt) => attempt,
                    Err(_elapsed) => Attempt::Unsettled {
                        status: 0,
                        cause: None,
                    },
                }
            }
        };
        match attempt {
            Attempt::Settled(result) => result,
            Attempt::Unsettled { status, cause } => {
                self.stall(url, status, cause, start_time).await
            }
        }
    }

    async fn attempt(&self, url: &str, start_time: Instant) -> Attempt {
        let response = match self.transport.get(url).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(task = "load", url, error = %err, "Request failed in transport.");
                return Attempt::Unsettled {
                    status: 0,
                    cause: Some(err),
                };
            }
        };
        if !response.is_complete_and_ok() {
            return Attempt::Unsettled {
                status: response.status,
                cause: None,
            };
        }

        let content = ResponseContent::new(response.body);
        if let Some(body) = content.error_marker() {
            tracing::info!(task = "load", url, "Loaded content carries an error marker.");
            return Attempt::Settled(Err(LoadError::Fetch { body }));
        }
        tracing::info!(
            task = "load",
            url,
            bytes = content.as_str().len(),
            processing_time_ms = start_time.elapsed().as_millis(),
        );
        Attempt::Settled(Ok(content))
    }

    async fn stall(
        &self,
        url: &str,
        status: u16,
        cause: Option<TransportError>,
        start_time: Instant,
    ) -> Result<ResponseContent, LoadError> {
        match self.stall_timeout {
            None => {
                tracing::warn!(task = "load", url, status, "Request will never settle.");
                future::pending().await
            }
            Some(waited) => {
                tracing::warn!(task = "load", url, status, ?waited, "Request stalled.");
                tokio::time::sleep_until(start_time + waited).await;
                Err(LoadError::Stalled {
                    status,
                    waited,
                    cause,
                })
            }
        }
    }
}
