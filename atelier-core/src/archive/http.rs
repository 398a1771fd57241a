//! HTTP file client backed by reqwest

use async_trait::async_trait;

use super::{ArchiveError, FileClient};

/// FileClient that downloads over HTTPS
#[derive(Debug, Default, Clone)]
pub struct HttpFileClient {
    client: reqwest::Client,
}

impl HttpFileClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileClient for HttpFileClient {
    async fn download(&self, url: &str) -> Result<Vec<u8>, ArchiveError> {
        tracing::debug!(url, "Downloading file");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ArchiveError::Download {
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(ArchiveError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ArchiveError::Download {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }
}
