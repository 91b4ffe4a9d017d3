use async_trait::async_trait;

use crate::error::UploadError;
use crate::form::UploadForm;

/// Sends one upload form to the storage endpoint and returns the response body.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait UploadTransport {
    async fn submit(&self, action: &str, form: UploadForm) -> Result<String, UploadError>;
}

/// `reqwest`-backed transport. No timeout is set; the request runs until the
/// storage backend answers or the connection fails.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl UploadTransport for HttpTransport {
    async fn submit(&self, action: &str, form: UploadForm) -> Result<String, UploadError> {
        tracing::debug!(
            "POST {action}: fields={:?} file={}",
            form.field_names(),
            form.file().file_name
        );
        let response = self
            .client
            .post(action)
            .multipart(form.into_multipart()?)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
