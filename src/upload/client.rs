use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::tasks::Task;

use super::types::{ErrorBody, FileDescriptor, UploadResponse};

pub const UPLOAD_ENDPOINT: &str = "/api/upload";

#[derive(Debug, Error)]
pub enum UploadError {
    /// Message from the backend's error body, or the status line when the
    /// body had none.
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("Failed to read file {name}: {source}")]
    FileRead {
        name: String,
        source: std::io::Error,
    },
}

#[derive(Clone)]
pub struct UploadClient {
    base_url: String,
    client: reqwest::Client,
}

impl UploadClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// One multipart request carrying every selected file under the `file`
    /// field. Returns the raw task records from the response body; a missing
    /// `tasks` field means an empty batch, not an error.
    pub async fn upload(&self, files: &[FileDescriptor]) -> Result<Vec<Task>, UploadError> {
        let mut form = Form::new();
        for file in files {
            let bytes = std::fs::read(&file.path).map_err(|source| UploadError::FileRead {
                name: file.name.clone(),
                source,
            })?;
            form = form.part("file", Part::bytes(bytes).file_name(file.name.clone()));
        }

        let url = format!("{}{}", self.base_url, UPLOAD_ENDPOINT);
        tracing::debug!(%url, count = files.len(), "posting upload");
        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| status_line(status));
            return Err(UploadError::Server(message));
        }

        let body: UploadResponse = response.json().await?;
        Ok(body.tasks)
    }
}

fn status_line(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Server error: {}", status.as_u16()))
}
