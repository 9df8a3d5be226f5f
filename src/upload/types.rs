use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::tasks::Task;

use super::client::UploadError;

/// A file picked or dropped by the user, captured before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    pub extension: String,
    pub path: PathBuf,
}

impl FileDescriptor {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let size_bytes = std::fs::metadata(path)?.len();
        Ok(Self {
            name,
            size_bytes,
            extension,
            path: path.to_path_buf(),
        })
    }
}

/// Events sent from the upload worker back to the UI loop.
#[derive(Debug)]
pub enum UploadEvent {
    Progress(u8),
    Settled(Result<Vec<Task>, UploadError>),
}

#[derive(Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}
