mod client;
pub mod progress;
mod types;
mod validate;

pub use client::{UploadClient, UploadError};
pub use types::{FileDescriptor, UploadEvent};
pub use validate::{
    validate_selection, ValidationError, ACCEPTED_EXTENSIONS, MAX_FILES, MAX_FILE_SIZE_BYTES,
    MAX_FILE_SIZE_MB,
};
