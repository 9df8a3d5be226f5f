use thiserror::Error;

use super::types::FileDescriptor;

pub const MAX_FILES: usize = 5;
pub const MAX_FILE_SIZE_MB: u64 = 10;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["vtt", "srt", "txt", "pdf", "docx"];

const ACCEPTED_LIST: &str = ".vtt, .srt, .txt, .pdf, .docx";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You can only upload a maximum of {} files at a time.", MAX_FILES)]
    TooManyFiles,
    #[error("Invalid file type ({}). Please upload one of: {}", .0, ACCEPTED_LIST)]
    InvalidType(String),
    #[error("File ({}) is too large. Maximum size is {}MB.", .0, MAX_FILE_SIZE_MB)]
    TooLarge(String),
}

/// All-or-nothing: the first offending file determines the single reported
/// error and the whole selection is rejected.
pub fn validate_selection(files: &[FileDescriptor]) -> Result<(), ValidationError> {
    if files.len() > MAX_FILES {
        return Err(ValidationError::TooManyFiles);
    }
    for file in files {
        if !ACCEPTED_EXTENSIONS.contains(&file.extension.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidType(file.name.clone()));
        }
        if file.size_bytes > MAX_FILE_SIZE_BYTES {
            return Err(ValidationError::TooLarge(file.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, size_bytes: u64) -> FileDescriptor {
        let extension = name.rsplit('.').next().unwrap_or_default().to_string();
        FileDescriptor {
            name: name.to_string(),
            size_bytes,
            extension,
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn accepts_a_valid_selection() {
        let files = vec![file("a.vtt", 1024 * 1024), file("b.srt", 2 * 1024 * 1024)];
        assert_eq!(validate_selection(&files), Ok(()));
    }

    #[test]
    fn rejects_more_than_five_files() {
        let files: Vec<FileDescriptor> = (0..6).map(|i| file(&format!("f{i}.txt"), 10)).collect();
        assert_eq!(validate_selection(&files), Err(ValidationError::TooManyFiles));
    }

    #[test]
    fn rejects_unsupported_extension_naming_the_file() {
        let files = vec![file("a.vtt", 10), file("slides.pptx", 10)];
        assert_eq!(
            validate_selection(&files),
            Err(ValidationError::InvalidType("slides.pptx".to_string()))
        );
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let files = vec![file("MEETING.VTT", 10), file("Notes.Docx", 10)];
        assert_eq!(validate_selection(&files), Ok(()));
    }

    #[test]
    fn rejects_files_over_ten_mebibytes() {
        let files = vec![file("big.pdf", MAX_FILE_SIZE_BYTES + 1)];
        assert_eq!(
            validate_selection(&files),
            Err(ValidationError::TooLarge("big.pdf".to_string()))
        );
    }

    #[test]
    fn exactly_ten_mebibytes_passes() {
        let files = vec![file("edge.pdf", MAX_FILE_SIZE_BYTES)];
        assert_eq!(validate_selection(&files), Ok(()));
    }

    #[test]
    fn one_bad_file_rejects_the_whole_batch() {
        let files = vec![
            file("good.vtt", 10),
            file("bad.exe", 10),
            file("also-good.txt", 10),
        ];
        assert_eq!(
            validate_selection(&files),
            Err(ValidationError::InvalidType("bad.exe".to_string()))
        );
    }

    #[test]
    fn type_error_wins_over_size_for_the_same_file() {
        let files = vec![file("huge.exe", MAX_FILE_SIZE_BYTES + 1)];
        assert_eq!(
            validate_selection(&files),
            Err(ValidationError::InvalidType("huge.exe".to_string()))
        );
    }

    #[test]
    fn error_messages_match_user_facing_copy() {
        assert_eq!(
            ValidationError::TooManyFiles.to_string(),
            "You can only upload a maximum of 5 files at a time."
        );
        assert_eq!(
            ValidationError::InvalidType("a.exe".to_string()).to_string(),
            "Invalid file type (a.exe). Please upload one of: .vtt, .srt, .txt, .pdf, .docx"
        );
        assert_eq!(
            ValidationError::TooLarge("big.pdf".to_string()).to_string(),
            "File (big.pdf) is too large. Maximum size is 10MB."
        );
    }
}
