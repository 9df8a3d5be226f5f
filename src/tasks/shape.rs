use super::types::{Task, TaskStatus};

/// What the board (and the exporter) actually gets to see. The backend can
/// smuggle a batch-wide failure through the task list as a record with
/// status `Error`; tagging the result here keeps that coupling in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayResult {
    /// No tasks extracted. Distinct from a failed extraction.
    Empty,
    /// The backend reported a batch-wide failure; carries the sentinel record.
    ExtractionFailed(Task),
    Tasks(Vec<Task>),
}

/// Normalizes the raw task records into a displayable result. An Error
/// sentinel anywhere in the batch suppresses every other record.
pub fn shape(raw: &[Task]) -> DisplayResult {
    if let Some(sentinel) = raw.iter().find(|task| task.status == TaskStatus::Error) {
        return DisplayResult::ExtractionFailed(sentinel.clone());
    }
    if raw.is_empty() {
        return DisplayResult::Empty;
    }
    DisplayResult::Tasks(raw.to_vec())
}
