use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

use crate::tasks::{DisplayResult, Task};

pub const SHEET_NAME: &str = "Tasks";
pub const HEADERS: [&str; 7] = [
    "Item",
    "Assignee",
    "Priority",
    "Status",
    "Due Date",
    "Confidence",
    "Description",
];

// Cosmetic width hints, one per column.
const COLUMN_WIDTHS: [f64; 7] = [40.0, 20.0, 10.0, 15.0, 15.0, 10.0, 60.0];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No valid tasks to download.")]
    NoExportableData,
    #[error(transparent)]
    Workbook(#[from] XlsxError),
}

/// Tasks that belong in the sheet: the shaped list minus any remaining
/// Error/Info sentinels. Refuses outright when nothing real is left.
pub fn exportable_tasks(shaped: &DisplayResult) -> Result<Vec<&Task>, ExportError> {
    let DisplayResult::Tasks(tasks) = shaped else {
        return Err(ExportError::NoExportableData);
    };
    let rows: Vec<&Task> = tasks
        .iter()
        .filter(|task| !task.status.is_sentinel())
        .collect();
    if rows.is_empty() {
        return Err(ExportError::NoExportableData);
    }
    Ok(rows)
}

/// One data row per task, one cell per field, in the fixed column order.
/// Absent confidence becomes an empty cell, never a null literal.
pub fn task_row(task: &Task) -> [String; 7] {
    [
        task.item.clone(),
        task.assignee.clone(),
        task.priority.as_str().to_string(),
        task.status.as_str().to_string(),
        task.due_date.clone(),
        task.confidence_text(),
        task.description.clone(),
    ]
}

/// Deterministic up to the date: repeated exports on the same day share a
/// name; overwriting is the filesystem's business.
pub fn export_filename(date: NaiveDate) -> String {
    format!("TaskForge_Board_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Builds the workbook and saves it under `dir`, returning the full path.
pub fn export_to(dir: &Path, shaped: &DisplayResult) -> Result<PathBuf, ExportError> {
    let tasks = exportable_tasks(shaped)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write(0, col as u16, *header)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    for (row, task) in tasks.iter().enumerate() {
        for (col, value) in task_row(task).iter().enumerate() {
            worksheet.write(row as u32 + 1, col as u16, value.as_str())?;
        }
    }

    let path = dir.join(export_filename(chrono::Local::now().date_naive()));
    workbook.save(&path)?;
    tracing::info!(path = %path.display(), rows = tasks.len(), "exported task board");
    Ok(path)
}

/// Default destination for exports.
pub fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Priority, TaskStatus};

    fn task(item: &str, status: TaskStatus, confidence: Option<f64>) -> Task {
        Task {
            item: item.to_string(),
            assignee: "Bob".to_string(),
            priority: Priority::High,
            status,
            due_date: "2025-05-01".to_string(),
            confidence,
            description: "d".to_string(),
        }
    }

    #[test]
    fn refuses_empty_and_failed_results() {
        assert!(matches!(
            exportable_tasks(&DisplayResult::Empty),
            Err(ExportError::NoExportableData)
        ));
        let sentinel = task("boom", TaskStatus::Error, None);
        assert!(matches!(
            exportable_tasks(&DisplayResult::ExtractionFailed(sentinel)),
            Err(ExportError::NoExportableData)
        ));
    }

    #[test]
    fn refuses_sentinel_only_lists() {
        let shaped = DisplayResult::Tasks(vec![
            task("Skipped Files Info", TaskStatus::Info, None),
            task("also info", TaskStatus::Info, None),
        ]);
        assert!(matches!(
            exportable_tasks(&shaped),
            Err(ExportError::NoExportableData)
        ));
    }

    #[test]
    fn filters_sentinels_and_preserves_order() {
        let shaped = DisplayResult::Tasks(vec![
            task("info", TaskStatus::Info, None),
            task("first", TaskStatus::WorkingOnIt, Some(0.9)),
            task("second", TaskStatus::Done, None),
        ]);
        let rows = exportable_tasks(&shaped).unwrap();
        let items: Vec<&str> = rows.iter().map(|t| t.item.as_str()).collect();
        assert_eq!(items, ["first", "second"]);
    }

    #[test]
    fn row_projection_matches_source_fields() {
        let with_confidence = task("X", TaskStatus::WorkingOnIt, Some(0.9));
        assert_eq!(
            task_row(&with_confidence),
            ["X", "Bob", "High", "Working on it", "2025-05-01", "0.9", "d"]
        );

        let without = task("Y", TaskStatus::Done, None);
        assert_eq!(task_row(&without)[5], "");
    }

    #[test]
    fn filename_is_deterministic_for_a_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(export_filename(date), "TaskForge_Board_2025-05-01.xlsx");
        assert_eq!(export_filename(date), export_filename(date));
    }

    #[test]
    fn writes_a_workbook_for_well_formed_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let shaped = DisplayResult::Tasks(vec![
            task("X", TaskStatus::WorkingOnIt, Some(0.9)),
            task("Y", TaskStatus::Stuck, None),
        ]);

        let path = export_to(dir.path(), &shaped).unwrap();
        assert!(path.ends_with(export_filename(chrono::Local::now().date_naive())));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn no_file_is_written_when_export_refuses() {
        let dir = tempfile::tempdir().unwrap();
        let shaped = DisplayResult::Tasks(vec![task("boom", TaskStatus::Error, None)]);

        assert!(export_to(dir.path(), &shaped).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
