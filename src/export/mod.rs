mod excel;

pub use excel::{
    download_dir, export_filename, export_to, exportable_tasks, task_row, ExportError, HEADERS,
    SHEET_NAME,
};
