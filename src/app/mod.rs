mod session;
mod ui;

pub use session::{OperationState, UploadSession};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eframe::{egui, App};

use crate::config::AppConfig;
use crate::tasks::{shape, DisplayResult};
use crate::upload::FileDescriptor;
use crate::utils::notify::BellNotifier;

pub enum Screen {
    Upload,
    Board {
        shaped: DisplayResult,
        export_notice: Option<String>,
        exported_path: Option<PathBuf>,
    },
}

pub struct TaskForgeApp {
    session: UploadSession,
    screen: Screen,
}

impl TaskForgeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::from_env();
        tracing::info!(api_base_url = %config.api_base_url, "initializing TaskForge");
        Self {
            session: UploadSession::new(&config, Arc::new(BellNotifier)),
            screen: Screen::Upload,
        }
    }

    pub(crate) fn process_another(&mut self) {
        self.session.reset();
        self.screen = Screen::Upload;
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let files: Vec<FileDescriptor> = dropped
            .iter()
            .filter_map(|file| file.path.as_deref())
            .filter_map(|path| match FileDescriptor::from_path(path) {
                Ok(descriptor) => Some(descriptor),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "could not read dropped file: {err}");
                    None
                }
            })
            .collect();

        // A drop that yielded nothing readable should not wipe the current
        // selection; clearing is reserved for an explicit empty selection.
        if files.is_empty() {
            return;
        }
        self.session.select_files(files);
    }
}

impl App for TaskForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if matches!(self.screen, Screen::Upload) {
            self.handle_dropped_files(ctx);
        }

        if self.session.poll() {
            ctx.request_repaint();
        }
        if self.session.is_processing() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if let Some(tasks) = self.session.take_succeeded() {
            self.screen = Screen::Board {
                shaped: shape(&tasks),
                export_notice: None,
                exported_path: None,
            };
        }

        self.render(ctx);
    }
}
