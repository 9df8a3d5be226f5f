use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::tasks::Task;
use crate::upload::progress;
use crate::upload::{
    validate_selection, FileDescriptor, UploadClient, UploadError, UploadEvent, ValidationError,
};
use crate::utils::notify::Notifier;

/// Lifecycle of the one upload a session may have in flight. Processing is
/// only ever exited through Succeeded or Failed; a later submit re-enters
/// Processing directly.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationState {
    Idle,
    Processing { progress: u8 },
    Succeeded(Vec<Task>),
    Failed(String),
}

impl OperationState {
    pub fn is_processing(&self) -> bool {
        matches!(self, OperationState::Processing { .. })
    }
}

/// Owns the selected files and the operation state for the upload screen.
/// The upload itself runs on a worker thread with its own tokio runtime;
/// events come back over a channel and are drained by `poll` from the UI
/// loop.
pub struct UploadSession {
    selection: Vec<FileDescriptor>,
    operation: OperationState,
    validation_error: Option<ValidationError>,
    events: Option<Receiver<UploadEvent>>,
    ticker_cancel: Option<CancellationToken>,
    client: UploadClient,
    notifier: Arc<dyn Notifier>,
}

impl UploadSession {
    pub fn new(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_client(UploadClient::new(&config.api_base_url), notifier)
    }

    /// Primarily for tests that inject a mock-server base URL.
    pub fn with_client(client: UploadClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            selection: Vec::new(),
            operation: OperationState::Idle,
            validation_error: None,
            events: None,
            ticker_cancel: None,
            client,
            notifier,
        }
    }

    pub fn selection(&self) -> &[FileDescriptor] {
        &self.selection
    }

    pub fn operation(&self) -> &OperationState {
        &self.operation
    }

    pub fn is_processing(&self) -> bool {
        self.operation.is_processing()
    }

    pub fn progress(&self) -> u8 {
        match self.operation {
            OperationState::Processing { progress } => progress,
            _ => 0,
        }
    }

    /// The error the upload screen should display, if any: a validation
    /// failure from the last selection, or the failure of the last attempt.
    pub fn error_text(&self) -> Option<String> {
        if let Some(err) = &self.validation_error {
            return Some(err.to_string());
        }
        if let OperationState::Failed(message) = &self.operation {
            return Some(message.clone());
        }
        None
    }

    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && !self.is_processing()
    }

    /// Replaces the selection wholesale. Zero files clears the selection and
    /// any standing error without reporting a new one; an invalid batch is
    /// rejected entirely.
    pub fn select_files(&mut self, files: Vec<FileDescriptor>) {
        if files.is_empty() {
            self.selection.clear();
            self.validation_error = None;
            return;
        }
        match validate_selection(&files) {
            Ok(()) => {
                tracing::debug!(count = files.len(), "selection accepted");
                self.selection = files;
                self.validation_error = None;
            }
            Err(err) => {
                tracing::debug!("selection rejected: {err}");
                self.selection.clear();
                self.validation_error = Some(err);
            }
        }
    }

    /// Starts the upload. No-op without a valid selection or while one is
    /// already in flight (the UI also disables the button).
    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        // At most one ticker may be active; a fresh submit cancels any
        // survivor before starting its own.
        self.cancel_ticker();
        self.validation_error = None;

        let (sender, receiver) = channel();
        let cancel = CancellationToken::new();
        self.events = Some(receiver);
        self.ticker_cancel = Some(cancel.clone());
        self.operation = OperationState::Processing { progress: 0 };

        let files = self.selection.clone();
        let client = self.client.clone();
        tracing::info!(count = files.len(), "starting upload");

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let ticker = progress::spawn_ticker(sender.clone(), cancel.clone());
                let outcome = client.upload(&files).await;
                cancel.cancel();
                let _ = ticker.await;
                let _ = sender.send(UploadEvent::Settled(outcome));
            });
        });
    }

    /// Drains pending worker events; returns true when state changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = self.events.take() else {
            return false;
        };

        let mut changed = false;
        let mut settled = false;
        while let Ok(event) = receiver.try_recv() {
            changed = true;
            match event {
                UploadEvent::Progress(value) => {
                    if let OperationState::Processing { progress } = &mut self.operation {
                        *progress = value;
                    }
                }
                UploadEvent::Settled(outcome) => {
                    settled = true;
                    self.cancel_ticker();
                    self.apply_settlement(outcome);
                }
            }
        }

        if !settled {
            self.events = Some(receiver);
        }
        changed
    }

    /// Hands the succeeded task batch to the caller, returning the session
    /// to Idle. None unless the operation has succeeded.
    pub fn take_succeeded(&mut self) -> Option<Vec<Task>> {
        if !matches!(self.operation, OperationState::Succeeded(_)) {
            return None;
        }
        match std::mem::replace(&mut self.operation, OperationState::Idle) {
            OperationState::Succeeded(tasks) => Some(tasks),
            _ => None,
        }
    }

    /// Back to a blank upload screen.
    pub fn reset(&mut self) {
        self.cancel_ticker();
        self.events = None;
        self.selection.clear();
        self.validation_error = None;
        self.operation = OperationState::Idle;
    }

    fn apply_settlement(&mut self, outcome: Result<Vec<Task>, UploadError>) {
        match outcome {
            Ok(tasks) => {
                if let OperationState::Processing { progress } = &mut self.operation {
                    *progress = 100;
                }
                tracing::info!(count = tasks.len(), "upload succeeded");
                self.notifier.notify("Task extraction complete");
                self.selection.clear();
                self.operation = OperationState::Succeeded(tasks);
            }
            Err(err) => {
                tracing::warn!("upload failed: {err}");
                self.operation = OperationState::Failed(err.to_string());
            }
        }
    }

    // Idempotent: the token is cancelled at most once, and cancelling an
    // already-cancelled token is a no-op.
    fn cancel_ticker(&mut self) {
        if let Some(cancel) = self.ticker_cancel.take() {
            cancel.cancel();
        }
    }
}
