use std::io::Write;
use std::sync::Mutex;

/// Completion side effects are best-effort; failures stay inside the
/// implementation and never reach the upload flow.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Logs the message and rings the terminal bell.
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{message}");
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// Collects messages in memory (for testing).
#[derive(Default)]
pub struct CollectNotifier {
    messages: Mutex<Vec<String>>,
}

impl CollectNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for CollectNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
