use eframe::egui;
use tracing_subscriber::EnvFilter;

use taskforge::app::TaskForgeApp;

fn main() {
    init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        "TaskForge",
        options,
        Box::new(|cc| Box::new(TaskForgeApp::new(cc))),
    ) {
        tracing::error!("failed to start TaskForge: {err}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
