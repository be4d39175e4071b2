//! Vectra GUI Application
//!
//! Interactive form for batch vectorization using egui: pick input images
//! and an output directory, tune the converter parameters, and run the
//! batch on a worker thread while the log pane fills in.

mod app;
pub mod worker;

pub use app::VectraApp;

/// Launch the GUI. Also used by the CLI's `--gui` flag.
pub fn run() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 720.0])
            .with_title("Vectra - VTracer Batch Vectorizer"),
        ..Default::default()
    };

    eframe::run_native(
        "Vectra",
        options,
        Box::new(|_cc| Ok(Box::new(VectraApp::default()))),
    )
}
