//! Background batch execution.
//!
//! The orchestrator itself is synchronous; the GUI submits the whole batch
//! to one worker thread and receives per-file progress events plus a final
//! summary over an mpsc channel. Coarse-grained on purpose: one worker, no
//! per-file parallelism, no cancellation.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use vectra_core::models::{BatchEvent, BatchResult, ConversionRequest};

/// Message from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum WorkerMsg {
    Event(BatchEvent),
    Finished(BatchResult),
}

/// Run a batch on a worker thread, reporting progress on the returned channel.
///
/// The UI is asked to repaint after every message so progress shows up
/// without user interaction.
pub fn spawn_batch(
    tool: PathBuf,
    requests: Vec<ConversionRequest>,
    output_dir: PathBuf,
    ctx: egui::Context,
) -> Receiver<WorkerMsg> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let event_tx = tx.clone();
        let event_ctx = ctx.clone();
        let result = vectra_core::run_batch_with(&tool, &requests, &output_dir, |event| {
            // The UI may have been closed; a dropped receiver is fine.
            let _ = event_tx.send(WorkerMsg::Event(event));
            event_ctx.request_repaint();
        });

        let _ = tx.send(WorkerMsg::Finished(result));
        ctx.request_repaint();
    });

    rx
}
