//! Main application window.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use vectra_core::models::{
    BatchEvent, BatchResult, ColorMode, ConversionOutcome, ConversionRequest, CurveMode,
    HierarchyMode, ParameterSet,
};
use vectra_core::{config, tool};

use crate::worker::{self, WorkerMsg};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif"];

pub struct VectraApp {
    // Batch inputs
    inputs: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    params: ParameterSet,

    // Worker state
    worker: Option<Receiver<WorkerMsg>>,
    running: bool,
    completed: usize,
    total: usize,
    summary: Option<BatchResult>,

    // UI state
    log: Vec<String>,
    error_message: Option<String>,
}

impl Default for VectraApp {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: None,
            params: ParameterSet::default(),

            worker: None,
            running: false,
            completed: 0,
            total: 0,
            summary: None,

            log: Vec::new(),
            error_message: None,
        }
    }
}

impl eframe::App for VectraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Add Images...").clicked() {
                        self.pick_inputs();
                        ui.close_menu();
                    }
                    if ui.button("Set Output Directory...").clicked() {
                        self.pick_output_dir();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Batch Vectorization");
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("controls_scroll")
                .show(ui, |ui| {
                    self.show_input_section(ui);
                    ui.separator();
                    self.show_parameter_controls(ui);
                    ui.separator();
                    self.show_run_section(ui, ctx);
                    ui.separator();
                    self.show_log(ui);
                });
        });

        // Show error message if any
        if self.error_message.is_some() {
            let error = self.error_message.clone().unwrap();
            let mut should_close = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            if should_close {
                self.error_message = None;
            }
        }
    }
}

impl VectraApp {
    /// Pull any pending messages from the worker thread into UI state.
    fn drain_worker(&mut self) {
        let mut finished = false;

        if let Some(rx) = &self.worker {
            while let Ok(msg) = rx.try_recv() {
                match msg {
                    WorkerMsg::Event(BatchEvent::Started {
                        index,
                        total,
                        input,
                    }) => {
                        self.log
                            .push(format!("[{}/{}] Vectorizing {}...", index, total, input.display()));
                    }
                    WorkerMsg::Event(BatchEvent::Completed { outcome, .. }) => {
                        self.completed += 1;
                        match outcome {
                            ConversionOutcome::Success { output, .. } => {
                                self.log.push(format!("  -> {}", output.display()));
                            }
                            ConversionOutcome::Failure { input, reason } => {
                                self.log
                                    .push(format!("  Failed {}: {}", input.display(), reason));
                            }
                        }
                    }
                    WorkerMsg::Finished(result) => {
                        self.log.push(format!(
                            "Done: {} succeeded, {} failed, {} total",
                            result.successful, result.failed, result.total
                        ));
                        self.summary = Some(result);
                        finished = true;
                    }
                }
            }
        }

        if finished {
            self.worker = None;
            self.running = false;
        }
    }

    fn pick_inputs(&mut self) {
        if let Some(files) = rfd::FileDialog::new()
            .set_title("Select images to vectorize")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_files()
        {
            self.inputs.extend(files);
            self.inputs.sort();
            self.inputs.dedup();
        }
    }

    fn pick_output_dir(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_title("Select output directory")
            .pick_folder()
        {
            self.output_dir = Some(dir);
        }
    }

    fn show_input_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Images...").clicked() {
                self.pick_inputs();
            }
            if ui.button("Clear").clicked() {
                self.inputs.clear();
            }
            ui.label(format!("{} file(s) selected", self.inputs.len()));
        });

        if !self.inputs.is_empty() {
            egui::ScrollArea::vertical()
                .id_salt("inputs_scroll")
                .max_height(120.0)
                .show(ui, |ui| {
                    for input in &self.inputs {
                        ui.monospace(input.display().to_string());
                    }
                });
        }

        ui.horizontal(|ui| {
            ui.label("Output directory:");
            let shown = self
                .output_dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| ". (current directory)".to_string());
            ui.monospace(shown);
            if ui.button("Browse...").clicked() {
                self.pick_output_dir();
            }
        });
    }

    fn show_parameter_controls(&mut self, ui: &mut egui::Ui) {
        ui.collapsing("Vectorization Parameters", |ui| {
            egui::ComboBox::from_label("Color mode")
                .selected_text(self.params.colormode.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.params.colormode, ColorMode::Color, "color");
                    ui.selectable_value(&mut self.params.colormode, ColorMode::Binary, "binary");
                });

            egui::ComboBox::from_label("Hierarchical")
                .selected_text(self.params.hierarchical.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.params.hierarchical,
                        HierarchyMode::Stacked,
                        "stacked",
                    );
                    ui.selectable_value(
                        &mut self.params.hierarchical,
                        HierarchyMode::Cutout,
                        "cutout",
                    );
                });

            egui::ComboBox::from_label("Curve mode")
                .selected_text(self.params.mode.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.params.mode, CurveMode::Spline, "spline");
                    ui.selectable_value(&mut self.params.mode, CurveMode::Polygon, "polygon");
                    ui.selectable_value(&mut self.params.mode, CurveMode::Pixel, "pixel");
                });

            ui.separator();

            ui.add(
                egui::Slider::new(&mut self.params.filter_speckle, 0..=128)
                    .text("Filter speckle"),
            );
            ui.add(
                egui::Slider::new(&mut self.params.color_precision, 1..=8)
                    .text("Color precision"),
            );
            ui.add(egui::Slider::new(&mut self.params.gradient_step, 0..=255).text("Gradient step"));
            ui.add(
                egui::Slider::new(&mut self.params.corner_threshold, 0..=180)
                    .text("Corner threshold"),
            );
            ui.add(
                egui::Slider::new(&mut self.params.segment_length, 3.5..=10.0)
                    .text("Segment length"),
            );
            ui.add(
                egui::Slider::new(&mut self.params.splice_threshold, 0..=180)
                    .text("Splice threshold"),
            );

            if ui.button("Reset to Defaults").clicked() {
                self.params = ParameterSet::default();
            }
        });
    }

    fn show_run_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let can_start = !self.running && !self.inputs.is_empty();
        if ui
            .add_enabled(can_start, egui::Button::new("Start Vectorization"))
            .clicked()
        {
            self.start_batch(ctx);
        }

        if self.running {
            let progress = if self.total > 0 {
                self.completed as f32 / self.total as f32
            } else {
                0.0
            };
            ui.add(
                egui::ProgressBar::new(progress)
                    .show_percentage()
                    .text(format!("{}/{}", self.completed, self.total)),
            );
        } else if let Some(summary) = &self.summary {
            let status = if summary.all_succeeded() {
                format!("All {} file(s) converted", summary.total)
            } else {
                format!(
                    "{} of {} file(s) failed",
                    summary.failed, summary.total
                )
            };
            ui.label(status);
        }
    }

    fn show_log(&mut self, ui: &mut egui::Ui) {
        ui.label("Log");
        egui::ScrollArea::vertical()
            .id_salt("log_scroll")
            .max_height(200.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &self.log {
                    ui.monospace(line);
                }
            });
    }

    fn start_batch(&mut self, ctx: &egui::Context) {
        // Availability is checked up front; the batch never starts when the
        // external tool cannot be executed.
        let tool_path = config::tool_path();
        if !tool::is_tool_available(&tool_path) {
            self.error_message = Some(format!(
                "{} is not installed or not found in PATH.\n\n\
                 To install VTracer:\n\
                 1. Install Rust: https://rustup.rs/\n\
                 2. Run: cargo install vtracer\n\
                 3. Or download prebuilt binaries from\n\
                    https://github.com/visioncortex/vtracer",
                tool_path.display()
            ));
            return;
        }

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if !output_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&output_dir) {
                self.error_message = Some(format!("Failed to create output directory: {}", e));
                return;
            }
        }

        let requests: Vec<ConversionRequest> = self
            .inputs
            .iter()
            .cloned()
            .map(|input| ConversionRequest::new(input, self.params))
            .collect();

        self.total = requests.len();
        self.completed = 0;
        self.summary = None;
        self.log
            .push(format!("Processing {} file(s)...", requests.len()));

        self.worker = Some(worker::spawn_batch(
            tool_path,
            requests,
            output_dir,
            ctx.clone(),
        ));
        self.running = true;
    }
}
