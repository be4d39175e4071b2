use clap::Parser;
use std::path::{Path, PathBuf};
use vectra_cli::{expand_inputs, parse_color_mode, parse_curve_mode, parse_hierarchy_mode};
use vectra_core::models::{BatchEvent, ConversionOutcome, ConversionRequest, ParameterSet};
use vectra_core::{config, tool};

#[derive(Parser)]
#[command(name = "vectra")]
#[command(version, about = "Batch raster-to-SVG vectorizer (VTracer front-end)", long_about = None)]
struct Cli {
    /// Input image files or directories
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Output directory for SVG files
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Force the interactive file picker even when files are given
    #[arg(long)]
    pick: bool,

    /// Launch the interactive GUI form instead of running on the command line
    #[arg(long)]
    gui: bool,

    /// Scan input directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Enable debug output
    #[arg(long)]
    verbose: bool,

    /// Color mode (color or binary)
    #[arg(long, value_name = "MODE", default_value = "color")]
    colormode: String,

    /// Shape stacking (stacked or cutout)
    #[arg(long, value_name = "MODE", default_value = "stacked")]
    hierarchical: String,

    /// Curve fitting mode (spline, polygon, or pixel)
    #[arg(long, value_name = "MODE", default_value = "spline")]
    mode: String,

    /// Discard patches smaller than this many pixels
    #[arg(long, value_name = "N", default_value = "4")]
    filter_speckle: u32,

    /// Number of significant bits used in color quantization
    #[arg(long, value_name = "N", default_value = "6")]
    color_precision: u32,

    /// Color difference between gradient layers
    #[arg(long, value_name = "N", default_value = "55")]
    gradient_step: u32,

    /// Minimum momentary angle (degrees) treated as a corner
    #[arg(long, value_name = "N", default_value = "105")]
    corner_threshold: u32,

    /// Subdivide smoothing until segments are at most this long
    #[arg(long, value_name = "FLOAT", default_value = "7.5")]
    segment_length: f32,

    /// Minimum angle displacement (degrees) to splice a spline
    #[arg(long, value_name = "N", default_value = "0")]
    splice_threshold: u32,
}

fn main() {
    let cli = Cli::parse();
    config::set_verbose(cli.verbose);

    let result = if cli.gui { cmd_gui() } else { cmd_batch(cli) };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_gui() -> Result<(), String> {
    vectra_gui::run().map_err(|e| format!("Failed to start GUI: {}", e))
}

fn cmd_batch(cli: Cli) -> Result<(), String> {
    config::log_config_usage();

    // Availability is a precondition for the whole run: the orchestrator is
    // never invoked when the external tool cannot be executed.
    let tool_path = config::tool_path();
    if !tool::is_tool_available(&tool_path) {
        print_install_help(&tool_path);
        return Err(format!("{} is not available", tool_path.display()));
    }

    let params = build_params(&cli)?;

    let files = if cli.pick || cli.files.is_empty() {
        let picked = pick_files_dialog();
        if picked.is_empty() {
            println!("No files selected.");
            return Ok(());
        }
        picked
    } else {
        expand_inputs(&cli.files, cli.recursive)?
    };

    if files.is_empty() {
        return Err(format!(
            "No supported image files found (supported: {})",
            vectra_cli::SUPPORTED_EXTENSIONS.join(", ")
        ));
    }

    // Determine output directory
    let output_dir = cli.out.clone().unwrap_or_else(|| PathBuf::from("."));
    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    print_settings(&params, files.len());

    let requests: Vec<ConversionRequest> = files
        .into_iter()
        .map(|input| ConversionRequest::new(input, params))
        .collect();

    let mut failures: Vec<(PathBuf, String)> = Vec::new();
    let result = vectra_core::run_batch_with(&tool_path, &requests, &output_dir, |event| {
        match event {
            BatchEvent::Started {
                index,
                total,
                input,
            } => {
                println!("[{}/{}] Vectorizing {}...", index, total, input.display());
            }
            BatchEvent::Completed { outcome, .. } => match outcome {
                ConversionOutcome::Success { output, .. } => {
                    println!("  -> {}", output.display());
                }
                ConversionOutcome::Failure { input, reason } => {
                    eprintln!("  Failed: {}", reason);
                    failures.push((input, reason));
                }
            },
        }
    });

    println!("\n========================================");
    println!("BATCH VECTORIZATION COMPLETE");
    println!("========================================");
    println!("  Successful: {}", result.successful);
    println!("  Failed:     {}", result.failed);
    println!("  Total:      {}", result.total);
    println!("  Output dir: {}", output_dir.display());

    if !failures.is_empty() {
        println!("\nErrors:");
        for (path, reason) in &failures {
            println!("  {}: {}", path.display(), reason);
        }
    }

    if result.all_succeeded() {
        Ok(())
    } else {
        Err(format!("{} files failed to convert", result.failed))
    }
}

/// Build the parameter set from command-line flags.
fn build_params(cli: &Cli) -> Result<ParameterSet, String> {
    Ok(ParameterSet {
        colormode: parse_color_mode(&cli.colormode)?,
        hierarchical: parse_hierarchy_mode(&cli.hierarchical)?,
        mode: parse_curve_mode(&cli.mode)?,
        filter_speckle: cli.filter_speckle,
        color_precision: cli.color_precision,
        gradient_step: cli.gradient_step,
        corner_threshold: cli.corner_threshold,
        segment_length: cli.segment_length,
        splice_threshold: cli.splice_threshold,
    })
}

fn pick_files_dialog() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select images to vectorize")
        .add_filter("Images", vectra_cli::SUPPORTED_EXTENSIONS)
        .pick_files()
        .unwrap_or_default()
}

fn print_settings(params: &ParameterSet, count: usize) {
    println!("\nProcessing {} file(s)...", count);
    println!("Settings:");
    println!("  Color mode:       {}", params.colormode.as_str());
    println!("  Hierarchical:     {}", params.hierarchical.as_str());
    println!("  Curve mode:       {}", params.mode.as_str());
    println!("  Filter speckle:   {}", params.filter_speckle);
    println!("  Color precision:  {}", params.color_precision);
    println!("  Gradient step:    {}", params.gradient_step);
    println!("  Corner threshold: {}", params.corner_threshold);
    println!("  Segment length:   {}", params.segment_length);
    println!("  Splice threshold: {}", params.splice_threshold);
}

fn print_install_help(tool: &Path) {
    eprintln!("{} is not installed or not found in PATH.", tool.display());
    eprintln!("To install VTracer:");
    eprintln!("  1. Install Rust: https://rustup.rs/");
    eprintln!("  2. Run: cargo install vtracer");
    eprintln!("  3. Or download prebuilt binaries from https://github.com/visioncortex/vtracer");
}
