//! hexbubble - Entry Point

use clap::Parser;
use hexbubble::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use hexbubble::model::{AppError, BubbleFrame};
use hexbubble::state::BubbleField;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// hexbubble - pannable hexagonal bubble field in the terminal
#[derive(Parser, Debug)]
#[command(name = "hexbubble")]
#[command(version)]
#[command(about = "Pan a honeycomb of bubbles that grow toward the centre of the screen")]
pub struct Args {
    /// File with one item label per line (numbers the items if not provided)
    pub file: Option<PathBuf>,

    /// Number of items to generate when no file is given
    #[arg(short = 'n', long, default_value = "40")]
    pub items: usize,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pull shrinking bubbles toward the centre
    #[arg(long)]
    pub compact: bool,

    /// Show the focal region outlines
    #[arg(long)]
    pub guides: bool,

    /// Extra inward pull beyond the fringe
    #[arg(long)]
    pub gravitation: Option<f64>,

    /// Columns in a full row (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: Option<u32>,

    /// Print the frames of one layout pass as JSON and exit
    #[arg(long)]
    pub dump: bool,

    /// Vertical scroll position for --dump (default: centred)
    #[arg(long, requires = "dump")]
    pub scroll_top: Option<f64>,

    /// Horizontal scroll position for --dump (default: centred)
    #[arg(long, requires = "dump")]
    pub scroll_left: Option<f64>,
}

/// One dumped bubble: its label and everything the renderer gets.
#[derive(Serialize)]
struct DumpEntry<'a> {
    label: &'a str,
    #[serde(flatten)]
    frame: &'a BubbleFrame,
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);

    // Flags only override when explicitly set
    let compact_override = if args.compact { Some(true) } else { None };
    let guides_override = if args.guides { Some(true) } else { None };
    let cols_override = args.cols.map(|cols| cols as usize);

    let config = apply_cli_overrides(
        with_env,
        compact_override,
        guides_override,
        args.gravitation,
        cols_override,
    );
    config.validate()?;
    Ok(config)
}

fn build_field(args: &Args, config: &ResolvedConfig) -> Result<BubbleField<String>, AppError> {
    let labels = hexbubble::source::load_labels(args.file.clone(), args.items)?;
    let field = BubbleField::new(labels, config.bubble.clone())?
        .with_drag_multiplier(config.drag_multiplier)?;
    Ok(field)
}

/// Render one layout pass as pretty JSON, scrolled to the requested
/// position if any.
fn dump_frames(
    field: &mut BubbleField<String>,
    scroll_top: Option<f64>,
    scroll_left: Option<f64>,
) -> Result<String, serde_json::Error> {
    if scroll_top.is_some() || scroll_left.is_some() {
        let top = scroll_top.unwrap_or(field.scroll().scroll_top());
        let left = scroll_left.unwrap_or(field.scroll().scroll_left());
        field.scroll_to(top, left);
    }
    field.recompute();

    let entries: Vec<DumpEntry<'_>> = field
        .frames()
        .iter()
        .filter_map(|frame| {
            let label = field.item(frame.position)?;
            Some(DumpEntry { label, frame })
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    // Initialize tracing with configured log file path
    hexbubble::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut field = build_field(&args, &config)?;

    if args.dump {
        let json = dump_frames(&mut field, args.scroll_top, args.scroll_left)
            .map_err(|e| AppError::Terminal(io::Error::from(e)))?;
        writeln!(io::stdout().lock(), "{json}").map_err(AppError::Terminal)?;
        return Ok(());
    }

    hexbubble::view::run_with_field(field)?;

    Ok(())
}
