//! Bevel CLI
//!
//! Loads a scene file and prints the border paint plan of every box in it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevel_geometry::{BorderPaintPlan, CornerRadii, RoundedRect};
use bevel_scene::{BorderItem, LoaderConfig, SceneLoader};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

/// Bevel - border geometry inspector
#[derive(Parser, Debug)]
#[command(name = "bevel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print plans for every border in a scene
    bevel scenes/borders.json

    # Machine-readable output
    bevel --json scenes/borders.json

    # Show loader and geometry logs
    bevel --verbose scenes/borders.json
"#)]
struct Cli {
    /// Scene file to load
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Print plans as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loader = SceneLoader::new(LoaderConfig::default());
    let scene = loader
        .load_file(&cli.scene)
        .with_context(|| format!("could not load {}", cli.scene.display()))?;

    if cli.json {
        let plans = scene.plans();
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    if scene.borders.is_empty() {
        println!("{}", "no borders in scene".dimmed());
    }
    for (index, border) in scene.borders.iter().enumerate() {
        print_border(index, border, &border.plan());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_border(index: usize, border: &BorderItem, plan: &BorderPaintPlan) {
    let bounds = border.bounds;
    println!(
        "{} {} at ({}, {}) {}x{} {}",
        "border".bold(),
        format!("#{index}").cyan(),
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        border.writing_mode.dimmed(),
    );
    println!("  outer {}", format_rounded_rect(&plan.outer));
    println!("  inner {}", format_rounded_rect(&plan.inner));

    if plan.is_empty() {
        println!("  {}", "nothing to paint".dimmed());
        return;
    }
    for (side, edge) in plan.edges.iter() {
        let swatch = edge.color.to_hex_string();
        if edge.visible {
            println!(
                "  {:<6} {} {} {}",
                side.green(),
                edge.width,
                edge.style,
                swatch,
            );
        } else {
            println!("  {:<6} {}", side.red(), "hidden".dimmed());
        }
    }
    if plan.has_uniform_edges() {
        println!("  {}", "uniform edges".yellow());
    }
}

fn format_rounded_rect(rounded: &RoundedRect) -> String {
    let rect = rounded.rect;
    let base = format!("[{} {} {} {}]", rect.x, rect.y, rect.width, rect.height);
    if rounded.is_rounded() {
        format!("{base} radii {}", format_radii(&rounded.radii))
    } else {
        base
    }
}

fn format_radii(radii: &CornerRadii) -> String {
    [
        radii.top_left,
        radii.top_right,
        radii.bottom_right,
        radii.bottom_left,
    ]
    .iter()
    .map(|corner| format!("{}/{}", corner.width, corner.height))
    .collect::<Vec<_>>()
    .join(" ")
}
