//! Marga-Sim - explore a grid track from the command line
//!
//! Loads a track layout, drives the explorer tick by tick while drawing the
//! vehicle in the terminal, and optionally saves the discovered graph.

use std::path::{Path, PathBuf};

use clap::Parser;
use marga_map::Explorer;
use marga_sim::export::save_graph;
use marga_sim::{ConsoleRenderer, Result, SimConfig, SimulatedTrack};
use tracing::{debug, info};

/// Explore a grid track and map its decision points
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ./marga.toml when present)
    config: Option<PathBuf>,

    /// Do not draw the track
    #[arg(long)]
    no_render: bool,

    /// Override the pause between ticks in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Write the final graph as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("marga_sim=info,marga_map=info")
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            SimConfig::load(path)?
        }
        None if Path::new("marga.toml").exists() => {
            info!("Loading configuration from marga.toml");
            SimConfig::load(Path::new("marga.toml"))?
        }
        None => {
            info!("Using default configuration");
            SimConfig::default()
        }
    };

    if args.no_render {
        config.render.enabled = false;
    }
    if let Some(interval) = args.interval_ms {
        config.exploration.tick_interval_ms = interval;
    }
    if let Some(path) = args.output {
        config.output.graph_path = Some(path);
    }

    info!("Marga-Sim v{}", env!("CARGO_PKG_VERSION"));

    let layout = config.layout()?;
    let start = config.start_pose(&layout)?;
    info!(
        "Track {}x{} with {} track cells, starting at {}",
        layout.width(),
        layout.height(),
        layout.track_len(),
        start
    );

    let renderer = ConsoleRenderer::stdout(
        layout.clone(),
        config.render.enabled,
        config.render.clear_screen,
    );
    let track = SimulatedTrack::new(layout);

    let mut explorer = Explorer::new(config.explorer_config(), track, renderer, start);
    let report = explorer.run()?;

    info!("{}", report);
    info!(
        "Vehicle finished at {} after {} cells moved ({} blocked advances)",
        explorer.pose(),
        explorer.world().advances(),
        explorer.world().blocked_advances()
    );

    let graph = explorer.graph();
    for node in graph.nodes() {
        if let Ok(dump) = graph.display_node(node.id) {
            debug!("{}", dump);
        }
    }

    if let Some(path) = &config.output.graph_path {
        save_graph(path, graph, &report)?;
    }

    Ok(())
}
