mod script;


use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use digitizer::config::{ConfigError, DigitizerConfig};
use digitizer::coord::GeographicCoordinate;
use digitizer::navigation::{CameraFrame, StartView};
use digitizer::projection;
use digitizer::render::LayerLog;
use digitizer::session::Session;
use digitizer::viewport::{MapViewport, Viewport, ViewportError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read script {path}: {source}")]
    ReadScript { path: PathBuf, source: std::io::Error },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("center latitude/longitude out of range: {lon}, {lat}")]
    InvalidCenter { lon: f64, lat: f64 },
}

#[derive(Parser, Debug)]
#[command(name = "polytrace", about = "Replay recorded map clicks through the polygon digitizer")]
struct Cli {
    /// JSON array of pointer events.
    #[arg(long)]
    script: PathBuf,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Plane units (meters) per pixel.
    #[arg(long, default_value_t = 100.0)]
    resolution: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_lon: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_lat: f64,

    /// Takes precedence over `POLYTRACE_DRAG_THRESHOLD_PX`.
    #[arg(long)]
    drag_threshold: Option<f64>,

    /// Jump to the end of the start-view fly-to before replaying.
    #[arg(long)]
    start_view: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "polytrace failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = DigitizerConfig::from_env()?;
    if let Some(threshold) = cli.drag_threshold {
        config.drag_threshold_px = threshold;
        config.validate()?;
    }

    let mut viewport = initial_viewport(cli)?;
    let text = fs::read_to_string(&cli.script)
        .map_err(|source| CliError::ReadScript { path: cli.script.clone(), source })?;
    let events = script::parse(&text)?;

    let mut session = Session::new(config);
    let mut layers = LayerLog::new();
    let stats = script::replay(&events, &mut session, &mut viewport, &mut layers)?;

    tracing::info!(
        events = events.len(),
        vertices = stats.vertices,
        drags = stats.drags,
        completed = stats.completed,
        failed = stats.failed,
        layers = layers.layers.len(),
        "replay finished"
    );
    for polygon in session.registry().iter() {
        tracing::info!(id = %polygon.id(), vertices = polygon.len(), area_m2 = polygon.planar_area(), "polygon");
    }
    if !session.ring().is_empty() {
        tracing::info!(vertices = session.ring().len(), "ring left open");
    }
    Ok(())
}

fn initial_viewport(cli: &Cli) -> Result<MapViewport, CliError> {
    let center = GeographicCoordinate::new(cli.center_lon, cli.center_lat);
    if !center.is_valid() {
        return Err(CliError::InvalidCenter { lon: cli.center_lon, lat: cli.center_lat });
    }
    let mut viewport = MapViewport::new(projection::to_projected(center), cli.resolution, cli.width, cli.height)?;

    if cli.start_view {
        let view = StartView::default_target();
        let current = CameraFrame { center: viewport.center(), resolution: viewport.resolution() };
        let animation = view.animation_from(current);
        let end = animation.sample(animation.delay + animation.duration);
        viewport.center_on(end.center, end.resolution)?;
        tracing::info!(lon = view.target.lon, lat = view.target.lat, resolution = end.resolution, "start view applied");
    }
    Ok(viewport)
}
