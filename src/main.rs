use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use quakemap::loader::http_client;
use quakemap::map::{MapContext, MapDescription, EARTHQUAKES_KEY, PLATES_KEY};
use quakemap::overlays::{spawn_overlay_loads, watch_load, LoadPlan};
use quakemap::server::events::LoadReporter;
use quakemap::server::start_server;
use quakemap::server::state::AppState;
use quakemap::settings::Settings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quakemap=info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    info!("QuakeMap v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = Settings::config_path();
    let settings = Settings::load_from(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    if !config_path.exists() {
        match settings.save_to(&config_path) {
            Ok(()) => info!(path = %config_path.display(), "wrote default configuration"),
            Err(e) => warn!(error = %e, "could not write default configuration"),
        }
    }
    info!(feed = %settings.feed_url, plates = %settings.plates_path, "data sources");

    let client = http_client(Duration::from_secs(settings.request_timeout_secs))
        .context("Failed to build HTTP client")?;

    let map = MapContext::new(MapDescription::from_settings(&settings));
    let reporter = LoadReporter::new(100);

    // Loads run in the background; the page picks them up as they finish.
    let (quakes, plates) =
        spawn_overlay_loads(&map, LoadPlan::from_settings(&settings), client, reporter.clone());
    tokio::spawn(watch_load(EARTHQUAKES_KEY, quakes));
    tokio::spawn(watch_load(PLATES_KEY, plates));

    let state = AppState::new(map, reporter).context("Failed to render map page")?;
    start_server(state, settings.port).await
}
