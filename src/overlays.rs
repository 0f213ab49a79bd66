//! The two one-shot overlay loads. Each runs as its own task, fills exactly
//! one layer group and reports its outcome; neither waits for the other.

use std::path::PathBuf;

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::error::GroupSettled;
use crate::feed::BoundaryCollection;
use crate::formatting::Zone;
use crate::loader::{fetch_earthquakes, load_boundaries};
use crate::map::{LayerGroup, MapContext, SharedGroup};
use crate::markers::{build_markers, CircleMarker};
use crate::server::events::LoadReporter;
use crate::settings::Settings;

/// Where the overlays come from and how popup times are printed.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    pub feed_url: String,
    pub plates_path: PathBuf,
    pub zone: Zone,
}

impl LoadPlan {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            feed_url: settings.feed_url.clone(),
            plates_path: PathBuf::from(&settings.plates_path),
            zone: settings.zone(),
        }
    }
}

/// Starts both loads in the background and returns their handles.
pub fn spawn_overlay_loads(
    map: &MapContext,
    plan: LoadPlan,
    client: Client,
    reporter: LoadReporter,
) -> (JoinHandle<()>, JoinHandle<()>) {
    let quakes = tokio::spawn(load_earthquake_layer(
        client,
        plan.feed_url,
        plan.zone,
        map.earthquakes.clone(),
        reporter.clone(),
    ));
    let plates = tokio::spawn(load_plates_layer(plan.plates_path, map.plates.clone(), reporter));
    (quakes, plates)
}

/// Waits for a load task and logs it if the task panicked or was cancelled.
/// Returns whether the task ran to completion.
pub async fn watch_load(layer: &'static str, handle: JoinHandle<()>) -> bool {
    match handle.await {
        Ok(()) => true,
        Err(err) => {
            error!(layer, error = %err, "overlay load task did not finish");
            false
        }
    }
}

/// Fetches the feed, builds every marker, then hands the full set to the
/// group in one write.
pub async fn load_earthquake_layer(
    client: Client,
    feed_url: String,
    zone: Zone,
    group: SharedGroup<Vec<CircleMarker>>,
    reporter: LoadReporter,
) {
    let outcome = fetch_earthquakes(&client, &feed_url)
        .await
        .map(|collection| build_markers(&collection, zone));

    let mut group = group.write().await;
    match outcome {
        Ok(markers) => {
            let count = markers.len();
            if settle(&mut *group, |g| g.populate(markers)) {
                reporter.loaded(group.key(), count);
            }
        }
        Err(err) => {
            if settle(&mut *group, |g| g.fail(err.to_string())) {
                reporter.failed(group.key(), &err);
            }
        }
    }
}

pub async fn load_plates_layer(
    path: PathBuf,
    group: SharedGroup<BoundaryCollection>,
    reporter: LoadReporter,
) {
    let outcome = load_boundaries(&path).await;

    let mut group = group.write().await;
    match outcome {
        Ok(collection) => {
            let count = collection.features.len();
            if settle(&mut *group, |g| g.populate(collection)) {
                reporter.loaded(group.key(), count);
            }
        }
        Err(err) => {
            if settle(&mut *group, |g| g.fail(err.to_string())) {
                reporter.failed(group.key(), &err);
            }
        }
    }
}

fn settle<T>(
    group: &mut LayerGroup<T>,
    write: impl FnOnce(&mut LayerGroup<T>) -> Result<(), GroupSettled>,
) -> bool {
    match write(group) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "dropping second load result");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn watch_load_reports_panicked_task() {
        let handle = tokio::spawn(async { panic!("loader blew up") });
        assert!(!watch_load("earthquakes", handle).await);
    }

    #[tokio::test]
    async fn watch_load_reports_completed_task() {
        let handle = tokio::spawn(async {});
        assert!(watch_load("plates", handle).await);
    }
}
