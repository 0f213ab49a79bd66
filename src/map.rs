use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::constants::{
    EARTHQUAKES_OVERLAY_NAME, PLATES_COLOR, PLATES_OVERLAY_NAME, PLATES_WEIGHT,
    STREET_ATTRIBUTION, STREET_LAYER_NAME, STREET_TILES_URL, TOPO_ATTRIBUTION, TOPO_LAYER_NAME,
    TOPO_TILES_URL,
};
use crate::error::GroupSettled;
use crate::feed::BoundaryCollection;
use crate::markers::CircleMarker;
use crate::settings::Settings;

/// Initial center and zoom of the map canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
}

/// A background tile source. Exactly one is visible at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileProvider {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: u32,
}

impl PathStyle {
    pub fn plates() -> Self {
        Self {
            color: PLATES_COLOR,
            weight: PLATES_WEIGHT,
        }
    }
}

/// An overlay entry in the layer control and the endpoint the page reads it from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub endpoint: &'static str,
    /// Added to the map as soon as it is populated.
    pub show_when_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PathStyle>,
}

/// Everything the page needs to build the map, the layer control and the
/// legend placement. Serialized into the page as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDescription {
    pub view: MapView,
    pub base_layers: Vec<TileProvider>,
    pub overlays: Vec<OverlayEntry>,
    pub legend_position: &'static str,
}

impl MapDescription {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            view: MapView {
                center: [settings.center_lat, settings.center_lon],
                zoom: settings.zoom,
            },
            base_layers: vec![
                TileProvider {
                    name: STREET_LAYER_NAME,
                    url: STREET_TILES_URL,
                    attribution: STREET_ATTRIBUTION,
                    selected: true,
                },
                TileProvider {
                    name: TOPO_LAYER_NAME,
                    url: TOPO_TILES_URL,
                    attribution: TOPO_ATTRIBUTION,
                    selected: false,
                },
            ],
            overlays: vec![
                OverlayEntry {
                    key: EARTHQUAKES_KEY,
                    name: EARTHQUAKES_OVERLAY_NAME,
                    endpoint: "/api/overlays/earthquakes",
                    show_when_ready: true,
                    style: None,
                },
                OverlayEntry {
                    key: PLATES_KEY,
                    name: PLATES_OVERLAY_NAME,
                    endpoint: "/api/overlays/plates",
                    show_when_ready: false,
                    style: Some(PathStyle::plates()),
                },
            ],
            legend_position: "bottomright",
        }
    }
}

pub const EARTHQUAKES_KEY: &str = "earthquakes";
pub const PLATES_KEY: &str = "plates";

/// Load state of a layer group.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerState<T> {
    Pending,
    Ready { items: T },
    Failed { error: String },
}

impl<T> LayerState<T> {
    pub fn status(&self) -> LayerStatus {
        match self {
            LayerState::Pending => LayerStatus::Pending,
            LayerState::Ready { .. } => LayerStatus::Ready,
            LayerState::Failed { .. } => LayerStatus::Failed,
        }
    }

    pub fn items(&self) -> Option<&T> {
        match self {
            LayerState::Ready { items } => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LayerState::Failed { error } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerStatus {
    Pending,
    Ready,
    Failed,
}

/// A named overlay whose contents are set exactly once.
#[derive(Debug, Clone)]
pub struct LayerGroup<T> {
    key: &'static str,
    state: LayerState<T>,
}

impl<T> LayerGroup<T> {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            state: LayerState::Pending,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn state(&self) -> &LayerState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LayerState::Pending)
    }

    pub fn populate(&mut self, items: T) -> Result<(), GroupSettled> {
        self.settle(LayerState::Ready { items })
    }

    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), GroupSettled> {
        self.settle(LayerState::Failed {
            error: error.into(),
        })
    }

    fn settle(&mut self, next: LayerState<T>) -> Result<(), GroupSettled> {
        if !self.is_pending() {
            return Err(GroupSettled(self.key));
        }
        self.state = next;
        Ok(())
    }
}

pub type SharedGroup<T> = Arc<RwLock<LayerGroup<T>>>;

/// Owns the map description and the two overlay groups for the lifetime of
/// the server. Each loader receives only the handle of the group it fills.
#[derive(Clone)]
pub struct MapContext {
    pub description: Arc<MapDescription>,
    pub earthquakes: SharedGroup<Vec<CircleMarker>>,
    pub plates: SharedGroup<BoundaryCollection>,
}

impl MapContext {
    pub fn new(description: MapDescription) -> Self {
        Self {
            description: Arc::new(description),
            earthquakes: Arc::new(RwLock::new(LayerGroup::new(EARTHQUAKES_KEY))),
            plates: Arc::new(RwLock::new(LayerGroup::new(PLATES_KEY))),
        }
    }
}
