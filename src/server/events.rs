use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{error, info};

use crate::error::LoadError;

// SSE event types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEvent {
    pub event_type: String,
    pub data: LayerEventData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LayerEventData {
    pub layer: Option<String>,
    pub count: Option<usize>,
    pub error_kind: Option<String>,
    pub message: Option<String>,
}

impl LayerEvent {
    pub fn heartbeat() -> Self {
        Self {
            event_type: "heartbeat".to_string(),
            data: LayerEventData {
                message: Some("SSE connection alive".to_string()),
                ..Default::default()
            },
        }
    }
}

/// Single sink for overlay load outcomes: every result is logged, then
/// broadcast to connected pages, which show failures as toasts.
#[derive(Clone)]
pub struct LoadReporter {
    sender: broadcast::Sender<LayerEvent>,
}

impl LoadReporter {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LayerEvent> {
        self.sender.subscribe()
    }

    pub fn loaded(&self, layer: &str, count: usize) {
        info!(layer, count, "overlay loaded");
        self.publish(LayerEvent {
            event_type: "layer_loaded".to_string(),
            data: LayerEventData {
                layer: Some(layer.to_string()),
                count: Some(count),
                message: Some(format!("{} loaded ({} features)", layer, count)),
                ..Default::default()
            },
        });
    }

    pub fn failed(&self, layer: &str, err: &LoadError) {
        error!(layer, kind = err.kind(), error = %err, "overlay failed to load");
        self.publish(LayerEvent {
            event_type: "layer_failed".to_string(),
            data: LayerEventData {
                layer: Some(layer.to_string()),
                error_kind: Some(err.kind().to_string()),
                message: Some(err.to_string()),
                ..Default::default()
            },
        });
    }

    fn publish(&self, event: LayerEvent) {
        // No connected pages is fine; they read the layer state on load.
        let _ = self.sender.send(event);
    }
}
