use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{sse::Event as SseEvent, Html, Json, Response, Sse},
};
use rust_embed::RustEmbed;
use serde::Serialize;
use tokio::sync::{broadcast, mpsc};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;

use crate::feed::BoundaryCollection;
use crate::map::{LayerStatus, MapDescription, PathStyle};
use crate::markers::CircleMarker;

use super::events::LayerEvent;
use super::state::AppState;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct Asset;

/// `{"status":"ready","markers":[...]}` once loaded, `{"status":"failed","error":".."}`
/// on failure, `{"status":"pending"}` before either.
#[derive(Debug, Serialize)]
pub struct EarthquakesOverlay {
    pub status: LayerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<CircleMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Same as [`EarthquakesOverlay`], with the raw boundary collection and the
/// line style the page draws it with.
#[derive(Debug, Serialize)]
pub struct PlatesOverlay {
    pub status: LayerStatus,
    pub style: PathStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<BoundaryCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn index_html(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

pub async fn style_css() -> Result<Response, StatusCode> {
    embedded_asset("style.css", "text/css")
}

pub async fn script_js() -> Result<Response, StatusCode> {
    embedded_asset("script.js", "application/javascript")
}

fn embedded_asset(name: &str, content_type: &'static str) -> Result<Response, StatusCode> {
    let file = Asset::get(name).ok_or(StatusCode::NOT_FOUND)?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(file.data.into_owned()))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

// API endpoint with the map view, base layers and overlay entries
pub async fn get_map_description(State(state): State<AppState>) -> Json<MapDescription> {
    Json(state.map.description.as_ref().clone())
}

pub async fn get_earthquakes_overlay(State(state): State<AppState>) -> Json<EarthquakesOverlay> {
    let group = state.map.earthquakes.read().await;
    let layer = group.state();
    Json(EarthquakesOverlay {
        status: layer.status(),
        markers: layer.items().cloned(),
        error: layer.error().map(str::to_string),
    })
}

pub async fn get_plates_overlay(State(state): State<AppState>) -> Json<PlatesOverlay> {
    let group = state.map.plates.read().await;
    let layer = group.state();
    Json(PlatesOverlay {
        status: layer.status(),
        style: PathStyle::plates(),
        collection: layer.items().cloned(),
        error: layer.error().map(str::to_string),
    })
}

// SSE endpoint for overlay load notifications
pub async fn layer_events_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let (tx, rx) = mpsc::channel(16);

    let mut event_receiver = state.reporter.subscribe();

    // Forward load events to this client until it disconnects
    tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                event = event_receiver.recv() => match event {
                    Ok(layer_event) => layer_event,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                _ = tokio::time::sleep(Duration::from_secs(30)) => LayerEvent::heartbeat(),
            };

            let sse_event = SseEvent::default()
                .json_data(&event)
                .unwrap_or_else(|_| SseEvent::default().data("Error serializing event"));

            if tx.send(Ok(sse_event)).await.is_err() {
                break; // Client disconnected
            }
        }
    });

    Sse::new(ReceiverStream::new(rx)).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keepalive-message"),
    )
}
