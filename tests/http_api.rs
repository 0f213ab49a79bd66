use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use quakemap::feed::BoundaryCollection;
use quakemap::formatting::Zone;
use quakemap::map::{MapContext, MapDescription};
use quakemap::markers::build_markers;
use quakemap::server::create_app;
use quakemap::server::events::LoadReporter;
use quakemap::server::state::AppState;
use quakemap::settings::Settings;

const ONE_RED: &str = include_str!("fixtures/quakes_one_red.geojson");
const PLATES: &str = include_str!("fixtures/plates_sample.json");

fn app_with(map: MapContext) -> Router {
    let state = AppState::new(map, LoadReporter::new(8)).unwrap();
    create_app(state)
}

fn new_map() -> MapContext {
    MapContext::new(MapDescription::from_settings(&Settings::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> Value {
    let (status, _, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn index_page_embeds_map_and_legend() {
    let (status, content_type, body) = get(app_with(new_map()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));

    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("leaflet@1.9.4"));
    assert!(page.contains("Street Map"));
    assert!(page.contains("Topographic Map"));
    assert!(page.contains("Earthquake Depth"));
}

#[tokio::test]
async fn embedded_assets_are_served() {
    let (status, content_type, body) = get(app_with(new_map()), "/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/javascript"));
    assert!(String::from_utf8(body).unwrap().contains("L.control.layers"));

    let (status, content_type, _) = get(app_with(new_map()), "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
}

#[tokio::test]
async fn map_description_lists_layers() {
    let description = get_json(app_with(new_map()), "/api/map").await;
    assert_eq!(description["view"]["zoom"], 2);
    assert_eq!(description["base_layers"].as_array().unwrap().len(), 2);
    assert_eq!(description["overlays"][0]["endpoint"], "/api/overlays/earthquakes");
    assert_eq!(description["overlays"][1]["style"]["color"], "#FFA500");
    assert_eq!(description["legend_position"], "bottomright");
}

#[tokio::test]
async fn overlays_report_pending_before_load() {
    let map = new_map();
    let quakes = get_json(app_with(map.clone()), "/api/overlays/earthquakes").await;
    assert_eq!(quakes, serde_json::json!({ "status": "pending" }));

    let plates = get_json(app_with(map), "/api/overlays/plates").await;
    assert_eq!(
        plates,
        serde_json::json!({ "status": "pending", "style": { "color": "#FFA500", "weight": 2 } })
    );
}

#[tokio::test]
async fn ready_overlays_carry_their_items() {
    let map = new_map();
    let collection = serde_json::from_str(ONE_RED).unwrap();
    map.earthquakes
        .write()
        .await
        .populate(build_markers(&collection, Zone::utc()))
        .unwrap();
    let plates: BoundaryCollection = serde_json::from_str(PLATES).unwrap();
    map.plates.write().await.populate(plates).unwrap();

    let quakes = get_json(app_with(map.clone()), "/api/overlays/earthquakes").await;
    assert_eq!(quakes["status"], "ready");
    assert!(quakes.get("error").is_none());
    let marker = &quakes["markers"][0];
    assert_eq!(marker["color"], "#800026");
    assert_eq!(marker["fill_opacity"], 0.7);
    assert!(marker["popup"].as_str().unwrap().contains("PAGER result: <strong>red"));

    let plates = get_json(app_with(map), "/api/overlays/plates").await;
    assert_eq!(plates["status"], "ready");
    assert_eq!(plates["style"]["color"], "#FFA500");
    assert_eq!(plates["collection"]["type"], "FeatureCollection");
    assert_eq!(plates["collection"]["features"][1]["geometry"]["type"], "LineString");
}

#[tokio::test]
async fn failed_overlay_exposes_error() {
    let map = new_map();
    map.plates
        .write()
        .await
        .fail("cannot read dataset/PB2002_boundaries.json: No such file or directory")
        .unwrap();

    let plates = get_json(app_with(map), "/api/overlays/plates").await;
    assert_eq!(plates["status"], "failed");
    assert!(plates["error"].as_str().unwrap().starts_with("cannot read"));
    assert!(plates.get("collection").is_none());
}

#[tokio::test]
async fn empty_earthquake_overlay_has_markers_key() {
    let map = new_map();
    map.earthquakes.write().await.populate(Vec::new()).unwrap();

    let quakes = get_json(app_with(map), "/api/overlays/earthquakes").await;
    assert_eq!(quakes, serde_json::json!({ "status": "ready", "markers": [] }));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _, _) = get(app_with(new_map()), "/api/overlays/volcanoes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
