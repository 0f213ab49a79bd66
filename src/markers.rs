use serde::Serialize;

use crate::constants::MARKER_FILL_OPACITY;
use crate::feed::{QuakeCollection, QuakeFeature};
use crate::formatting::{alert_description, escape_html, format_timestamp, Zone};
use crate::symbology::{depth_color, magnitude_radius};

/// One earthquake as a Leaflet circle: position, style and popup content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub id: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    /// Meters.
    pub radius: f64,
    pub popup: String,
}

/// Builds one marker per feature, in feed order.
pub fn build_markers(collection: &QuakeCollection, zone: Zone) -> Vec<CircleMarker> {
    collection
        .features
        .iter()
        .map(|feature| build_marker(feature, zone))
        .collect()
}

pub fn build_marker(feature: &QuakeFeature, zone: Zone) -> CircleMarker {
    let position = feature.geometry.coordinates;
    let color = depth_color(position.depth);
    // A missing magnitude falls through to the floor radius.
    let radius = magnitude_radius(feature.properties.mag.unwrap_or(f64::NAN));

    CircleMarker {
        id: feature.id.clone(),
        lat: position.lat,
        lng: position.lon,
        color,
        fill_color: color,
        fill_opacity: MARKER_FILL_OPACITY,
        radius,
        popup: popup_html(feature, zone),
    }
}

/// Popup markup: place heading followed by one labelled row per property.
pub fn popup_html(feature: &QuakeFeature, zone: Zone) -> String {
    let props = &feature.properties;
    let place = props.place.as_deref().unwrap_or("Unknown location");
    let magnitude = props
        .mag
        .map(|mag| mag.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let alert = props.alert.as_deref();
    let pager = format!(
        "{} {}",
        escape_html(alert.unwrap_or("none")),
        alert_description(alert)
    );

    let mut html = format!("<h2>{}</h2>", escape_html(place));
    push_row(&mut html, "Magnitude", &magnitude);
    push_row(&mut html, "Depth", &feature.geometry.coordinates.depth.to_string());
    push_row(&mut html, "Status", &escape_html(&props.status));
    push_row(&mut html, "Time", &format_timestamp(props.time, zone));
    push_row(&mut html, "PAGER result", &pager);
    html
}

fn push_row(html: &mut String, label: &str, value: &str) {
    html.push_str("<p class='property-name'>");
    html.push_str(label);
    html.push_str(": <strong>");
    html.push_str(value);
    html.push_str("</strong></p>");
}
