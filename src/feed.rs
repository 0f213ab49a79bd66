use serde::Deserialize;

// Earthquake feed (USGS summary GeoJSON). Only the fields the map uses are
// modelled; everything else in the payload is ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct QuakeCollection {
    pub features: Vec<QuakeFeature>,
}

impl QuakeCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuakeFeature {
    #[serde(default)]
    pub id: Option<String>,
    pub properties: QuakeProperties,
    pub geometry: PointGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuakeProperties {
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
    /// Event time, epoch milliseconds.
    pub time: i64,
    pub status: String,
    /// PAGER level: green, yellow, orange, red, or absent.
    #[serde(default)]
    pub alert: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    pub coordinates: Hypocenter,
}

/// Longitude, latitude and depth of an event, read from the
/// `[lon, lat, depth]` coordinate array.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Hypocenter {
    pub lon: f64,
    pub lat: f64,
    pub depth: f64,
}

impl TryFrom<Vec<f64>> for Hypocenter {
    type Error = String;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            [lon, lat, depth, ..] => Ok(Hypocenter {
                lon: *lon,
                lat: *lat,
                depth: *depth,
            }),
            _ => Err(format!(
                "expected [longitude, latitude, depth], got {} value(s)",
                coords.len()
            )),
        }
    }
}

// Plate boundaries are plain GeoJSON, passed through to the page unchanged.
pub use geojson::FeatureCollection as BoundaryCollection;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_usgs_feature() {
        let payload = json!({
            "type": "FeatureCollection",
            "metadata": { "count": 1 },
            "features": [{
                "type": "Feature",
                "id": "us7000abcd",
                "properties": {
                    "mag": 5.4,
                    "place": "120 km S of Sand Point, Alaska",
                    "time": 1_700_000_000_000i64,
                    "status": "reviewed",
                    "alert": null,
                    "tsunami": 0
                },
                "geometry": { "type": "Point", "coordinates": [-160.5, 54.2, 35.0] }
            }]
        });

        let collection: QuakeCollection = serde_json::from_value(payload).unwrap();
        assert_eq!(collection.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(feature.id.as_deref(), Some("us7000abcd"));
        assert_eq!(feature.properties.mag, Some(5.4));
        assert_eq!(feature.properties.alert, None);
        assert_eq!(
            feature.geometry.coordinates,
            Hypocenter { lon: -160.5, lat: 54.2, depth: 35.0 }
        );
    }

    #[test]
    fn missing_depth_is_rejected() {
        let payload = json!({
            "features": [{
                "properties": { "time": 0, "status": "automatic" },
                "geometry": { "coordinates": [10.0, 20.0] }
            }]
        });
        let err = serde_json::from_value::<QuakeCollection>(payload).unwrap_err();
        assert!(err.to_string().contains("got 2 value(s)"), "{err}");
    }

    #[test]
    fn missing_features_is_rejected() {
        let err = serde_json::from_value::<QuakeCollection>(json!({ "type": "FeatureCollection" }))
            .unwrap_err();
        assert!(err.to_string().contains("features"));
    }

    #[test]
    fn boundary_collection_passes_through() {
        let payload = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "AF-AN",
                    "properties": { "Name": "AF-AN" },
                    "geometry": { "type": "LineString", "coordinates": [[-0.43, -54.85], [-0.04, -54.82]] }
                },
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
                }
            ]
        });

        let collection: BoundaryCollection = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(collection.features.len(), 2);
        assert!(matches!(
            collection.features[0].geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::LineString(line)) if line.len() == 2
        ));

        let back = serde_json::to_value(&collection).unwrap();
        assert_eq!(back["features"][0]["id"], "AF-AN");
        assert_eq!(back["features"][0]["geometry"], payload["features"][0]["geometry"]);
        assert_eq!(back["features"][1]["geometry"], payload["features"][1]["geometry"]);
    }

    #[test]
    fn unknown_geometry_type_is_rejected() {
        let payload = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Circle", "coordinates": [0.0, 0.0] }
            }]
        });
        assert!(serde_json::from_value::<BoundaryCollection>(payload).is_err());
    }
}
