// Port configuration
pub const DEFAULT_PORT: u16 = 3001;

// Data sources
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_month.geojson";
pub const DEFAULT_PLATES_PATH: &str = "dataset/PB2002_boundaries.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Initial view
pub const DEFAULT_CENTER: [f64; 2] = [4.3995, 113.9914];
pub const DEFAULT_ZOOM: u8 = 2;

// Base tile providers
pub const STREET_TILES_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
pub const TOPO_TILES_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.opentopomap.org/">OpenTopoMap</a> contributors"#;

// Layer names as shown in the layer control
pub const STREET_LAYER_NAME: &str = "Street Map";
pub const TOPO_LAYER_NAME: &str = "Topographic Map";
pub const EARTHQUAKES_OVERLAY_NAME: &str = "Earthquakes";
pub const PLATES_OVERLAY_NAME: &str = "Tectonic Plates";

// Circle sizing: radius = max((mag - C)^EXP, FLOOR) * SCALE, in meters
pub const RADIUS_MAGNITUDE_OFFSET: f64 = 3.0;
pub const RADIUS_EXPONENT: f64 = 1.8;
pub const RADIUS_FLOOR: f64 = 0.1;
pub const RADIUS_SCALE: f64 = 50_000.0;
pub const MARKER_FILL_OPACITY: f64 = 0.7;

// Plate boundary styling
pub const PLATES_COLOR: &str = "#FFA500";
pub const PLATES_WEIGHT: u32 = 2;

// Lower edge of each legend row; the last row is open-ended
pub const LEGEND_DEPTH_LEVELS: [i32; 6] = [-10, 10, 30, 50, 70, 90];
