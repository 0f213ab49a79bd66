//! QuakeMap: a local web map of recent earthquakes and tectonic plate
//! boundaries.
//!
//! The server fetches the USGS summary feed and a plate boundary file once,
//! turns them into map overlays and serves a Leaflet page that displays them
//! over a choice of street or topographic tiles, with a depth legend.

pub mod constants;
pub mod error;
pub mod feed;
pub mod formatting;
pub mod html_template;
pub mod legend;
pub mod loader;
pub mod map;
pub mod markers;
pub mod overlays;
pub mod server;
pub mod settings;
pub mod symbology;
