use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

use crate::constants::{
    DEFAULT_CENTER, DEFAULT_FEED_URL, DEFAULT_PLATES_PATH, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_ZOOM,
};
use crate::formatting::Zone;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub feed_url: String,
    pub plates_path: String,
    pub request_timeout_secs: u64,
    /// Offset used for popup times. `None` means the server's local zone.
    pub utc_offset_minutes: Option<i32>,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            feed_url: DEFAULT_FEED_URL.to_string(),
            plates_path: DEFAULT_PLATES_PATH.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            utc_offset_minutes: None,
            center_lat: DEFAULT_CENTER[0],
            center_lon: DEFAULT_CENTER[1],
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Settings {
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(
                    key.trim().to_string(),
                    value.trim().trim_matches('"').to_string(),
                );
            }
        }

        if let Some(feed_url) = config_map.get("feed_url") {
            settings.feed_url = feed_url.clone();
        }
        if let Some(plates_path) = config_map.get("plates_path") {
            settings.plates_path = plates_path.clone();
        }
        parse_into(&config_map, "port", &mut settings.port);
        parse_into(&config_map, "request_timeout_secs", &mut settings.request_timeout_secs);
        parse_into(&config_map, "center_lat", &mut settings.center_lat);
        parse_into(&config_map, "center_lon", &mut settings.center_lon);
        parse_into(&config_map, "zoom", &mut settings.zoom);
        if let Some(offset) = config_map.get("utc_offset_minutes") {
            match offset.parse::<i32>() {
                Ok(minutes) => settings.utc_offset_minutes = Some(minutes),
                Err(_) => warn!(value = %offset, "ignoring invalid utc_offset_minutes"),
            }
        }

        Ok(settings)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Creating config directory")?;
        }

        let mut content = String::new();
        content.push_str("# QuakeMap Configuration File\n");
        content.push_str(&format!("port = {}\n", self.port));
        content.push_str(&format!("feed_url = \"{}\"\n", self.feed_url));
        content.push_str(&format!("plates_path = \"{}\"\n", self.plates_path));
        content.push_str(&format!("request_timeout_secs = {}\n", self.request_timeout_secs));
        match self.utc_offset_minutes {
            Some(minutes) => content.push_str(&format!("utc_offset_minutes = {}\n", minutes)),
            None => content.push_str("# utc_offset_minutes = 0\n"),
        }
        content.push_str(&format!("center_lat = {}\n", self.center_lat));
        content.push_str(&format!("center_lon = {}\n", self.center_lon));
        content.push_str(&format!("zoom = {}\n", self.zoom));

        std::fs::write(config_path, content).context("Failed to write to config file")?;
        Ok(())
    }

    /// Zone for popup times. An out-of-range offset falls back to local time.
    pub fn zone(&self) -> Zone {
        match self.utc_offset_minutes {
            None => Zone::Local,
            Some(minutes) => Zone::from_offset_minutes(minutes).unwrap_or_else(|| {
                warn!(minutes, "utc_offset_minutes out of range, using local time");
                Zone::Local
            }),
        }
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("quakemap.ini");
        path
    }
}

fn parse_into<T: FromStr>(config_map: &HashMap<String, String>, key: &str, slot: &mut T) {
    if let Some(raw) = config_map.get(key) {
        match raw.parse::<T>() {
            Ok(value) => *slot = value,
            Err(_) => warn!(key, value = %raw, "ignoring unparsable config value"),
        }
    }
}
