use std::sync::Arc;

use crate::html_template::render_map_page;
use crate::legend::render_legend;
use crate::map::MapContext;
use super::events::LoadReporter;

// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub map: MapContext,
    pub reporter: LoadReporter,
    /// Map page rendered once at startup; the legend and map description
    /// never change while the server runs.
    pub page: Arc<String>,
}

impl AppState {
    pub fn new(map: MapContext, reporter: LoadReporter) -> serde_json::Result<Self> {
        let page = render_map_page(&map.description, &render_legend())?;
        Ok(Self {
            map,
            reporter,
            page: Arc::new(page),
        })
    }
}
