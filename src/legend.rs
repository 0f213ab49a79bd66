use crate::constants::LEGEND_DEPTH_LEVELS;
use crate::symbology::depth_color;

const LEGEND_STYLE: &str =
    "background-color: white; padding: 8px; border: 1px solid black; border-radius: 5px;";
const SWATCH_STYLE: &str = "width: 20px; height: 20px; display: inline-block; margin-right: 4px;";

/// Depth legend panel. Each swatch samples the palette one unit above the
/// row's lower edge so it falls inside the bucket.
pub fn render_legend() -> String {
    let mut html = format!(r#"<div class="info legend" style="{LEGEND_STYLE}">"#);
    html.push_str("<h4>Earthquake Depth</h4>");

    for (i, level) in LEGEND_DEPTH_LEVELS.iter().enumerate() {
        let color = depth_color(f64::from(level + 1));
        html.push_str(&format!(r#"<i style="background:{color}; {SWATCH_STYLE}"></i> {level}"#));
        match LEGEND_DEPTH_LEVELS.get(i + 1) {
            Some(next) => html.push_str(&format!("&ndash;{next}<br>")),
            None => html.push('+'),
        }
    }

    html.push_str("</div>");
    html
}
