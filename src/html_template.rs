use crate::map::MapDescription;

/// Fills the page template with the map description and the legend markup.
///
/// Both go in as JSON literals inside an inline script, so `</` is escaped to
/// keep a stray `</script>` in the data from closing the tag.
pub fn render_map_page(description: &MapDescription, legend_html: &str) -> serde_json::Result<String> {
    let config = script_safe(serde_json::to_string(description)?);
    let legend = script_safe(serde_json::to_string(legend_html)?);

    Ok(MAP_HTML
        .replace(CONFIG_PLACEHOLDER, &config)
        .replace(LEGEND_PLACEHOLDER, &legend))
}

fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

const CONFIG_PLACEHOLDER: &str = "/*MAP_CONFIG*/null";
const LEGEND_PLACEHOLDER: &str = "/*LEGEND_HTML*/\"\"";

// HTML template for the map page
const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QuakeMap - Recent Earthquakes and Tectonic Plates</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <link rel="stylesheet" href="/style.css" />
</head>
<body>
    <div id="map"></div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        window.QUAKEMAP = {
            map: /*MAP_CONFIG*/null,
            legend: /*LEGEND_HTML*/""
        };
    </script>
    <script src="/script.js"></script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::render_legend;
    use crate::settings::Settings;

    #[test]
    fn placeholders_are_filled() {
        let description = MapDescription::from_settings(&Settings::default());
        let page = render_map_page(&description, &render_legend()).unwrap();

        assert!(!page.contains("/*MAP_CONFIG*/"));
        assert!(!page.contains("/*LEGEND_HTML*/"));
        assert!(page.contains(r#""center":[4.3995,113.9914]"#));
        assert!(page.contains("Earthquake Depth"));
        assert!(page.contains(r#"<script src="/script.js"></script>"#));
    }

    #[test]
    fn closing_tags_in_data_are_escaped() {
        let description = MapDescription::from_settings(&Settings::default());
        let page = render_map_page(&description, "<b>x</b></script>").unwrap();
        assert!(page.contains(r#""<b>x<\/b><\/script>""#));
        assert_eq!(page.matches("</script>").count(), 3);
    }
}
