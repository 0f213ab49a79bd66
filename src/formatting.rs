use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

const TIME_FORMAT: &str = "%Y/%m/%d, %H:%M";
pub const UNKNOWN_TIME: &str = "(unknown time)";
pub const UNKNOWN_ALERT: &str = "(N/A)";

/// Time zone used when printing event times in popups.
///
/// `Local` follows the machine the server runs on. That matches the viewer's
/// zone only because the server binds to 127.0.0.1, so the browser runs on
/// the same machine. If the server is ever exposed on another interface,
/// configure a `Fixed` offset instead. `Fixed` is also what reproducible
/// output needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// `None` when the offset is a day or more away from UTC.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Zone::Fixed)
    }
}

/// Formats epoch milliseconds as `YYYY/MM/DD, HH:MM` in `zone`.
pub fn format_timestamp(millis: i64, zone: Zone) -> String {
    let Some(instant) = DateTime::<Utc>::from_timestamp_millis(millis) else {
        return UNKNOWN_TIME.to_string();
    };
    match zone {
        Zone::Local => instant.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        Zone::Fixed(offset) => instant.with_timezone(&offset).format(TIME_FORMAT).to_string(),
    }
}

/// Human-readable meaning of a PAGER alert level.
pub fn alert_description(alert: Option<&str>) -> &'static str {
    match alert {
        Some("green") => "(minimal or no impact)",
        Some("yellow") => "(regional impact and response)",
        Some("orange") => "(national-scale impact and response)",
        Some("red") => "(international response)",
        _ => UNKNOWN_ALERT,
    }
}

/// Escapes text from the feed before it is placed inside popup markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
