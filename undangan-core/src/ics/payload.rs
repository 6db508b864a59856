use chrono::{DateTime, Utc};

use crate::constants::CALENDAR_DATA_URL_PREFIX;
use crate::event_config::EventConfig;
use crate::link::percent_encode;

/// Compact UTC timestamp: `YYYYMMDDTHHMMSSZ`.
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Keep a property value on one line.
fn single_line(value: &str) -> String {
    value.replace("\r\n", "\\n").replace(['\r', '\n'], "\\n")
}

/// The minimal VCALENDAR document, lines joined with `\n`.
pub fn build_calendar_payload(config: &EventConfig, page_url: &str) -> String {
    [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("URL:{}", single_line(page_url)),
        format!("DTSTART:{}", format_utc(&config.event_start)),
        format!("DTEND:{}", format_utc(&config.event_end())),
        format!("SUMMARY:Pernikahan {}", single_line(&config.bride_and_groom())),
        format!("DESCRIPTION:{}", single_line(&config.description)),
        format!("LOCATION:{}", single_line(&config.location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
    .join("\n")
}

/// `data:text/calendar` URL carrying the percent-encoded payload.
pub fn calendar_data_url(config: &EventConfig, page_url: &str) -> String {
    format!(
        "{}{}",
        CALENDAR_DATA_URL_PREFIX,
        percent_encode(&build_calendar_payload(config, page_url))
    )
}
