//! RFC 5545 document generation for saving the event to disk.

use chrono::{DateTime, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};

use super::payload::format_utc;
use crate::error::{UndanganError, UndanganResult};
use crate::event_config::EventConfig;

/// Generate a full .ics document for the wedding.
///
/// `stamp` becomes DTSTAMP, so callers control determinism.
pub fn generate_ics(
    config: &EventConfig,
    page_url: &str,
    stamp: DateTime<Utc>,
) -> UndanganResult<String> {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event_uid(config));
    ics_event.summary(&format!("Pernikahan {}", config.bride_and_groom()));
    ics_event.add_property("DTSTAMP", format_utc(&stamp));
    ics_event.add_property("DTSTART", format_utc(&config.event_start));
    ics_event.add_property("DTEND", format_utc(&config.event_end()));

    if !config.description.is_empty() {
        ics_event.description(&config.description);
    }

    if !config.location.is_empty() {
        ics_event.location(&config.location);
    }

    if !page_url.is_empty() {
        ics_event.add_property("URL", page_url);
    }

    if let Some(minutes) = config.reminder_minutes {
        if minutes < 0 {
            return Err(UndanganError::IcsGenerate(format!(
                "reminder must be before the event, got {minutes} minutes"
            )));
        }
        let trigger = Trigger::before_start(chrono::Duration::minutes(minutes));
        ics_event.alarm(Alarm::display("Reminder", trigger));
    }

    cal.push(ics_event.done());
    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Stable identifier so re-imports update the same calendar entry.
fn event_uid(config: &EventConfig) -> String {
    let slug: String = config
        .bride_and_groom()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{}-{}@undangan", format_utc(&config.event_start), slug)
}

/// Post-process icalendar's output:
/// - replace PRODID
/// - drop CALSCALE:GREGORIAN (the default)
/// - drop DTSTAMP and UID inside VALARM
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:UNDANGAN\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
