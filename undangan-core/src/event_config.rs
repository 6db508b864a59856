//! The fixed description of the wedding event.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{UndanganError, UndanganResult};

/// 2026-02-25 10:00 WIB (UTC+7).
const DEFAULT_EVENT_START_UNIX: i64 = 1_771_988_400;

/// Longest accepted event, one week.
pub const MAX_EVENT_DURATION_HOURS: u32 = 7 * 24;

/// Wedding event configuration, loaded once and never mutated afterwards.
///
/// Every field has a default so a partial config file still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub bride_name: String,
    pub groom_name: String,

    /// Country code followed by digits, e.g. `6285642245331`.
    pub contact_phone: String,

    /// Accepts any RFC 3339 offset; stored in UTC.
    pub event_start: DateTime<Utc>,
    pub event_duration_hours: u32,

    pub location: String,
    pub description: String,

    /// Public address of the invitation page, used as the calendar URL.
    pub page_url: String,

    pub akad_map_url: Option<String>,
    pub reception_map_url: Option<String>,
    pub instagram_filter_url: Option<String>,

    /// Lead time of the reminder alarm in exported .ics files.
    pub reminder_minutes: Option<i64>,
}

impl Default for EventConfig {
    fn default() -> Self {
        EventConfig {
            bride_name: "Adinda Larasati".to_string(),
            groom_name: "Bima Perkasa".to_string(),
            contact_phone: "6285642245331".to_string(),
            event_start: DateTime::from_timestamp(DEFAULT_EVENT_START_UNIX, 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
            event_duration_hours: 4,
            location: "The Grand Ballroom, Jakarta".to_string(),
            description: "Jangan lupa untuk menghadiri hari bahagia kami!".to_string(),
            page_url: "https://undangan.example/adinda-bima".to_string(),
            akad_map_url: Some(
                "https://www.google.com/maps/search/?api=1&query=Masjid+Istiqlal+Jakarta"
                    .to_string(),
            ),
            reception_map_url: Some(
                "https://www.google.com/maps/search/?api=1&query=Hotel+Indonesia+Kempinski+Jakarta"
                    .to_string(),
            ),
            instagram_filter_url: None,
            reminder_minutes: Some(24 * 60),
        }
    }
}

impl EventConfig {
    /// Normalize the phone number and check the invariants the formatters rely on.
    pub fn validated(mut self) -> UndanganResult<Self> {
        self.contact_phone = normalize_phone(&self.contact_phone)?;

        if !(1..=MAX_EVENT_DURATION_HOURS).contains(&self.event_duration_hours) {
            return Err(UndanganError::InvalidDuration(self.event_duration_hours));
        }

        if self.bride_name.trim().is_empty() || self.groom_name.trim().is_empty() {
            return Err(UndanganError::Config(
                "bride_name and groom_name must not be empty".into(),
            ));
        }

        Ok(self)
    }

    /// Start plus the configured duration. Crosses day boundaries as needed.
    pub fn event_end(&self) -> DateTime<Utc> {
        self.event_start
            .checked_add_signed(Duration::hours(i64::from(self.event_duration_hours)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// "Groom & Bride", the order used in guest-facing messages.
    pub fn groom_and_bride(&self) -> String {
        format!("{} & {}", self.groom_name, self.bride_name)
    }

    /// "Bride & Groom", the order used in the calendar summary.
    pub fn bride_and_groom(&self) -> String {
        format!("{} & {}", self.bride_name, self.groom_name)
    }
}

/// Strip `+`, spaces and dashes, then require ASCII digits only.
fn normalize_phone(raw: &str) -> UndanganResult<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '+' | ' ' | '-'))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(UndanganError::InvalidPhone(raw.to_string()));
    }

    Ok(digits)
}
