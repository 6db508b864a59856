//! Calendar export.
//!
//! `payload` builds the minimal newline-joined VEVENT used for the in-page
//! download link; `generate` writes a full RFC 5545 document for saving to disk.

mod generate;
mod payload;

pub use generate::generate_ics;
pub use payload::{build_calendar_payload, calendar_data_url, format_utc};
