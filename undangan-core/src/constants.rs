/// Base URL of the WhatsApp "click to chat" endpoint.
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Substituted for a blank guest name.
pub const GUEST_PLACEHOLDER: &str = "Tamu";

/// Prefix of the calendar download link.
pub const CALENDAR_DATA_URL_PREFIX: &str = "data:text/calendar;charset=utf8,";

/// Countdown re-evaluation cadence, in milliseconds.
pub const TICK_MILLIS: u64 = 1_000;

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
