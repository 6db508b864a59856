//! Core engines for a wedding invitation.
//!
//! - `countdown`: remaining time until the event, and a cancellable 1s timer
//! - `message` / `link`: guest messages and pre-filled WhatsApp deep links
//! - `ics`: calendar payload, data URL, and full .ics export
//! - `music`: background-music playing flag over a playback collaborator
//! - `invitation`: a validated `EventConfig` bound to all of the above

pub mod constants;
pub mod countdown;
pub mod error;
pub mod event_config;
pub mod ics;
pub mod invitation;
pub mod link;
pub mod message;
pub mod music;

pub use error::{UndanganError, UndanganResult};
pub use event_config::EventConfig;
pub use invitation::{Invitation, MessageLink, VenueLink};
