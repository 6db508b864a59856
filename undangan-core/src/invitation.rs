//! A validated event config bound to every formatter.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::countdown::{Clock, Countdown, CountdownTimer, compute_countdown};
use crate::error::UndanganResult;
use crate::event_config::EventConfig;
use crate::ics;
use crate::link::whatsapp_link;
use crate::message::{
    GiftRequest, GuestbookInput, RsvpInput, SongRequestInput, build_gift_request_message,
    build_guestbook_message, build_rsvp_message, build_song_request_message,
};

/// A formatted message and the deep link that pre-fills it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageLink {
    pub message: String,
    pub link: String,
}

/// A named external link (venue map, photo filter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueLink {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Invitation {
    config: EventConfig,
}

impl Invitation {
    pub fn new(config: EventConfig) -> UndanganResult<Self> {
        Ok(Invitation {
            config: config.validated()?,
        })
    }

    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        compute_countdown(self.config.event_start, now)
    }

    /// Start the once-per-second countdown towards the event start.
    pub fn start_countdown<C: Clock>(&self, clock: C) -> CountdownTimer {
        CountdownTimer::start(self.config.event_start, clock)
    }

    pub fn rsvp_link(&self, input: &RsvpInput) -> MessageLink {
        self.link_for(build_rsvp_message(input))
    }

    pub fn song_request_link(&self, input: &SongRequestInput) -> MessageLink {
        self.link_for(build_song_request_message(&self.config, input))
    }

    pub fn guestbook_link(&self, input: &GuestbookInput) -> MessageLink {
        self.link_for(build_guestbook_message(&self.config, input))
    }

    pub fn gift_link(&self, request: GiftRequest) -> MessageLink {
        self.link_for(build_gift_request_message(&self.config, request))
    }

    /// Falls back to the configured page URL when `page_url` is `None`.
    pub fn calendar_payload(&self, page_url: Option<&str>) -> String {
        ics::build_calendar_payload(&self.config, self.page_url(page_url))
    }

    pub fn calendar_data_url(&self, page_url: Option<&str>) -> String {
        ics::calendar_data_url(&self.config, self.page_url(page_url))
    }

    pub fn ics_document(&self, page_url: Option<&str>, stamp: DateTime<Utc>) -> UndanganResult<String> {
        ics::generate_ics(&self.config, self.page_url(page_url), stamp)
    }

    /// Configured venue and filter links, in display order.
    pub fn venue_links(&self) -> Vec<VenueLink> {
        [
            ("Akad Nikah", &self.config.akad_map_url),
            ("Resepsi", &self.config.reception_map_url),
            ("Filter Instagram", &self.config.instagram_filter_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_ref().map(|url| VenueLink {
                label,
                url: url.clone(),
            })
        })
        .collect()
    }

    fn page_url<'a>(&'a self, page_url: Option<&'a str>) -> &'a str {
        page_url.unwrap_or(&self.config.page_url)
    }

    fn link_for(&self, message: String) -> MessageLink {
        let link = whatsapp_link(&self.config.contact_phone, &message);
        MessageLink { message, link }
    }
}
