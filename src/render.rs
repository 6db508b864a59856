//! Terminal rendering for invitation types.
//!
//! Extension traits that add colored output to undangan-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use undangan_core::countdown::Countdown;
use undangan_core::{MessageLink, VenueLink};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Countdown {
    fn render(&self) -> String {
        match self {
            Countdown::Running(state) => format!(
                "⏳ {} hari {} jam {} menit {} detik",
                state.days.bold(),
                format!("{:02}", state.hours).bold(),
                format!("{:02}", state.minutes).bold(),
                format!("{:02}", state.seconds).bold(),
            ),
            Countdown::Expired => "💍 Acara telah berlangsung. Terima kasih atas doa dan kehadiran Anda!"
                .green()
                .to_string(),
        }
    }
}

impl Render for MessageLink {
    fn render(&self) -> String {
        let message: Vec<String> = self
            .message
            .lines()
            .map(|line| format!("   {}", line.dimmed()))
            .collect();

        format!("{}\n\n🔗 {}", message.join("\n"), self.link.cyan())
    }
}

impl Render for VenueLink {
    fn render(&self) -> String {
        format!("📍 {}: {}", self.label.bold(), self.url.cyan())
    }
}
