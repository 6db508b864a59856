pub mod calendar;
pub mod countdown;
pub mod gift;
pub mod guestbook;
pub mod info;
pub mod init;
pub mod rsvp;
pub mod song;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use undangan_core::MessageLink;

use crate::render::Render;

/// How a generated deep link is delivered.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LinkOutput {
    /// Open the link in the default browser
    #[arg(long)]
    pub open: bool,

    /// Print the message and link as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn emit(link: &MessageLink, output: LinkOutput) -> Result<()> {
    if output.json {
        let json = serde_json::to_string_pretty(link).context("Failed to serialize link")?;
        println!("{json}");
    } else {
        println!("{}", link.render());
    }

    if output.open {
        info!(link = %link.link, "opening link in browser");
        open::that(&link.link).context("Failed to open link in browser")?;
    }

    Ok(())
}
