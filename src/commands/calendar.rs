use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use tracing::info;
use undangan_core::Invitation;

pub fn run(
    invitation: &Invitation,
    page_url: Option<String>,
    output: Option<PathBuf>,
    payload: bool,
) -> Result<()> {
    let page_url = page_url.as_deref();

    if let Some(path) = output {
        let ics = invitation
            .ics_document(page_url, Utc::now())
            .context("Failed to generate calendar file")?;

        std::fs::write(&path, ics)
            .with_context(|| format!("Failed to write calendar file at {}", path.display()))?;

        info!(path = %path.display(), "wrote calendar file");
        println!("{}", format!("  Saved: {}", path.display()).green());
        return Ok(());
    }

    if payload {
        println!("{}", invitation.calendar_payload(page_url));
    } else {
        println!("{}", invitation.calendar_data_url(page_url));
    }

    Ok(())
}
