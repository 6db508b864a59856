use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use undangan_core::Invitation;

use crate::render::Render;

pub fn run(invitation: &Invitation) -> Result<()> {
    let config = invitation.config();

    println!("{}", format!("💐 Pernikahan {}", config.bride_and_groom()).bold());
    println!();
    println!(
        "   Mulai:   {}",
        config.event_start.with_timezone(&Local).format("%Y-%m-%d %H:%M (%:z)")
    );
    println!(
        "   Selesai: {}",
        config.event_end().with_timezone(&Local).format("%Y-%m-%d %H:%M (%:z)")
    );
    println!("   Lokasi:  {}", config.location);
    println!("   Kontak:  +{}", config.contact_phone.dimmed());

    let venues = invitation.venue_links();
    if !venues.is_empty() {
        println!();
        for venue in &venues {
            println!("{}", venue.render());
        }
    }

    Ok(())
}
