use std::io::Write;

use anyhow::Result;
use undangan_core::Invitation;
use undangan_core::countdown::SystemClock;

use crate::render::Render;

pub async fn run(invitation: &Invitation, watch: bool) -> Result<()> {
    if !watch {
        println!("{}", invitation.countdown(chrono::Utc::now()).render());
        return Ok(());
    }

    let timer = invitation.start_countdown(SystemClock);
    let mut rx = timer.subscribe();
    let mut stdout = std::io::stdout();

    let current = timer.current();
    print!("\r{}", current.render());
    stdout.flush()?;

    if current.is_expired() {
        println!();
        return Ok(());
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let countdown = *rx.borrow_and_update();
                // Clear the rest of the line; the expired banner is longer.
                print!("\r\x1b[2K{}", countdown.render());
                stdout.flush()?;
                if countdown.is_expired() {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                timer.cancel();
                break;
            }
        }
    }

    println!();
    timer.join().await;
    Ok(())
}
