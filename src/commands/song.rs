use anyhow::Result;
use undangan_core::Invitation;
use undangan_core::message::SongRequestInput;

use super::{LinkOutput, emit};

pub fn run(invitation: &Invitation, title: String, artist: String, output: LinkOutput) -> Result<()> {
    let link = invitation.song_request_link(&SongRequestInput { title, artist });
    emit(&link, output)
}
