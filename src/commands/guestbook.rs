use anyhow::Result;
use undangan_core::Invitation;
use undangan_core::message::GuestbookInput;

use super::{LinkOutput, emit};

pub fn run(invitation: &Invitation, name: String, message: String, output: LinkOutput) -> Result<()> {
    let link = invitation.guestbook_link(&GuestbookInput { name, message });
    emit(&link, output)
}
