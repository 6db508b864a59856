use anyhow::Result;
use undangan_core::Invitation;
use undangan_core::message::GiftRequest;

use super::{LinkOutput, emit};

pub fn run(invitation: &Invitation, request: GiftRequest, output: LinkOutput) -> Result<()> {
    emit(&invitation.gift_link(request), output)
}
