use anyhow::Result;
use undangan_core::Invitation;
use undangan_core::message::{Attendance, FoodPreference, RsvpInput};

use super::{LinkOutput, emit};

pub fn run(
    invitation: &Invitation,
    name: String,
    absent: bool,
    party_size: u32,
    reason: Option<String>,
    food: FoodPreference,
    output: LinkOutput,
) -> Result<()> {
    let input = RsvpInput {
        guest_name: name,
        attendance: if absent {
            Attendance::NotAttending
        } else {
            Attendance::Attending
        },
        party_size,
        decline_reason: reason,
        food_preference: food,
    };

    emit(&invitation.rsvp_link(&input), output)
}
