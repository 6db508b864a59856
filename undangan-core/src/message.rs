//! Guest-facing message templates.
//!
//! Every builder is total: blank input degrades to placeholders or empty
//! fields rather than failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::GUEST_PLACEHOLDER;
use crate::error::UndanganError;
use crate::event_config::EventConfig;

/// RSVP status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    #[default]
    Attending,
    NotAttending,
}

impl Attendance {
    pub fn label(&self) -> &'static str {
        match self {
            Attendance::Attending => "Hadir",
            Attendance::NotAttending => "Tidak Hadir",
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attendance {
    type Err = UndanganError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hadir" | "attending" | "yes" => Ok(Attendance::Attending),
            "tidak hadir" | "tidak-hadir" | "not-attending" | "no" => {
                Ok(Attendance::NotAttending)
            }
            _ => Err(UndanganError::UnknownAttendance(s.to_string())),
        }
    }
}

/// Meal preference, shown only for attending guests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPreference {
    #[default]
    NoPreference,
    Vegetarian,
    NutAllergy,
}

impl FoodPreference {
    pub fn label(&self) -> &'static str {
        match self {
            FoodPreference::NoPreference => "Tanpa Preferensi",
            FoodPreference::Vegetarian => "Vegetarian",
            FoodPreference::NutAllergy => "Alergi Kacang",
        }
    }
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodPreference {
    type Err = UndanganError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "tanpa preferensi" | "tanpa-preferensi" => Ok(FoodPreference::NoPreference),
            "vegetarian" => Ok(FoodPreference::Vegetarian),
            "nut-allergy" | "alergi kacang" | "alergi-kacang" => Ok(FoodPreference::NutAllergy),
            _ => Err(UndanganError::UnknownFoodPreference(s.to_string())),
        }
    }
}

/// RSVP form contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpInput {
    pub guest_name: String,
    pub attendance: Attendance,
    /// Ignored when not attending.
    pub party_size: u32,
    /// Ignored when attending.
    pub decline_reason: Option<String>,
    /// Ignored when not attending.
    pub food_preference: FoodPreference,
}

impl Default for RsvpInput {
    fn default() -> Self {
        RsvpInput {
            guest_name: String::new(),
            attendance: Attendance::Attending,
            party_size: 1,
            decline_reason: None,
            food_preference: FoodPreference::NoPreference,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRequestInput {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookInput {
    pub name: String,
    pub message: String,
}

/// Digital gift details the guest can ask the couple for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GiftRequest {
    BankTransfer,
    EWallet,
}

impl FromStr for GiftRequest {
    type Err = UndanganError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bank" | "rekening" | "transfer" => Ok(GiftRequest::BankTransfer),
            "ewallet" | "e-wallet" | "qr" => Ok(GiftRequest::EWallet),
            _ => Err(UndanganError::UnknownGiftRequest(s.to_string())),
        }
    }
}

/// Trimmed guest name, or the placeholder when blank.
fn display_name(raw: &str) -> &str {
    match raw.trim() {
        "" => GUEST_PLACEHOLDER,
        name => name,
    }
}

pub fn build_rsvp_message(input: &RsvpInput) -> String {
    let name = display_name(&input.guest_name);

    match input.attendance {
        Attendance::Attending => format!(
            "Halo, saya {name} ingin mengonfirmasi kehadiran di pernikahan Anda.\n\n\
             Jumlah yang akan hadir: {} orang.\n\
             Preferensi Makanan: {}.\n\n\
             Terima kasih!",
            input.party_size.max(1),
            input.food_preference,
        ),
        Attendance::NotAttending => {
            let mut message =
                format!("Halo, saya {name} mohon maaf belum bisa hadir di pernikahan Anda.");

            if let Some(reason) = input.decline_reason.as_deref() {
                if !reason.trim().is_empty() {
                    message.push_str("\n\nAlasan: ");
                    message.push_str(reason);
                }
            }

            message.push_str("\n\nDoa terbaik untuk kedua mempelai.");
            message
        }
    }
}

pub fn build_song_request_message(config: &EventConfig, input: &SongRequestInput) -> String {
    format!(
        "Permintaan Lagu untuk Pernikahan {}:\n\nLagu: {}\nArtis: {}",
        config.groom_and_bride(),
        input.title,
        input.artist
    )
}

pub fn build_guestbook_message(config: &EventConfig, input: &GuestbookInput) -> String {
    format!(
        "Pesan & Doa untuk Pernikahan {}:\n\nDari: {}\n\nPesan:\n{}",
        config.groom_and_bride(),
        input.name,
        input.message
    )
}

pub fn build_gift_request_message(config: &EventConfig, request: GiftRequest) -> String {
    let subject = match request {
        GiftRequest::BankTransfer => "informasi nomor rekening",
        GiftRequest::EWallet => "QR Code E-Wallet",
    };

    format!(
        "Halo, saya ingin meminta {subject} untuk hadiah pernikahan {}. Terima kasih.",
        config.groom_and_bride()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attending(name: &str, party_size: u32, food: FoodPreference) -> RsvpInput {
        RsvpInput {
            guest_name: name.to_string(),
            party_size,
            food_preference: food,
            ..RsvpInput::default()
        }
    }

    fn declining(reason: Option<&str>) -> RsvpInput {
        RsvpInput {
            guest_name: "Rina".to_string(),
            attendance: Attendance::NotAttending,
            decline_reason: reason.map(str::to_string),
            ..RsvpInput::default()
        }
    }

    #[test]
    fn attending_message_is_exact() {
        let message = build_rsvp_message(&attending("Budi", 2, FoodPreference::NutAllergy));
        assert_eq!(
            message,
            "Halo, saya Budi ingin mengonfirmasi kehadiran di pernikahan Anda.\n\n\
             Jumlah yang akan hadir: 2 orang.\nPreferensi Makanan: Alergi Kacang.\n\nTerima kasih!"
        );
    }

    #[test]
    fn blank_name_uses_placeholder() {
        let message = build_rsvp_message(&attending("", 3, FoodPreference::Vegetarian));
        assert!(message.contains("saya Tamu ingin"), "{message}");
        assert!(message.contains("3 orang"));
        assert!(message.contains("Vegetarian"));

        let message = build_rsvp_message(&attending("   \t", 1, FoodPreference::NoPreference));
        assert!(message.contains("saya Tamu ingin"), "{message}");
    }

    #[test]
    fn name_is_trimmed() {
        let message = build_rsvp_message(&attending("  Budi  ", 1, FoodPreference::NoPreference));
        assert!(message.starts_with("Halo, saya Budi ingin"));
        assert!(message.contains("Preferensi Makanan: Tanpa Preferensi."));
    }

    #[test]
    fn declining_without_reason_has_no_reason_line() {
        for reason in [None, Some(""), Some("   ")] {
            let message = build_rsvp_message(&declining(reason));
            assert!(!message.contains("Alasan:"), "{message}");
            assert_eq!(
                message,
                "Halo, saya Rina mohon maaf belum bisa hadir di pernikahan Anda.\n\n\
                 Doa terbaik untuk kedua mempelai."
            );
        }
    }

    #[test]
    fn declining_with_reason_includes_it() {
        let message = build_rsvp_message(&declining(Some("sakit")));
        assert!(message.contains("Alasan: sakit"));
        assert!(message.ends_with("\n\nDoa terbaik untuk kedua mempelai."));
        assert!(!message.contains("orang"));
    }

    #[test]
    fn song_request_uses_couple_names() {
        let config = EventConfig::default();
        let message = build_song_request_message(
            &config,
            &SongRequestInput {
                title: "Kita Ke Sana".to_string(),
                artist: "Hindia".to_string(),
            },
        );
        assert_eq!(
            message,
            "Permintaan Lagu untuk Pernikahan Bima Perkasa & Adinda Larasati:\n\n\
             Lagu: Kita Ke Sana\nArtis: Hindia"
        );
    }

    #[test]
    fn guestbook_allows_empty_fields() {
        let config = EventConfig::default();
        let message = build_guestbook_message(&config, &GuestbookInput::default());
        assert_eq!(
            message,
            "Pesan & Doa untuk Pernikahan Bima Perkasa & Adinda Larasati:\n\nDari: \n\nPesan:\n"
        );
    }

    #[test]
    fn gift_requests_are_constant_per_config() {
        let config = EventConfig::default();
        assert_eq!(
            build_gift_request_message(&config, GiftRequest::BankTransfer),
            "Halo, saya ingin meminta informasi nomor rekening untuk hadiah pernikahan \
             Bima Perkasa & Adinda Larasati. Terima kasih."
        );
        assert_eq!(
            build_gift_request_message(&config, GiftRequest::EWallet),
            "Halo, saya ingin meminta QR Code E-Wallet untuk hadiah pernikahan \
             Bima Perkasa & Adinda Larasati. Terima kasih."
        );
    }

    #[test]
    fn parses_choices_case_insensitively() {
        assert_eq!("Tidak Hadir".parse::<Attendance>().unwrap(), Attendance::NotAttending);
        assert_eq!("HADIR".parse::<Attendance>().unwrap(), Attendance::Attending);
        assert_eq!("Alergi Kacang".parse::<FoodPreference>().unwrap(), FoodPreference::NutAllergy);
        assert_eq!("e-wallet".parse::<GiftRequest>().unwrap(), GiftRequest::EWallet);
        assert!(matches!(
            "maybe".parse::<Attendance>(),
            Err(UndanganError::UnknownAttendance(_))
        ));
        assert!(matches!(
            "vegan".parse::<FoodPreference>(),
            Err(UndanganError::UnknownFoodPreference(_))
        ));
    }
}
