//! Deep-link construction and URL component encoding.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::constants::WHATSAPP_SEND_URL;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, matching what browsers
/// leave untouched when encoding a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component. Non-ASCII text is encoded byte-wise as UTF-8.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Inverse of [`percent_encode`]. Invalid UTF-8 sequences are replaced.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

/// `https://api.whatsapp.com/send?phone=<phone>&text=<encoded message>`
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}?phone={}&text={}",
        WHATSAPP_SEND_URL,
        phone,
        percent_encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escapes_reserved_query_characters() {
        assert_eq!(
            percent_encode("a b&c=d?e/f#g+h\n"),
            "a%20b%26c%3Dd%3Fe%2Ff%23g%2Bh%0A"
        );
    }

    #[test]
    fn leaves_unreserved_marks_alone() {
        assert_eq!(percent_encode("Aa0-_.!~*'()"), "Aa0-_.!~*'()");
    }

    #[test]
    fn encodes_non_ascii_as_utf8_bytes() {
        assert_eq!(percent_encode("é"), "%C3%A9");
        assert_eq!(percent_encode("💍"), "%F0%9F%92%8D");
    }

    #[test]
    fn builds_whatsapp_link() {
        assert_eq!(
            whatsapp_link("6285642245331", "Halo & selamat!\nTerima kasih."),
            "https://api.whatsapp.com/send?phone=6285642245331\
             &text=Halo%20%26%20selamat!%0ATerima%20kasih."
        );
    }

    #[test]
    fn empty_message_gives_empty_text() {
        assert_eq!(
            whatsapp_link("62", ""),
            "https://api.whatsapp.com/send?phone=62&text="
        );
    }

    #[test]
    fn decode_round_trips_mixed_message() {
        let message = "Pesan & Doa:\n\nSemoga bahagia 🎉 — selamanya? ya=100%";
        assert_eq!(percent_decode(&percent_encode(message)), message);
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(message in any::<String>()) {
            let encoded = percent_encode(&message);
            prop_assert!(encoded.is_ascii());
            prop_assert!(!encoded.contains(['&', '=', '?', ' ', '\n', '#', '+']));
            prop_assert_eq!(percent_decode(&encoded), message);
        }
    }
}
