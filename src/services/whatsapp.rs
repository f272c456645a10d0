use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

/// Characters left literal in the `text` query component. Everything else,
/// newlines included, is percent-encoded so WhatsApp renders the composed
/// message with its line breaks intact.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("contact number {number:?} is not a valid E.164 phone number")]
    InvalidNumber { number: String },
}

/// The church's WhatsApp line, fixed for the process lifetime. Every
/// deep-link the portal hands out points at this number.
#[derive(Debug, Clone)]
pub struct ContactTarget {
    digits: String,
}

impl ContactTarget {
    /// Accepts an E.164 number with or without its leading `+`; `wa.me`
    /// links carry the digits only.
    pub fn new(e164: &str) -> Result<Self, ContactError> {
        let digits = e164.strip_prefix('+').unwrap_or(e164);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactError::InvalidNumber {
                number: e164.to_string(),
            });
        }
        Ok(Self {
            digits: digits.to_string(),
        })
    }

    /// Builds `https://wa.me/<digits>?text=<encoded>` when a prefilled
    /// message is given, or the bare contact link (no `text` parameter at
    /// all) when it is not.
    pub fn deep_link(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => format!(
                "https://wa.me/{}?text={}",
                self.digits,
                utf8_percent_encode(text, QUERY)
            ),
            None => format!("https://wa.me/{}", self.digits),
        }
    }
}
