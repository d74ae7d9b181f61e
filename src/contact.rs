use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.][^@\s]*\.[^@\s]*[^@\s.]$").expect("email pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    #[error("Nama wajib diisi")]
    MissingName,
    #[error("Alamat email tidak valid")]
    InvalidEmail,
    #[error("Pesan wajib diisi")]
    MissingMessage,
    #[error("Pesan terlalu panjang (maksimal {} karakter)", MAX_MESSAGE_CHARS)]
    MessageTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trims every field and checks it, first failure wins.
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactError::MessageTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn acknowledgement(&self) -> String {
        format!(
            "Terima kasih, {}! Pesanmu sudah diterima dan akan dibalas ke {}.",
            self.name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_message() {
        let msg = ContactMessage::validate("  Ridho ", " a.b@mail.co.id ", "\nHalo\n").unwrap();
        assert_eq!(msg.name, "Ridho");
        assert_eq!(msg.email, "a.b@mail.co.id");
        assert_eq!(msg.message, "Halo");
        assert!(msg.acknowledgement().contains("Ridho"));
    }

    #[test]
    fn rejects_blank_name_first() {
        assert_eq!(
            ContactMessage::validate("   ", "bad", ""),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "plain",
            "@mail.com",
            "a@",
            "a@mail",
            "a@.com",
            "a@mail.",
            "a b@mail.com",
            "a@@mail.com",
        ] {
            assert_eq!(
                ContactMessage::validate("x", email, "hi"),
                Err(ContactError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_or_long_message() {
        assert_eq!(
            ContactMessage::validate("x", "x@y.id", "  "),
            Err(ContactError::MissingMessage)
        );
        let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            ContactMessage::validate("x", "x@y.id", &long),
            Err(ContactError::MessageTooLong)
        );
        let exact = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(ContactMessage::validate("x", "x@y.id", &exact).is_ok());
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ContactError::MissingName.to_string(), "Nama wajib diisi");
        assert!(ContactError::MessageTooLong.to_string().contains("5000"));
    }
}
