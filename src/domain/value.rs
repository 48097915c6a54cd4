use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

/// Alerty ACM API key, sent in the `x-api-key` header.
///
/// No validation is performed on construction. The value is redacted from
/// `Debug` output.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by Alerty ACM (`x-api-key`).
    pub const HEADER: &'static str = "x-api-key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<REDACTED>").finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient contact id (`to.id`).
///
/// Invariant: exactly 11 ASCII decimal digits. No trimming, separators or `+` prefix.
pub struct ContactId(String);

impl ContactId {
    /// Number of digits in a contact id (two-digit area code plus nine-digit subscriber).
    pub const DIGITS: usize = 11;

    /// Contact type sent alongside the id (`to.type`).
    pub const KIND: &'static str = "contact";

    /// Create a validated [`ContactId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !is_contact_id(&value) {
            return Err(ValidationError::InvalidNumber { input: value });
        }
        Ok(Self(value))
    }

    /// Parse a formatted phone number and keep its national significant number.
    ///
    /// `default_region` is used when the input has no explicit country prefix and
    /// defaults to Brazil. The national number must still be 11 digits long, so
    /// `"+55 (11) 98765-4321"` becomes `"11987654321"`.
    pub fn from_phone(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let region = default_region.unwrap_or(country::Id::BR);

        let parsed = phonenumber::parse(Some(region), input.trim())
            .map_err(|_| ValidationError::InvalidNumber {
                input: input.clone(),
            })?;

        let national = parsed.national();
        let digits = format!(
            "{}{}",
            "0".repeat(usize::from(national.zeros())),
            national.value()
        );
        Self::new(digits).map_err(|_| ValidationError::InvalidNumber { input })
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check `input` against the contact id format without constructing a [`ContactId`].
pub fn validate_number(input: &str) -> Result<(), ValidationError> {
    if is_contact_id(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumber {
            input: input.to_owned(),
        })
    }
}

fn is_contact_id(input: &str) -> bool {
    input.len() == ContactId::DIGITS && input.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`message`).
///
/// Sent exactly as provided; the API places no constraints on it.
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageText {
    fn from(value: String) -> Self {
        Self(value)
    }
}
