use crate::domain::validation::ValidationError;
use crate::domain::value::{ContactId, MessageText};

/// A single `sendMessage` call: one contact, one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    to: ContactId,
    message: MessageText,
}

impl SendMessage {
    pub fn new(to: ContactId, message: MessageText) -> Self {
        Self { to, message }
    }

    /// Validate `number` and pair it with `message`.
    pub fn to_number(
        number: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactId::new(number)?, MessageText::new(message)))
    }

    pub fn to(&self) -> &ContactId {
        &self.to
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
