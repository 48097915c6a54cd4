//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::SendMessage;
pub use validation::ValidationError;
pub use value::{ApiKey, ContactId, MessageText, validate_number};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_validates_number_first() {
        let err = SendMessage::to_number("1234567890", "hi").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { ref input } if input == "1234567890"));
    }

    #[test]
    fn send_message_keeps_parts() {
        let request = SendMessage::to_number("12345678901", "Hello, world!").unwrap();
        assert_eq!(request.to().as_str(), "12345678901");
        assert_eq!(request.message().as_str(), "Hello, world!");
    }
}
