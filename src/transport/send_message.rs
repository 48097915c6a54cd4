use serde::Serialize;
use serde_json::Value;

use crate::domain::{ContactId, SendMessage};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SendMessageJsonRequest<'a> {
    to: JsonContact<'a>,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonContact<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'a str,
}

pub fn encode_send_message_json(request: &SendMessage) -> Result<String, TransportError> {
    let body = SendMessageJsonRequest {
        to: JsonContact {
            kind: ContactId::KIND,
            id: request.to().as_str(),
        },
        message: request.message().as_str(),
    };
    Ok(serde_json::to_string(&body)?)
}

/// Decode a successful response body as-is.
///
/// A blank body decodes to [`Value::Null`].
pub fn decode_send_message_json_response(body: &str) -> Result<Value, TransportError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_matches_wire_shape() {
        let request = SendMessage::to_number("12345678901", "hi").unwrap();
        let body = encode_send_message_json(&request).unwrap();
        assert_eq!(
            body,
            r#"{"to":{"type":"contact","id":"12345678901"},"message":"hi"}"#
        );
    }

    #[test]
    fn encode_escapes_message_text() {
        let request = SendMessage::to_number("12345678901", "say \"oi\"\nbye").unwrap();
        let body = encode_send_message_json(&request).unwrap();
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["message"], json!("say \"oi\"\nbye"));
        assert_eq!(parsed["to"]["type"], json!("contact"));
    }

    #[test]
    fn decode_returns_body_verbatim() {
        let value =
            decode_send_message_json_response(r#"{"success":true,"messageId":"123"}"#).unwrap();
        assert_eq!(value, json!({"success": true, "messageId": "123"}));
    }

    #[test]
    fn decode_blank_body_is_null() {
        assert_eq!(decode_send_message_json_response("  ").unwrap(), Value::Null);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode_send_message_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
