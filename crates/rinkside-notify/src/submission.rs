//! [`Submission`] — the recognised fields of a contact form plus everything
//! else the form sent.

use serde::Deserialize;
use serde_json::{Map, Value};

pub const NO_NAME: &str = "(no name)";
pub const NO_EMAIL: &str = "(no email)";
pub const NO_SUBJECT: &str = "(no subject)";
pub const NO_MESSAGE: &str = "(no message)";

/// A contact form submission.
///
/// Any JSON object deserialises into a `Submission`; nothing is rejected.
/// Missing, `null` or empty recognised fields read back as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Submission {
  name:    Option<String>,
  email:   Option<String>,
  subject: Option<String>,
  message: Option<String>,
  /// Unrecognised fields, untouched.
  extra:   Map<String, Value>,
}

impl Submission {
  pub fn name(&self) -> &str { self.name.as_deref().unwrap_or(NO_NAME) }

  pub fn email(&self) -> &str { self.email.as_deref().unwrap_or(NO_EMAIL) }

  pub fn subject(&self) -> &str {
    self.subject.as_deref().unwrap_or(NO_SUBJECT)
  }

  pub fn message(&self) -> &str {
    self.message.as_deref().unwrap_or(NO_MESSAGE)
  }

  pub fn extra(&self) -> &Map<String, Value> { &self.extra }
}

impl From<Map<String, Value>> for Submission {
  fn from(mut fields: Map<String, Value>) -> Self {
    let mut take = |key: &str| fields.remove(key).and_then(as_text);
    let name = take("name");
    let email = take("email");
    let subject = take("subject");
    let message = take("message");
    Self { name, email, subject, message, extra: fields }
  }
}

/// Strings are used as-is; other scalars are rendered as JSON text. Empty
/// strings and `null` count as absent.
fn as_text(value: Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(s) if s.is_empty() => None,
    Value::String(s) => Some(s),
    other => Some(other.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn parse(value: Value) -> Submission { serde_json::from_value(value).unwrap() }

  #[test]
  fn recognised_fields_are_split_out() {
    let s = parse(json!({
      "name": "Jane",
      "email": "jane@example.com",
      "subject": "Kitchen",
      "message": "Quote please",
      "phone": "555-0100",
    }));
    assert_eq!(s.name(), "Jane");
    assert_eq!(s.email(), "jane@example.com");
    assert_eq!(s.subject(), "Kitchen");
    assert_eq!(s.message(), "Quote please");
    assert_eq!(s.extra().len(), 1);
    assert_eq!(s.extra()["phone"], "555-0100");
  }

  #[test]
  fn missing_fields_read_as_placeholders() {
    let s = parse(json!({}));
    assert_eq!(s.name(), NO_NAME);
    assert_eq!(s.email(), NO_EMAIL);
    assert_eq!(s.subject(), NO_SUBJECT);
    assert_eq!(s.message(), NO_MESSAGE);
    assert!(s.extra().is_empty());
  }

  #[test]
  fn empty_and_null_count_as_missing() {
    let s = parse(json!({ "name": "", "email": null }));
    assert_eq!(s.name(), NO_NAME);
    assert_eq!(s.email(), NO_EMAIL);
  }

  #[test]
  fn non_string_values_are_rendered() {
    let s = parse(json!({ "message": 42 }));
    assert_eq!(s.message(), "42");
  }

  #[test]
  fn non_object_input_is_rejected_by_serde() {
    assert!(serde_json::from_value::<Submission>(json!(["x"])).is_err());
  }
}
