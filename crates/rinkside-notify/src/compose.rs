//! Building the outbound email from a [`Submission`].

use serde::Serialize;

use crate::submission::Submission;

/// Subject line of every forwarded message.
pub const DEFAULT_SUBJECT: &str = "New message from website";

/// The JSON body POSTed to the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
  pub from:    String,
  pub to:      Vec<String>,
  pub subject: String,
  pub html:    String,
}

/// Address a message built from `submission` from `from` to `to`.
pub fn compose(submission: &Submission, from: &str, to: &str) -> Message {
  Message {
    from:    from.to_owned(),
    to:      vec![to.to_owned()],
    subject: DEFAULT_SUBJECT.to_owned(),
    html:    render_html(submission),
  }
}

/// Render the HTML body: the recognised fields first, then a dump of every
/// other field the form sent.
pub fn render_html(submission: &Submission) -> String {
  let mut html = String::new();
  html.push_str(&format!("<h2>{DEFAULT_SUBJECT}</h2>\n"));
  html.push_str(&field("Name", submission.name()));
  html.push_str(&field("Email", submission.email()));
  html.push_str(&field("Subject", submission.subject()));
  html.push_str("<p><strong>Message:</strong></p>\n");
  html.push_str(&format!(
    "<p>{}</p>\n",
    escape(submission.message()).replace('\n', "<br>")
  ));

  if !submission.extra().is_empty() {
    // Map serialisation cannot fail.
    let dump = serde_json::to_string_pretty(submission.extra()).unwrap_or_default();
    html.push_str("<h3>Additional fields</h3>\n");
    html.push_str(&format!("<pre>{}</pre>\n", escape(&dump)));
  }

  html
}

fn field(label: &str, value: &str) -> String {
  format!("<p><strong>{label}:</strong> {}</p>\n", escape(value))
}

fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::submission::{NO_EMAIL, NO_SUBJECT};
  use serde_json::json;

  fn submission(value: serde_json::Value) -> Submission {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn placeholders_and_default_subject() {
    let s = submission(json!({ "name": "Jane", "message": "Hello" }));
    let msg = compose(&s, "site@example.com", "owner@example.com");

    assert_eq!(msg.subject, "New message from website");
    assert_eq!(msg.to, ["owner@example.com"]);
    assert_eq!(msg.from, "site@example.com");
    assert!(msg.html.contains("Jane"));
    assert!(msg.html.contains("Hello"));
    assert!(msg.html.contains(NO_EMAIL));
    assert!(msg.html.contains(NO_SUBJECT));
    assert!(!msg.html.contains("Additional fields"));
  }

  #[test]
  fn extra_fields_are_dumped() {
    let s = submission(json!({
      "name": "Jane",
      "phone": "555-0100",
      "budget": 25000,
    }));
    let html = render_html(&s);
    assert!(html.contains("Additional fields"));
    assert!(html.contains("&quot;phone&quot;: &quot;555-0100&quot;"));
    assert!(html.contains("&quot;budget&quot;: 25000"));
  }

  #[test]
  fn user_text_is_escaped() {
    let s = submission(json!({ "name": "<script>alert(1)</script>" }));
    let html = render_html(&s);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
  }

  #[test]
  fn message_line_breaks_become_br() {
    let s = submission(json!({ "message": "line one\nline two" }));
    assert!(render_html(&s).contains("line one<br>line two"));
  }

  #[test]
  fn serialises_provider_shape() {
    let s = submission(json!({}));
    let value = serde_json::to_value(compose(&s, "a@x", "b@y")).unwrap();
    assert_eq!(value["to"], json!(["b@y"]));
    assert!(value["html"].is_string());
    assert_eq!(value.as_object().unwrap().len(), 4);
  }
}
