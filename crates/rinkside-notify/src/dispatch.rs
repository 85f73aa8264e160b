//! [`Dispatcher`] — one POST per submission to the email provider.

use std::{fmt, time::Duration};

use reqwest::Client;
use serde::Deserialize;

use crate::{
  Error, Result,
  compose::compose,
  submission::Submission,
};

/// Email provider settings, deserialised from the `[mail]` config table.
#[derive(Clone, Deserialize)]
pub struct MailConfig {
  /// Full URL of the provider's send endpoint.
  pub endpoint:     String,
  /// Sent as `Authorization: Bearer <api_key>`.
  pub api_key:      String,
  pub from:         String,
  pub to:           String,
  /// Client-side timeout. Unset means the transport's own limits apply.
  #[serde(default)]
  pub timeout_secs: Option<u64>,
}

impl fmt::Debug for MailConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MailConfig")
      .field("endpoint", &self.endpoint)
      .field("api_key", &"<redacted>")
      .field("from", &self.from)
      .field("to", &self.to)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

/// Forwards submissions to the configured provider.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone, Debug)]
pub struct Dispatcher {
  client: Client,
  config: MailConfig,
}

impl Dispatcher {
  pub fn new(config: MailConfig) -> Result<Self> {
    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(Error::Client)?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &MailConfig { &self.config }

  /// Compose and send `submission`.
  ///
  /// Any 2xx answer is success. Anything else becomes
  /// [`Error::Rejected`] carrying the provider's raw response body, or the
  /// status line when that body is empty or unreadable.
  pub async fn dispatch(&self, submission: &Submission) -> Result<()> {
    let message = compose(submission, &self.config.from, &self.config.to);

    let resp = self
      .client
      .post(&self.config.endpoint)
      .bearer_auth(&self.config.api_key)
      .json(&message)
      .send()
      .await?;

    let status = resp.status();
    if status.is_success() {
      tracing::info!(status = status.as_u16(), "contact message forwarded");
      return Ok(());
    }

    let body = match resp.text().await {
      Ok(text) if !text.trim().is_empty() => text,
      Ok(_) => status.to_string(),
      Err(e) => {
        tracing::warn!(error = %e, "could not read provider response body");
        status.to_string()
      }
    };
    tracing::warn!(status = status.as_u16(), "email provider rejected message");
    Err(Error::Rejected { status: status.as_u16(), body })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
  };

  fn config(endpoint: String) -> MailConfig {
    MailConfig {
      endpoint,
      api_key: "test-key".into(),
      from: "Website <site@example.com>".into(),
      to: "owner@example.com".into(),
      timeout_secs: Some(5),
    }
  }

  fn submission() -> Submission {
    serde_json::from_value(json!({ "name": "Jane", "message": "Hello" })).unwrap()
  }

  #[tokio::test]
  async fn posts_message_with_bearer_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/emails"))
      .and(header("authorization", "Bearer test-key"))
      .and(body_partial_json(json!({
        "from": "Website <site@example.com>",
        "to": ["owner@example.com"],
        "subject": "New message from website",
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc" })))
      .expect(1)
      .mount(&server)
      .await;

    let dispatcher = Dispatcher::new(config(format!("{}/emails", server.uri()))).unwrap();
    dispatcher.dispatch(&submission()).await.unwrap();
  }

  #[tokio::test]
  async fn non_success_status_surfaces_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
      .expect(1)
      .mount(&server)
      .await;

    let dispatcher = Dispatcher::new(config(format!("{}/emails", server.uri()))).unwrap();
    let err = dispatcher.dispatch(&submission()).await.unwrap_err();
    assert!(matches!(
      &err,
      Error::Rejected { status: 401, body } if body == "unauthorized"
    ));
    assert_eq!(err.detail(), "unauthorized");
  }

  #[tokio::test]
  async fn empty_rejection_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&server)
      .await;

    let dispatcher = Dispatcher::new(config(server.uri())).unwrap();
    let err = dispatcher.dispatch(&submission()).await.unwrap_err();
    assert!(matches!(&err, Error::Rejected { status: 503, .. }));
    assert_eq!(err.detail(), "503 Service Unavailable");
  }

  #[tokio::test]
  async fn each_dispatch_is_a_separate_send() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(202))
      .expect(2)
      .mount(&server)
      .await;

    let dispatcher = Dispatcher::new(config(server.uri())).unwrap();
    dispatcher.dispatch(&submission()).await.unwrap();
    dispatcher.dispatch(&submission()).await.unwrap();
  }

  #[tokio::test]
  async fn unreachable_endpoint_is_a_transport_error() {
    let dispatcher = Dispatcher::new(config("http://127.0.0.1:1/emails".into())).unwrap();
    let err = dispatcher.dispatch(&submission()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
  }

  #[test]
  fn debug_output_hides_api_key() {
    let rendered = format!("{:?}", config("http://x".into()));
    assert!(!rendered.contains("test-key"));
  }
}
