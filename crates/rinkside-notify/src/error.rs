//! Error types for the notification dispatcher.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The provider answered with a non-success status. `body` is passed
  /// through verbatim.
  #[error("{body}")]
  Rejected { status: u16, body: String },

  #[error("request to email provider failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

impl Error {
  /// The text surfaced to the submitter.
  pub fn detail(&self) -> String {
    match self {
      Self::Rejected { body, .. } => body.clone(),
      other => other.to_string(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
