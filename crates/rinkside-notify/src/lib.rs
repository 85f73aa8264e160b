//! Contact-form relay for Rinkside.
//!
//! Turns a free-form form submission into an HTML email and hands it to a
//! third-party email API in a single POST. There is no queue, no retry and no
//! record of past sends: a resubmitted form produces a second email.
//!
//! # Quick start
//!
//! ```no_run
//! # async fn run() -> rinkside_notify::Result<()> {
//! use rinkside_notify::{Dispatcher, MailConfig, Submission};
//!
//! let dispatcher = Dispatcher::new(MailConfig {
//!   endpoint:     "https://api.resend.com/emails".into(),
//!   api_key:      "re_123".into(),
//!   from:         "Website <onboarding@resend.dev>".into(),
//!   to:           "owner@example.com".into(),
//!   timeout_secs: None,
//! })?;
//! let fields = serde_json::json!({ "name": "Jane", "message": "Hello" });
//! let submission: Submission = serde_json::from_value(fields).unwrap();
//! dispatcher.dispatch(&submission).await?;
//! # Ok(())
//! # }
//! ```

mod compose;
mod dispatch;
pub mod error;
mod submission;

pub use compose::{DEFAULT_SUBJECT, Message, compose, render_html};
pub use dispatch::{Dispatcher, MailConfig};
pub use error::{Error, Result};
pub use submission::{
  NO_EMAIL, NO_MESSAGE, NO_NAME, NO_SUBJECT, Submission,
};
