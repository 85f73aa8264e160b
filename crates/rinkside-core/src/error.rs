//! Error types for `rinkside-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown attribute: {0:?}")]
  UnknownAttribute(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
