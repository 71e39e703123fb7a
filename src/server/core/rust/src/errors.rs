/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// HTTP-facing error: a machine code, a message, and the status it maps to.
#[derive(Debug)]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    _ => 500,
  }
}

impl SiteError {
  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}

/// Failure talking to the Content API. The resolver and menu loader turn these into
/// empty results, so they never reach the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("content API request failed: {0}")]
  Transport(String),
  #[error("content API returned status {status} for {url}")]
  Status { status: u16, url: String },
  #[error("failed to decode content API response: {0}")]
  Decode(String),
  #[error("content API request timed out after {0} ms")]
  Timeout(u64),
}

/// Rejected routing-table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
  #[error("segment \"{segment}\" is mapped by both \"{first}\" and \"{second}\"")]
  ConflictingSegment { segment: String, first: String, second: String },
  #[error("route key \"{0}\" is defined twice")]
  DuplicateKey(String),
  #[error("mapping \"{0}\" has an empty segment")]
  EmptySegment(String),
  #[error("segment \"{0}\" contains '/'")]
  SlashInSegment(String),
  #[error("static route \"{route}\" refers to unknown segment key \"{key}\"")]
  UnknownKey { route: String, key: String },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("VALIDATION_ERROR"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("CUSTOM_ERROR"), 500);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(SiteError::validation("x").status(), 400);
    assert_eq!(SiteError::with_code("NOT_FOUND", "x").status(), 404);
  }

  #[test]
  fn display_format() {
    let err = SiteError::with_code("NOT_FOUND", "missing");
    assert_eq!(err.to_string(), "NOT_FOUND: missing");
  }
}
