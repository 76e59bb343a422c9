use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("transport error: {0}")]
  Transport(String),
  #[error("decode error: {0}")]
  Decode(#[from] serde_json::Error),
  // NOTE: Provider convention for "no tournament currently in progress".
  #[error("provider returned an empty event identifier")]
  EmptyIdentifier,
  #[error("current event must be resolved before requesting its leaderboard")]
  NotResolved,
  #[error("leaderboard payload lists no course")]
  MissingCourse,
}

impl Error {
  /// Whether this is the expected "no tournament currently active" outcome
  /// rather than a real failure.
  #[must_use]
  pub fn is_no_active_tournament(&self) -> bool {
    matches!(self, Self::EmptyIdentifier)
  }
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    Self::Transport(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::Error;

  #[test]
  fn test_no_active_tournament() {
    assert!(Error::EmptyIdentifier.is_no_active_tournament());
    assert!(!Error::NotResolved.is_no_active_tournament());
    assert!(!Error::MissingCourse.is_no_active_tournament());
    assert!(
      !Error::Transport(String::from("timed out")).is_no_active_tournament()
    );
  }

  #[test]
  fn test_decode_from_serde() {
    let err: Error = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
    assert!(matches!(err, Error::Decode(_)));
  }
}
