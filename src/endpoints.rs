use std::env;

const CURRENT_EVENT_URL: &str =
  "https://statdata.pgatour.com/r/current/message.json";
const LEADERBOARD_URL_TEMPLATE: &str =
  "https://statdata.pgatour.com/r/{tid}/leaderboard-v2mini.json";

pub const EVENT_ID_PLACEHOLDER: &str = "{tid}";

pub const CURRENT_EVENT_URL_VAR: &str = "FAIRWAY_CURRENT_EVENT_URL";
pub const LEADERBOARD_URL_VAR: &str = "FAIRWAY_LEADERBOARD_URL";

/// Provider URLs.
///
/// The leaderboard URL is a template where [`EVENT_ID_PLACEHOLDER`] is
/// replaced by the resolved event identifier.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoints {
  pub current_event_url: String,
  pub leaderboard_url_template: String,
}

impl Endpoints {
  pub fn new(
    current_event_url: impl Into<String>,
    leaderboard_url_template: impl Into<String>,
  ) -> Self {
    Self {
      current_event_url: current_event_url.into(),
      leaderboard_url_template: leaderboard_url_template.into(),
    }
  }

  /// Defaults, overridden by whichever of [`CURRENT_EVENT_URL_VAR`] and
  /// [`LEADERBOARD_URL_VAR`] are set.
  pub fn from_env() -> Self {
    let defaults = Self::default();

    Self {
      current_event_url: env::var(CURRENT_EVENT_URL_VAR)
        .unwrap_or(defaults.current_event_url),
      leaderboard_url_template: env::var(LEADERBOARD_URL_VAR)
        .unwrap_or(defaults.leaderboard_url_template),
    }
  }

  // NOTE: The identifier is substituted verbatim. It comes from the provider
  // and is alphanumeric in practice.
  #[must_use]
  pub fn leaderboard_url(&self, event_id: &str) -> String {
    self
      .leaderboard_url_template
      .replace(EVENT_ID_PLACEHOLDER, event_id)
  }
}

impl Default for Endpoints {
  fn default() -> Self {
    Self::new(CURRENT_EVENT_URL, LEADERBOARD_URL_TEMPLATE)
  }
}

#[cfg(test)]
mod tests {
  use std::env;

  use pretty_assertions::assert_eq;

  use super::Endpoints;
  use super::CURRENT_EVENT_URL_VAR;
  use super::LEADERBOARD_URL_VAR;

  #[test]
  fn test_default_leaderboard_url() {
    assert_eq!(
      Endpoints::default().leaderboard_url("R2021123"),
      "https://statdata.pgatour.com/r/R2021123/leaderboard-v2mini.json"
    );
  }

  #[test]
  fn test_custom_leaderboard_url() {
    let endpoints = Endpoints::new(
      "http://localhost:8080/current.json",
      "http://localhost:8080/{tid}/board.json?event={tid}",
    );

    assert_eq!(
      endpoints.leaderboard_url("R2021004"),
      "http://localhost:8080/R2021004/board.json?event=R2021004"
    );
  }

  // NOTE: The only test touching these variables, so both cases run in
  // sequence here.
  #[test]
  fn test_from_env_overrides() {
    env::remove_var(CURRENT_EVENT_URL_VAR);
    env::set_var(LEADERBOARD_URL_VAR, "http://127.0.0.1:9731/{tid}/lb.json");

    assert_eq!(
      Endpoints::from_env(),
      Endpoints::new(
        Endpoints::default().current_event_url,
        "http://127.0.0.1:9731/{tid}/lb.json",
      )
    );

    env::remove_var(LEADERBOARD_URL_VAR);
    env::set_var(CURRENT_EVENT_URL_VAR, "http://127.0.0.1:9731/message.json");

    assert_eq!(
      Endpoints::from_env(),
      Endpoints::new(
        "http://127.0.0.1:9731/message.json",
        Endpoints::default().leaderboard_url_template,
      )
    );

    env::remove_var(CURRENT_EVENT_URL_VAR);

    assert_eq!(Endpoints::from_env(), Endpoints::default());
  }
}
