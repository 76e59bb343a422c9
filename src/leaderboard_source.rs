mod provider;
pub mod transport;

use std::fmt;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use reqwest::blocking::Request;
use reqwest::Method;
use reqwest::Url;

use crate::common::Leaderboard;
use crate::common::TOUR_NAME;
use crate::endpoints::Endpoints;
use crate::error::Error;
use crate::error::Result;
use crate::leaderboard_source::transport::Transport;

/// Live PGA Tour leaderboard, fetched through an injected [`Transport`].
///
/// Callers sequence the two network steps themselves: [`resolve_current_event`]
/// must succeed before [`build_leaderboard_request`] (and so [`refresh`]) can.
/// Nothing here is synchronized, share it across threads behind a lock.
///
/// [`resolve_current_event`]: LeaderboardSource::resolve_current_event
/// [`build_leaderboard_request`]: LeaderboardSource::build_leaderboard_request
/// [`refresh`]: LeaderboardSource::refresh
#[must_use]
pub struct LeaderboardSource<T: Transport> {
  transport: T,
  endpoints: Endpoints,
  current_event_id: String,
  cached_leaderboard: Option<Arc<Leaderboard>>,
  last_refreshed_at: Option<DateTime<Utc>>,
}

impl<T: Transport> LeaderboardSource<T> {
  pub fn new(transport: T) -> Self {
    Self::with_endpoints(transport, Endpoints::default())
  }

  pub fn with_endpoints(transport: T, endpoints: Endpoints) -> Self {
    Self {
      transport,
      endpoints,
      current_event_id: String::new(),
      cached_leaderboard: None,
      last_refreshed_at: None,
    }
  }

  #[must_use]
  pub fn display_name(&self) -> &'static str {
    TOUR_NAME
  }

  /// Empty until [`resolve_current_event`](Self::resolve_current_event)
  /// first succeeds.
  #[must_use]
  pub fn current_event_id(&self) -> &str {
    &self.current_event_id
  }

  /// Asks the provider which tournament is in progress and remembers it.
  ///
  /// On failure the previously resolved identifier (if any) is kept.
  ///
  /// # Errors
  ///
  /// `Error::Transport`, `Error::Decode`, or `Error::EmptyIdentifier` when no
  /// tournament is currently active.
  pub fn resolve_current_event(&mut self) -> Result<()> {
    let request = get_request(&self.endpoints.current_event_url)?;
    log::debug!("Resolving current event ({}).", request.url());

    let raw_body = self.transport.fetch(request)?;
    let current_event = provider::parse_current_event(&raw_body)?;
    if current_event.tid.is_empty() {
      log::warn!("{} reports no tournament in progress.", self);
      return Err(Error::EmptyIdentifier);
    }

    log::info!("Resolved current {} event ({}).", self, current_event.tid);
    self.current_event_id = current_event.tid;
    Ok(())
  }

  /// # Errors
  ///
  /// `Error::NotResolved` before any successful
  /// [`resolve_current_event`](Self::resolve_current_event), `Error::Transport`
  /// when the configured template doesn't yield a valid URL.
  pub fn build_leaderboard_request(&self) -> Result<Request> {
    if self.current_event_id.is_empty() {
      return Err(Error::NotResolved);
    }

    get_request(&self.endpoints.leaderboard_url(&self.current_event_id))
  }

  /// Decodes a raw leaderboard body. Stored state is left untouched.
  ///
  /// # Errors
  ///
  /// `Error::Decode` or `Error::MissingCourse`.
  pub fn parse_leaderboard(&self, raw_body: &str) -> Result<Leaderboard> {
    provider::parse_leaderboard(raw_body)
  }

  /// Replaces the stored snapshot and stamps it with the current time.
  pub fn store(&mut self, leaderboard: Leaderboard) -> Arc<Leaderboard> {
    let leaderboard = Arc::new(leaderboard);
    self.cached_leaderboard = Some(Arc::clone(&leaderboard));
    self.last_refreshed_at = Some(Utc::now());
    leaderboard
  }

  /// Parses `raw_body` and stores the result. On failure the previous
  /// snapshot and its timestamp are kept.
  ///
  /// # Errors
  ///
  /// Same as [`parse_leaderboard`](Self::parse_leaderboard).
  pub fn refresh_with(&mut self, raw_body: &str) -> Result<Arc<Leaderboard>> {
    let leaderboard = self.parse_leaderboard(raw_body)?;
    log::info!(
      "Refreshed {} leaderboard for {:?} ({} players, updated {}).",
      self,
      leaderboard.tournament_name,
      leaderboard.players.len(),
      leaderboard.source_updated_at,
    );

    Ok(self.store(leaderboard))
  }

  /// Fetches the resolved event's leaderboard and stores it. On failure the
  /// previous snapshot and its timestamp are kept.
  ///
  /// # Errors
  ///
  /// `Error::NotResolved`, `Error::Transport`, `Error::Decode` or
  /// `Error::MissingCourse`.
  pub fn refresh(&mut self) -> Result<Arc<Leaderboard>> {
    let request = self.build_leaderboard_request()?;
    log::debug!("Fetching leaderboard ({}).", request.url());

    let raw_body = self.transport.fetch(request)?;
    self.refresh_with(&raw_body)
  }

  #[must_use]
  pub fn current_leaderboard(&self) -> Option<Arc<Leaderboard>> {
    self.cached_leaderboard.as_ref().map(Arc::clone)
  }

  #[must_use]
  pub fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
    self.last_refreshed_at
  }
}

impl<T: Transport> fmt::Display for LeaderboardSource<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.display_name())
  }
}

fn get_request(url: &str) -> Result<Request> {
  let url = Url::parse(url)
    .map_err(|err| Error::Transport(format!("invalid URL {url:?}: {err}")))?;
  Ok(Request::new(Method::GET, url))
}
