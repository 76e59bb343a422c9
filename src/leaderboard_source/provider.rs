use serde::Deserialize;
use serde::Deserializer;

use crate::common::date_range;
use crate::common::display_name;
use crate::common::Leaderboard;
use crate::common::Player;
use crate::common::TOUR_NAME;
use crate::error::Error;
use crate::error::Result;

// NOTE: Provider scalars follow a zero-value convention: `null` and absent
// fields decode to `0`/`""`. A present value of the wrong type still fails.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// SEE: https://statdata.pgatour.com/r/current/message.json
#[must_use]
#[derive(Debug, Deserialize)]
pub(super) struct CurrentEvent {
  pub(super) tid: String,
}

// SEE: https://statdata.pgatour.com/r/R2021016/leaderboard-v2mini.json
#[must_use]
#[derive(Debug, Deserialize)]
pub(super) struct LeaderboardFeed {
  #[serde(default, deserialize_with = "nullable")]
  pub(super) last_updated: String,
  pub(super) leaderboard: FeedLeaderboard,
}

#[must_use]
#[derive(Debug, Deserialize)]
pub(super) struct FeedLeaderboard {
  #[serde(default, deserialize_with = "nullable")]
  pub(super) courses: Vec<FeedCourse>,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) tournament_name: String,
  // NOTE: Decoded but unused, the output carries our own fixed label.
  #[allow(dead_code)]
  #[serde(default, deserialize_with = "nullable")]
  pub(super) tour_name: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) start_date: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) end_date: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) current_round: u32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) players: Vec<FeedPlayer>,
}

#[must_use]
#[derive(Debug, Deserialize)]
pub(super) struct FeedCourse {
  #[serde(default, deserialize_with = "nullable")]
  pub(super) course_name: String,
}

#[must_use]
#[derive(Debug, Deserialize)]
pub(super) struct FeedPlayer {
  #[serde(default, deserialize_with = "nullable")]
  pub(super) course_hole: i32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) current_position: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) start_position: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) thru: i32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) today: i32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) total: i32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) total_strokes: i32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) player_bio: FeedPlayerBio,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) rounds: Vec<FeedRound>,
}

#[must_use]
#[derive(Debug, Default, Deserialize)]
pub(super) struct FeedPlayerBio {
  #[serde(default, deserialize_with = "nullable")]
  pub(super) country: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) first_name: String,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) last_name: String,
  #[allow(dead_code)]
  #[serde(default, deserialize_with = "nullable")]
  pub(super) short_name: String,
}

#[must_use]
#[derive(Debug, Deserialize)]
pub(super) struct FeedRound {
  #[serde(default, deserialize_with = "nullable")]
  pub(super) round_number: u32,
  #[serde(default, deserialize_with = "nullable")]
  pub(super) strokes: i32,
}

/// # Errors
///
/// `Error::Decode` for malformed JSON or a missing/mistyped `tid`.
pub(super) fn parse_current_event(raw_body: &str) -> Result<CurrentEvent> {
  Ok(serde_json::from_str(raw_body)?)
}

/// # Errors
///
/// `Error::Decode` for malformed or mistyped JSON, `Error::MissingCourse`
/// when the payload lists no course or the first one has no name.
pub(super) fn parse_leaderboard(raw_body: &str) -> Result<Leaderboard> {
  let feed: LeaderboardFeed = serde_json::from_str(raw_body)?;
  project_leaderboard(feed)
}

/// # Errors
///
/// `Error::MissingCourse` when the feed lists no course or the first one has
/// no name.
pub(super) fn project_leaderboard(
  feed: LeaderboardFeed,
) -> Result<Leaderboard> {
  let LeaderboardFeed {
    last_updated,
    leaderboard,
  } = feed;

  // NOTE: Exactly one named course per event is expected, an empty list or a
  // nameless course means the upstream data is broken.
  let course_name = leaderboard
    .courses
    .into_iter()
    .next()
    .map(|course| course.course_name)
    .filter(|course_name| !course_name.is_empty())
    .ok_or(Error::MissingCourse)?;

  Ok(Leaderboard {
    tour_name: String::from(TOUR_NAME),
    tournament_name: leaderboard.tournament_name,
    course_name,
    date_range: date_range(&leaderboard.start_date, &leaderboard.end_date),
    current_round_number: leaderboard.current_round,
    players: leaderboard.players.into_iter().map(project_player).collect(),
    source_updated_at: last_updated,
  })
}

fn project_player(player: FeedPlayer) -> Player {
  let FeedPlayer {
    course_hole,
    current_position,
    start_position,
    thru,
    today,
    total,
    total_strokes,
    player_bio,
    rounds,
  } = player;

  if !rounds
    .windows(2)
    .all(|pair| pair[0].round_number <= pair[1].round_number)
  {
    log::warn!(
      "Rounds listed out of order for {} {}, keeping provider order.",
      player_bio.first_name,
      player_bio.last_name,
    );
  }

  Player {
    display_name: display_name(&player_bio.first_name, &player_bio.last_name),
    country: player_bio.country,
    current_position,
    start_position,
    today_score: today,
    total_score: total,
    total_strokes,
    holes_through: thru,
    current_hole: course_hole,
    // FIXME: Confirm whether the feed always lists rounds by `round_number`
    // before sorting here.
    round_scores: rounds.into_iter().map(|round| round.strokes).collect(),
  }
}
