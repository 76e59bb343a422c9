use serde::Serialize;

pub const TOUR_NAME: &str = "PGA Tour";

/// A normalized leaderboard snapshot.
///
/// Immutable once built; `LeaderboardSource` replaces it wholesale on every
/// successful refresh.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Leaderboard {
  pub tour_name: String,
  pub tournament_name: String,
  pub course_name: String,
  // NOTE: Provider's start/end dates joined verbatim, never parsed.
  pub date_range: String,
  pub current_round_number: u32,
  // NOTE: Provider's ranking order, one entry per listed entrant.
  pub players: Vec<Player>,
  // NOTE: Provider-reported update time, not our local fetch time.
  pub source_updated_at: String,
}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Player {
  pub display_name: String,
  pub country: String,

  // NOTE: Kept textual as ties and cut lines aren't numeric (e.g.: "T4",
  // "CUT").
  pub current_position: String,
  pub start_position: String,

  pub today_score: i32,
  pub total_score: i32,
  pub total_strokes: i32,
  // NOTE: Zero until the player tees off.
  pub holes_through: i32,
  pub current_hole: i32,
  // NOTE: Strokes per round, in the order the provider lists the rounds.
  pub round_scores: Vec<i32>,
}

#[must_use]
pub(crate) fn date_range(start_date: &str, end_date: &str) -> String {
  format!("{start_date} — {end_date}")
}

#[must_use]
pub(crate) fn display_name(first_name: &str, last_name: &str) -> String {
  format!("{first_name} {last_name}")
}

#[cfg(test)]
const TEST_DATA_FILE_ID: &str = "2021-01-07T18:30:00";

#[cfg(test)]
#[must_use]
pub(crate) fn test_helper_read_test_data(prefix: &str) -> String {
  std::fs::read_to_string(format!("data/{prefix}-{TEST_DATA_FILE_ID}.json"))
    .expect("reading test data failed")
}
