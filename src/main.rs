use std::process::ExitCode;

use fairway::Endpoints;
use fairway::Error;
use fairway::Leaderboard;
use fairway::LeaderboardSource;

fn main() -> ExitCode {
  // SEE: https://docs.rs/env_logger/0.10.0/env_logger/#enabling-logging
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  match run() {
    Ok(exit_code) => exit_code,
    Err(err) if err.is_no_active_tournament() => {
      println!("No tournament in progress.");
      ExitCode::SUCCESS
    }
    Err(err) => {
      log::error!("{}", err);
      ExitCode::FAILURE
    }
  }
}

fn run() -> Result<ExitCode, Error> {
  let client = fairway::default_client()?;
  let mut source =
    LeaderboardSource::with_endpoints(client, Endpoints::from_env());

  source.resolve_current_event()?;
  let leaderboard = source.refresh()?;

  // NOTE: Encoding failures are ours, not the provider's, so they stay out
  // of `Error`.
  match render(&leaderboard) {
    Ok(json) => {
      println!("{json}");
      Ok(ExitCode::SUCCESS)
    }
    Err(err) => {
      log::error!("Couldn't encode leaderboard: {}", err);
      Ok(ExitCode::FAILURE)
    }
  }
}

fn render(leaderboard: &Leaderboard) -> serde_json::Result<String> {
  serde_json::to_string_pretty(leaderboard)
}

#[cfg(test)]
mod tests {
  use fairway::Leaderboard;
  use fairway::Player;
  use pretty_assertions::assert_eq;

  use super::render;

  #[test]
  fn test_render() {
    let leaderboard = Leaderboard {
      tour_name: String::from("PGA Tour"),
      tournament_name: String::from("Sony Open in Hawaii"),
      course_name: String::from("Waialae Country Club"),
      date_range: String::from("2021-01-14 \u{2014} 2021-01-17"),
      current_round_number: 2,
      players: vec![Player {
        display_name: String::from("Kevin Na"),
        country: String::from("USA"),
        current_position: String::from("T4"),
        start_position: String::from("T10"),
        today_score: -3,
        total_score: -9,
        total_strokes: 131,
        holes_through: 18,
        current_hole: 18,
        round_scores: vec![64, 67],
      }],
      source_updated_at: String::from("2021-01-15T23:10:02"),
    };

    let json: serde_json::Value =
      serde_json::from_str(&render(&leaderboard).unwrap()).unwrap();

    assert_eq!(json["tournament_name"], "Sony Open in Hawaii");
    assert_eq!(json["date_range"], "2021-01-14 \u{2014} 2021-01-17");
    assert_eq!(json["players"][0]["display_name"], "Kevin Na");
    assert_eq!(json["players"][0]["current_position"], "T4");
    assert_eq!(json["players"][0]["today_score"], -3);
    assert_eq!(json["players"][0]["round_scores"], serde_json::json!([64, 67]));
  }
}
