mod common;
mod endpoints;
mod error;
mod leaderboard_source;

pub use crate::common::Leaderboard;
pub use crate::common::Player;
pub use crate::common::TOUR_NAME;
pub use crate::endpoints::Endpoints;
pub use crate::endpoints::CURRENT_EVENT_URL_VAR;
pub use crate::endpoints::EVENT_ID_PLACEHOLDER;
pub use crate::endpoints::LEADERBOARD_URL_VAR;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::leaderboard_source::transport::default_client;
pub use crate::leaderboard_source::transport::Transport;
pub use crate::leaderboard_source::LeaderboardSource;
