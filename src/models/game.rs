use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Game status. Any value may follow any other; there is no transition graph.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::InProgress => "InProgress",
            GameStatus::Finished => "Finished",
            GameStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown game status: {0}")]
pub struct UnknownGameStatus(pub String);

impl FromStr for GameStatus {
    type Err = UnknownGameStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "scheduled" => Ok(GameStatus::Scheduled),
            "inprogress" => Ok(GameStatus::InProgress),
            "finished" => Ok(GameStatus::Finished),
            "cancelled" | "canceled" => Ok(GameStatus::Cancelled),
            _ => Err(UnknownGameStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for GameStatus {
    type Error = UnknownGameStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub sport_id: Uuid,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub score_a: Option<i32>,
    pub score_b: Option<i32>,
    pub game_date: DateTime<Utc>,
    pub location: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: GameStatus,
    pub winner_team_id: Option<Uuid>,
}

/// Game joined with the display names of its teams and sport.
#[derive(Debug, FromRow, Serialize, Clone)]
pub struct GameWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub game: Game,
    pub team_a_name: String,
    pub team_b_name: String,
    pub sport_name: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CreateGameRequest {
    pub sport_id: Option<String>,
    pub team_a_id: Option<String>,
    pub team_b_id: Option<String>,
    pub game_date: Option<String>,
    pub location: Option<String>,
}

/// Partial update. Absent (or null) fields keep their stored value.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UpdateGameRequest {
    pub sport_id: Option<String>,
    pub team_a_id: Option<String>,
    pub team_b_id: Option<String>,
    pub score_a: Option<i32>,
    pub score_b: Option<i32>,
    pub game_date: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub winner_team_id: Option<String>,
}
