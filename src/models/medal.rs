use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::medals::MedalCounts;

#[derive(Debug, FromRow, Deserialize, Clone, PartialEq)]
pub struct MedalStanding {
    pub id: Uuid,
    pub team_id: Uuid,
    pub gold_medals: i32,
    pub silver_medals: i32,
    pub bronze_medals: i32,
}

impl MedalStanding {
    pub fn counts(&self) -> MedalCounts {
        MedalCounts {
            gold: self.gold_medals,
            silver: self.silver_medals,
            bronze: self.bronze_medals,
        }
    }

    pub fn total_medals(&self) -> i64 {
        self.counts().total()
    }
}

/// Serialized form of a standing; the total is always derived.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MedalStandingView {
    pub medal_standing_id: Uuid,
    pub team_id: Uuid,
    pub gold_medals: i32,
    pub silver_medals: i32,
    pub bronze_medals: i32,
    pub total_medals: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl From<MedalStanding> for MedalStandingView {
    fn from(standing: MedalStanding) -> Self {
        Self {
            medal_standing_id: standing.id,
            team_id: standing.team_id,
            gold_medals: standing.gold_medals,
            silver_medals: standing.silver_medals,
            bronze_medals: standing.bronze_medals,
            total_medals: standing.total_medals(),
            team_name: None,
        }
    }
}

/// Row shape of the standings listing.
#[derive(Debug, FromRow, Clone)]
pub struct MedalStandingWithTeam {
    #[sqlx(flatten)]
    pub standing: MedalStanding,
    pub team_name: String,
}

impl From<MedalStandingWithTeam> for MedalStandingView {
    fn from(row: MedalStandingWithTeam) -> Self {
        Self {
            team_name: Some(row.team_name),
            ..MedalStandingView::from(row.standing)
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct CreateStandingRequest {
    pub team_id: Option<String>,
    pub gold_medals: Option<i32>,
    pub silver_medals: Option<i32>,
    pub bronze_medals: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateStandingRequest {
    pub gold_medals: Option<i32>,
    pub silver_medals: Option<i32>,
    pub bronze_medals: Option<i32>,
}
