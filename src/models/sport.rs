use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Sport {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub sport_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSportRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub sport_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSportRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub sport_type: Option<String>,
}
