use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A news article. Tags keep their order and may contain any character.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct News {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNewsRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}
