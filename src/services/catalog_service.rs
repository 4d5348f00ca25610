//! Sports, teams and news: plain CRUD with uniqueness and delete guards.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::db::{game_queries, news, sports, teams};
use crate::error::{PortalError, PortalResult};
use crate::models::news::{CreateNewsRequest, News, UpdateNewsRequest};
use crate::models::sport::{CreateSportRequest, Sport, UpdateSportRequest};
use crate::models::team::{CreateTeamRequest, Team, UpdateTeamRequest};
use crate::utils::ids::{non_blank, parse_id};

const SPORT_NOT_FOUND: &str = "Sport not found";
const TEAM_NOT_FOUND: &str = "Team not found";
const NEWS_NOT_FOUND: &str = "News article not found";

/// Rejects a present-but-blank value for a field that cannot be empty.
fn required_text(value: Option<&str>, field: &str) -> PortalResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(raw) => non_blank(Some(raw))
            .map(|v| Some(v.to_string()))
            .ok_or_else(|| PortalError::validation(format!("{} cannot be empty", field))),
    }
}

// Sports

pub async fn list_sports(pool: &PgPool) -> PortalResult<Vec<Sport>> {
    Ok(sports::list(pool).await?)
}

pub async fn get_sport(pool: &PgPool, sport_id: &str) -> PortalResult<Sport> {
    let sport_id = parse_id(sport_id).ok_or_else(|| PortalError::not_found(SPORT_NOT_FOUND))?;
    sports::find_by_id(pool, sport_id)
        .await?
        .ok_or_else(|| PortalError::not_found(SPORT_NOT_FOUND))
}

#[tracing::instrument(name = "Create sport", skip(conn, request))]
pub async fn create_sport(conn: &mut PgConnection, request: &CreateSportRequest) -> PortalResult<Sport> {
    let name = non_blank(request.name.as_deref())
        .ok_or_else(|| PortalError::validation("Sport name is required"))?;

    if sports::find_by_name(&mut *conn, name).await?.is_some() {
        return Err(PortalError::conflict("A sport with this name already exists"));
    }

    let sport = Sport {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: request.description.clone(),
        sport_type: request.sport_type.clone(),
    };
    sports::insert(&mut *conn, &sport).await?;
    Ok(sport)
}

#[tracing::instrument(name = "Update sport", skip(conn, request))]
pub async fn update_sport(
    conn: &mut PgConnection,
    sport_id: &str,
    request: &UpdateSportRequest,
) -> PortalResult<Sport> {
    let sport_id = parse_id(sport_id).ok_or_else(|| PortalError::not_found(SPORT_NOT_FOUND))?;
    let mut sport = sports::find_by_id(&mut *conn, sport_id)
        .await?
        .ok_or_else(|| PortalError::not_found(SPORT_NOT_FOUND))?;

    if let Some(name) = required_text(request.name.as_deref(), "Sport name")? {
        if let Some(existing) = sports::find_by_name(&mut *conn, &name).await? {
            if existing.id != sport.id {
                return Err(PortalError::conflict("A sport with this name already exists"));
            }
        }
        sport.name = name;
    }
    if let Some(description) = &request.description {
        sport.description = Some(description.clone());
    }
    if let Some(sport_type) = &request.sport_type {
        sport.sport_type = Some(sport_type.clone());
    }

    sports::update(&mut *conn, &sport).await?;
    Ok(sport)
}

/// Sports with scheduled games cannot be removed.
#[tracing::instrument(name = "Delete sport", skip(conn))]
pub async fn delete_sport(conn: &mut PgConnection, sport_id: &str) -> PortalResult<()> {
    let sport_id = parse_id(sport_id).ok_or_else(|| PortalError::not_found(SPORT_NOT_FOUND))?;
    if sports::find_by_id(&mut *conn, sport_id).await?.is_none() {
        return Err(PortalError::not_found(SPORT_NOT_FOUND));
    }
    if game_queries::sport_is_referenced(&mut *conn, sport_id).await? {
        return Err(PortalError::conflict("Sport still has games and cannot be deleted"));
    }
    sports::delete(&mut *conn, sport_id).await?;
    Ok(())
}

// Teams

pub async fn list_teams(pool: &PgPool) -> PortalResult<Vec<Team>> {
    Ok(teams::list(pool).await?)
}

pub async fn get_team(pool: &PgPool, team_id: &str) -> PortalResult<Team> {
    let team_id = parse_id(team_id).ok_or_else(|| PortalError::not_found(TEAM_NOT_FOUND))?;
    teams::find_by_id(pool, team_id)
        .await?
        .ok_or_else(|| PortalError::not_found(TEAM_NOT_FOUND))
}

#[tracing::instrument(name = "Create team", skip(conn, request))]
pub async fn create_team(conn: &mut PgConnection, request: &CreateTeamRequest) -> PortalResult<Team> {
    let name = non_blank(request.name.as_deref())
        .ok_or_else(|| PortalError::validation("Team name is required"))?;

    if teams::find_by_name(&mut *conn, name).await?.is_some() {
        return Err(PortalError::conflict("A team with this name already exists"));
    }

    let team = Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        logo_url: request.logo_url.clone(),
        city: request.city.clone(),
    };
    teams::insert(&mut *conn, &team).await?;
    Ok(team)
}

#[tracing::instrument(name = "Update team", skip(conn, request))]
pub async fn update_team(
    conn: &mut PgConnection,
    team_id: &str,
    request: &UpdateTeamRequest,
) -> PortalResult<Team> {
    let team_id = parse_id(team_id).ok_or_else(|| PortalError::not_found(TEAM_NOT_FOUND))?;
    let mut team = teams::find_by_id(&mut *conn, team_id)
        .await?
        .ok_or_else(|| PortalError::not_found(TEAM_NOT_FOUND))?;

    if let Some(name) = required_text(request.name.as_deref(), "Team name")? {
        if let Some(existing) = teams::find_by_name(&mut *conn, &name).await? {
            if existing.id != team.id {
                return Err(PortalError::conflict("A team with this name already exists"));
            }
        }
        team.name = name;
    }
    if let Some(logo_url) = &request.logo_url {
        team.logo_url = Some(logo_url.clone());
    }
    if let Some(city) = &request.city {
        team.city = Some(city.clone());
    }

    teams::update(&mut *conn, &team).await?;
    Ok(team)
}

/// Teams that appear in any game cannot be removed. The team's medal
/// standing goes with it.
#[tracing::instrument(name = "Delete team", skip(conn))]
pub async fn delete_team(conn: &mut PgConnection, team_id: &str) -> PortalResult<()> {
    let team_id = parse_id(team_id).ok_or_else(|| PortalError::not_found(TEAM_NOT_FOUND))?;
    if teams::find_by_id(&mut *conn, team_id).await?.is_none() {
        return Err(PortalError::not_found(TEAM_NOT_FOUND));
    }
    if game_queries::team_is_referenced(&mut *conn, team_id).await? {
        return Err(PortalError::conflict("Team is referenced by games and cannot be deleted"));
    }
    teams::delete(&mut *conn, team_id).await?;
    Ok(())
}

// News

pub async fn list_news(pool: &PgPool) -> PortalResult<Vec<News>> {
    Ok(news::list(pool).await?)
}

pub async fn get_news(pool: &PgPool, news_id: &str) -> PortalResult<News> {
    let news_id = parse_id(news_id).ok_or_else(|| PortalError::not_found(NEWS_NOT_FOUND))?;
    news::find_by_id(pool, news_id)
        .await?
        .ok_or_else(|| PortalError::not_found(NEWS_NOT_FOUND))
}

#[tracing::instrument(name = "Create news", skip(conn, request))]
pub async fn create_news(conn: &mut PgConnection, request: &CreateNewsRequest) -> PortalResult<News> {
    let (Some(title), Some(content), Some(author)) = (
        non_blank(request.title.as_deref()),
        non_blank(request.content.as_deref()),
        non_blank(request.author.as_deref()),
    ) else {
        return Err(PortalError::validation("Title, content and author are required"));
    };

    let article = News {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        publication_date: Utc::now(),
        image_url: request.image_url.clone(),
        tags: request.tags.clone().unwrap_or_default(),
    };
    news::insert(&mut *conn, &article).await?;
    Ok(article)
}

#[tracing::instrument(name = "Update news", skip(conn, request))]
pub async fn update_news(
    conn: &mut PgConnection,
    news_id: &str,
    request: &UpdateNewsRequest,
) -> PortalResult<News> {
    let news_id = parse_id(news_id).ok_or_else(|| PortalError::not_found(NEWS_NOT_FOUND))?;
    let mut article = news::find_by_id(&mut *conn, news_id)
        .await?
        .ok_or_else(|| PortalError::not_found(NEWS_NOT_FOUND))?;

    if let Some(title) = required_text(request.title.as_deref(), "Title")? {
        article.title = title;
    }
    if let Some(content) = required_text(request.content.as_deref(), "Content")? {
        article.content = content;
    }
    if let Some(author) = required_text(request.author.as_deref(), "Author")? {
        article.author = author;
    }
    if let Some(image_url) = &request.image_url {
        article.image_url = Some(image_url.clone());
    }
    if let Some(tags) = &request.tags {
        article.tags = tags.clone();
    }

    news::update(&mut *conn, &article).await?;
    Ok(article)
}

#[tracing::instrument(name = "Delete news", skip(conn))]
pub async fn delete_news(conn: &mut PgConnection, news_id: &str) -> PortalResult<()> {
    let news_id = parse_id(news_id).ok_or_else(|| PortalError::not_found(NEWS_NOT_FOUND))?;
    if !news::delete(&mut *conn, news_id).await? {
        return Err(PortalError::not_found(NEWS_NOT_FOUND));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_distinguishes_absent_from_blank() {
        assert!(matches!(required_text(None, "Name"), Ok(None)));
        assert_eq!(required_text(Some(" Futsal "), "Name").unwrap(), Some("Futsal".to_string()));
        assert!(matches!(required_text(Some("  "), "Name"), Err(PortalError::Validation(_))));
    }
}
