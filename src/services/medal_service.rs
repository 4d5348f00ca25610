//! Medal table operations. At most one standing per team; totals are
//! always derived from the three counts.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::db::{medal_queries, teams};
use crate::error::{PortalError, PortalResult};
use crate::medals::{rank_standings, MedalCounts};
use crate::models::medal::{CreateStandingRequest, MedalStanding, MedalStandingView, UpdateStandingRequest};
use crate::utils::ids::{non_blank, parse_id};

const STANDING_NOT_FOUND: &str = "Medal standing not found for this team";

#[tracing::instrument(name = "Create medal standing", skip(conn, request))]
pub async fn create_standing(
    conn: &mut PgConnection,
    request: &CreateStandingRequest,
) -> PortalResult<MedalStanding> {
    let team_ref = non_blank(request.team_id.as_deref())
        .ok_or_else(|| PortalError::validation("Team ID is required"))?;
    let counts = MedalCounts::new(
        request.gold_medals.unwrap_or(0),
        request.silver_medals.unwrap_or(0),
        request.bronze_medals.unwrap_or(0),
    )?;

    let team_id = parse_id(team_ref).ok_or_else(|| PortalError::validation("Team not found"))?;
    if !teams::exists(&mut *conn, team_id).await? {
        return Err(PortalError::validation("Team not found"));
    }

    if medal_queries::find_by_team(&mut *conn, team_id).await?.is_some() {
        return Err(PortalError::conflict("Medal standing already exists for this team"));
    }

    let standing = MedalStanding {
        id: Uuid::new_v4(),
        team_id,
        gold_medals: counts.gold,
        silver_medals: counts.silver,
        bronze_medals: counts.bronze,
    };
    medal_queries::insert(&mut *conn, &standing).await?;

    tracing::info!("Created medal standing for team {}", team_id);
    Ok(standing)
}

#[tracing::instrument(name = "Update medal standing", skip(conn, request))]
pub async fn update_standing(
    conn: &mut PgConnection,
    team_id: &str,
    request: &UpdateStandingRequest,
) -> PortalResult<MedalStanding> {
    let team_id = parse_id(team_id).ok_or_else(|| PortalError::not_found(STANDING_NOT_FOUND))?;
    let mut standing = medal_queries::find_by_team_for_update(&mut *conn, team_id)
        .await?
        .ok_or_else(|| PortalError::not_found(STANDING_NOT_FOUND))?;

    let counts = standing.counts().with_updates(
        request.gold_medals,
        request.silver_medals,
        request.bronze_medals,
    )?;
    standing.gold_medals = counts.gold;
    standing.silver_medals = counts.silver;
    standing.bronze_medals = counts.bronze;

    medal_queries::update_counts(&mut *conn, &standing).await?;
    Ok(standing)
}

#[tracing::instrument(name = "Delete medal standing", skip(conn))]
pub async fn delete_standing(conn: &mut PgConnection, team_id: &str) -> PortalResult<()> {
    let team_id = parse_id(team_id).ok_or_else(|| PortalError::not_found(STANDING_NOT_FOUND))?;
    if !medal_queries::delete_by_team(&mut *conn, team_id).await? {
        return Err(PortalError::not_found(STANDING_NOT_FOUND));
    }
    Ok(())
}

pub async fn get_standing(pool: &PgPool, team_id: &str) -> PortalResult<MedalStanding> {
    let team_id = parse_id(team_id).ok_or_else(|| PortalError::not_found(STANDING_NOT_FOUND))?;
    medal_queries::find_by_team(pool, team_id)
        .await?
        .ok_or_else(|| PortalError::not_found(STANDING_NOT_FOUND))
}

/// The medal table: gold, then silver, then bronze, all descending.
pub async fn list_standings(pool: &PgPool) -> PortalResult<Vec<MedalStandingView>> {
    let rows = medal_queries::list_with_team_names(pool).await?;
    Ok(rank_standings(rows, |row| &row.standing)
        .into_iter()
        .map(MedalStandingView::from)
        .collect())
}
