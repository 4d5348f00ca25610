//! Game lifecycle operations against the store.
//!
//! Mutations take the connection of an open transaction; the caller
//! commits on success and the transaction rolls back on drop otherwise.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::db::{game_queries, sports, teams};
use crate::error::{PortalError, PortalResult};
use crate::game::lifecycle::Reference;
use crate::game::{GamePatch, NewGame};
use crate::models::game::{CreateGameRequest, Game, GameWithNames, UpdateGameRequest};
use crate::utils::ids::parse_id;

const GAME_NOT_FOUND: &str = "Game not found";

#[tracing::instrument(name = "Create game", skip(conn, request))]
pub async fn create_game(conn: &mut PgConnection, request: &CreateGameRequest) -> PortalResult<Game> {
    let new_game = NewGame::parse(request)?;

    let sport_id = resolve_sport(conn, &new_game.sport).await?;
    let team_a_id = resolve_team(conn, &new_game.team_a, "Team A").await?;
    let team_b_id = resolve_team(conn, &new_game.team_b, "Team B").await?;

    let game = new_game.into_game(sport_id, team_a_id, team_b_id);
    game_queries::insert(&mut *conn, &game).await?;

    tracing::info!("Scheduled game {} ({} vs {})", game.id, game.team_a_id, game.team_b_id);
    Ok(game)
}

#[tracing::instrument(name = "Update game", skip(conn, request))]
pub async fn update_game(
    conn: &mut PgConnection,
    game_id: &str,
    request: &UpdateGameRequest,
) -> PortalResult<Game> {
    let game_id = parse_id(game_id).ok_or_else(|| PortalError::not_found(GAME_NOT_FOUND))?;
    let mut game = game_queries::find_for_update(&mut *conn, game_id)
        .await?
        .ok_or_else(|| PortalError::not_found(GAME_NOT_FOUND))?;

    let patch = GamePatch::parse(request)?;
    for (label, reference) in patch.references() {
        match label {
            "Sport" => resolve_sport(conn, reference).await.map(drop)?,
            _ => resolve_team(conn, reference, label).await.map(drop)?,
        }
    }

    patch.apply(&mut game)?;
    game_queries::update(&mut *conn, &game).await?;

    tracing::info!(
        "Updated game {}: {:?}-{:?}, status {}, winner {:?}",
        game.id, game.score_a, game.score_b, game.status, game.winner_team_id
    );
    Ok(game)
}

#[tracing::instrument(name = "Delete game", skip(conn))]
pub async fn delete_game(conn: &mut PgConnection, game_id: &str) -> PortalResult<()> {
    let game_id = parse_id(game_id).ok_or_else(|| PortalError::not_found(GAME_NOT_FOUND))?;
    if !game_queries::delete(&mut *conn, game_id).await? {
        return Err(PortalError::not_found(GAME_NOT_FOUND));
    }
    Ok(())
}

pub async fn get_game(pool: &PgPool, game_id: &str) -> PortalResult<Game> {
    let game_id = parse_id(game_id).ok_or_else(|| PortalError::not_found(GAME_NOT_FOUND))?;
    game_queries::find_by_id(pool, game_id)
        .await?
        .ok_or_else(|| PortalError::not_found(GAME_NOT_FOUND))
}

pub async fn list_games(pool: &PgPool) -> PortalResult<Vec<GameWithNames>> {
    Ok(game_queries::list_with_names(pool).await?)
}

pub async fn list_games_latest_first(pool: &PgPool) -> PortalResult<Vec<Game>> {
    Ok(game_queries::list_latest_first(pool).await?)
}

/// An unknown sport simply has no games.
pub async fn list_games_by_sport(pool: &PgPool, sport_id: &str) -> PortalResult<Vec<Game>> {
    match parse_id(sport_id) {
        Some(sport_id) => Ok(game_queries::list_by_sport(pool, sport_id).await?),
        None => Ok(Vec::new()),
    }
}

async fn resolve_sport(conn: &mut PgConnection, reference: &Reference) -> PortalResult<Uuid> {
    if let Some(sport_id) = reference.id() {
        if sports::exists(&mut *conn, sport_id).await? {
            return Ok(sport_id);
        }
    }
    Err(PortalError::validation("Sport not found"))
}

async fn resolve_team(conn: &mut PgConnection, reference: &Reference, label: &str) -> PortalResult<Uuid> {
    if let Some(team_id) = reference.id() {
        if teams::exists(&mut *conn, team_id).await? {
            return Ok(team_id);
        }
    }
    Err(PortalError::validation(format!("{} not found", label)))
}
