use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::game::{Game, GameWithNames};

const GAME_COLUMNS: &str = "g.id, g.sport_id, g.team_a_id, g.team_b_id, g.score_a, g.score_b, \
     g.game_date, g.location, g.status, g.winner_team_id";

/// All games with team and sport names, earliest first.
pub async fn list_with_names<'e, E: PgExecutor<'e>>(
    executor: E,
) -> Result<Vec<GameWithNames>, sqlx::Error> {
    sqlx::query_as::<_, GameWithNames>(&format!(
        r#"
        SELECT {},
            team_a.name AS team_a_name,
            team_b.name AS team_b_name,
            s.name AS sport_name
        FROM games g
        JOIN teams team_a ON g.team_a_id = team_a.id
        JOIN teams team_b ON g.team_b_id = team_b.id
        JOIN sports s ON g.sport_id = s.id
        ORDER BY g.game_date ASC
        "#,
        GAME_COLUMNS
    ))
    .fetch_all(executor)
    .await
}

/// Admin listing, most recent first.
pub async fn list_latest_first<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(&format!(
        "SELECT {} FROM games g ORDER BY g.game_date DESC",
        GAME_COLUMNS
    ))
    .fetch_all(executor)
    .await
}

pub async fn list_by_sport<'e, E: PgExecutor<'e>>(
    executor: E,
    sport_id: Uuid,
) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(&format!(
        "SELECT {} FROM games g WHERE g.sport_id = $1 ORDER BY g.game_date ASC",
        GAME_COLUMNS
    ))
    .bind(sport_id)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    game_id: Uuid,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(&format!("SELECT {} FROM games g WHERE g.id = $1", GAME_COLUMNS))
        .bind(game_id)
        .fetch_optional(executor)
        .await
}

/// Row-locking read for read-modify-write inside a transaction.
pub async fn find_for_update<'e, E: PgExecutor<'e>>(
    executor: E,
    game_id: Uuid,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(&format!(
        "SELECT {} FROM games g WHERE g.id = $1 FOR UPDATE",
        GAME_COLUMNS
    ))
    .bind(game_id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(executor: E, game: &Game) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO games (
            id, sport_id, team_a_id, team_b_id, score_a, score_b,
            game_date, location, status, winner_team_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(game.id)
    .bind(game.sport_id)
    .bind(game.team_a_id)
    .bind(game.team_b_id)
    .bind(game.score_a)
    .bind(game.score_b)
    .bind(game.game_date)
    .bind(&game.location)
    .bind(game.status.as_str())
    .bind(game.winner_team_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn update<'e, E: PgExecutor<'e>>(executor: E, game: &Game) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE games
        SET sport_id = $2,
            team_a_id = $3,
            team_b_id = $4,
            score_a = $5,
            score_b = $6,
            game_date = $7,
            location = $8,
            status = $9,
            winner_team_id = $10
        WHERE id = $1
        "#,
    )
    .bind(game.id)
    .bind(game.sport_id)
    .bind(game.team_a_id)
    .bind(game.team_b_id)
    .bind(game.score_a)
    .bind(game.score_b)
    .bind(game.game_date)
    .bind(&game.location)
    .bind(game.status.as_str())
    .bind(game.winner_team_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, game_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM games WHERE id = $1")
        .bind(game_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Whether any game has this team on either side or as winner.
pub async fn team_is_referenced<'e, E: PgExecutor<'e>>(
    executor: E,
    team_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM games
            WHERE team_a_id = $1 OR team_b_id = $1 OR winner_team_id = $1
        )
        "#,
    )
    .bind(team_id)
    .fetch_one(executor)
    .await
}

pub async fn sport_is_referenced<'e, E: PgExecutor<'e>>(
    executor: E,
    sport_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM games WHERE sport_id = $1)")
        .bind(sport_id)
        .fetch_one(executor)
        .await
}
