use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::medal::{MedalStanding, MedalStandingWithTeam};

/// Standings joined with team names, in creation order. Ranking happens
/// in `medals::rank_standings`.
pub async fn list_with_team_names<'e, E: PgExecutor<'e>>(
    executor: E,
) -> Result<Vec<MedalStandingWithTeam>, sqlx::Error> {
    sqlx::query_as::<_, MedalStandingWithTeam>(
        r#"
        SELECT m.id, m.team_id, m.gold_medals, m.silver_medals, m.bronze_medals,
               t.name AS team_name
        FROM medal_standings m
        JOIN teams t ON m.team_id = t.id
        ORDER BY m.created_at ASC, m.id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_team<'e, E: PgExecutor<'e>>(
    executor: E,
    team_id: Uuid,
) -> Result<Option<MedalStanding>, sqlx::Error> {
    sqlx::query_as::<_, MedalStanding>(
        r#"
        SELECT id, team_id, gold_medals, silver_medals, bronze_medals
        FROM medal_standings
        WHERE team_id = $1
        "#,
    )
    .bind(team_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_by_team_for_update<'e, E: PgExecutor<'e>>(
    executor: E,
    team_id: Uuid,
) -> Result<Option<MedalStanding>, sqlx::Error> {
    sqlx::query_as::<_, MedalStanding>(
        r#"
        SELECT id, team_id, gold_medals, silver_medals, bronze_medals
        FROM medal_standings
        WHERE team_id = $1
        FOR UPDATE
        "#,
    )
    .bind(team_id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(executor: E, standing: &MedalStanding) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO medal_standings (id, team_id, gold_medals, silver_medals, bronze_medals)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(standing.id)
    .bind(standing.team_id)
    .bind(standing.gold_medals)
    .bind(standing.silver_medals)
    .bind(standing.bronze_medals)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn update_counts<'e, E: PgExecutor<'e>>(
    executor: E,
    standing: &MedalStanding,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE medal_standings
        SET gold_medals = $2, silver_medals = $3, bronze_medals = $4
        WHERE id = $1
        "#,
    )
    .bind(standing.id)
    .bind(standing.gold_medals)
    .bind(standing.silver_medals)
    .bind(standing.bronze_medals)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_by_team<'e, E: PgExecutor<'e>>(executor: E, team_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM medal_standings WHERE team_id = $1")
        .bind(team_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
