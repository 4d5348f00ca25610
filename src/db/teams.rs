use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::team::Team;

pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT id, name, logo_url, city FROM teams ORDER BY name ASC")
        .fetch_all(executor)
        .await
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    team_id: Uuid,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT id, name, logo_url, city FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_name<'e, E: PgExecutor<'e>>(
    executor: E,
    name: &str,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT id, name, logo_url, city FROM teams WHERE name = $1")
        .bind(name)
        .fetch_optional(executor)
        .await
}

pub async fn exists<'e, E: PgExecutor<'e>>(executor: E, team_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teams WHERE id = $1)")
        .bind(team_id)
        .fetch_one(executor)
        .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(executor: E, team: &Team) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO teams (id, name, logo_url, city) VALUES ($1, $2, $3, $4)")
        .bind(team.id)
        .bind(&team.name)
        .bind(&team.logo_url)
        .bind(&team.city)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn update<'e, E: PgExecutor<'e>>(executor: E, team: &Team) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE teams SET name = $2, logo_url = $3, city = $4 WHERE id = $1")
        .bind(team.id)
        .bind(&team.name)
        .bind(&team.logo_url)
        .bind(&team.city)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, team_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
