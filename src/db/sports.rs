use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::sport::Sport;

pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Sport>, sqlx::Error> {
    sqlx::query_as::<_, Sport>("SELECT id, name, description, sport_type FROM sports ORDER BY name ASC")
        .fetch_all(executor)
        .await
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    sport_id: Uuid,
) -> Result<Option<Sport>, sqlx::Error> {
    sqlx::query_as::<_, Sport>("SELECT id, name, description, sport_type FROM sports WHERE id = $1")
        .bind(sport_id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_name<'e, E: PgExecutor<'e>>(
    executor: E,
    name: &str,
) -> Result<Option<Sport>, sqlx::Error> {
    sqlx::query_as::<_, Sport>("SELECT id, name, description, sport_type FROM sports WHERE name = $1")
        .bind(name)
        .fetch_optional(executor)
        .await
}

pub async fn exists<'e, E: PgExecutor<'e>>(executor: E, sport_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM sports WHERE id = $1)")
        .bind(sport_id)
        .fetch_one(executor)
        .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(executor: E, sport: &Sport) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO sports (id, name, description, sport_type) VALUES ($1, $2, $3, $4)")
        .bind(sport.id)
        .bind(&sport.name)
        .bind(&sport.description)
        .bind(&sport.sport_type)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn update<'e, E: PgExecutor<'e>>(executor: E, sport: &Sport) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE sports SET name = $2, description = $3, sport_type = $4 WHERE id = $1")
        .bind(sport.id)
        .bind(&sport.name)
        .bind(&sport.description)
        .bind(&sport.sport_type)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, sport_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sports WHERE id = $1")
        .bind(sport_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
