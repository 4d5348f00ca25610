use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::news::News;

const NEWS_COLUMNS: &str = "id, title, content, author, publication_date, image_url, tags";

pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<News>, sqlx::Error> {
    sqlx::query_as::<_, News>(&format!(
        "SELECT {} FROM news ORDER BY publication_date DESC",
        NEWS_COLUMNS
    ))
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    news_id: Uuid,
) -> Result<Option<News>, sqlx::Error> {
    sqlx::query_as::<_, News>(&format!("SELECT {} FROM news WHERE id = $1", NEWS_COLUMNS))
        .bind(news_id)
        .fetch_optional(executor)
        .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(executor: E, news: &News) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO news (id, title, content, author, publication_date, image_url, tags)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(news.id)
    .bind(&news.title)
    .bind(&news.content)
    .bind(&news.author)
    .bind(news.publication_date)
    .bind(&news.image_url)
    .bind(&news.tags)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn update<'e, E: PgExecutor<'e>>(executor: E, news: &News) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE news
        SET title = $2, content = $3, author = $4, image_url = $5, tags = $6
        WHERE id = $1
        "#,
    )
    .bind(news.id)
    .bind(&news.title)
    .bind(&news.content)
    .bind(&news.author)
    .bind(&news.image_url)
    .bind(&news.tags)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, news_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(news_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
