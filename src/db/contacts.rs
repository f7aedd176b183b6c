use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{Contact, NewContact};

// `table` is always a name accepted by `config::validate_table_name`.

pub async fn ensure_table(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )"
    ))
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    table: &str,
    contact: &NewContact,
    created_at: DateTime<Utc>,
) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(&format!(
        "INSERT INTO {table} (name, email, phone, message, created_at)
         VALUES ($1, $2, $3, $4, $5) RETURNING *"
    ))
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(&contact.message)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
