//! Queries over the events collection, including the importer's replace-all
//! commit.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::event::{EventRow, NewEvent};

const INSERT_EVENT_SQL: &str = r#"
    INSERT INTO events
        (event_id, subject, status, req_year, req_month, req_date, req_jdate,
         start_time, home_away, dress, mix, duration, rinks, event_type, cal_key)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
"#;

fn insert_event_query(event: &NewEvent) -> sqlx::query::Query<'_, Postgres, PgArguments> {
    sqlx::query(INSERT_EVENT_SQL)
        .bind(event.event_id)
        .bind(&event.subject)
        .bind(&event.status)
        .bind(event.req_year)
        .bind(event.req_month)
        .bind(event.req_date)
        .bind(event.req_jdate)
        .bind(&event.start_time)
        .bind(&event.home_away)
        .bind(&event.dress)
        .bind(&event.mix)
        .bind(event.duration)
        .bind(event.rinks)
        .bind(&event.event_type)
        .bind(&event.cal_key)
}

/// Replaces the whole collection with `events` inside one transaction.
/// Either every new row lands or the previous set stays untouched.
pub async fn replace_all(pool: &PgPool, events: &[NewEvent]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM events").execute(&mut *tx).await?;
    for event in events {
        insert_event_query(event).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Replaced events collection with {} record(s)", events.len());
    Ok(events.len() as u64)
}

/// Lists the collection in calendar order: the day-of-year ordinal gives the
/// chronological sort without full date comparison.
pub async fn list_events(pool: &PgPool) -> Result<Vec<EventRow>, sqlx::Error> {
    sqlx::query_as::<_, EventRow>(
        "SELECT * FROM events ORDER BY req_year, req_jdate, start_time",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Option<EventRow>, sqlx::Error> {
    sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE event_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_event(pool: &PgPool, event: &NewEvent) -> Result<(), sqlx::Error> {
    insert_event_query(event).execute(pool).await?;
    Ok(())
}

/// Returns false when no such event exists.
pub async fn update_status(pool: &PgPool, id: Uuid, status: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE events SET status = $2 WHERE event_id = $1")
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns false when no such event exists.
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
