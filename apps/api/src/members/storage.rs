use sqlx::PgPool;
use uuid::Uuid;

use crate::models::member::MemberRow;

pub async fn list_members(pool: &PgPool) -> Result<Vec<MemberRow>, sqlx::Error> {
    sqlx::query_as::<_, MemberRow>("SELECT * FROM members ORDER BY last_name, first_name")
        .fetch_all(pool)
        .await
}

pub async fn get_member(pool: &PgPool, id: Uuid) -> Result<Option<MemberRow>, sqlx::Error> {
    sqlx::query_as::<_, MemberRow>("SELECT * FROM members WHERE member_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_member(
    pool: &PgPool,
    id: Uuid,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    phone: Option<&str>,
    joined_year: Option<i32>,
) -> Result<MemberRow, sqlx::Error> {
    sqlx::query_as::<_, MemberRow>(
        r#"
        INSERT INTO members (member_id, first_name, last_name, email, phone, joined_year)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .bind(joined_year)
    .fetch_one(pool)
    .await
}

/// Updates only the provided fields; absent ones keep their stored value.
pub async fn update_member(
    pool: &PgPool,
    id: Uuid,
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    joined_year: Option<i32>,
) -> Result<Option<MemberRow>, sqlx::Error> {
    sqlx::query_as::<_, MemberRow>(
        r#"
        UPDATE members SET
            first_name  = COALESCE($2, first_name),
            last_name   = COALESCE($3, last_name),
            email       = COALESCE($4, email),
            phone       = COALESCE($5, phone),
            joined_year = COALESCE($6, joined_year)
        WHERE member_id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .bind(joined_year)
    .fetch_optional(pool)
    .await
}

/// Returns false when no such member exists.
pub async fn delete_member(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
