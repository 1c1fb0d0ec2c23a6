use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct StressRecord {
    pub id: i32,
    pub user_id: i32,
    pub stress_level: i32,
    pub source: String,
    pub created_at: OffsetDateTime,
}

impl StressRecord {
    /// Insert a record. The foreign key on user_id enforces that the
    /// account exists; a violation surfaces as `sqlx::Error::Database`.
    pub async fn insert(
        db: &PgPool,
        user_id: i32,
        stress_level: i32,
        source: &str,
    ) -> sqlx::Result<StressRecord> {
        sqlx::query_as::<_, StressRecord>(
            r#"
            INSERT INTO stress_records (user_id, stress_level, source)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, stress_level, source, created_at
            "#,
        )
        .bind(user_id)
        .bind(stress_level)
        .bind(source)
        .fetch_one(db)
        .await
    }

    /// All records for one account, most recent first.
    pub async fn list_by_user(db: &PgPool, user_id: i32) -> sqlx::Result<Vec<StressRecord>> {
        sqlx::query_as::<_, StressRecord>(
            r#"
            SELECT id, user_id, stress_level, source, created_at
            FROM stress_records
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
