use crate::dto::candidate_dto::{CandidateListQuery, CreateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct CandidateService {
    pool: SqlitePool,
}

impl CandidateService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: CandidateListQuery) -> Result<Vec<Candidate>> {
        let pattern = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{}%", q.to_lowercase()));

        let candidates = match pattern {
            Some(pattern) => {
                sqlx::query_as::<_, Candidate>(
                    r#"
                    SELECT id, full_name, phone, email, notes FROM candidates
                    WHERE LOWER(full_name) LIKE ?
                       OR LOWER(phone) LIKE ?
                       OR LOWER(email) LIKE ?
                    ORDER BY full_name
                    "#,
                )
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Candidate>(
                    "SELECT id, full_name, phone, email, notes FROM candidates ORDER BY full_name",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(candidates)
    }

    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (full_name, phone, email, notes)
            VALUES (?, ?, ?, ?)
            RETURNING id, full_name, phone, email, notes
            "#,
        )
        .bind(&payload.full_name)
        .bind(&payload.phone)
        .bind(&payload.email)
        .bind(&payload.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Deletes a candidate and cascades over their applications and the
    /// payments recorded under those applications.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM candidates WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Candidate not found".to_string()));
        }

        sqlx::query(
            "DELETE FROM payments WHERE application_id IN (SELECT id FROM applications WHERE candidate_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE applications SET replacement_of_id = NULL WHERE replacement_of_id IN (SELECT id FROM applications WHERE candidate_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM applications WHERE candidate_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM candidates WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
