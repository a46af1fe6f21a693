use crate::dto::recruiter_dto::CreateRecruiterPayload;
use crate::error::{Error, Result};
use crate::models::recruiter::Recruiter;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct RecruiterService {
    pool: SqlitePool,
}

impl RecruiterService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Recruiter>> {
        let recruiters =
            sqlx::query_as::<_, Recruiter>("SELECT id, name FROM recruiters ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(recruiters)
    }

    pub async fn create(&self, payload: CreateRecruiterPayload) -> Result<Recruiter> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM recruiters WHERE name = ?")
            .bind(&payload.name)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(Error::BadRequest(
                "Recruiter name already exists".to_string(),
            ));
        }

        let recruiter = sqlx::query_as::<_, Recruiter>(
            "INSERT INTO recruiters (name) VALUES (?) RETURNING id, name",
        )
        .bind(&payload.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(recruiter)
    }

    /// Applications keep a plain reference to their recruiter, with no
    /// cascade defined on that edge. Deletion is refused while any
    /// application still points here.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM recruiters WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Recruiter not found".to_string()));
        }

        let referenced: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE recruiter_id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if referenced > 0 {
            return Err(Error::ReferentialIntegrity(format!(
                "Recruiter is referenced by {} application(s)",
                referenced
            )));
        }

        sqlx::query("DELETE FROM recruiters WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
