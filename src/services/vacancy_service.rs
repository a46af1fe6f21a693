use crate::dto::vacancy_dto::{CreateVacancyPayload, VacancyListQuery};
use crate::error::{Error, Result};
use crate::models::vacancy::Vacancy;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct VacancyService {
    pool: SqlitePool,
}

impl VacancyService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: VacancyListQuery) -> Result<Vec<Vacancy>> {
        let vacancies = match query.client_id {
            Some(client_id) => {
                sqlx::query_as::<_, Vacancy>(
                    "SELECT id, client_id, title, fee_amount FROM vacancies WHERE client_id = ? ORDER BY title",
                )
                .bind(client_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vacancy>(
                    "SELECT id, client_id, title, fee_amount FROM vacancies ORDER BY title",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(vacancies)
    }

    pub async fn create(&self, payload: CreateVacancyPayload) -> Result<Vacancy> {
        let client = sqlx::query_scalar::<_, i64>("SELECT id FROM clients WHERE id = ?")
            .bind(payload.client_id)
            .fetch_optional(&self.pool)
            .await?;
        if client.is_none() {
            return Err(Error::BadRequest("Client not found".to_string()));
        }

        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            INSERT INTO vacancies (client_id, title, fee_amount)
            VALUES (?, ?, ?)
            RETURNING id, client_id, title, fee_amount
            "#,
        )
        .bind(payload.client_id)
        .bind(&payload.title)
        .bind(payload.fee_amount)
        .fetch_one(&self.pool)
        .await?;
        Ok(vacancy)
    }

    /// Deletes a vacancy together with its applications and their payments.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM vacancies WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Vacancy not found".to_string()));
        }

        sqlx::query(
            "DELETE FROM payments WHERE application_id IN (SELECT id FROM applications WHERE vacancy_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE applications SET replacement_of_id = NULL WHERE replacement_of_id IN (SELECT id FROM applications WHERE vacancy_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM applications WHERE vacancy_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM vacancies WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
