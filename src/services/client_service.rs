use crate::dto::client_dto::CreateClientPayload;
use crate::error::{Error, Result};
use crate::models::client::Client;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ClientService {
    pool: SqlitePool,
}

impl ClientService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT id, name FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(clients)
    }

    pub async fn create(&self, payload: CreateClientPayload) -> Result<Client> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM clients WHERE name = ?")
            .bind(&payload.name)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(Error::BadRequest("Client name already exists".to_string()));
        }

        let client =
            sqlx::query_as::<_, Client>("INSERT INTO clients (name) VALUES (?) RETURNING id, name")
                .bind(&payload.name)
                .fetch_one(&self.pool)
                .await?;
        Ok(client)
    }

    /// Deletes a client and everything it owns: vacancies, their
    /// applications, and the payments under those applications.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Client not found".to_string()));
        }

        sqlx::query(
            r#"
            DELETE FROM payments WHERE application_id IN (
                SELECT a.id FROM applications a
                JOIN vacancies v ON v.id = a.vacancy_id
                WHERE v.client_id = ?
            )
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE applications SET replacement_of_id = NULL WHERE replacement_of_id IN (
                SELECT a.id FROM applications a
                JOIN vacancies v ON v.id = a.vacancy_id
                WHERE v.client_id = ?
            )
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "DELETE FROM applications WHERE vacancy_id IN (SELECT id FROM vacancies WHERE client_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM vacancies WHERE client_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
