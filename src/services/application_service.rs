use crate::dto::application_dto::{CreateApplicationPayload, UpdateApplicationPayload};
use crate::error::{Error, Result};
use crate::models::application::Application;
use crate::models::vacancy::Vacancy;
use crate::services::payment_service::recompute_payment_cache;
use chrono::{NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};

pub const VALID_STATUSES: [&str; 4] = ["new", "in_process", "rejected", "hired"];

/// A rejected application must carry a rejection date, a hired one a start
/// date. Always checked against the full record, on create and on every
/// merged update.
fn enforce_dates_for_status(
    status: &str,
    rejection_date: Option<NaiveDate>,
    start_date: Option<NaiveDate>,
) -> Result<()> {
    if !VALID_STATUSES.contains(&status) {
        return Err(Error::BadRequest(format!("Invalid status: {}", status)));
    }
    if status == "rejected" && rejection_date.is_none() {
        return Err(Error::BadRequest(
            "For status 'rejected' rejection_date is required".to_string(),
        ));
    }
    if status == "hired" && start_date.is_none() {
        return Err(Error::BadRequest(
            "For status 'hired' start_date is required".to_string(),
        ));
    }
    Ok(())
}

async fn fetch_application(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Application>> {
    let application = sqlx::query_as::<_, Application>(
        r#"
        SELECT id, candidate_id, vacancy_id, recruiter_id, date_contacted, status,
               rejection_date, start_date, paid, paid_date, payment_amount,
               is_replacement, replacement_of_id, replacement_note, created_at
        FROM applications
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(application)
}

#[derive(Clone)]
pub struct ApplicationService {
    pool: SqlitePool,
}

impl ApplicationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Application> {
        let mut conn = self.pool.acquire().await?;
        fetch_application(&mut conn, id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))
    }

    pub async fn create(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let mut tx = self.pool.begin().await?;

        let candidate = sqlx::query_scalar::<_, i64>("SELECT id FROM candidates WHERE id = ?")
            .bind(payload.candidate_id)
            .fetch_optional(&mut *tx)
            .await?;
        if candidate.is_none() {
            return Err(Error::BadRequest("Candidate not found".to_string()));
        }

        let vacancy = sqlx::query_as::<_, Vacancy>(
            "SELECT id, client_id, title, fee_amount FROM vacancies WHERE id = ?",
        )
        .bind(payload.vacancy_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::BadRequest("Vacancy not found".to_string()))?;

        let recruiter = sqlx::query_scalar::<_, i64>("SELECT id FROM recruiters WHERE id = ?")
            .bind(payload.recruiter_id)
            .fetch_optional(&mut *tx)
            .await?;
        if recruiter.is_none() {
            return Err(Error::BadRequest("Recruiter not found".to_string()));
        }

        let status = payload.status.clone().unwrap_or_else(|| "new".to_string());
        enforce_dates_for_status(&status, payload.rejection_date, payload.start_date)?;

        let mut application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (
                candidate_id, vacancy_id, recruiter_id, date_contacted, status,
                rejection_date, start_date, paid, paid_date, payment_amount,
                is_replacement, replacement_of_id, replacement_note, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, 0, NULL, 0.0, ?, ?, ?, ?)
            RETURNING id, candidate_id, vacancy_id, recruiter_id, date_contacted, status,
                      rejection_date, start_date, paid, paid_date, payment_amount,
                      is_replacement, replacement_of_id, replacement_note, created_at
            "#,
        )
        .bind(payload.candidate_id)
        .bind(payload.vacancy_id)
        .bind(payload.recruiter_id)
        .bind(payload.date_contacted)
        .bind(&status)
        .bind(payload.rejection_date)
        .bind(payload.start_date)
        .bind(payload.is_replacement)
        .bind(payload.replacement_of_id)
        .bind(&payload.replacement_note)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        // Optional seed payment: the caller can mark the application paid at
        // creation time, falling back to the vacancy fee when no explicit
        // amount was given. Goes through the same cache recompute as the
        // payment endpoints.
        if payload.paid {
            if let Some(paid_date) = payload.paid_date {
                let amount = if payload.payment_amount > 0.0 {
                    payload.payment_amount
                } else {
                    vacancy.fee_amount
                };
                sqlx::query(
                    "INSERT INTO payments (application_id, paid_date, amount, note, created_at) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(application.id)
                .bind(paid_date)
                .bind(amount)
                .bind("initial payment")
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;

                recompute_payment_cache(&mut tx, application.id).await?;
                application = fetch_application(&mut tx, application.id)
                    .await?
                    .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
            }
        }

        tx.commit().await?;
        Ok(application)
    }

    /// Sparse update: fields absent from the payload keep their stored
    /// value, and the status/date rule is re-checked against the merged
    /// record even when the status itself did not change.
    pub async fn update(&self, id: i64, payload: UpdateApplicationPayload) -> Result<Application> {
        let mut tx = self.pool.begin().await?;

        let current = fetch_application(&mut tx, id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;

        let date_contacted = payload.date_contacted.unwrap_or(current.date_contacted);
        let status = payload.status.unwrap_or(current.status);
        let rejection_date = payload.rejection_date.or(current.rejection_date);
        let start_date = payload.start_date.or(current.start_date);
        let is_replacement = payload.is_replacement.unwrap_or(current.is_replacement);
        let replacement_of_id = payload.replacement_of_id.or(current.replacement_of_id);
        let replacement_note = payload.replacement_note.or(current.replacement_note);

        enforce_dates_for_status(&status, rejection_date, start_date)?;

        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET date_contacted = ?, status = ?, rejection_date = ?, start_date = ?,
                is_replacement = ?, replacement_of_id = ?, replacement_note = ?
            WHERE id = ?
            RETURNING id, candidate_id, vacancy_id, recruiter_id, date_contacted, status,
                      rejection_date, start_date, paid, paid_date, payment_amount,
                      is_replacement, replacement_of_id, replacement_note, created_at
            "#,
        )
        .bind(date_contacted)
        .bind(&status)
        .bind(rejection_date)
        .bind(start_date)
        .bind(is_replacement)
        .bind(replacement_of_id)
        .bind(&replacement_note)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(application)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM applications WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Application not found".to_string()));
        }

        sqlx::query("DELETE FROM payments WHERE application_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE applications SET replacement_of_id = NULL WHERE replacement_of_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM applications WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
