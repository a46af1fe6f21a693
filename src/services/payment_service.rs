use crate::dto::payment_dto::CreatePaymentPayload;
use crate::error::{Error, Result};
use crate::models::payment::Payment;
use chrono::{NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};

/// Rebuilds the cached payment fields on an application from its ledger:
/// total amount, latest paid date, and the paid flag. Runs on the caller's
/// connection so that, inside a transaction, it observes the mutation that
/// triggered it.
pub(crate) async fn recompute_payment_cache(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<()> {
    let total: f64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(amount), 0.0) FROM payments WHERE application_id = ?",
    )
    .bind(application_id)
    .fetch_one(&mut *conn)
    .await?;

    let last_date: Option<NaiveDate> =
        sqlx::query_scalar("SELECT MAX(paid_date) FROM payments WHERE application_id = ?")
            .bind(application_id)
            .fetch_one(&mut *conn)
            .await?;

    sqlx::query("UPDATE applications SET payment_amount = ?, paid_date = ?, paid = ? WHERE id = ?")
        .bind(total)
        .bind(last_date)
        .bind(total > 0.0)
        .bind(application_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[derive(Clone)]
pub struct PaymentService {
    pool: SqlitePool,
}

impl PaymentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_for_application(&self, application_id: i64) -> Result<Vec<Payment>> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM applications WHERE id = ?")
            .bind(application_id)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Application not found".to_string()));
        }

        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, application_id, paid_date, amount, note, created_at
            FROM payments
            WHERE application_id = ?
            ORDER BY paid_date DESC, created_at DESC
            "#,
        )
        .bind(application_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }

    pub async fn add(&self, application_id: i64, payload: CreatePaymentPayload) -> Result<Payment> {
        if payload.amount < 0.0 {
            return Err(Error::BadRequest(
                "Payment amount must be non-negative".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM applications WHERE id = ?")
            .bind(application_id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(Error::NotFound("Application not found".to_string()));
        }

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (application_id, paid_date, amount, note, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, application_id, paid_date, amount, note, created_at
            "#,
        )
        .bind(application_id)
        .bind(payload.paid_date)
        .bind(payload.amount)
        .bind(&payload.note)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        recompute_payment_cache(&mut tx, application_id).await?;

        tx.commit().await?;
        Ok(payment)
    }

    pub async fn delete(&self, payment_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let application_id =
            sqlx::query_scalar::<_, i64>("SELECT application_id FROM payments WHERE id = ?")
                .bind(payment_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(application_id) = application_id else {
            return Err(Error::NotFound("Payment not found".to_string()));
        };

        sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(payment_id)
            .execute(&mut *tx)
            .await?;

        recompute_payment_cache(&mut tx, application_id).await?;

        tx.commit().await?;
        Ok(())
    }
}
