use crate::dto::report_dto::{EarningsItem, EarningsReport, PipelineQuery, PipelineRow};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use sqlx::SqlitePool;

const PIPELINE_SELECT: &str = r#"
SELECT
    a.id, a.date_contacted, a.status, a.rejection_date, a.start_date,
    a.paid, a.paid_date, a.payment_amount,
    a.is_replacement, a.replacement_of_id, a.replacement_note, a.created_at,
    cand.id AS candidate_id, cand.full_name AS candidate_name,
    r.id AS recruiter_id, r.name AS recruiter_name,
    v.id AS vacancy_id, v.title AS vacancy_title, v.fee_amount AS vacancy_fee,
    cl.id AS client_id, cl.name AS client_name
FROM applications a
JOIN candidates cand ON cand.id = a.candidate_id
JOIN recruiters r ON r.id = a.recruiter_id
JOIN vacancies v ON v.id = a.vacancy_id
JOIN clients cl ON cl.id = v.client_id
"#;

const EARNINGS_SELECT: &str = r#"
SELECT
    p.id AS payment_id, p.paid_date, p.amount,
    cand.full_name AS candidate_name,
    cl.name AS client_name,
    v.title AS vacancy_title,
    r.name AS recruiter_name,
    a.id AS application_id
FROM payments p
JOIN applications a ON a.id = p.application_id
JOIN candidates cand ON cand.id = a.candidate_id
JOIN recruiters r ON r.id = a.recruiter_id
JOIN vacancies v ON v.id = a.vacancy_id
JOIN clients cl ON cl.id = v.client_id
WHERE p.paid_date >= ? AND p.paid_date < ?
ORDER BY p.paid_date DESC, p.created_at DESC, p.id DESC
"#;

#[derive(Clone)]
pub struct ReportService {
    pool: SqlitePool,
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Flattened application rows for the pipeline view. Inner joins only:
    /// an application whose join chain is incomplete is not reported.
    pub async fn pipeline(&self, query: PipelineQuery) -> Result<Vec<PipelineRow>> {
        let limit = query.limit.unwrap_or(500).clamp(1, 2000);

        let search_pattern = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s.to_lowercase()));

        let mut conditions: Vec<&str> = Vec::new();
        if query.client_id.is_some() {
            conditions.push("cl.id = ?");
        }
        if query.recruiter_id.is_some() {
            conditions.push("r.id = ?");
        }
        if query.status.is_some() {
            conditions.push("a.status = ?");
        }
        if search_pattern.is_some() {
            conditions.push(
                "(LOWER(cand.full_name) LIKE ? OR LOWER(v.title) LIKE ? OR LOWER(cl.name) LIKE ? OR LOWER(r.name) LIKE ?)",
            );
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "{} {} ORDER BY a.created_at DESC, a.id DESC LIMIT ?",
            PIPELINE_SELECT, where_clause
        );

        let mut statement = sqlx::query_as::<_, PipelineRow>(&sql);
        if let Some(client_id) = query.client_id {
            statement = statement.bind(client_id);
        }
        if let Some(recruiter_id) = query.recruiter_id {
            statement = statement.bind(recruiter_id);
        }
        if let Some(status) = &query.status {
            statement = statement.bind(status.clone());
        }
        if let Some(pattern) = &search_pattern {
            statement = statement
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern.clone());
        }

        let rows = statement.bind(limit).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Monthly earnings: payments with a paid date inside the month,
    /// flattened with their application context, plus a rounded total.
    pub async fn earnings(&self, year: i32, month: u32) -> Result<EarningsReport> {
        if !(1..=12).contains(&month) {
            return Err(Error::BadRequest("month must be 1..12".to_string()));
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1);
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let (start, end) = start.zip(end).ok_or_else(|| {
            Error::BadRequest(format!("Invalid report period: {}-{:02}", year, month))
        })?;

        let items = sqlx::query_as::<_, EarningsItem>(EARNINGS_SELECT)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        let total: f64 = items.iter().map(|item| item.amount).sum();
        let total = (total * 100.0).round() / 100.0;

        Ok(EarningsReport {
            year,
            month,
            total,
            items,
        })
    }
}
