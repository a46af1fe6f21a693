use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::report_dto::{EarningsQuery, EarningsReport, PipelineQuery, PipelineRow},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/pipeline",
    params(
        ("client_id" = Option<i64>, Query, description = "Filter by client"),
        ("recruiter_id" = Option<i64>, Query, description = "Filter by recruiter"),
        ("status" = Option<String>, Query, description = "Filter by application status"),
        ("search" = Option<String>, Query, description = "Case-insensitive search over candidate, vacancy, client and recruiter names"),
        ("limit" = Option<i64>, Query, description = "Row limit, 1..=2000, default 500")
    ),
    responses(
        (status = 200, description = "Flattened application rows, most recently created first", body = Json<Vec<PipelineRow>>)
    )
)]
#[axum::debug_handler]
pub async fn get_pipeline(
    State(state): State<AppState>,
    Query(query): Query<PipelineQuery>,
) -> Result<impl IntoResponse> {
    let rows: Vec<PipelineRow> = state.report_service.pipeline(query).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/reports/earnings",
    params(
        ("year" = i32, Query, description = "Report year"),
        ("month" = u32, Query, description = "Report month, 1..=12")
    ),
    responses(
        (status = 200, description = "Monthly earnings with itemized payments", body = Json<EarningsReport>),
        (status = 400, description = "Month out of range")
    )
)]
#[axum::debug_handler]
pub async fn earnings_report(
    State(state): State<AppState>,
    Query(query): Query<EarningsQuery>,
) -> Result<impl IntoResponse> {
    let report: EarningsReport = state
        .report_service
        .earnings(query.year, query.month)
        .await?;
    Ok(Json(report))
}
