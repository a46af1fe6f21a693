use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{CandidateListQuery, CreateCandidatePayload},
    error::Result,
    models::candidate::Candidate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/candidates",
    params(
        ("q" = Option<String>, Query, description = "Substring search over name, phone and email")
    ),
    responses(
        (status = 200, description = "List of candidates ordered by name", body = Json<Vec<Candidate>>)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let candidates: Vec<Candidate> = state.candidate_service.list(query).await?;
    Ok(Json(candidates))
}

#[utoipa::path(
    post,
    path = "/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate created successfully", body = Json<Candidate>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate: Candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    delete,
    path = "/candidates/{id}",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 204, description = "Candidate and owned records deleted"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
