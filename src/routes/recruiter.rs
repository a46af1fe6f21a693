use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::recruiter_dto::CreateRecruiterPayload, error::Result, models::recruiter::Recruiter,
    AppState,
};

#[utoipa::path(
    get,
    path = "/recruiters",
    responses(
        (status = 200, description = "List of recruiters ordered by name", body = Json<Vec<Recruiter>>)
    )
)]
#[axum::debug_handler]
pub async fn list_recruiters(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let recruiters: Vec<Recruiter> = state.recruiter_service.list().await?;
    Ok(Json(recruiters))
}

#[utoipa::path(
    post,
    path = "/recruiters",
    request_body = CreateRecruiterPayload,
    responses(
        (status = 201, description = "Recruiter created successfully", body = Json<Recruiter>),
        (status = 400, description = "Invalid payload or duplicate name")
    )
)]
#[axum::debug_handler]
pub async fn create_recruiter(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecruiterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let recruiter: Recruiter = state.recruiter_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(recruiter)))
}

#[utoipa::path(
    delete,
    path = "/recruiters/{id}",
    params(
        ("id" = i64, Path, description = "Recruiter ID")
    ),
    responses(
        (status = 204, description = "Recruiter deleted"),
        (status = 404, description = "Recruiter not found"),
        (status = 409, description = "Recruiter still referenced by applications")
    )
)]
#[axum::debug_handler]
pub async fn delete_recruiter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.recruiter_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
