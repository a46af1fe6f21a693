use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::vacancy_dto::{CreateVacancyPayload, VacancyListQuery},
    error::Result,
    models::vacancy::Vacancy,
    AppState,
};

#[utoipa::path(
    get,
    path = "/vacancies",
    params(
        ("client_id" = Option<i64>, Query, description = "Filter by owning client")
    ),
    responses(
        (status = 200, description = "List of vacancies ordered by title", body = Json<Vec<Vacancy>>)
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<VacancyListQuery>,
) -> Result<impl IntoResponse> {
    let vacancies: Vec<Vacancy> = state.vacancy_service.list(query).await?;
    Ok(Json(vacancies))
}

#[utoipa::path(
    post,
    path = "/vacancies",
    request_body = CreateVacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully", body = Json<Vacancy>),
        (status = 400, description = "Invalid payload or unknown client")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let vacancy: Vacancy = state.vacancy_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(vacancy)))
}

#[utoipa::path(
    delete,
    path = "/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Vacancy and owned records deleted"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.vacancy_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
