use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::client_dto::CreateClientPayload, error::Result, models::client::Client, AppState};

#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "List of clients ordered by name", body = Json<Vec<Client>>)
    )
)]
#[axum::debug_handler]
pub async fn list_clients(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let clients: Vec<Client> = state.client_service.list().await?;
    Ok(Json(clients))
}

#[utoipa::path(
    post,
    path = "/clients",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Client created successfully", body = Json<Client>),
        (status = 400, description = "Invalid payload or duplicate name")
    )
)]
#[axum::debug_handler]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let client: Client = state.client_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client and owned records deleted"),
        (status = 404, description = "Client not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.client_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
