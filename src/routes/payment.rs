use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::payment_dto::{CreatePaymentPayload, PaymentResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/applications/{id}/payments",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Payments of the application, most recent first", body = Json<Vec<PaymentResponse>>),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn list_payments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let payments = state.payment_service.list_for_application(id).await?;
    let payments: Vec<PaymentResponse> = payments.into_iter().map(Into::into).collect();
    Ok(Json(payments))
}

#[utoipa::path(
    post,
    path = "/applications/{id}/payments",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    request_body = CreatePaymentPayload,
    responses(
        (status = 201, description = "Payment recorded and cache recomputed", body = Json<PaymentResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn add_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let payment = state.payment_service.add(id, payload).await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}

#[utoipa::path(
    delete,
    path = "/payments/{id}",
    params(
        ("id" = i64, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment deleted and cache recomputed"),
        (status = 404, description = "Payment not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.payment_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
