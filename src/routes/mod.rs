pub mod application;
pub mod candidate;
pub mod client;
pub mod health;
pub mod payment;
pub mod recruiter;
pub mod report;
pub mod vacancy;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::AppState;

/// Full API route table, shared between `main` and the router-level tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/clients",
            get(client::list_clients).post(client::create_client),
        )
        .route("/clients/:id", delete(client::delete_client))
        .route(
            "/recruiters",
            get(recruiter::list_recruiters).post(recruiter::create_recruiter),
        )
        .route("/recruiters/:id", delete(recruiter::delete_recruiter))
        .route(
            "/vacancies",
            get(vacancy::list_vacancies).post(vacancy::create_vacancy),
        )
        .route("/vacancies/:id", delete(vacancy::delete_vacancy))
        .route(
            "/candidates",
            get(candidate::list_candidates).post(candidate::create_candidate),
        )
        .route("/candidates/:id", delete(candidate::delete_candidate))
        .route("/applications", post(application::create_application))
        .route(
            "/applications/:id",
            patch(application::update_application).delete(application::delete_application),
        )
        .route(
            "/applications/:id/payments",
            get(payment::list_payments).post(payment::add_payment),
        )
        .route("/payments/:id", delete(payment::delete_payment))
        .route("/pipeline", get(report::get_pipeline))
        .route("/reports/earnings", get(report::earnings_report))
        .with_state(state)
}
