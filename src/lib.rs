pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    application_service::ApplicationService, candidate_service::CandidateService,
    client_service::ClientService, payment_service::PaymentService,
    recruiter_service::RecruiterService, report_service::ReportService,
    vacancy_service::VacancyService,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub client_service: ClientService,
    pub recruiter_service: RecruiterService,
    pub vacancy_service: VacancyService,
    pub candidate_service: CandidateService,
    pub application_service: ApplicationService,
    pub payment_service: PaymentService,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            client_service: ClientService::new(pool.clone()),
            recruiter_service: RecruiterService::new(pool.clone()),
            vacancy_service: VacancyService::new(pool.clone()),
            candidate_service: CandidateService::new(pool.clone()),
            application_service: ApplicationService::new(pool.clone()),
            payment_service: PaymentService::new(pool.clone()),
            report_service: ReportService::new(pool.clone()),
            pool,
        }
    }
}
