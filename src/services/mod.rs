pub mod application_service;
pub mod candidate_service;
pub mod client_service;
pub mod payment_service;
pub mod recruiter_service;
pub mod report_service;
pub mod vacancy_service;
