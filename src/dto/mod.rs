pub mod application_dto;
pub mod candidate_dto;
pub mod client_dto;
pub mod payment_dto;
pub mod recruiter_dto;
pub mod report_dto;
pub mod vacancy_dto;
