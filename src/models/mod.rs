pub mod application;
pub mod candidate;
pub mod client;
pub mod payment;
pub mod recruiter;
pub mod vacancy;
