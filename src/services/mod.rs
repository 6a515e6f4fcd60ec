pub mod job_service;
pub mod profile_service;
pub mod proposal_service;
