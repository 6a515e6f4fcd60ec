pub mod job_dto;
pub mod profile_dto;
pub mod proposal_dto;
