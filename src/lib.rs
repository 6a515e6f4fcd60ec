pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::catalog::JobCatalog;
use crate::services::{
    job_service::JobService, profile_service::ProfileService, proposal_service::ProposalService,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: JobCatalog,
    pub job_service: JobService,
    pub proposal_service: ProposalService,
    pub profile_service: ProfileService,
}

impl AppState {
    pub fn new(catalog: JobCatalog) -> Self {
        let job_service = JobService::new(catalog.clone());
        let proposal_service = ProposalService::new();
        let profile_service = ProfileService::new();

        Self {
            catalog,
            job_service,
            proposal_service,
            profile_service,
        }
    }
}
