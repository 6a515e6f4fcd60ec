use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::dto::proposal_dto::SubmitProposalPayload;
use crate::models::proposal::Proposal;

/// In-memory proposal store, append-only, listed per job in submission order.
#[derive(Clone, Default)]
pub struct ProposalService {
    inner: Arc<RwLock<Vec<Proposal>>>,
}

impl ProposalService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&self, job_id: &str, payload: SubmitProposalPayload) -> Proposal {
        let proposal = Proposal {
            id: Uuid::new_v4().to_string(),
            job_id: job_id.to_string(),
            freelancer: payload.freelancer,
            cover_letter: payload.cover_letter,
            bid_amount: payload.bid_amount,
            delivery_days: payload.delivery_days,
            submitted_at: Utc::now(),
        };
        self.inner
            .write()
            .expect("proposal store lock poisoned")
            .push(proposal.clone());
        info!(job_id = %job_id, proposal_id = %proposal.id, "proposal submitted");
        proposal
    }

    pub fn list_for_job(&self, job_id: &str) -> Vec<Proposal> {
        self.inner
            .read()
            .expect("proposal store lock poisoned")
            .iter()
            .filter(|proposal| proposal.job_id == job_id)
            .cloned()
            .collect()
    }
}
