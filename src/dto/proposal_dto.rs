use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::proposal::Proposal;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitProposalPayload {
    #[validate(length(min = 1))]
    pub freelancer: String,
    #[validate(length(min = 1))]
    pub cover_letter: String,
    #[validate(custom(function = "positive"))]
    pub bid_amount: Decimal,
    #[validate(range(min = 1))]
    pub delivery_days: u32,
}

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("bid_must_be_positive"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalResponse {
    pub id: String,
    pub job_id: String,
    pub freelancer: String,
    pub cover_letter: String,
    pub bid_amount: Decimal,
    pub delivery_days: u32,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalListResponse {
    pub items: Vec<ProposalResponse>,
}

impl From<Proposal> for ProposalResponse {
    fn from(value: Proposal) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            freelancer: value.freelancer,
            cover_letter: value.cover_letter,
            bid_amount: value.bid_amount,
            delivery_days: value.delivery_days,
            submitted_at: value.submitted_at,
        }
    }
}
