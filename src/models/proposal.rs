use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A freelancer's bid on a job posting. Held in memory only; there is no
/// escrow or settlement behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub job_id: String,
    pub freelancer: String,
    pub cover_letter: String,
    pub bid_amount: Decimal,
    pub delivery_days: u32,
    pub submitted_at: DateTime<Utc>,
}
