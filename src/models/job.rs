use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a job pays out: a fixed total or an hourly rate. The `budget` field on
/// [`JobPosting`] is interpreted against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Fixed,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

/// One job listing in the catalog. Immutable once inserted; the filter engine
/// only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub client: String,
    pub category: String,
    pub payment_type: PaymentType,
    pub budget: Decimal,
    pub experience_level: ExperienceLevel,
    pub skills: Vec<String>,
    pub duration: String,
    pub posted_date: DateTime<Utc>,
}
