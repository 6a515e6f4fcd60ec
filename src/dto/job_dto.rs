use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::filter::{FilterCriteria, PaymentRange};
use crate::models::job::{ExperienceLevel, JobPosting, PaymentType};
use crate::services::job_service::{FilterOptions, JobSearchResult};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 100))]
    pub description: String,
    #[validate(length(min = 1))]
    pub client: String,
    pub payment_type: PaymentType,
    #[validate(custom(function = "non_negative"))]
    pub budget: Decimal,
    pub experience_level: ExperienceLevel,
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
    #[validate(length(min = 1))]
    pub duration: String,
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("budget_must_not_be_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub items: Vec<JobResponse>,
    pub total: usize,
    pub catalog_total: usize,
}

/// Query parameters of the search endpoint. Every field is optional; raw
/// strings are handed to the filter engine unparsed so an unknown value
/// degrades to an empty result instead of a 400.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub payment_range: Option<String>,
    pub experience_level: Option<String>,
}

impl From<JobListQuery> for FilterCriteria {
    fn from(value: JobListQuery) -> Self {
        Self {
            search_term: value.q.unwrap_or_default(),
            category: value.category,
            payment_range: value.payment_range,
            experience_level: value.experience_level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRangeOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub categories: Vec<String>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub payment_ranges: Vec<PaymentRangeOption>,
}

impl From<JobPosting> for JobResponse {
    fn from(value: JobPosting) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            client: value.client,
            category: value.category,
            payment_type: value.payment_type,
            budget: value.budget,
            experience_level: value.experience_level,
            skills: value.skills,
            duration: value.duration,
            posted_date: value.posted_date,
        }
    }
}

impl From<JobSearchResult> for JobListResponse {
    fn from(value: JobSearchResult) -> Self {
        let items: Vec<JobResponse> = value.items.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            catalog_total: value.catalog_total,
            items,
        }
    }
}

impl From<FilterOptions> for FilterOptionsResponse {
    fn from(value: FilterOptions) -> Self {
        Self {
            categories: value.categories,
            experience_levels: value.experience_levels,
            payment_ranges: PaymentRange::ALL
                .iter()
                .map(|range| PaymentRangeOption {
                    id: range.id().to_string(),
                    label: range.label().to_string(),
                })
                .collect(),
        }
    }
}
