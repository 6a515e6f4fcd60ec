use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::profile::{Certification, Education, FreelancerProfile, WorkHistoryEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub address: String,
    pub name: String,
    pub headline: String,
    pub location: String,
    pub joined_date: String,
    pub bio: String,
    pub hourly_rate: Decimal,
    pub success_rate: u8,
    pub completed_jobs: u32,
    pub rating: f32,
    pub total_reviews: u32,
    pub skills: Vec<String>,
    pub work_history: Vec<WorkHistoryEntry>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}

impl From<FreelancerProfile> for ProfileResponse {
    fn from(value: FreelancerProfile) -> Self {
        Self {
            address: value.address,
            name: value.name,
            headline: value.headline,
            location: value.location,
            joined_date: value.joined_date,
            bio: value.bio,
            hourly_rate: value.hourly_rate,
            success_rate: value.success_rate,
            completed_jobs: value.completed_jobs,
            rating: value.rating,
            total_reviews: value.total_reviews,
            skills: value.skills,
            work_history: value.work_history,
            education: value.education,
            certifications: value.certifications,
        }
    }
}
