use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerProfile {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub id: String,
    pub title: String,
    pub client: String,
    pub completed_date: String,
    pub duration: String,
    pub rating: f32,
    pub budget: Decimal,
    pub review: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}
