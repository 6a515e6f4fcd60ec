use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::catalog::JobCatalog;
use crate::dto::job_dto::{CreateJobPayload, JobListQuery};
use crate::error::{Error, Result};
use crate::filter;
use crate::models::job::{ExperienceLevel, JobPosting};

#[derive(Clone)]
pub struct JobService {
    catalog: JobCatalog,
}

pub struct JobSearchResult {
    pub items: Vec<JobPosting>,
    pub catalog_total: usize,
}

pub struct FilterOptions {
    pub categories: Vec<String>,
    pub experience_levels: Vec<ExperienceLevel>,
}

impl JobService {
    pub fn new(catalog: JobCatalog) -> Self {
        Self { catalog }
    }

    /// Runs one filtering pass over a catalog snapshot. Always succeeds; an
    /// empty result just means nothing matched.
    pub fn search(&self, query: JobListQuery) -> JobSearchResult {
        let snapshot = self.catalog.snapshot();
        let catalog_total = snapshot.len();
        let items = filter::filter(&snapshot, &query.into());
        JobSearchResult {
            items,
            catalog_total,
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<JobPosting> {
        self.catalog
            .find(id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    pub fn create(&self, payload: CreateJobPayload) -> JobPosting {
        let job = JobPosting {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            client: payload.client,
            category: payload.category,
            payment_type: payload.payment_type,
            budget: payload.budget,
            experience_level: payload.experience_level,
            skills: payload.skills,
            duration: payload.duration,
            posted_date: Utc::now(),
        };
        self.catalog.insert(job.clone());
        info!(job_id = %job.id, category = %job.category, "job posting created");
        job
    }

    /// Values for the filter sidebar, derived from the live catalog.
    pub fn filter_options(&self) -> FilterOptions {
        let snapshot = self.catalog.snapshot();
        FilterOptions {
            categories: filter::distinct_categories(&snapshot),
            experience_levels: filter::distinct_experience_levels(&snapshot),
        }
    }
}
