//! Job search-and-filter engine.
//!
//! Pure functions over a catalog snapshot: no I/O, no shared state, output
//! order is catalog order. All four constraints are combined with AND; a
//! constraint left unset is vacuously true.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::job::{ExperienceLevel, JobPosting};

/// The four budget buckets the UI offers. Boundaries are fixed: 1000 belongs
/// to `500-1000`, not `1000-5000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentRange {
    Under500,
    Between500And1000,
    Between1000And5000,
    Over5000,
}

impl PaymentRange {
    pub const ALL: [PaymentRange; 4] = [
        PaymentRange::Under500,
        PaymentRange::Between500And1000,
        PaymentRange::Between1000And5000,
        PaymentRange::Over5000,
    ];

    /// Parses a bucket identifier. Unknown identifiers yield `None`, which
    /// the predicate treats as a constraint no job satisfies; parsing never
    /// fails loudly.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "under-500" => Some(PaymentRange::Under500),
            "500-1000" => Some(PaymentRange::Between500And1000),
            "1000-5000" => Some(PaymentRange::Between1000And5000),
            "over-5000" => Some(PaymentRange::Over5000),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            PaymentRange::Under500 => "under-500",
            PaymentRange::Between500And1000 => "500-1000",
            PaymentRange::Between1000And5000 => "1000-5000",
            PaymentRange::Over5000 => "over-5000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentRange::Under500 => "Under $500",
            PaymentRange::Between500And1000 => "$500 - $1,000",
            PaymentRange::Between1000And5000 => "$1,000 - $5,000",
            PaymentRange::Over5000 => "Over $5,000",
        }
    }

    pub fn contains(&self, budget: Decimal) -> bool {
        match self {
            PaymentRange::Under500 => budget < Decimal::from(500),
            PaymentRange::Between500And1000 => {
                budget >= Decimal::from(500) && budget <= Decimal::from(1000)
            }
            PaymentRange::Between1000And5000 => {
                budget > Decimal::from(1000) && budget <= Decimal::from(5000)
            }
            PaymentRange::Over5000 => budget > Decimal::from(5000),
        }
    }
}

/// The transient query state. An immutable value: toggling a filter produces
/// a new criteria rather than mutating in place.
///
/// Category, payment range, and experience level are kept as the raw strings
/// the client sent. An unrecognized value stays an active constraint that
/// matches nothing, which is the observed degrade-silently behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: Option<String>,
    pub payment_range: Option<String>,
    pub experience_level: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.category.is_none()
            && self.payment_range.is_none()
            && self.experience_level.is_none()
    }

    pub fn with_search_term(mut self, term: &str) -> Self {
        self.search_term = term.to_string();
        self
    }

    /// Select-to-set, re-select-to-clear.
    pub fn toggle_category(mut self, value: &str) -> Self {
        self.category = toggle(self.category.take(), value);
        self
    }

    pub fn toggle_payment_range(mut self, value: &str) -> Self {
        self.payment_range = toggle(self.payment_range.take(), value);
        self
    }

    pub fn toggle_experience_level(mut self, value: &str) -> Self {
        self.experience_level = toggle(self.experience_level.take(), value);
        self
    }

    pub fn clear(self) -> Self {
        Self::default()
    }
}

fn toggle(current: Option<String>, value: &str) -> Option<String> {
    match current {
        Some(active) if active == value => None,
        _ => Some(value.to_string()),
    }
}

/// Returns the ordered subsequence of `catalog` satisfying every active
/// constraint. Never mutates the catalog; never errors.
pub fn filter(catalog: &[JobPosting], criteria: &FilterCriteria) -> Vec<JobPosting> {
    catalog
        .iter()
        .filter(|job| matches(job, criteria))
        .cloned()
        .collect()
}

fn matches(job: &JobPosting, criteria: &FilterCriteria) -> bool {
    matches_search(job, &criteria.search_term)
        && criteria
            .category
            .as_deref()
            .map_or(true, |category| job.category == category)
        && criteria.payment_range.as_deref().map_or(true, |id| {
            PaymentRange::parse(id).is_some_and(|range| range.contains(job.budget))
        })
        && criteria
            .experience_level
            .as_deref()
            .map_or(true, |level| job.experience_level.as_str() == level)
}

fn matches_search(job: &JobPosting, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job.description.to_lowercase().contains(&needle)
        || job.client.to_lowercase().contains(&needle)
}

/// Distinct categories in first-occurrence order. Drives the filter sidebar.
pub fn distinct_categories(catalog: &[JobPosting]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for job in catalog {
        if !seen.contains(&job.category) {
            seen.push(job.category.clone());
        }
    }
    seen
}

pub fn distinct_experience_levels(catalog: &[JobPosting]) -> Vec<ExperienceLevel> {
    let mut seen: Vec<ExperienceLevel> = Vec::new();
    for job in catalog {
        if !seen.contains(&job.experience_level) {
            seen.push(job.experience_level);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::PaymentType;
    use chrono::Utc;

    fn job(
        id: &str,
        title: &str,
        description: &str,
        client: &str,
        category: &str,
        budget: u32,
        experience_level: ExperienceLevel,
    ) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            client: client.to_string(),
            category: category.to_string(),
            payment_type: PaymentType::Fixed,
            budget: Decimal::from(budget),
            experience_level,
            skills: vec!["React".to_string()],
            duration: "1 month".to_string(),
            posted_date: Utc::now(),
        }
    }

    fn three_job_catalog() -> Vec<JobPosting> {
        vec![
            job(
                "a",
                "Storefront build",
                "React storefront for a retailer",
                "TechRetail",
                "Web Development",
                800,
                ExperienceLevel::Intermediate,
            ),
            job(
                "b",
                "Brand refresh",
                "Logo and identity package",
                "Nebula Labs",
                "Design & Creative",
                1200,
                ExperienceLevel::Expert,
            ),
            job(
                "c",
                "Landing page fixes",
                "Small CSS cleanup",
                "Acme",
                "Web Development",
                300,
                ExperienceLevel::Entry,
            ),
        ]
    }

    fn ids(jobs: &[JobPosting]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_full_catalog_in_order() {
        let catalog = three_job_catalog();
        let result = filter(&catalog, &FilterCriteria::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        let catalog = three_job_catalog();
        let criteria = FilterCriteria::default().toggle_category("Web Development");
        let result = filter(&catalog, &criteria);
        assert_eq!(ids(&result), vec!["a", "c"]);
    }

    #[test]
    fn refiltering_with_same_criteria_is_a_noop() {
        let catalog = three_job_catalog();
        let criteria = FilterCriteria::default().with_search_term("react");
        let once = filter(&catalog, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn adding_constraints_only_narrows() {
        let catalog = three_job_catalog();
        let loose = FilterCriteria::default().toggle_category("Web Development");
        let tight = loose.clone().toggle_payment_range("under-500");
        let loose_result = filter(&catalog, &loose);
        let tight_result = filter(&catalog, &tight);
        for job in &tight_result {
            assert!(loose_result.contains(job));
        }
        assert_eq!(ids(&tight_result), vec!["c"]);
    }

    #[test]
    fn bucket_boundaries() {
        let at_500 = Decimal::from(500);
        let at_1000 = Decimal::from(1000);
        assert!(!PaymentRange::Under500.contains(at_500));
        assert!(PaymentRange::Between500And1000.contains(at_500));
        assert!(PaymentRange::Between500And1000.contains(at_1000));
        assert!(!PaymentRange::Between1000And5000.contains(at_1000));
        assert!(PaymentRange::Between1000And5000.contains(Decimal::from(5000)));
        assert!(PaymentRange::Over5000.contains(Decimal::from(5001)));
    }

    #[test]
    fn boundary_jobs_land_in_the_inclusive_bucket() {
        let catalog = vec![
            job("x", "Edge", "d", "c", "Web Development", 1000, ExperienceLevel::Entry),
            job("y", "Edge", "d", "c", "Web Development", 500, ExperienceLevel::Entry),
        ];
        let mid = FilterCriteria::default().toggle_payment_range("500-1000");
        assert_eq!(ids(&filter(&catalog, &mid)), vec!["x", "y"]);
        let upper = FilterCriteria::default().toggle_payment_range("1000-5000");
        assert!(filter(&catalog, &upper).is_empty());
        let under = FilterCriteria::default().toggle_payment_range("under-500");
        assert!(filter(&catalog, &under).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_all_three_fields() {
        let catalog = three_job_catalog();
        let upper = filter(&catalog, &FilterCriteria::default().with_search_term("REACT"));
        let lower = filter(&catalog, &FilterCriteria::default().with_search_term("react"));
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec!["a"]);

        let by_client = filter(&catalog, &FilterCriteria::default().with_search_term("nebula"));
        assert_eq!(ids(&by_client), vec!["b"]);
        let by_title = filter(&catalog, &FilterCriteria::default().with_search_term("LANDING"));
        assert_eq!(ids(&by_title), vec!["c"]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let catalog = three_job_catalog();
        let exact = FilterCriteria::default().toggle_category("Web Development");
        assert_eq!(filter(&catalog, &exact).len(), 2);
        let wrong_case = FilterCriteria::default().toggle_category("web development");
        assert!(filter(&catalog, &wrong_case).is_empty());
        let partial = FilterCriteria::default().toggle_category("Web");
        assert!(filter(&catalog, &partial).is_empty());
    }

    #[test]
    fn combined_constraints_and_together() {
        let catalog = three_job_catalog();
        let criteria = FilterCriteria::default().toggle_payment_range("1000-5000");
        assert_eq!(ids(&filter(&catalog, &criteria)), vec!["b"]);

        let criteria = FilterCriteria::default()
            .toggle_category("Web Development")
            .toggle_payment_range("under-500");
        assert_eq!(ids(&filter(&catalog, &criteria)), vec!["c"]);

        let criteria = FilterCriteria::default()
            .toggle_category("Web Development")
            .toggle_experience_level("Expert");
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn unrecognized_bucket_matches_nothing_without_error() {
        let catalog = three_job_catalog();
        let criteria = FilterCriteria::default().toggle_payment_range("5000-10000");
        assert!(filter(&catalog, &criteria).is_empty());
        let criteria = FilterCriteria::default().toggle_experience_level("Wizard");
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn toggling_an_active_filter_clears_it() {
        let catalog = three_job_catalog();
        let set = FilterCriteria::default().toggle_category("Web Development");
        assert_eq!(set.category.as_deref(), Some("Web Development"));
        let cleared = set.toggle_category("Web Development");
        assert_eq!(cleared.category, None);
        assert_eq!(filter(&catalog, &cleared), catalog);
    }

    #[test]
    fn toggling_a_different_value_replaces_the_active_one() {
        let criteria = FilterCriteria::default()
            .toggle_category("Web Development")
            .toggle_category("Marketing");
        assert_eq!(criteria.category.as_deref(), Some("Marketing"));
    }

    #[test]
    fn clear_resets_every_constraint() {
        let criteria = FilterCriteria::default()
            .with_search_term("react")
            .toggle_category("Web Development")
            .toggle_payment_range("under-500")
            .toggle_experience_level("Entry");
        assert!(!criteria.is_empty());
        assert!(criteria.clear().is_empty());
    }

    #[test]
    fn distinct_values_keep_first_occurrence_order() {
        let catalog = three_job_catalog();
        assert_eq!(
            distinct_categories(&catalog),
            vec!["Web Development", "Design & Creative"]
        );
        assert_eq!(
            distinct_experience_levels(&catalog),
            vec![
                ExperienceLevel::Intermediate,
                ExperienceLevel::Expert,
                ExperienceLevel::Entry
            ]
        );
    }

    #[test]
    fn bucket_id_round_trip() {
        for range in PaymentRange::ALL {
            assert_eq!(PaymentRange::parse(range.id()), Some(range));
        }
        assert_eq!(PaymentRange::parse("over-9000"), None);
    }
}
