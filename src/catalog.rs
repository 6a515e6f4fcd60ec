use std::sync::{Arc, RwLock};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::models::job::{ExperienceLevel, JobPosting, PaymentType};

/// Append-only, in-memory job catalog. Enumeration order is insertion order
/// and stays stable across calls, which is what the filter engine's output
/// ordering is defined against.
#[derive(Clone, Default)]
pub struct JobCatalog {
    inner: Arc<RwLock<Vec<JobPosting>>>,
}

impl JobCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(jobs: Vec<JobPosting>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(jobs)),
        }
    }

    /// Catalog preloaded with the marketplace fixture.
    pub fn seeded() -> Self {
        Self::with_jobs(seed_jobs())
    }

    /// Cloned, ordered view of the catalog for one filtering pass.
    pub fn snapshot(&self) -> Vec<JobPosting> {
        self.inner
            .read()
            .expect("job catalog lock poisoned")
            .clone()
    }

    pub fn find(&self, id: &str) -> Option<JobPosting> {
        self.inner
            .read()
            .expect("job catalog lock poisoned")
            .iter()
            .find(|job| job.id == id)
            .cloned()
    }

    pub fn insert(&self, job: JobPosting) {
        self.inner
            .write()
            .expect("job catalog lock poisoned")
            .push(job);
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("job catalog lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    client: &'static str,
    category: &'static str,
    payment_type: PaymentType,
    budget: u32,
    experience_level: ExperienceLevel,
    skills: &'static [&'static str],
    duration: &'static str,
    days_ago: i64,
}

fn seed_jobs() -> Vec<JobPosting> {
    SEEDS
        .iter()
        .map(|seed| JobPosting {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            client: seed.client.to_string(),
            category: seed.category.to_string(),
            payment_type: seed.payment_type,
            budget: Decimal::from(seed.budget),
            experience_level: seed.experience_level,
            skills: seed.skills.iter().map(|s| s.to_string()).collect(),
            duration: seed.duration.to_string(),
            posted_date: Utc::now() - Duration::days(seed.days_ago),
        })
        .collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Full Stack Web Developer for E-commerce Platform",
        description: "We need an experienced developer to build a complete e-commerce platform with product listings, cart, and crypto checkout. The stack is React on the front end with a Node.js API, and the checkout must support stablecoin payments alongside card processing.",
        client: "TechRetail Inc.",
        category: "Web Development",
        payment_type: PaymentType::Fixed,
        budget: 2500,
        experience_level: ExperienceLevel::Intermediate,
        skills: &["React", "Node.js", "MongoDB", "Payment Integration"],
        duration: "1-3 months",
        days_ago: 2,
    },
    Seed {
        id: "2",
        title: "Smart Contract Developer for DeFi Lending Protocol",
        description: "Design and implement the core lending pool contracts for our DeFi protocol, including collateral management, interest accrual, and liquidation paths. Audited Solidity experience is a must, and you will work directly with our security reviewers.",
        client: "YieldFarm Finance",
        category: "Smart Contract Development",
        payment_type: PaymentType::Fixed,
        budget: 7500,
        experience_level: ExperienceLevel::Expert,
        skills: &["Solidity", "Ethereum", "DeFi", "Hardhat", "Security"],
        duration: "3-6 months",
        days_ago: 4,
    },
    Seed {
        id: "3",
        title: "Mobile App UI Designer for Wallet Application",
        description: "Create a clean, modern interface for our non-custodial wallet app covering onboarding, balances, token swaps, and transaction history. Deliverables are high-fidelity Figma screens plus a reusable component library the dev team can build against.",
        client: "AppWorks Studio",
        category: "Design & Creative",
        payment_type: PaymentType::Fixed,
        budget: 1200,
        experience_level: ExperienceLevel::Intermediate,
        skills: &["Figma", "UI Design", "Mobile Design", "Design Systems"],
        duration: "1 month",
        days_ago: 5,
    },
    Seed {
        id: "4",
        title: "React Developer for Analytics Dashboard",
        description: "Ongoing front-end work on an internal analytics dashboard: new chart widgets, filter panels, and performance tuning of large table views. You will pick up tickets from our backlog and ship weekly alongside two in-house engineers.",
        client: "ChainMetrics",
        category: "Web Development",
        payment_type: PaymentType::Hourly,
        budget: 45,
        experience_level: ExperienceLevel::Intermediate,
        skills: &["React", "TypeScript", "D3.js"],
        duration: "Ongoing",
        days_ago: 7,
    },
    Seed {
        id: "5",
        title: "Technical Whitepaper Writer",
        description: "Write the technical whitepaper for our layer-2 scaling project based on interviews with the founding team and existing design notes. The result should read well for both investors and protocol engineers, roughly 20 pages with diagrams.",
        client: "Nebula Labs",
        category: "Writing & Translation",
        payment_type: PaymentType::Fixed,
        budget: 800,
        experience_level: ExperienceLevel::Intermediate,
        skills: &["Technical Writing", "Blockchain", "Research"],
        duration: "3 weeks",
        days_ago: 9,
    },
    Seed {
        id: "6",
        title: "NFT Collection Launch Marketing Campaign",
        description: "Plan and run the go-to-market campaign for a 10k-piece generative art collection: community building on Discord and X, influencer outreach, and a content calendar through mint day. Previous NFT launch experience strongly preferred.",
        client: "PixelForge",
        category: "Marketing",
        payment_type: PaymentType::Fixed,
        budget: 3000,
        experience_level: ExperienceLevel::Intermediate,
        skills: &["Social Media", "Community Management", "Content Strategy"],
        duration: "2 months",
        days_ago: 11,
    },
    Seed {
        id: "7",
        title: "Data Analyst for On-chain Metrics",
        description: "Build dashboards and ad-hoc analyses over on-chain data: wallet cohorts, liquidity flows, and protocol revenue. Comfortable querying large datasets with SQL and Python; Dune or similar experience is a plus.",
        client: "Insight DAO",
        category: "Data Science & Analytics",
        payment_type: PaymentType::Hourly,
        budget: 65,
        experience_level: ExperienceLevel::Expert,
        skills: &["SQL", "Python", "Dune Analytics", "Data Visualization"],
        duration: "Ongoing",
        days_ago: 13,
    },
    Seed {
        id: "8",
        title: "Community Support Moderator",
        description: "Moderate our Discord and Telegram channels across EU time zones: answer product questions, escalate bug reports, and keep discussions on track. Full training on the product is provided; patience and clear writing matter most.",
        client: "Orbit Exchange",
        category: "Customer Service",
        payment_type: PaymentType::Hourly,
        budget: 18,
        experience_level: ExperienceLevel::Entry,
        skills: &["Discord", "Communication", "Community Management"],
        duration: "Ongoing",
        days_ago: 14,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;

    #[test]
    fn seeded_catalog_keeps_insertion_order() {
        let catalog = JobCatalog::seeded();
        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.len(), SEEDS.len());
        let ids: Vec<&str> = snapshot.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn insert_appends_and_find_locates() {
        let catalog = JobCatalog::seeded();
        let mut job = catalog.snapshot()[0].clone();
        job.id = "99".to_string();
        job.title = "Appended".to_string();
        catalog.insert(job);
        assert_eq!(catalog.len(), SEEDS.len() + 1);
        assert_eq!(catalog.snapshot().last().map(|j| j.id.clone()), Some("99".to_string()));
        assert!(catalog.find("99").is_some());
        assert!(catalog.find("does-not-exist").is_none());
    }

    #[test]
    fn seed_covers_every_bucket_and_level() {
        let snapshot = JobCatalog::seeded().snapshot();
        for range in filter::PaymentRange::ALL {
            assert!(
                snapshot.iter().any(|j| range.contains(j.budget)),
                "no seed job in bucket {}",
                range.id()
            );
        }
        assert_eq!(filter::distinct_experience_levels(&snapshot).len(), 3);
    }
}
