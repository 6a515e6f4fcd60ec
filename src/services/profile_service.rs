use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::profile::{Certification, Education, FreelancerProfile, WorkHistoryEntry};

/// Serves freelancer profiles from a built-in fixture. Address comparison is
/// case-insensitive since wallet addresses arrive in mixed checksum casings.
#[derive(Clone)]
pub struct ProfileService {
    profiles: Vec<FreelancerProfile>,
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileService {
    pub fn new() -> Self {
        Self {
            profiles: vec![seed_profile()],
        }
    }

    pub fn get_by_address(&self, address: &str) -> Result<FreelancerProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.address.eq_ignore_ascii_case(address))
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Freelancer {} not found", address)))
    }
}

fn seed_profile() -> FreelancerProfile {
    FreelancerProfile {
        address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
        name: "Alex Johnson".to_string(),
        headline: "Blockchain Developer & Full Stack Engineer".to_string(),
        location: "San Francisco, CA".to_string(),
        joined_date: "2023-06-15".to_string(),
        bio: "Specialized in developing decentralized applications with 5+ years of experience in blockchain technology. Proficient in Solidity, React, Node.js, and various other web technologies. Passionate about creating secure, efficient, and user-friendly solutions in the Web3 space.".to_string(),
        hourly_rate: Decimal::from(75u32),
        success_rate: 94,
        completed_jobs: 28,
        rating: 4.9,
        total_reviews: 24,
        skills: [
            "Solidity", "Smart Contracts", "React", "Node.js", "TypeScript",
            "Web3.js", "Ethereum", "DeFi", "MongoDB", "AWS",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        work_history: vec![
            WorkHistoryEntry {
                id: "1".to_string(),
                title: "NFT Marketplace Development".to_string(),
                client: "CryptoCollect Inc.".to_string(),
                completed_date: "2023-12-10".to_string(),
                duration: "3 months".to_string(),
                rating: 5.0,
                budget: Decimal::from(8500u32),
                review: "Alex delivered an exceptional NFT marketplace with all the features we required and more. Their knowledge of smart contracts was impressive, and they were always prompt with communication.".to_string(),
            },
            WorkHistoryEntry {
                id: "2".to_string(),
                title: "DeFi Staking Platform".to_string(),
                client: "YieldFarm Finance".to_string(),
                completed_date: "2023-09-22".to_string(),
                duration: "2 months".to_string(),
                rating: 5.0,
                budget: Decimal::from(6200u32),
                review: "Excellent work on our staking platform. Alex has deep knowledge of DeFi protocols and implemented everything securely and efficiently.".to_string(),
            },
            WorkHistoryEntry {
                id: "3".to_string(),
                title: "Web3 Integration for E-commerce Site".to_string(),
                client: "Digital Goods Store".to_string(),
                completed_date: "2023-07-15".to_string(),
                duration: "6 weeks".to_string(),
                rating: 4.5,
                budget: Decimal::from(4500u32),
                review: "Alex helped us integrate cryptocurrency payments into our existing e-commerce platform. The work was done professionally and on time.".to_string(),
            },
            WorkHistoryEntry {
                id: "4".to_string(),
                title: "Smart Contract Audit & Optimization".to_string(),
                client: "Secure Protocol".to_string(),
                completed_date: "2023-05-03".to_string(),
                duration: "3 weeks".to_string(),
                rating: 5.0,
                budget: Decimal::from(3800u32),
                review: "Alex performed a thorough audit of our smart contracts, identified several potential vulnerabilities, and suggested optimizations that reduced gas costs significantly.".to_string(),
            },
        ],
        education: vec![
            Education {
                degree: "Master of Science in Computer Science".to_string(),
                institution: "Stanford University".to_string(),
                year: "2018 - 2020".to_string(),
            },
            Education {
                degree: "Bachelor of Engineering in Software Engineering".to_string(),
                institution: "University of California, Berkeley".to_string(),
                year: "2014 - 2018".to_string(),
            },
        ],
        certifications: vec![
            Certification {
                name: "Certified Blockchain Developer".to_string(),
                issuer: "Blockchain Council".to_string(),
                year: "2021".to_string(),
            },
            Certification {
                name: "Ethereum Developer Certification".to_string(),
                issuer: "ConsenSys Academy".to_string(),
                year: "2020".to_string(),
            },
            Certification {
                name: "AWS Certified Solutions Architect".to_string(),
                issuer: "Amazon Web Services".to_string(),
                year: "2019".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_address_casing() {
        let service = ProfileService::new();
        let lower = service
            .get_by_address("0x71c7656ec7ab88b098defb751b7401b5f6d8976f")
            .expect("profile");
        assert_eq!(lower.name, "Alex Johnson");
    }

    #[test]
    fn unknown_address_is_not_found() {
        let service = ProfileService::new();
        assert!(service.get_by_address("0xdeadbeef").is_err());
    }
}
