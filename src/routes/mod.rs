pub mod health;
pub mod jobs;
pub mod profiles;
pub mod proposals;
