pub mod github_profile;

pub use github_profile::*;
