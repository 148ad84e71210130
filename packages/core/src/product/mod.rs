//! Satellite and Capsule product detection
//!
//! Parses product names and reads installed versions from remote hosts.

mod error;
mod version;

pub use error::ProductError;
pub use version::{
    InstalledVersion, VersionCommands, extract_version, get_sat_cap_version,
    katello_agent_version_filter,
};

/// Product being upgraded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Satellite,
    Capsule,
}

impl Product {
    /// Parse a loose product name such as "Satellite6" or "capsule"
    ///
    /// Matching is a case-insensitive substring check. "cap" wins over
    /// "sat", so "satellite-capsule" is a Capsule.
    pub fn parse(name: &str) -> Result<Self, ProductError> {
        let lower = name.to_lowercase();
        let mut product = None;
        if lower.contains("sat") {
            product = Some(Product::Satellite);
        }
        if lower.contains("cap") {
            product = Some(Product::Capsule);
        }
        product.ok_or_else(|| ProductError::Unsupported(name.to_string()))
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Product::Satellite => write!(f, "Satellite"),
            Product::Capsule => write!(f, "Capsule"),
        }
    }
}
