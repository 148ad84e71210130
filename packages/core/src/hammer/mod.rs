//! Hammer CLI inventory queries
//!
//! Runs hammer on the satellite host and parses its CSV listings.

mod error;
mod report;
mod session;

pub use error::HammerError;
pub use report::{EntityListing, EntityRow, csv_reader, parse_csv_report};
pub use session::{
    DEFAULT_HAMMER_PASSWORD, DEFAULT_HAMMER_USERNAME, HammerSession, set_hammer_config,
};
