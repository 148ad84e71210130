//! Hammer CSV reports
//!
//! Turns `hammer --output csv` listings into maps keyed by component name:
//!
//! ```text
//! {"host": [{"name": "host1.ab.com", "id": "10"}, {"name": "host2.xz.com", "ip": "192.168.0.1"}]}
//! ```

use std::collections::{BTreeMap, HashMap};

use super::error::HammerError;
use super::session::HammerSession;
use crate::host::RemoteExecutor;

/// One record of a hammer listing, field name to value
pub type EntityRow = BTreeMap<String, String>;

/// Hammer listing keyed by component name
pub type EntityListing = HashMap<String, Vec<EntityRow>>;

/// Read all entities of `component` via `hammer <component> <subcommand>`
///
/// e.g. `csv_reader(&ssh, &session, "host", "list")`. The whole output is
/// lower-cased before parsing.
pub fn csv_reader(
    executor: &impl RemoteExecutor,
    session: &HammerSession,
    component: &str,
    subcommand: &str,
) -> Result<EntityListing, HammerError> {
    let data = session.run(executor, &format!("{component} {subcommand}"))?;
    parse_csv_report(component, &data)
}

/// Parse lower-cased CSV output with a header row into an [`EntityListing`]
///
/// Short rows keep only the fields they have; extra trailing fields are dropped.
pub fn parse_csv_report(component: &str, data: &str) -> Result<EntityListing, HammerError> {
    let lowered = data.to_lowercase();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(lowered.as_bytes());

    let headers = reader.headers()?.clone();
    let mut entities = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: EntityRow = headers
            .iter()
            .zip(record.iter())
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        entities.push(row);
    }

    tracing::debug!("Parsed {} {} entities", entities.len(), component);

    let mut listing = EntityListing::new();
    listing.insert(component.to_string(), entities);
    Ok(listing)
}
