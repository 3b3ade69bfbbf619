use std::collections::BTreeSet;

use nsprune_common::address::AddressToken;
use tracing::trace;

use crate::classify::{self, LineClass};
use crate::reconcile;

/// The three address sets found in one running configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResourceSets {
    /// Servers whose name is their own IP literal.
    pub servers: BTreeSet<AddressToken>,
    /// Addresses bound directly by `add service`.
    pub services: BTreeSet<AddressToken>,
    /// Addresses bound into a service group.
    pub group_members: BTreeSet<AddressToken>,
}

impl ResourceSets {
    /// Servers referenced by neither a service nor a service group binding.
    pub fn stale_candidates(&self) -> BTreeSet<AddressToken> {
        reconcile::reconcile(&self.servers, &self.services, &self.group_members)
    }
}

/// Scans `config` once, sorting every classified line into its set.
///
/// Lines that match no category are skipped without complaint.
pub fn extract(config: &str) -> ResourceSets {
    let mut sets = ResourceSets::default();

    for (idx, line) in config.lines().enumerate() {
        let class = classify::classify(line);
        if class != LineClass::Unclassified {
            trace!(line = idx + 1, ?class, "classified");
        }
        match class {
            LineClass::ServerDefinition(addr) => {
                sets.servers.insert(addr);
            }
            LineClass::ServiceDefinition(addr) => {
                sets.services.insert(addr);
            }
            LineClass::ServiceGroupBinding(addr) => {
                sets.group_members.insert(addr);
            }
            LineClass::Unclassified => {}
        }
    }

    sets
}
