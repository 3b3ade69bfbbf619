use std::collections::BTreeSet;

use nsprune_common::address::AddressToken;

/// `servers - services - group_members`.
///
/// An empty result is a normal outcome: nothing looks stale.
pub fn reconcile(
    servers: &BTreeSet<AddressToken>,
    services: &BTreeSet<AddressToken>,
    group_members: &BTreeSet<AddressToken>,
) -> BTreeSet<AddressToken> {
    servers
        .iter()
        .filter(|addr| !services.contains(*addr) && !group_members.contains(*addr))
        .cloned()
        .collect()
}
