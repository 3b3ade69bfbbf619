//! # Stale Server Reconciliation
//!
//! Pure logic over a running-configuration dump plus the service that drives
//! one audit run through a [`SessionClient`](nsprune_common::session::SessionClient).
//!
//! * [`classify`]: line-format contract for the three relevant directives.
//! * [`extract`]: one pass over the dump, producing the three address sets.
//! * [`reconcile`]: servers nobody references.
//! * [`remediation`]: rendering and persisting the `rm server` script.
//! * [`audit`]: login, fetch, logout and the steps above, in order.

pub mod audit;
pub mod classify;
pub mod extract;
pub mod reconcile;
pub mod remediation;
