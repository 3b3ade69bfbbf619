//! End-to-end runs of the audit against a mock NITRO endpoint.

#[cfg(test)]
mod audit;
