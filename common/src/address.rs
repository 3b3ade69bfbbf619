//! # Address Tokens
//!
//! Every identifier admitted into a resource set must first be proven to be
//! an IPv4 or IPv6 literal. [`AddressToken`] can only be built through
//! [`AddressToken::parse`], so holding one is proof of that check.

use std::fmt;
use std::net::IpAddr;

/// Returns `true` if `token` is a well-formed IPv4 or IPv6 address literal.
///
/// No name resolution takes place and CIDR suffixes, ports or zone ids are
/// rejected. Never fails: malformed input simply yields `false`.
pub fn is_valid_address(token: &str) -> bool {
    token.parse::<IpAddr>().is_ok()
}

/// An address literal exactly as it was spelled in the configuration dump.
///
/// The original spelling is kept (rather than the parsed [`IpAddr`]) because
/// removal directives have to name a server the same way the appliance does.
/// Ordering is lexicographic on that spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressToken(String);

impl AddressToken {
    /// Admits `token` if it passes [`is_valid_address`].
    pub fn parse(token: &str) -> Option<Self> {
        is_valid_address(token).then(|| Self(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AddressToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
