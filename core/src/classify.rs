//! Classification of single running-configuration lines.
//!
//! Matching is a case-insensitive comparison against the literal command
//! prefix followed by positional token checks. The trailing space in each
//! prefix is significant: it keeps `add server ` from matching
//! `add serverX ...` style keywords.

use nsprune_common::address::AddressToken;

pub const SERVER_PREFIX: &str = "add server ";
pub const SERVICE_PREFIX: &str = "add service ";
pub const SERVICE_GROUP_PREFIX: &str = "bind servicegroup ";

/// Minimum number of whitespace-separated tokens any relevant line carries.
const MIN_TOKENS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `add server <ip> <ip> ...` where the name is its own address.
    ServerDefinition(AddressToken),
    /// `add service <name> <ip> ...`
    ServiceDefinition(AddressToken),
    /// `bind servicegroup <name> <ip> ...`
    ServiceGroupBinding(AddressToken),
    Unclassified,
}

impl LineClass {
    pub fn address(&self) -> Option<&AddressToken> {
        match self {
            Self::ServerDefinition(addr)
            | Self::ServiceDefinition(addr)
            | Self::ServiceGroupBinding(addr) => Some(addr),
            Self::Unclassified => None,
        }
    }
}

/// Classifies one line of the running configuration.
pub fn classify(line: &str) -> LineClass {
    if has_prefix(line, SERVER_PREFIX) {
        return server_definition(line);
    }
    if has_prefix(line, SERVICE_PREFIX) {
        return address_at_index(line, 3).map_or(LineClass::Unclassified, LineClass::ServiceDefinition);
    }
    if has_prefix(line, SERVICE_GROUP_PREFIX) {
        return address_at_index(line, 3).map_or(LineClass::Unclassified, LineClass::ServiceGroupBinding);
    }
    LineClass::Unclassified
}

/// Only IP-named servers count: FQDN or symbolic servers are out of scope.
fn server_definition(line: &str) -> LineClass {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS || tokens[2] != tokens[3] {
        return LineClass::Unclassified;
    }
    AddressToken::parse(tokens[2]).map_or(LineClass::Unclassified, LineClass::ServerDefinition)
}

fn address_at_index(line: &str, index: usize) -> Option<AddressToken> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return None;
    }
    AddressToken::parse(tokens[index])
}

fn has_prefix(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
