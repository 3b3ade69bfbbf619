//! Wire-level clients for talking to the appliance.

pub mod nitro;

pub use nitro::NitroClient;
