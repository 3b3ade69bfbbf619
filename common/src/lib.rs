//! # Shared building blocks
//!
//! Types used on both sides of the session boundary: validated address
//! tokens, the per-run [`config::Config`], the transport error type and the
//! [`session::SessionClient`] trait implemented by the protocol crate.

pub mod address;
pub mod config;
pub mod error;
pub mod session;
