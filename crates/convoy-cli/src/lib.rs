//! Convoy CLI - Command line tools for the convoy coordination system.
//!
//! This crate provides the CLI binaries:
//! - plan_route: offline route planning against a threat snapshot file
//! - send_convoy: submit a convoy request to a running server

pub mod client;
pub mod snapshot;

pub use client::ConvoyClient;
pub use snapshot::ThreatSnapshot;
