//! Outbound lookups against the four deep-link configuration sources.
//!
//! # Modules
//!
//! - [`endpoints`] - target-URL construction for the four lookups
//! - [`client`] - the concurrent probe client and its outcome types

pub mod client;
pub mod endpoints;

pub use client::{DomainProbes, ProbeClient, ProbeOutcome};
pub use endpoints::ProbeEndpoints;
