//! # Deeplink Checker
//!
//! An HTTP service for debugging cross-platform deep-link setups. Given a
//! domain it concurrently retrieves the four well-known configuration
//! sources — Apple's `apple-app-site-association` (directly and via Apple's
//! CDN) and Google's `assetlinks.json` (directly and via the Digital Asset
//! Links API) — and returns their parsed contents in one combined report.
//!
//! ## Layers
//!
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Probe Layer** ([`probes`]) - outbound lookups against the four sources
//! - **Utilities** ([`utils`]) - domain input normalization
//!
//! Every request is independent; nothing persists across requests and the
//! service holds no state beyond a shared outbound HTTP client.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl 'http://localhost:3000/check-domain?domain=example.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod error;
pub mod probes;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
