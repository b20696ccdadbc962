//! HTTP request handlers for API endpoints.

pub mod check_domain;

pub use check_domain::check_domain_handler;
