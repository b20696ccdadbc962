//! Request processing middleware.

pub mod cors;
