//! Handler for the domain configuration check endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::dto::check::CheckResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::normalize_domain::normalize_domain;

/// Query parameters for the check endpoint.
#[derive(Debug, Deserialize)]
pub struct CheckDomainParams {
    pub domain: Option<String>,
}

/// Produces a combined iOS/Android deep-link configuration report.
///
/// # Endpoint
///
/// `GET /check-domain?domain=<name>`
///
/// Accepts a bare hostname, a hostname with a path, or a full URL; anything
/// beyond the hostname is discarded before the lookups. The four upstream
/// lookups run concurrently and each degrades to "not found" on failure
/// instead of failing the request.
///
/// # Errors
///
/// Returns 400 if `domain` is missing or empty, or cannot be reduced to a
/// hostname.
pub async fn check_domain_handler(
    State(state): State<AppState>,
    Query(params): Query<CheckDomainParams>,
) -> Result<Json<CheckResponse>, AppError> {
    let raw = params
        .domain
        .filter(|domain| !domain.is_empty())
        .ok_or(AppError::MissingDomain)?;

    let domain = normalize_domain(&raw)?;
    let probes = state.checker.check(&domain).await;

    Ok(Json(CheckResponse::from(probes)))
}
