#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use deeplink_checker::probes::{ProbeClient, ProbeEndpoints};
use deeplink_checker::routes::app_router;
use deeplink_checker::state::AppState;
use wiremock::MockServer;

/// Endpoints with every probe pointed at the given mock server.
///
/// Combined with [`mock_domain`] as the domain under test, all four lookups
/// land on the same mock server under their distinct paths.
pub fn mock_endpoints(mock: &MockServer) -> ProbeEndpoints {
    ProbeEndpoints {
        origin_scheme: "http".to_string(),
        cdn_base: mock.uri(),
        dal_base: mock.uri(),
    }
}

/// The mock server's `host:port`, used as the domain under test so the
/// direct well-known probes also land on the mock server.
pub fn mock_domain(mock: &MockServer) -> String {
    mock.uri()
        .strip_prefix("http://")
        .expect("mock server uri is http")
        .to_string()
}

/// Endpoints whose every probe targets a port nothing listens on.
pub fn unreachable_endpoints() -> ProbeEndpoints {
    ProbeEndpoints {
        origin_scheme: "http".to_string(),
        cdn_base: "http://127.0.0.1:9".to_string(),
        dal_base: "http://127.0.0.1:9".to_string(),
    }
}

pub fn make_client(endpoints: ProbeEndpoints) -> ProbeClient {
    ProbeClient::with_endpoints(endpoints, None).unwrap()
}

pub fn make_client_with_timeout(endpoints: ProbeEndpoints, timeout: Duration) -> ProbeClient {
    ProbeClient::with_endpoints(endpoints, Some(timeout)).unwrap()
}

pub fn make_state(endpoints: ProbeEndpoints) -> AppState {
    AppState {
        checker: Arc::new(make_client(endpoints)),
    }
}

pub fn make_server(endpoints: ProbeEndpoints) -> TestServer {
    TestServer::new(app_router(make_state(endpoints))).unwrap()
}
