use std::sync::Arc;

use crate::probes::ProbeClient;

/// Shared application state injected into handlers.
///
/// Holds nothing but the outbound probe client; every request is otherwise
/// independent.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<ProbeClient>,
}
