use std::sync::Arc;

use crate::features::mcp::McpService;

/// Shared router state: the MCP service plus the inbound API key checked
/// by the auth middleware.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<McpService>,
    pub api_key: Arc<String>,
}

impl AppState {
    pub fn new(service: Arc<McpService>, api_key: String) -> Self {
        Self {
            service,
            api_key: Arc::new(api_key),
        }
    }
}
