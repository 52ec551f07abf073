pub mod dto;
pub mod handler;
pub mod schemas;
pub mod service;

pub use handler::{handle_healthcheck, handle_mcp};
pub use service::McpService;
