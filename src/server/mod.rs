pub mod auth;
pub mod state;

pub use auth::require_api_key;
pub use state::AppState;
