use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub dip_api_key: String,
    pub dip_base_url: String,
    pub disable_proxy: bool,
}
