use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

const DEFAULT_DIP_BASE_URL: &str = "https://search.dip.bundestag.de/api/v1";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("MCP_SERVER_PORT")
        .or_else(|_| env::var("PORT"))
        .unwrap_or_else(|_| "4200".to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let api_key = env::var("MCP_API_KEY")
        .map_err(|_| AppError::configuration("MCP_API_KEY is required".to_string()))?;

    let dip_api_key = env::var("DIP_API_KEY").map_err(|_| {
        AppError::configuration(
            "Missing API key: set DIP_API_KEY in the environment or .env file".to_string(),
        )
    })?;

    let dip_base_url = env::var("DIP_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_DIP_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let disable_proxy = parse_bool_env("MCP_DISABLE_PROXY", false);

    Ok(AppConfig {
        port,
        api_key,
        dip_api_key,
        dip_base_url,
        disable_proxy,
    })
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}
