use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::dip::distribution::build_distribution;
use crate::features::dip::dto::{
    GetPersonArgs, PartyDistributionArgs, PartyDistributionDto, PersonPage,
};
use crate::features::dip::pagination::{PersonSource, fetch_all_persons};

pub const MIN_WAHLPERIODE: u32 = 1;
pub const MAX_WAHLPERIODE: u32 = 21;

/// Client for the Bundestag DIP API. One GET per call, no retries: any
/// network failure, non-2xx status, or undecodable body surfaces as a
/// single upstream error.
pub struct DipClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl DipClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Search persons in the DIP database, returning the raw API page.
    pub async fn get_person(&self, args: GetPersonArgs) -> Result<Value, AppError> {
        let GetPersonArgs {
            name,
            wahlperiode,
            cursor,
        } = args;

        if let Some(period) = wahlperiode {
            validate_wahlperiode(period)?;
        }

        let name = name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let url = self.person_url(name.as_deref(), wahlperiode, cursor.as_deref())?;
        self.get_json(url).await
    }

    /// Fetch every member of one electoral period and tally party counts.
    pub async fn get_party_distribution(
        &self,
        args: PartyDistributionArgs,
    ) -> Result<PartyDistributionDto, AppError> {
        let wahlperiode = args.wahlperiode;
        validate_wahlperiode(wahlperiode)?;

        let members = fetch_all_persons(self, wahlperiode).await?;
        Ok(build_distribution(&members, wahlperiode))
    }

    fn person_url(
        &self,
        name: Option<&str>,
        wahlperiode: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}/person", self.config.dip_base_url))
            .map_err(|err| AppError::internal(format!("invalid person url: {err}")))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("format", "json");
            query_pairs.append_pair("apikey", &self.config.dip_api_key);
            if let Some(name) = name {
                query_pairs.append_pair("f.person", name);
            }
            if let Some(period) = wahlperiode {
                query_pairs.append_pair("f.wahlperiode", &period.to_string());
            }
            if let Some(cursor) = cursor {
                query_pairs.append_pair("cursor", cursor);
            }
        }

        Ok(url)
    }

    // Error messages name the resource path rather than the full URL so
    // the apikey query parameter never ends up in logs or responses.
    async fn get_json(&self, url: Url) -> Result<Value, AppError> {
        let resource = url.path().to_string();

        let response = self.http_client.get(url).send().await.map_err(|err| {
            AppError::upstream_with_data(
                format!("network error contacting {resource}: {err}"),
                json!({
                    "resource": resource,
                    "status": Value::Null,
                    "error": err.to_string(),
                }),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let snippet = text.chars().take(512).collect::<String>();
            return Err(AppError::upstream_with_data(
                format!("request to {resource} failed with {status}"),
                json!({
                    "resource": resource,
                    "status": status.as_u16(),
                    "body": snippet,
                }),
            ));
        }

        response.json::<Value>().await.map_err(|err| {
            AppError::upstream(format!("malformed response from {resource}: {err}"))
        })
    }
}

#[async_trait]
impl PersonSource for DipClient {
    async fn fetch_person_page(
        &self,
        wahlperiode: u32,
        cursor: Option<String>,
    ) -> Result<PersonPage, AppError> {
        let url = self.person_url(None, Some(wahlperiode), cursor.as_deref())?;
        let payload = self.get_json(url).await?;
        serde_json::from_value(payload)
            .map_err(|err| AppError::upstream(format!("unexpected person page shape: {err}")))
    }
}

pub fn validate_wahlperiode(wahlperiode: u32) -> Result<(), AppError> {
    if !(MIN_WAHLPERIODE..=MAX_WAHLPERIODE).contains(&wahlperiode) {
        return Err(AppError::bad_request(format!(
            "wahlperiode must be between {MIN_WAHLPERIODE} and {MAX_WAHLPERIODE}, received {wahlperiode}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_period_bounds() {
        assert!(validate_wahlperiode(1).is_ok());
        assert!(validate_wahlperiode(21).is_ok());
    }

    #[test]
    fn rejects_out_of_range_periods() {
        for period in [0, 22, 100] {
            let error = validate_wahlperiode(period).expect_err("period should be rejected");
            match error {
                AppError::BadRequest { message } => {
                    assert!(message.contains("wahlperiode"), "unexpected message: {message}");
                }
                other => panic!("expected bad request error, got {other:?}"),
            }
        }
    }
}
