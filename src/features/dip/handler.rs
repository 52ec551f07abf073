use serde_json::Value;

use crate::core::error::AppError;
use crate::features::dip::client::DipClient;
use crate::features::dip::dto::{GetPersonArgs, PartyDistributionArgs};

pub async fn handle_get_person(client: &DipClient, args: GetPersonArgs) -> Result<Value, AppError> {
    client.get_person(args).await
}

pub async fn handle_get_party_distribution(
    client: &DipClient,
    args: PartyDistributionArgs,
) -> Result<Value, AppError> {
    let distribution = client.get_party_distribution(args).await?;
    serde_json::to_value(distribution)
        .map_err(|err| AppError::internal(format!("failed to serialise distribution: {err}")))
}
