use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct GetPersonArgs {
    pub name: Option<String>,
    pub wahlperiode: Option<u32>,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartyDistributionArgs {
    pub wahlperiode: u32,
}

/// One page of the DIP `/person` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonPage {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub documents: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyCountDto {
    pub fraktion: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyDistributionDto {
    pub wahlperiode: u32,
    #[serde(rename = "totalMembers")]
    pub total_members: u64,
    pub parties: Vec<PartyCountDto>,
}
