pub mod client;
pub mod distribution;
pub mod dto;
pub mod handler;
pub mod pagination;

pub use client::DipClient;
pub use dto::{
    GetPersonArgs, PartyCountDto, PartyDistributionArgs, PartyDistributionDto, PersonPage,
};
pub use handler::{handle_get_party_distribution, handle_get_person};
pub use pagination::{PersonSource, fetch_all_persons};
