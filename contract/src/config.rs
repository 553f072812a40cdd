use alloc::{string::String, vec::Vec};

use casper_types::{Key, U512};
use serde::Serialize;

use crate::error::FlamingoError;

/// Install-time configuration of a collection. Everything except the base URI is
/// immutable once installed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    /// Custodian of the bridge reserve.
    pub router: Key,
    /// Exclusive upper bound of token ids.
    pub max_token_id: u64,
    /// Price of one token, in motes.
    pub price: U512,
    pub whitelist: Vec<Key>,
    /// Ids `[0, bridge_reserve)` start out held by the router.
    pub bridge_reserve: u64,
}

impl CollectionConfig {
    pub fn validate(&self) -> Result<(), FlamingoError> {
        if self.bridge_reserve > self.max_token_id {
            return Err(FlamingoError::InvalidBridgeReserve);
        }
        match self.router {
            Key::Account(_) | Key::Hash(_) => Ok(()),
            _ => Err(FlamingoError::InvalidRouter),
        }
    }
}

/// Read-only summary returned by the `collection_info` entry point as JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CollectionInfo {
    pub name: String,
    pub symbol: String,
    pub router: String,
    pub max_token_id: u64,
    pub price: String,
    pub bridge_reserve: u64,
    pub minted: u64,
    pub base_uri: String,
    pub purchases_paused: bool,
}

impl CollectionInfo {
    pub fn to_json(&self) -> Result<String, FlamingoError> {
        serde_json_wasm::to_string(self)
            .map_err(|_| FlamingoError::FailedToSerializeCollectionInfo)
    }
}
