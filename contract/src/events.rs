use alloc::string::{String, ToString};

use casper_event_standard::{Event, Schemas};
use casper_types::{Key, U512};

#[derive(Event, Debug, PartialEq, Eq)]
pub struct Mint {
    recipient: Key,
    token_id: String,
    price_paid: U512,
}

impl Mint {
    pub fn new(recipient: Key, token_id: u64, price_paid: U512) -> Self {
        Self {
            recipient,
            token_id: token_id.to_string(),
            price_paid,
        }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct Redeem {
    recipient: Key,
    token_id: String,
}

impl Redeem {
    pub fn new(recipient: Key, token_id: u64) -> Self {
        Self {
            recipient,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct Transfer {
    owner: Key,
    spender: Option<Key>,
    recipient: Key,
    token_id: String,
}

impl Transfer {
    pub fn new(owner: Key, spender: Option<Key>, recipient: Key, token_id: u64) -> Self {
        Self {
            owner,
            spender,
            recipient,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct Approval {
    owner: Key,
    spender: Key,
    token_id: String,
}

impl Approval {
    pub fn new(owner: Key, spender: Key, token_id: u64) -> Self {
        Self {
            owner,
            spender,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct PauseToggled {
    purchases_paused: bool,
}

impl PauseToggled {
    pub fn new(purchases_paused: bool) -> Self {
        Self { purchases_paused }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct BaseUriSet {
    base_uri: String,
}

impl BaseUriSet {
    pub fn new(base_uri: String) -> Self {
        Self { base_uri }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct MintersLoaded {
    added: u64,
}

impl MintersLoaded {
    pub fn new(added: u64) -> Self {
        Self { added }
    }
}

#[derive(Event, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    recipient: Key,
    amount: U512,
}

impl Withdrawal {
    pub fn new(recipient: Key, amount: U512) -> Self {
        Self { recipient, amount }
    }
}

/// Schemas registered with the event standard when the collection is initialized.
pub fn schemas() -> Schemas {
    Schemas::new()
        .with::<Mint>()
        .with::<Redeem>()
        .with::<Transfer>()
        .with::<Approval>()
        .with::<PauseToggled>()
        .with::<BaseUriSet>()
        .with::<MintersLoaded>()
        .with::<Withdrawal>()
}
