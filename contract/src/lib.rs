#![no_std]

extern crate alloc;

pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod events;
pub mod ledger;

// A feature to allow the contract to be used
// as a library and a binary.
#[cfg(feature = "contract-support")]
pub mod utils;
