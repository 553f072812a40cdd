//! The host seam the ledger is written against.
//!
//! On chain the contract binary implements [`ContractEnv`] over the Casper runtime
//! (see `utils::RuntimeEnv`).

use casper_event_standard::EventInstance;
use casper_types::{
    bytesrepr::{FromBytes, ToBytes},
    CLTyped, Key,
};

use crate::error::FlamingoError;

pub trait ContractEnv {
    /// The immediate caller of the current entry point.
    fn caller(&self) -> Key;

    fn named_value<T: CLTyped + FromBytes>(&self, name: &str) -> Result<Option<T>, FlamingoError>;

    fn set_named_value<T: CLTyped + ToBytes>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<(), FlamingoError>;

    fn new_dictionary(&mut self, name: &str) -> Result<(), FlamingoError>;

    fn dictionary_get<T: CLTyped + FromBytes>(
        &self,
        dictionary_name: &str,
        item_key: &str,
    ) -> Result<Option<T>, FlamingoError>;

    fn dictionary_put<T: CLTyped + ToBytes>(
        &mut self,
        dictionary_name: &str,
        item_key: &str,
        value: T,
    ) -> Result<(), FlamingoError>;

    /// Records `event` in the host's event log. A host that cannot encode the
    /// event must not drop it silently.
    fn emit<E: EventInstance + ToBytes>(&mut self, event: E);
}
