use alloc::{borrow::ToOwned, vec::Vec};

use casper_contract::{
    contract_api::{self, runtime, storage},
    ext_ffi,
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_event_standard::EventInstance;
use casper_types::{
    account::AccountHash,
    api_error,
    bytesrepr::{self, FromBytes, ToBytes},
    system::CallStackElement,
    ApiError, CLTyped, Key, URef,
};

use crate::{env::ContractEnv, error::FlamingoError};

/// [`ContractEnv`] over the Casper host. Named values live behind URefs in the
/// contract's named keys; dictionaries are seeded by name.
pub struct RuntimeEnv;

impl ContractEnv for RuntimeEnv {
    fn caller(&self) -> Key {
        get_immediate_caller()
    }

    fn named_value<T: CLTyped + FromBytes>(&self, name: &str) -> Result<Option<T>, FlamingoError> {
        let uref = match runtime::get_key(name) {
            Some(key) => key
                .into_uref()
                .ok_or(FlamingoError::UnexpectedKeyVariant)?,
            None => return Ok(None),
        };
        storage::read::<T>(uref).map_err(|_| FlamingoError::InvalidStoredValue)
    }

    fn set_named_value<T: CLTyped + ToBytes>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<(), FlamingoError> {
        match runtime::get_key(name) {
            Some(key) => {
                let uref = key
                    .into_uref()
                    .ok_or(FlamingoError::UnexpectedKeyVariant)?;
                storage::write(uref, value);
            }
            None => runtime::put_key(name, storage::new_uref(value).into()),
        }
        Ok(())
    }

    fn new_dictionary(&mut self, name: &str) -> Result<(), FlamingoError> {
        storage::new_dictionary(name)
            .map(|_| ())
            .map_err(|_| FlamingoError::FailedToCreateDictionary)
    }

    fn dictionary_get<T: CLTyped + FromBytes>(
        &self,
        dictionary_name: &str,
        item_key: &str,
    ) -> Result<Option<T>, FlamingoError> {
        let seed_uref = get_uref(
            dictionary_name,
            FlamingoError::MissingStorageUref,
            FlamingoError::InvalidStorageUref,
        )?;
        storage::dictionary_get::<T>(seed_uref, item_key)
            .map_err(|_| FlamingoError::InvalidStoredValue)
    }

    fn dictionary_put<T: CLTyped + ToBytes>(
        &mut self,
        dictionary_name: &str,
        item_key: &str,
        value: T,
    ) -> Result<(), FlamingoError> {
        let seed_uref = get_uref(
            dictionary_name,
            FlamingoError::MissingStorageUref,
            FlamingoError::InvalidStorageUref,
        )?;
        storage::dictionary_put(seed_uref, item_key, value);
        Ok(())
    }

    fn emit<E: EventInstance + ToBytes>(&mut self, event: E) {
        casper_event_standard::emit(event);
    }
}

pub fn get_uref(
    name: &str,
    missing: FlamingoError,
    invalid: FlamingoError,
) -> Result<URef, FlamingoError> {
    runtime::get_key(name)
        .ok_or(missing)?
        .into_uref()
        .ok_or(invalid)
}

pub fn get_account_hash(
    name: &str,
    missing: FlamingoError,
    invalid: FlamingoError,
) -> AccountHash {
    runtime::get_key(name)
        .unwrap_or_revert_with(missing)
        .into_account()
        .unwrap_or_revert_with(invalid)
}

// Accounts calling through session code and contracts calling directly both count.
pub fn get_immediate_caller() -> Key {
    match *runtime::get_call_stack()
        .iter()
        .nth_back(1)
        .to_owned()
        .unwrap_or_revert()
    {
        CallStackElement::Session {
            account_hash: calling_account_hash,
        } => Key::Account(calling_account_hash),
        CallStackElement::StoredSession { contract_hash, .. }
        | CallStackElement::StoredContract { contract_hash, .. } => contract_hash.into(),
    }
}

pub fn get_named_arg_size(name: &str) -> Option<usize> {
    let mut arg_size: usize = 0;
    let ret = unsafe {
        ext_ffi::casper_get_named_arg_size(
            name.as_bytes().as_ptr(),
            name.len(),
            &mut arg_size as *mut usize,
        )
    };
    match api_error::result_from(ret) {
        Ok(_) => Some(arg_size),
        Err(ApiError::MissingArgument) => None,
        Err(e) => runtime::revert(e),
    }
}

pub fn get_optional_named_arg_with_user_errors<T: FromBytes>(
    name: &str,
    invalid: FlamingoError,
) -> Option<T> {
    get_named_arg_size(name)?;
    match get_named_arg_with_user_errors(name, invalid, invalid) {
        Ok(val) => Some(val),
        Err(error) => runtime::revert(error),
    }
}

pub fn get_named_arg_with_user_errors<T: FromBytes>(
    name: &str,
    missing: FlamingoError,
    invalid: FlamingoError,
) -> Result<T, FlamingoError> {
    let arg_size = get_named_arg_size(name).ok_or(missing)?;
    let arg_bytes = if arg_size > 0 {
        let res = {
            let data_non_null_ptr = contract_api::alloc_bytes(arg_size);
            let ret = unsafe {
                ext_ffi::casper_get_named_arg(
                    name.as_bytes().as_ptr(),
                    name.len(),
                    data_non_null_ptr.as_ptr(),
                    arg_size,
                )
            };
            let data =
                unsafe { Vec::from_raw_parts(data_non_null_ptr.as_ptr(), arg_size, arg_size) };
            api_error::result_from(ret).map(|_| data)
        };
        // Assumed to be safe as `get_named_arg_size` checks the argument already
        res.unwrap_or_revert_with(FlamingoError::FailedToGetArgBytes)
    } else {
        // Avoids allocation with 0 bytes and a call to get_named_arg
        Vec::new()
    };

    bytesrepr::deserialize(arg_bytes).map_err(|_| invalid)
}
