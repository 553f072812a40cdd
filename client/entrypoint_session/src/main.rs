#![no_std]
#![no_main]

#[cfg(not(target_arch = "wasm32"))]
compile_error!("target arch should be wasm32: compile with '--target wasm32-unknown-unknown'");

extern crate alloc;

use alloc::string::String;
use casper_contract::{
    contract_api::{runtime, storage},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_types::{runtime_args, ApiError, ContractHash, Key, RuntimeArgs};

const ARG_ENTRY_POINT_NAME: &str = "entry_point_name";
const ENTRY_POINT_BALANCE_OF: &str = "balance_of";
const ENTRY_POINT_OWNER_OF: &str = "owner_of";
const ENTRY_POINT_TOKEN_URI: &str = "token_uri";
const ENTRY_POINT_GET_APPROVED: &str = "get_approved";
const ENTRY_POINT_TOTAL_SUPPLY: &str = "total_supply";
const ENTRY_POINT_COLLECTION_INFO: &str = "collection_info";

const ARG_NFT_CONTRACT_HASH: &str = "nft_contract_hash";
const ARG_TOKEN_OWNER: &str = "token_owner";
const ARG_TOKEN_ID: &str = "token_id";

#[no_mangle]
pub extern "C" fn call() {
    let nft_contract_hash: ContractHash = runtime::get_named_arg::<Key>(ARG_NFT_CONTRACT_HASH)
        .into_hash()
        .map(ContractHash::new)
        .unwrap_or_revert_with(ApiError::InvalidArgument);
    let entry_point_name = runtime::get_named_arg::<String>(ARG_ENTRY_POINT_NAME);
    let entry_point_name = entry_point_name.as_str();

    // Each result lands in the caller's named keys under the entry point's name.
    match entry_point_name {
        ENTRY_POINT_BALANCE_OF => {
            let token_owner: Key = runtime::get_named_arg(ARG_TOKEN_OWNER);
            let balance = runtime::call_contract::<u64>(
                nft_contract_hash,
                ENTRY_POINT_BALANCE_OF,
                runtime_args! {
                    ARG_TOKEN_OWNER => token_owner,
                },
            );

            runtime::put_key(entry_point_name, storage::new_uref(balance).into());
        }
        ENTRY_POINT_OWNER_OF => {
            let token_id: u64 = runtime::get_named_arg(ARG_TOKEN_ID);
            let owner = runtime::call_contract::<Key>(
                nft_contract_hash,
                ENTRY_POINT_OWNER_OF,
                runtime_args! {
                    ARG_TOKEN_ID => token_id,
                },
            );

            runtime::put_key(entry_point_name, storage::new_uref(owner).into());
        }
        ENTRY_POINT_TOKEN_URI => {
            let token_id: u64 = runtime::get_named_arg(ARG_TOKEN_ID);
            let token_uri = runtime::call_contract::<String>(
                nft_contract_hash,
                ENTRY_POINT_TOKEN_URI,
                runtime_args! {
                    ARG_TOKEN_ID => token_id,
                },
            );

            runtime::put_key(entry_point_name, storage::new_uref(token_uri).into());
        }
        ENTRY_POINT_GET_APPROVED => {
            let token_id: u64 = runtime::get_named_arg(ARG_TOKEN_ID);
            let maybe_spender = runtime::call_contract::<Option<Key>>(
                nft_contract_hash,
                ENTRY_POINT_GET_APPROVED,
                runtime_args! {
                    ARG_TOKEN_ID => token_id,
                },
            );

            runtime::put_key(entry_point_name, storage::new_uref(maybe_spender).into());
        }
        ENTRY_POINT_TOTAL_SUPPLY => {
            let minted = runtime::call_contract::<u64>(
                nft_contract_hash,
                ENTRY_POINT_TOTAL_SUPPLY,
                runtime_args! {},
            );

            runtime::put_key(entry_point_name, storage::new_uref(minted).into());
        }
        ENTRY_POINT_COLLECTION_INFO => {
            let info = runtime::call_contract::<String>(
                nft_contract_hash,
                ENTRY_POINT_COLLECTION_INFO,
                runtime_args! {},
            );

            runtime::put_key(entry_point_name, storage::new_uref(info).into());
        }
        _ => runtime::revert(ApiError::InvalidArgument),
    }
}
