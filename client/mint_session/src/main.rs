#![no_std]
#![no_main]

#[cfg(not(target_arch = "wasm32"))]
compile_error!("target arch should be wasm32: compile with '--target wasm32-unknown-unknown'");

use casper_contract::{
    contract_api::{account, runtime, storage, system},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_types::{runtime_args, ApiError, ContractHash, Key, RuntimeArgs, U512};

const ENTRY_POINT_MINT: &str = "mint";

const ARG_NFT_CONTRACT_HASH: &str = "nft_contract_hash";
const ARG_TOKEN_OWNER: &str = "token_owner";
const ARG_AMOUNT: &str = "amount";
const ARG_PURSE: &str = "purse";

#[no_mangle]
pub extern "C" fn call() {
    let nft_contract_hash: ContractHash = runtime::get_named_arg::<Key>(ARG_NFT_CONTRACT_HASH)
        .into_hash()
        .map(ContractHash::new)
        .unwrap_or_revert_with(ApiError::InvalidArgument);

    let token_owner = runtime::get_named_arg::<Key>(ARG_TOKEN_OWNER);
    let amount: U512 = runtime::get_named_arg(ARG_AMOUNT);

    // The contract pulls the payment out of this purse.
    let payment_purse = system::create_purse();
    system::transfer_from_purse_to_purse(account::get_main_purse(), payment_purse, amount, None)
        .unwrap_or_revert();

    let token_id = runtime::call_contract::<u64>(
        nft_contract_hash,
        ENTRY_POINT_MINT,
        runtime_args! {
            ARG_TOKEN_OWNER => token_owner,
            ARG_AMOUNT => amount,
            ARG_PURSE => payment_purse,
        },
    );

    runtime::put_key(ENTRY_POINT_MINT, storage::new_uref(token_id).into());
}
