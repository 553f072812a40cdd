#![no_std]
#![no_main]

#[cfg(not(target_arch = "wasm32"))]
compile_error!("target arch should be wasm32: compile with '--target wasm32-unknown-unknown'");

extern crate alloc;

use alloc::{boxed::Box, string::String, string::ToString, vec, vec::Vec};

use casper_contract::{
    contract_api::{runtime, storage, system},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_types::{
    contracts::NamedKeys, runtime_args, CLType, CLTyped, CLValue, ContractHash, ContractVersion,
    EntryPoint, EntryPointAccess, EntryPointType, EntryPoints, Key, Parameter, RuntimeArgs, URef,
    U512,
};

use flamingo::{
    config::CollectionConfig,
    constants::*,
    error::FlamingoError,
    events, ledger,
    utils::{
        get_account_hash, get_named_arg_with_user_errors, get_optional_named_arg_with_user_errors,
        get_uref, RuntimeEnv,
    },
};

fn ret<T: CLTyped + casper_types::bytesrepr::ToBytes>(value: T) {
    let cl_value =
        CLValue::from_t(value).unwrap_or_revert_with(FlamingoError::FailedToConvertToCLValue);
    runtime::ret(cl_value)
}

fn get_token_id() -> u64 {
    get_named_arg_with_user_errors(
        ARG_TOKEN_ID,
        FlamingoError::MissingTokenID,
        FlamingoError::InvalidTokenID,
    )
    .unwrap_or_revert()
}

fn get_contract_purse() -> URef {
    get_uref(
        CONTRACT_PURSE,
        FlamingoError::MissingContractPurse,
        FlamingoError::UnexpectedKeyVariant,
    )
    .unwrap_or_revert()
}

#[no_mangle]
pub extern "C" fn init() {
    // Only the installing account may call this method. All other callers are erroneous.
    let installing_account = get_account_hash(
        INSTALLER,
        FlamingoError::MissingInstaller,
        FlamingoError::InvalidInstaller,
    );

    if installing_account != runtime::get_caller() {
        runtime::revert(FlamingoError::InvalidAccount)
    }

    let config = CollectionConfig {
        name: get_named_arg_with_user_errors(
            ARG_COLLECTION_NAME,
            FlamingoError::MissingCollectionName,
            FlamingoError::InvalidCollectionName,
        )
        .unwrap_or_revert(),
        symbol: get_named_arg_with_user_errors(
            ARG_COLLECTION_SYMBOL,
            FlamingoError::MissingCollectionSymbol,
            FlamingoError::InvalidCollectionSymbol,
        )
        .unwrap_or_revert(),
        router: get_named_arg_with_user_errors(
            ARG_ROUTER,
            FlamingoError::MissingRouter,
            FlamingoError::InvalidRouter,
        )
        .unwrap_or_revert(),
        max_token_id: get_named_arg_with_user_errors(
            ARG_MAX_TOKEN_ID,
            FlamingoError::MissingMaxTokenId,
            FlamingoError::InvalidMaxTokenId,
        )
        .unwrap_or_revert(),
        price: get_named_arg_with_user_errors(
            ARG_TOKEN_PRICE,
            FlamingoError::MissingTokenPrice,
            FlamingoError::InvalidTokenPrice,
        )
        .unwrap_or_revert(),
        whitelist: get_named_arg_with_user_errors(
            ARG_WHITELIST,
            FlamingoError::MissingWhitelist,
            FlamingoError::InvalidWhitelist,
        )
        .unwrap_or_revert(),
        bridge_reserve: get_optional_named_arg_with_user_errors(
            ARG_BRIDGE_RESERVE,
            FlamingoError::InvalidBridgeReserve,
        )
        .unwrap_or(0u64),
    };

    // Reverts with ContractAlreadyInitialized on a second call.
    ledger::install(&mut RuntimeEnv, Key::Account(installing_account), config)
        .unwrap_or_revert();

    runtime::put_key(CONTRACT_PURSE, system::create_purse().into());
    casper_event_standard::init(events::schemas());
}

// Takes the price from a purse funded by the calling session. A ledger failure
// reverts the purse transfer along with everything else.
#[no_mangle]
pub extern "C" fn mint() {
    let token_owner: Key = get_named_arg_with_user_errors(
        ARG_TOKEN_OWNER,
        FlamingoError::MissingTokenOwner,
        FlamingoError::InvalidKey,
    )
    .unwrap_or_revert();

    let amount: U512 = get_named_arg_with_user_errors(
        ARG_AMOUNT,
        FlamingoError::MissingAmount,
        FlamingoError::InvalidAmount,
    )
    .unwrap_or_revert();

    let source_purse: URef = get_named_arg_with_user_errors(
        ARG_PURSE,
        FlamingoError::MissingPurse,
        FlamingoError::InvalidPurse,
    )
    .unwrap_or_revert();

    system::transfer_from_purse_to_purse(source_purse, get_contract_purse(), amount, None)
        .unwrap_or_revert_with(FlamingoError::FailedToTransferPayment);

    let token_id = ledger::mint(&mut RuntimeEnv, token_owner, amount).unwrap_or_revert();
    ret(token_id)
}

#[no_mangle]
pub extern "C" fn redeem() {
    let token_owner: Key = get_named_arg_with_user_errors(
        ARG_TOKEN_OWNER,
        FlamingoError::MissingTokenOwner,
        FlamingoError::InvalidKey,
    )
    .unwrap_or_revert();

    let token_id = ledger::redeem(&mut RuntimeEnv, token_owner).unwrap_or_revert();
    ret(token_id)
}

#[no_mangle]
pub extern "C" fn pause_mint() {
    let purchases_paused = ledger::pause_mint(&mut RuntimeEnv).unwrap_or_revert();
    ret(purchases_paused)
}

#[no_mangle]
pub extern "C" fn set_base_uri() {
    let base_uri: String = get_named_arg_with_user_errors(
        ARG_BASE_URI,
        FlamingoError::MissingBaseUri,
        FlamingoError::InvalidBaseUri,
    )
    .unwrap_or_revert();

    ledger::set_base_uri(&mut RuntimeEnv, base_uri).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn token_uri() {
    let token_uri = ledger::token_uri(&RuntimeEnv, get_token_id()).unwrap_or_revert();
    ret(token_uri)
}

#[no_mangle]
pub extern "C" fn transfer() {
    let source_key: Key = get_named_arg_with_user_errors(
        ARG_SOURCE_KEY,
        FlamingoError::MissingSourceKey,
        FlamingoError::InvalidSourceKey,
    )
    .unwrap_or_revert();

    let target_key: Key = get_named_arg_with_user_errors(
        ARG_TARGET_KEY,
        FlamingoError::MissingTargetKey,
        FlamingoError::InvalidTargetKey,
    )
    .unwrap_or_revert();

    ledger::transfer(&mut RuntimeEnv, source_key, target_key, get_token_id()).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn approve() {
    let spender: Key = get_named_arg_with_user_errors(
        ARG_SPENDER,
        FlamingoError::MissingSpender,
        FlamingoError::InvalidApprovedSpender,
    )
    .unwrap_or_revert();

    ledger::approve(&mut RuntimeEnv, spender, get_token_id()).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn get_approved() {
    let approved = ledger::get_approved(&RuntimeEnv, get_token_id()).unwrap_or_revert();
    ret(approved)
}

#[no_mangle]
pub extern "C" fn balance_of() {
    let token_owner: Key = get_named_arg_with_user_errors(
        ARG_TOKEN_OWNER,
        FlamingoError::MissingTokenOwner,
        FlamingoError::InvalidKey,
    )
    .unwrap_or_revert();

    let balance = ledger::balance_of(&RuntimeEnv, &token_owner).unwrap_or_revert();
    ret(balance)
}

#[no_mangle]
pub extern "C" fn owner_of() {
    let owner = ledger::owner_of(&RuntimeEnv, get_token_id()).unwrap_or_revert();
    ret(owner)
}

#[no_mangle]
pub extern "C" fn load_minters() {
    let minters: Vec<Key> = get_named_arg_with_user_errors(
        ARG_MINTERS,
        FlamingoError::MissingMinters,
        FlamingoError::InvalidMinters,
    )
    .unwrap_or_revert();

    let added = ledger::load_minters(&mut RuntimeEnv, minters).unwrap_or_revert();
    ret(added)
}

#[no_mangle]
pub extern "C" fn withdraw() {
    let amount = ledger::withdraw(&mut RuntimeEnv).unwrap_or_revert();
    if !amount.is_zero() {
        system::transfer_from_purse_to_account(
            get_contract_purse(),
            runtime::get_caller(),
            amount,
            None,
        )
        .unwrap_or_revert_with(FlamingoError::FailedToWithdraw);
    }
    ret(amount)
}

#[no_mangle]
pub extern "C" fn total_supply() {
    let minted = ledger::total_supply(&RuntimeEnv).unwrap_or_revert();
    ret(minted)
}

#[no_mangle]
pub extern "C" fn collection_info() {
    let info = ledger::collection_info(&RuntimeEnv)
        .and_then(|info| info.to_json())
        .unwrap_or_revert();
    ret(info)
}

fn public_entry_point(name: &str, params: Vec<Parameter>, ret: CLType) -> EntryPoint {
    EntryPoint::new(
        name,
        params,
        ret,
        EntryPointAccess::Public,
        EntryPointType::Contract,
    )
}

fn store() -> (ContractHash, ContractVersion) {
    let entry_points = {
        let mut entry_points = EntryPoints::new();

        // Called once by the installing session right after the contract is stored.
        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_INIT,
            vec![
                Parameter::new(ARG_COLLECTION_NAME, CLType::String),
                Parameter::new(ARG_COLLECTION_SYMBOL, CLType::String),
                Parameter::new(ARG_ROUTER, CLType::Key),
                Parameter::new(ARG_MAX_TOKEN_ID, CLType::U64),
                Parameter::new(ARG_TOKEN_PRICE, CLType::U512),
                Parameter::new(ARG_WHITELIST, CLType::List(Box::new(CLType::Key))),
                Parameter::new(ARG_BRIDGE_RESERVE, CLType::U64),
            ],
            CLType::Unit,
        ));

        // Reverts with PurchasesPaused, MintCapReached or InsufficientPayment,
        // checked in that order.
        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_MINT,
            vec![
                Parameter::new(ARG_TOKEN_OWNER, CLType::Key),
                Parameter::new(ARG_AMOUNT, CLType::U512),
                Parameter::new(ARG_PURSE, CLType::URef),
            ],
            CLType::U64,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_REDEEM,
            vec![Parameter::new(ARG_TOKEN_OWNER, CLType::Key)],
            CLType::U64,
        ));

        // Installer only. Purchases start paused; each call flips the flag.
        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_PAUSE_MINT,
            vec![],
            CLType::Bool,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_SET_BASE_URI,
            vec![Parameter::new(ARG_BASE_URI, CLType::String)],
            CLType::Unit,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_TOKEN_URI,
            vec![Parameter::new(ARG_TOKEN_ID, CLType::U64)],
            CLType::String,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_TRANSFER,
            vec![
                Parameter::new(ARG_SOURCE_KEY, CLType::Key),
                Parameter::new(ARG_TARGET_KEY, CLType::Key),
                Parameter::new(ARG_TOKEN_ID, CLType::U64),
            ],
            CLType::Unit,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_APPROVE,
            vec![
                Parameter::new(ARG_SPENDER, CLType::Key),
                Parameter::new(ARG_TOKEN_ID, CLType::U64),
            ],
            CLType::Unit,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_GET_APPROVED,
            vec![Parameter::new(ARG_TOKEN_ID, CLType::U64)],
            CLType::Option(Box::new(CLType::Key)),
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_BALANCE_OF,
            vec![Parameter::new(ARG_TOKEN_OWNER, CLType::Key)],
            CLType::U64,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_OWNER_OF,
            vec![Parameter::new(ARG_TOKEN_ID, CLType::U64)],
            CLType::Key,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_LOAD_MINTERS,
            vec![Parameter::new(
                ARG_MINTERS,
                CLType::List(Box::new(CLType::Key)),
            )],
            CLType::U64,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_WITHDRAW,
            vec![],
            CLType::U512,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_TOTAL_SUPPLY,
            vec![],
            CLType::U64,
        ));

        entry_points.add_entry_point(public_entry_point(
            ENTRY_POINT_COLLECTION_INFO,
            vec![],
            CLType::String,
        ));

        entry_points
    };

    let named_keys = {
        let mut named_keys = NamedKeys::new();
        named_keys.insert(INSTALLER.to_string(), runtime::get_caller().into());
        named_keys
    };

    storage::new_contract(
        entry_points,
        Some(named_keys),
        Some(HASH_KEY_NAME.to_string()),
        Some(ACCESS_KEY_NAME.to_string()),
    )
}

#[no_mangle]
pub extern "C" fn call() {
    let collection_name: String = get_named_arg_with_user_errors(
        ARG_COLLECTION_NAME,
        FlamingoError::MissingCollectionName,
        FlamingoError::InvalidCollectionName,
    )
    .unwrap_or_revert();

    let collection_symbol: String = get_named_arg_with_user_errors(
        ARG_COLLECTION_SYMBOL,
        FlamingoError::MissingCollectionSymbol,
        FlamingoError::InvalidCollectionSymbol,
    )
    .unwrap_or_revert();

    let router: Key = get_named_arg_with_user_errors(
        ARG_ROUTER,
        FlamingoError::MissingRouter,
        FlamingoError::InvalidRouter,
    )
    .unwrap_or_revert();

    let max_token_id: u64 = get_named_arg_with_user_errors(
        ARG_MAX_TOKEN_ID,
        FlamingoError::MissingMaxTokenId,
        FlamingoError::InvalidMaxTokenId,
    )
    .unwrap_or_revert();

    let token_price: U512 = get_named_arg_with_user_errors(
        ARG_TOKEN_PRICE,
        FlamingoError::MissingTokenPrice,
        FlamingoError::InvalidTokenPrice,
    )
    .unwrap_or_revert();

    let whitelist: Vec<Key> = get_optional_named_arg_with_user_errors(
        ARG_WHITELIST,
        FlamingoError::InvalidWhitelist,
    )
    .unwrap_or_default();

    let bridge_reserve: u64 = get_optional_named_arg_with_user_errors(
        ARG_BRIDGE_RESERVE,
        FlamingoError::InvalidBridgeReserve,
    )
    .unwrap_or(0u64);

    let (contract_hash, contract_version) = store();

    // Store contract_hash and contract_version under the keys CONTRACT_NAME and CONTRACT_VERSION
    runtime::put_key(CONTRACT_NAME, contract_hash.into());
    runtime::put_key(CONTRACT_VERSION, storage::new_uref(contract_version).into());

    // Call contract to initialize it
    runtime::call_contract::<()>(
        contract_hash,
        ENTRY_POINT_INIT,
        runtime_args! {
             ARG_COLLECTION_NAME => collection_name,
             ARG_COLLECTION_SYMBOL => collection_symbol,
             ARG_ROUTER => router,
             ARG_MAX_TOKEN_ID => max_token_id,
             ARG_TOKEN_PRICE => token_price,
             ARG_WHITELIST => whitelist,
             ARG_BRIDGE_RESERVE => bridge_reserve,
        },
    );
}
