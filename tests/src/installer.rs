use casper_engine_test_support::DEFAULT_ACCOUNT_ADDR;
use casper_types::{runtime_args, CLValue, Key, RuntimeArgs, U512};
use flamingo::{
    constants::{
        ADMIN, ARG_BRIDGE_RESERVE, ARG_COLLECTION_NAME, ARG_COLLECTION_SYMBOL, ARG_MAX_TOKEN_ID,
        ARG_ROUTER, ARG_TOKEN_OWNER, ARG_TOKEN_PRICE, ARG_WHITELIST, COLLECTED_FUNDS,
        COLLECTION_NAME as COLLECTION_NAME_KEY, COLLECTION_SYMBOL as COLLECTION_SYMBOL_KEY,
        ENTRY_POINT_COLLECTION_INFO, ENTRY_POINT_INIT, ENTRY_POINT_REDEEM,
        ENTRY_POINT_TOTAL_SUPPLY, NUMBER_OF_MINTED_TOKENS, PURCHASES_PAUSED, TOKEN_PRICE, WHITELIST,
    },
    error::FlamingoError,
    ledger,
};

use crate::utility::{
    constants::{
        collection_price, ACCOUNT_BUYER, ACCOUNT_ROUTER, BRIDGE_RESERVE, COLLECTION_NAME,
        COLLECTION_SYMBOL, FLAMINGO_CONTRACT_WASM, MAX_TOKEN_ID,
    },
    installer_request_builder::InstallerRequestBuilder,
    support::{self, FIXTURE_MINTERS},
};

#[test]
fn should_install_collection() {
    let builder = support::setup_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let contract_key = support::get_flamingo_contract_key(&builder);
    let buyer = Key::Account(support::account_hash_for(ACCOUNT_BUYER));
    let router = Key::Account(support::account_hash_for(ACCOUNT_ROUTER));

    let name: String =
        support::query_stored_value(&builder, contract_key, vec![COLLECTION_NAME_KEY.to_string()]);
    assert_eq!(name, COLLECTION_NAME);

    let symbol: String = support::query_stored_value(
        &builder,
        contract_key,
        vec![COLLECTION_SYMBOL_KEY.to_string()],
    );
    assert_eq!(symbol, COLLECTION_SYMBOL);

    let admin: Key = support::query_stored_value(&builder, contract_key, vec![ADMIN.to_string()]);
    assert_eq!(admin, support::admin(), "the installing account is the admin");

    let price: U512 =
        support::query_stored_value(&builder, contract_key, vec![TOKEN_PRICE.to_string()]);
    assert_eq!(price, collection_price());

    let paused: bool =
        support::query_stored_value(&builder, contract_key, vec![PURCHASES_PAUSED.to_string()]);
    assert!(paused, "purchases should start out paused");

    let minted: u64 = support::query_stored_value(
        &builder,
        contract_key,
        vec![NUMBER_OF_MINTED_TOKENS.to_string()],
    );
    assert_eq!(minted, BRIDGE_RESERVE, "the bridge reserve counts as minted supply");

    let collected: U512 =
        support::query_stored_value(&builder, contract_key, vec![COLLECTED_FUNDS.to_string()]);
    assert_eq!(collected, U512::zero());

    assert_eq!(support::token_count(&builder, router), BRIDGE_RESERVE);
    assert_eq!(support::token_count(&builder, buyer), 0);
    assert_eq!(support::get_contract_purse_balance(&builder), U512::zero());

    for minter in FIXTURE_MINTERS.iter().chain([buyer].iter()) {
        let redeemed: bool = support::get_dictionary_value_from_key(
            &builder,
            &contract_key,
            WHITELIST,
            &ledger::key_item(minter).unwrap(),
        );
        assert!(!redeemed, "{} should start out unredeemed", minter);
    }
}

#[test]
fn should_report_collection_info_and_total_supply() {
    let mut builder = support::setup_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let buyer = support::account_hash_for(ACCOUNT_BUYER);

    let info: String = support::call_entry_point_with_ret(
        &mut builder,
        buyer,
        ENTRY_POINT_COLLECTION_INFO,
        runtime_args! {},
    );
    let info: serde_json::Value =
        serde_json::from_str(&info).expect("collection info must be json");
    assert_eq!(info["name"], COLLECTION_NAME);
    assert_eq!(info["symbol"], COLLECTION_SYMBOL);
    assert_eq!(info["max_token_id"], MAX_TOKEN_ID);
    assert_eq!(info["price"], collection_price().to_string());
    assert_eq!(info["minted"], BRIDGE_RESERVE);
    assert_eq!(info["base_uri"], "");
    assert_eq!(info["purchases_paused"], true);

    let total_supply: u64 = support::call_entry_point_with_ret(
        &mut builder,
        buyer,
        ENTRY_POINT_TOTAL_SUPPLY,
        runtime_args! {},
    );
    assert_eq!(total_supply, BRIDGE_RESERVE);
}

#[test]
fn should_reject_bridge_reserve_above_max_token_id() {
    let install_request_builder =
        InstallerRequestBuilder::new(*DEFAULT_ACCOUNT_ADDR, FLAMINGO_CONTRACT_WASM)
            .with_max_token_id(10)
            .with_bridge_reserve(11);

    support::assert_expected_invalid_installer_request(
        install_request_builder,
        FlamingoError::InvalidBridgeReserve,
        "the reserve must fit under max_token_id",
    );
}

#[test]
fn should_reject_invalid_collection_name() {
    let install_request_builder =
        InstallerRequestBuilder::new(*DEFAULT_ACCOUNT_ADDR, FLAMINGO_CONTRACT_WASM)
            .with_invalid_collection_name(
                CLValue::from_t::<u64>(0).expect("expected CLValue"),
            );

    support::assert_expected_invalid_installer_request(
        install_request_builder,
        FlamingoError::InvalidCollectionName,
        "collection_name must be a string",
    );
}

#[test]
fn should_reject_router_that_cannot_hold_tokens() {
    let install_request_builder =
        InstallerRequestBuilder::new(*DEFAULT_ACCOUNT_ADDR, FLAMINGO_CONTRACT_WASM)
            .with_router(Key::Balance([7u8; 32]));

    support::assert_expected_invalid_installer_request(
        install_request_builder,
        FlamingoError::InvalidRouter,
        "the router must be an account or a contract",
    );
}

#[test]
fn should_install_without_whitelist_or_bridge_reserve() {
    let mut builder = support::setup_collection(
        InstallerRequestBuilder::new(*DEFAULT_ACCOUNT_ADDR, FLAMINGO_CONTRACT_WASM)
            .without_optional_args(),
    );
    let contract_key = support::get_flamingo_contract_key(&builder);
    let buyer = support::account_hash_for(ACCOUNT_BUYER);

    let minted: u64 = support::query_stored_value(
        &builder,
        contract_key,
        vec![NUMBER_OF_MINTED_TOKENS.to_string()],
    );
    assert_eq!(minted, 0, "no reserve means nothing is minted at install");
    assert_eq!(
        support::token_count(&builder, Key::Account(support::account_hash_for(ACCOUNT_ROUTER))),
        0
    );

    support::open_purchases(&mut builder);
    let redeem_request = support::contract_call(
        &builder,
        buyer,
        ENTRY_POINT_REDEEM,
        runtime_args! {
            ARG_TOKEN_OWNER => Key::Account(buyer),
        },
    );
    support::exec_expecting_error(
        &mut builder,
        redeem_request,
        FlamingoError::RedemptionIneligible,
        "an empty whitelist admits nobody",
    );
}

#[test]
fn calling_init_a_second_time_should_error() {
    let mut builder = support::setup_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));

    let init_request = support::contract_call(
        &builder,
        *DEFAULT_ACCOUNT_ADDR,
        ENTRY_POINT_INIT,
        runtime_args! {
            ARG_COLLECTION_NAME => COLLECTION_NAME.to_string(),
            ARG_COLLECTION_SYMBOL => COLLECTION_SYMBOL.to_string(),
            ARG_ROUTER => Key::Account(support::account_hash_for(ACCOUNT_ROUTER)),
            ARG_MAX_TOKEN_ID => MAX_TOKEN_ID,
            ARG_TOKEN_PRICE => collection_price(),
            ARG_WHITELIST => Vec::<Key>::new(),
            ARG_BRIDGE_RESERVE => 0u64,
        },
    );
    support::exec_expecting_error(
        &mut builder,
        init_request,
        FlamingoError::ContractAlreadyInitialized,
        "a collection may only be initialized once",
    );
}

#[test]
fn only_installer_should_call_init() {
    let mut builder = support::setup_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));

    let init_request = support::contract_call(
        &builder,
        support::account_hash_for(ACCOUNT_BUYER),
        ENTRY_POINT_INIT,
        runtime_args! {},
    );
    support::exec_expecting_error(
        &mut builder,
        init_request,
        FlamingoError::InvalidAccount,
        "init is reserved for the installing account",
    );
}
