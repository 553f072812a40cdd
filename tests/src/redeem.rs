use casper_engine_test_support::{InMemoryWasmTestBuilder, DEFAULT_ACCOUNT_ADDR};
use casper_execution_engine::core::engine_state::ExecuteRequest;
use casper_types::{account::AccountHash, runtime_args, Key, RuntimeArgs};
use flamingo::{
    constants::{ARG_TOKEN_OWNER, ENTRY_POINT_REDEEM, TOKEN_OWNERS, WHITELIST},
    error::FlamingoError,
    ledger,
};

use crate::utility::{
    constants::{
        ACCOUNT_BUYER, ACCOUNT_OUTSIDER, ACCOUNT_ROUTER, BRIDGE_RESERVE, FLAMINGO_CONTRACT_WASM,
    },
    installer_request_builder::InstallerRequestBuilder,
    support,
};

fn redeem_request(
    builder: &InMemoryWasmTestBuilder,
    caller: AccountHash,
    token_owner: Key,
) -> ExecuteRequest {
    support::contract_call(
        builder,
        caller,
        ENTRY_POINT_REDEEM,
        runtime_args! {
            ARG_TOKEN_OWNER => token_owner,
        },
    )
}

fn redemption_status(builder: &InMemoryWasmTestBuilder, key: Key) -> Option<bool> {
    let contract_key = support::get_flamingo_contract_key(builder);
    support::get_optional_dictionary_value(
        builder,
        &contract_key,
        WHITELIST,
        &ledger::key_item(&key).unwrap(),
    )
}

#[test]
fn whitelisted_account_should_redeem_one_free_token() {
    let mut builder = support::setup_open_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let contract_key = support::get_flamingo_contract_key(&builder);
    let buyer = support::account_hash_for(ACCOUNT_BUYER);

    let request = redeem_request(&builder, buyer, Key::Account(buyer));
    builder.exec(request).expect_success().commit();

    let owner: Key = support::get_dictionary_value_from_key(
        &builder,
        &contract_key,
        TOKEN_OWNERS,
        &BRIDGE_RESERVE.to_string(),
    );
    assert_eq!(owner, Key::Account(buyer));
    assert_eq!(support::token_count(&builder, Key::Account(buyer)), 1);
    assert_eq!(redemption_status(&builder, Key::Account(buyer)), Some(true));
}

#[test]
fn should_reject_redeem_for_key_outside_whitelist() {
    let mut builder = support::setup_open_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let outsider = support::account_hash_for(ACCOUNT_OUTSIDER);

    let request = redeem_request(&builder, outsider, Key::Account(outsider));
    support::exec_expecting_error(
        &mut builder,
        request,
        FlamingoError::RedemptionIneligible,
        "the outsider was never whitelisted",
    );
    assert_eq!(redemption_status(&builder, Key::Account(outsider)), None);
}

#[test]
fn should_reject_a_second_redeem() {
    let mut builder = support::setup_open_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let buyer = support::account_hash_for(ACCOUNT_BUYER);

    let request = redeem_request(&builder, buyer, Key::Account(buyer));
    builder.exec(request).expect_success().commit();

    let request = redeem_request(&builder, buyer, Key::Account(buyer));
    support::exec_expecting_error(
        &mut builder,
        request,
        FlamingoError::RedemptionIneligible,
        "each whitelisted key redeems once",
    );
    assert_eq!(support::token_count(&builder, Key::Account(buyer)), 1);
}

#[test]
fn redeem_should_check_the_recipient_not_the_caller() {
    let mut builder = support::setup_open_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let buyer = support::account_hash_for(ACCOUNT_BUYER);
    let router = support::account_hash_for(ACCOUNT_ROUTER);
    assert_eq!(redemption_status(&builder, Key::Account(router)), None);

    // The router is not whitelisted itself and redeems on the buyer's behalf.
    let request = redeem_request(&builder, router, Key::Account(buyer));
    builder.exec(request).expect_success().commit();

    assert_eq!(support::token_count(&builder, Key::Account(buyer)), 1);
    assert_eq!(
        support::token_count(&builder, Key::Account(router)),
        BRIDGE_RESERVE,
        "the router should not gain a token"
    );
    assert_eq!(redemption_status(&builder, Key::Account(buyer)), Some(true));
    assert_eq!(redemption_status(&builder, Key::Account(router)), None);

    let request = redeem_request(&builder, buyer, Key::Account(buyer));
    support::exec_expecting_error(
        &mut builder,
        request,
        FlamingoError::RedemptionIneligible,
        "the buyer's redemption was spent by the router",
    );
}

#[test]
fn should_reject_redeem_while_purchases_are_paused() {
    let mut builder = support::setup_collection(InstallerRequestBuilder::new(
        *DEFAULT_ACCOUNT_ADDR,
        FLAMINGO_CONTRACT_WASM,
    ));
    let buyer = support::account_hash_for(ACCOUNT_BUYER);

    let request = redeem_request(&builder, buyer, Key::Account(buyer));
    support::exec_expecting_error(
        &mut builder,
        request,
        FlamingoError::PurchasesPaused,
        "redemption waits for purchases to open",
    );
    assert_eq!(redemption_status(&builder, Key::Account(buyer)), Some(false));
}

#[test]
fn only_the_installed_whitelist_should_redeem() {
    let outsider = support::account_hash_for(ACCOUNT_OUTSIDER);
    let buyer = support::account_hash_for(ACCOUNT_BUYER);
    let mut builder = support::setup_open_collection(
        InstallerRequestBuilder::new(*DEFAULT_ACCOUNT_ADDR, FLAMINGO_CONTRACT_WASM)
            .with_whitelist(vec![Key::Account(outsider)]),
    );

    let request = redeem_request(&builder, outsider, Key::Account(outsider));
    builder.exec(request).expect_success().commit();
    assert_eq!(support::token_count(&builder, Key::Account(outsider)), 1);

    let request = redeem_request(&builder, buyer, Key::Account(buyer));
    support::exec_expecting_error(
        &mut builder,
        request,
        FlamingoError::RedemptionIneligible,
        "the buyer is not on this whitelist",
    );
}
