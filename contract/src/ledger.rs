//! Collection operations.
//!
//! Every operation checks all of its preconditions before the first write, so a
//! rejected call never leaves partial state behind, whichever host runs it.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use casper_types::{bytesrepr::FromBytes, CLTyped, Key, U512};

use crate::{
    config::{CollectionConfig, CollectionInfo},
    constants::*,
    env::ContractEnv,
    error::FlamingoError,
    events::{Approval, BaseUriSet, Mint, MintersLoaded, PauseToggled, Redeem, Transfer, Withdrawal},
};

/// Dictionary item key for an owner: the hex encoded account or contract hash.
pub fn key_item(key: &Key) -> Result<String, FlamingoError> {
    match key {
        Key::Account(account_hash) => Ok(base16::encode_lower(&account_hash.value())),
        Key::Hash(hash_addr) => Ok(base16::encode_lower(hash_addr)),
        _ => Err(FlamingoError::InvalidKey),
    }
}

fn read<E, T>(env: &E, name: &str, missing: FlamingoError) -> Result<T, FlamingoError>
where
    E: ContractEnv,
    T: CLTyped + FromBytes,
{
    env.named_value(name)?.ok_or(missing)
}

fn only_admin<E: ContractEnv>(env: &E) -> Result<Key, FlamingoError> {
    let admin: Key = read(env, ADMIN, FlamingoError::MissingAdmin)?;
    if env.caller() != admin {
        return Err(FlamingoError::InvalidAccount);
    }
    Ok(admin)
}

fn ensure_purchases_open<E: ContractEnv>(env: &E) -> Result<(), FlamingoError> {
    let paused: bool = read(env, PURCHASES_PAUSED, FlamingoError::MissingPauseStatus)?;
    if paused {
        return Err(FlamingoError::PurchasesPaused);
    }
    Ok(())
}

fn next_token_id<E: ContractEnv>(env: &E) -> Result<u64, FlamingoError> {
    let minted: u64 = read(
        env,
        NUMBER_OF_MINTED_TOKENS,
        FlamingoError::MissingNumberOfMintedTokens,
    )?;
    let max_token_id: u64 = read(env, MAX_TOKEN_ID, FlamingoError::MissingMaxTokenId)?;
    if minted >= max_token_id {
        return Err(FlamingoError::MintCapReached);
    }
    Ok(minted)
}

fn token_count<E: ContractEnv>(env: &E, owner_item: &str) -> Result<u64, FlamingoError> {
    Ok(env
        .dictionary_get::<u64>(TOKEN_COUNTS, owner_item)?
        .unwrap_or_default())
}

// Writes only; callers have already validated the mint.
fn assign_new_token<E: ContractEnv>(
    env: &mut E,
    owner: Key,
    owner_item: &str,
    token_id: u64,
) -> Result<(), FlamingoError> {
    let balance = token_count(env, owner_item)?;
    env.dictionary_put(TOKEN_OWNERS, &token_id.to_string(), owner)?;
    env.dictionary_put(TOKEN_COUNTS, owner_item, balance + 1)?;
    env.set_named_value(NUMBER_OF_MINTED_TOKENS, token_id + 1)
}

pub fn install<E: ContractEnv>(
    env: &mut E,
    admin: Key,
    config: CollectionConfig,
) -> Result<(), FlamingoError> {
    if env.named_value::<String>(COLLECTION_NAME)?.is_some() {
        return Err(FlamingoError::ContractAlreadyInitialized);
    }
    config.validate()?;

    let whitelist_items = config
        .whitelist
        .iter()
        .map(key_item)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| FlamingoError::InvalidWhitelist)?;
    let router_item = key_item(&config.router)?;

    env.set_named_value(ADMIN, admin)?;
    env.set_named_value(COLLECTION_NAME, config.name)?;
    env.set_named_value(COLLECTION_SYMBOL, config.symbol)?;
    env.set_named_value(ROUTER, config.router)?;
    env.set_named_value(MAX_TOKEN_ID, config.max_token_id)?;
    env.set_named_value(TOKEN_PRICE, config.price)?;
    env.set_named_value(BRIDGE_RESERVE, config.bridge_reserve)?;
    env.set_named_value(BASE_URI, String::new())?;
    // Purchases open only once the admin calls `pause_mint`.
    env.set_named_value(PURCHASES_PAUSED, true)?;
    env.set_named_value(NUMBER_OF_MINTED_TOKENS, config.bridge_reserve)?;
    env.set_named_value(COLLECTED_FUNDS, U512::zero())?;

    for dictionary in [TOKEN_OWNERS, TOKEN_COUNTS, WHITELIST, APPROVED_FOR_TRANSFER] {
        env.new_dictionary(dictionary)?;
    }

    for item in &whitelist_items {
        env.dictionary_put(WHITELIST, item, false)?;
    }

    // The reserve is held by the router without per-token owner records.
    if config.bridge_reserve > 0 {
        env.dictionary_put(TOKEN_COUNTS, &router_item, config.bridge_reserve)?;
    }

    Ok(())
}

/// Paid mint of the next token id to `to`. Returns the id.
pub fn mint<E: ContractEnv>(env: &mut E, to: Key, payment: U512) -> Result<u64, FlamingoError> {
    ensure_purchases_open(env)?;
    let token_id = next_token_id(env)?;

    let price: U512 = read(env, TOKEN_PRICE, FlamingoError::MissingTokenPrice)?;
    if payment < price {
        return Err(FlamingoError::InsufficientPayment);
    }

    let owner_item = key_item(&to)?;
    let collected: U512 = read(env, COLLECTED_FUNDS, FlamingoError::MissingCollectedFunds)?;
    let collected = collected
        .checked_add(payment)
        .ok_or(FlamingoError::InvalidAmount)?;

    assign_new_token(env, to, &owner_item, token_id)?;
    env.set_named_value(COLLECTED_FUNDS, collected)?;
    env.emit(Mint::new(to, token_id, payment));
    Ok(token_id)
}

/// Free mint for a whitelisted key, once per key. Returns the id.
///
/// A key outside the whitelist and a key that already redeemed are reported with
/// the same error.
pub fn redeem<E: ContractEnv>(env: &mut E, to: Key) -> Result<u64, FlamingoError> {
    ensure_purchases_open(env)?;

    let owner_item = key_item(&to).map_err(|_| FlamingoError::RedemptionIneligible)?;
    match env.dictionary_get::<bool>(WHITELIST, &owner_item)? {
        Some(false) => {}
        Some(true) | None => return Err(FlamingoError::RedemptionIneligible),
    }

    let token_id = next_token_id(env)?;

    env.dictionary_put(WHITELIST, &owner_item, true)?;
    assign_new_token(env, to, &owner_item, token_id)?;
    env.emit(Redeem::new(to, token_id));
    Ok(token_id)
}

/// Flips the purchases-paused flag and returns its new value.
pub fn pause_mint<E: ContractEnv>(env: &mut E) -> Result<bool, FlamingoError> {
    only_admin(env)?;
    let paused: bool = read(env, PURCHASES_PAUSED, FlamingoError::MissingPauseStatus)?;
    let paused = !paused;
    env.set_named_value(PURCHASES_PAUSED, paused)?;
    env.emit(PauseToggled::new(paused));
    Ok(paused)
}

pub fn set_base_uri<E: ContractEnv>(env: &mut E, base_uri: String) -> Result<(), FlamingoError> {
    only_admin(env)?;
    env.set_named_value(BASE_URI, base_uri.clone())?;
    env.emit(BaseUriSet::new(base_uri));
    Ok(())
}

/// `{base_uri}/nfts/{token_id}`. The token does not have to exist.
pub fn token_uri<E: ContractEnv>(env: &E, token_id: u64) -> Result<String, FlamingoError> {
    let base_uri: String = read(env, BASE_URI, FlamingoError::MissingBaseUri)?;
    Ok(format!("{}{}{}", base_uri, TOKEN_URI_PATH, token_id))
}

pub fn owner_of<E: ContractEnv>(env: &E, token_id: u64) -> Result<Key, FlamingoError> {
    let minted: u64 = read(
        env,
        NUMBER_OF_MINTED_TOKENS,
        FlamingoError::MissingNumberOfMintedTokens,
    )?;
    if token_id >= minted {
        return Err(FlamingoError::InvalidTokenID);
    }

    if let Some(owner) = env.dictionary_get::<Key>(TOKEN_OWNERS, &token_id.to_string())? {
        return Ok(owner);
    }

    let bridge_reserve: u64 = read(env, BRIDGE_RESERVE, FlamingoError::MissingBridgeReserve)?;
    if token_id < bridge_reserve {
        read(env, ROUTER, FlamingoError::MissingRouter)
    } else {
        Err(FlamingoError::MissingTokenOwner)
    }
}

pub fn balance_of<E: ContractEnv>(env: &E, owner: &Key) -> Result<u64, FlamingoError> {
    token_count(env, &key_item(owner)?)
}

/// Moves `token_id` from `from` to `to`. The caller must be the owner or the
/// token's approved spender.
pub fn transfer<E: ContractEnv>(
    env: &mut E,
    from: Key,
    to: Key,
    token_id: u64,
) -> Result<(), FlamingoError> {
    let owner = owner_of(env, token_id)?;
    if owner != from {
        return Err(FlamingoError::InvalidTokenOwner);
    }

    let token_item = token_id.to_string();
    let approved = env
        .dictionary_get::<Option<Key>>(APPROVED_FOR_TRANSFER, &token_item)?
        .flatten();

    let caller = env.caller();
    let spender = if caller == owner {
        None
    } else if approved == Some(caller) {
        Some(caller)
    } else {
        return Err(FlamingoError::InvalidAccount);
    };

    let from_item = key_item(&from)?;
    let to_item = key_item(&to)?;

    if from_item != to_item {
        let from_count = token_count(env, &from_item)?
            .checked_sub(1)
            .ok_or(FlamingoError::FatalTokenCountUnderflow)?;
        let to_count = token_count(env, &to_item)? + 1;
        env.dictionary_put(TOKEN_COUNTS, &from_item, from_count)?;
        env.dictionary_put(TOKEN_COUNTS, &to_item, to_count)?;
    }

    env.dictionary_put(TOKEN_OWNERS, &token_item, to)?;
    if approved.is_some() {
        env.dictionary_put(APPROVED_FOR_TRANSFER, &token_item, Option::<Key>::None)?;
    }

    env.emit(Transfer::new(owner, spender, to, token_id));
    Ok(())
}

pub fn approve<E: ContractEnv>(
    env: &mut E,
    spender: Key,
    token_id: u64,
) -> Result<(), FlamingoError> {
    let owner = owner_of(env, token_id)?;
    if env.caller() != owner {
        return Err(FlamingoError::InvalidAccount);
    }
    if spender == owner {
        return Err(FlamingoError::InvalidApprovedSpender);
    }
    key_item(&spender)?;

    env.dictionary_put(APPROVED_FOR_TRANSFER, &token_id.to_string(), Some(spender))?;
    env.emit(Approval::new(owner, spender, token_id));
    Ok(())
}

pub fn get_approved<E: ContractEnv>(env: &E, token_id: u64) -> Result<Option<Key>, FlamingoError> {
    owner_of(env, token_id)?;
    Ok(env
        .dictionary_get::<Option<Key>>(APPROVED_FOR_TRANSFER, &token_id.to_string())?
        .flatten())
}

/// Adds keys to the whitelist. Keys already present keep their redemption flag.
/// Returns the number of keys that were new.
pub fn load_minters<E: ContractEnv>(env: &mut E, minters: Vec<Key>) -> Result<u64, FlamingoError> {
    only_admin(env)?;
    let items = minters
        .iter()
        .map(key_item)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| FlamingoError::InvalidMinters)?;

    let mut added = 0u64;
    for item in &items {
        if env.dictionary_get::<bool>(WHITELIST, item)?.is_none() {
            env.dictionary_put(WHITELIST, item, false)?;
            added += 1;
        }
    }

    env.emit(MintersLoaded::new(added));
    Ok(added)
}

/// `None` when `key` is not whitelisted, otherwise whether it has redeemed.
pub fn redemption_status<E: ContractEnv>(env: &E, key: &Key) -> Result<Option<bool>, FlamingoError> {
    match key_item(key) {
        Ok(item) => env.dictionary_get::<bool>(WHITELIST, &item),
        Err(_) => Ok(None),
    }
}

/// Drains the collected payments. Returns the amount owed to the admin.
pub fn withdraw<E: ContractEnv>(env: &mut E) -> Result<U512, FlamingoError> {
    let admin = only_admin(env)?;
    let collected: U512 = read(env, COLLECTED_FUNDS, FlamingoError::MissingCollectedFunds)?;
    env.set_named_value(COLLECTED_FUNDS, U512::zero())?;
    env.emit(Withdrawal::new(admin, collected));
    Ok(collected)
}

pub fn total_supply<E: ContractEnv>(env: &E) -> Result<u64, FlamingoError> {
    read(
        env,
        NUMBER_OF_MINTED_TOKENS,
        FlamingoError::MissingNumberOfMintedTokens,
    )
}

pub fn collection_info<E: ContractEnv>(env: &E) -> Result<CollectionInfo, FlamingoError> {
    let router: Key = read(env, ROUTER, FlamingoError::MissingRouter)?;
    let price: U512 = read(env, TOKEN_PRICE, FlamingoError::MissingTokenPrice)?;
    Ok(CollectionInfo {
        name: read(env, COLLECTION_NAME, FlamingoError::MissingCollectionName)?,
        symbol: read(env, COLLECTION_SYMBOL, FlamingoError::MissingCollectionSymbol)?,
        router: router.to_formatted_string(),
        max_token_id: read(env, MAX_TOKEN_ID, FlamingoError::MissingMaxTokenId)?,
        price: price.to_string(),
        bridge_reserve: read(env, BRIDGE_RESERVE, FlamingoError::MissingBridgeReserve)?,
        minted: total_supply(env)?,
        base_uri: read(env, BASE_URI, FlamingoError::MissingBaseUri)?,
        purchases_paused: read(env, PURCHASES_PAUSED, FlamingoError::MissingPauseStatus)?,
    })
}
