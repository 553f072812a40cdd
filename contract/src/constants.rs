pub const ARG_COLLECTION_NAME: &str = "collection_name";
pub const ARG_COLLECTION_SYMBOL: &str = "collection_symbol";
pub const ARG_ROUTER: &str = "router";
pub const ARG_MAX_TOKEN_ID: &str = "max_token_id";
pub const ARG_TOKEN_PRICE: &str = "token_price";
pub const ARG_WHITELIST: &str = "whitelist";
pub const ARG_BRIDGE_RESERVE: &str = "bridge_reserve";

pub const ARG_TOKEN_ID: &str = "token_id";
pub const ARG_TOKEN_OWNER: &str = "token_owner";
pub const ARG_SOURCE_KEY: &str = "source_key";
pub const ARG_TARGET_KEY: &str = "target_key";
pub const ARG_SPENDER: &str = "spender";
pub const ARG_BASE_URI: &str = "base_uri";
pub const ARG_MINTERS: &str = "minters";
pub const ARG_AMOUNT: &str = "amount";
pub const ARG_PURSE: &str = "purse";

pub const INSTALLER: &str = "installer";
pub const CONTRACT_NAME: &str = "flamingo_contract";
pub const HASH_KEY_NAME: &str = "flamingo_contract_package";
pub const ACCESS_KEY_NAME: &str = "flamingo_contract_package_access";
pub const CONTRACT_VERSION: &str = "contract_version";
pub const CONTRACT_PURSE: &str = "contract_purse";

// Named values held by the contract.
pub const ADMIN: &str = "admin";
pub const COLLECTION_NAME: &str = "collection_name";
pub const COLLECTION_SYMBOL: &str = "collection_symbol";
pub const ROUTER: &str = "router";
pub const MAX_TOKEN_ID: &str = "max_token_id";
pub const TOKEN_PRICE: &str = "token_price";
pub const BRIDGE_RESERVE: &str = "bridge_reserve";
pub const BASE_URI: &str = "base_uri";
pub const PURCHASES_PAUSED: &str = "purchases_paused";
pub const NUMBER_OF_MINTED_TOKENS: &str = "number_of_minted_tokens";
pub const COLLECTED_FUNDS: &str = "collected_funds";

// Dictionaries.
pub const TOKEN_OWNERS: &str = "token_owners";
pub const TOKEN_COUNTS: &str = "balances";
pub const WHITELIST: &str = "whitelist";
pub const APPROVED_FOR_TRANSFER: &str = "approved_for_transfer";

pub const TOKEN_URI_PATH: &str = "/nfts/";

pub const ENTRY_POINT_INIT: &str = "init";
pub const ENTRY_POINT_MINT: &str = "mint";
pub const ENTRY_POINT_REDEEM: &str = "redeem";
pub const ENTRY_POINT_PAUSE_MINT: &str = "pause_mint";
pub const ENTRY_POINT_SET_BASE_URI: &str = "set_base_uri";
pub const ENTRY_POINT_TOKEN_URI: &str = "token_uri";
pub const ENTRY_POINT_TRANSFER: &str = "transfer";
pub const ENTRY_POINT_APPROVE: &str = "approve";
pub const ENTRY_POINT_GET_APPROVED: &str = "get_approved";
pub const ENTRY_POINT_BALANCE_OF: &str = "balance_of";
pub const ENTRY_POINT_OWNER_OF: &str = "owner_of";
pub const ENTRY_POINT_LOAD_MINTERS: &str = "load_minters";
pub const ENTRY_POINT_WITHDRAW: &str = "withdraw";
pub const ENTRY_POINT_TOTAL_SUPPLY: &str = "total_supply";
pub const ENTRY_POINT_COLLECTION_INFO: &str = "collection_info";
