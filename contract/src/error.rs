use core::fmt;

use casper_types::ApiError;

/// Every way a collection call can be rejected.
///
/// On chain the variant is raised as `ApiError::User(code)`; the discriminants are
/// part of the contract interface and must not be renumbered.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlamingoError {
    InvalidAccount = 1,
    MissingInstaller = 2,
    InvalidInstaller = 3,
    UnexpectedKeyVariant = 4,
    InvalidKey = 5,
    FailedToGetArgBytes = 6,
    FailedToCreateDictionary = 7,
    MissingStorageUref = 8,
    InvalidStorageUref = 9,
    InvalidStoredValue = 10,
    FailedToConvertToCLValue = 11,
    ContractAlreadyInitialized = 12,
    MissingCollectionName = 13,
    InvalidCollectionName = 14,
    MissingCollectionSymbol = 15,
    InvalidCollectionSymbol = 16,
    MissingRouter = 17,
    InvalidRouter = 18,
    MissingMaxTokenId = 19,
    InvalidMaxTokenId = 20,
    MissingTokenPrice = 21,
    InvalidTokenPrice = 22,
    MissingWhitelist = 23,
    InvalidWhitelist = 24,
    InvalidBridgeReserve = 25,
    MissingAdmin = 26,
    MissingNumberOfMintedTokens = 27,
    MissingPauseStatus = 28,
    MissingBaseUri = 29,
    InvalidBaseUri = 30,
    MissingCollectedFunds = 31,
    MissingTokenID = 32,
    InvalidTokenID = 33,
    MissingTokenOwner = 34,
    InvalidTokenOwner = 35,
    MissingSourceKey = 36,
    InvalidSourceKey = 37,
    MissingTargetKey = 38,
    InvalidTargetKey = 39,
    MissingSpender = 40,
    InvalidApprovedSpender = 41,
    MissingMinters = 42,
    InvalidMinters = 43,
    MissingAmount = 44,
    InvalidAmount = 45,
    MissingPurse = 46,
    InvalidPurse = 47,
    MissingContractPurse = 48,
    FailedToTransferPayment = 49,
    FailedToWithdraw = 50,
    FailedToSerializeCollectionInfo = 51,
    FatalTokenCountUnderflow = 52,
    InsufficientPayment = 53,
    MintCapReached = 54,
    PurchasesPaused = 55,
    RedemptionIneligible = 56,
    MissingBridgeReserve = 57,
}

impl FlamingoError {
    /// The revert message reported for this error.
    pub fn message(&self) -> &'static str {
        match self {
            FlamingoError::InsufficientPayment => "Must send at least current price for token",
            FlamingoError::MintCapReached => "Must not exceed maximum mint on Fantom",
            FlamingoError::PurchasesPaused => "Purchases must not be paused",
            FlamingoError::RedemptionIneligible => {
                "Address not in Whitelist or Has Already Redeemed"
            }
            FlamingoError::InvalidAccount => "Caller is not allowed to perform this call",
            FlamingoError::ContractAlreadyInitialized => "Collection is already initialized",
            FlamingoError::InvalidBridgeReserve => "Bridge reserve must not exceed max token id",
            FlamingoError::InvalidTokenID => "Token has not been minted",
            FlamingoError::InvalidTokenOwner => "Source key does not own the token",
            FlamingoError::InvalidApprovedSpender => "Owner cannot approve itself",
            FlamingoError::InvalidKey => "Key must be an account or a contract hash",
            FlamingoError::FatalTokenCountUnderflow => "Token count underflow",
            _ => "Collection storage or argument error",
        }
    }
}

impl fmt::Display for FlamingoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<FlamingoError> for ApiError {
    fn from(e: FlamingoError) -> Self {
        ApiError::User(e as u16)
    }
}
