use soroban_sdk::contracterror;

/// Error codes shared by the seed sale and the seed factory.
///
/// Codes are grouped: 1-9 initialization and authorization, 10-19 parameter
/// validation, 20-29 class registry and allowlist, 30-49 lifecycle gates,
/// 50-59 amounts and balances.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SeedError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller holds none of the roles allowed to run the operation.
    Unauthorized = 3,

    InvalidArrayLength = 10,
    IdenticalAddresses = 11,
    ZeroAddress = 12,
    InvalidCaps = 13,
    InvalidTime = 14,
    TipTooHigh = 15,
    InvalidPrice = 16,
    InvalidMasterCopy = 17,
    MasterCopyNotSet = 18,
    /// A token reports more decimals than an amount can be scaled by.
    InvalidDecimals = 19,

    InvalidClassId = 20,
    TooManyClasses = 21,
    BatchTooLarge = 22,
    ArrayLengthMismatch = 23,
    NotModifiable = 24,
    NotPermissioned = 25,
    NotAllowlisted = 26,

    SaleNotStarted = 30,
    SaleEnded = 31,
    SaleClosed = 32,
    SalePaused = 33,
    NotPaused = 34,
    AlreadyPaused = 35,
    AlreadyClosed = 36,
    MaximumReached = 37,
    SaleNotEnded = 38,
    SaleStillLive = 39,
    SaleNotFunded = 40,
    SoftCapNotReached = 41,
    SoftCapReached = 42,

    ZeroAmount = 50,
    IndividualCapExceeded = 51,
    ClassCapReached = 52,
    NothingClaimable = 53,
    ExceedsClaimable = 54,
    NothingToRetrieve = 55,
    MathOverflow = 56,
}
