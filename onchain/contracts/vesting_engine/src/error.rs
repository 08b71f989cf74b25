use soroban_sdk::contracterror;

/// Every externally distinguishable failure the engine can return.
///
/// Each entry point fails atomically with exactly one of these — no partial
/// state ever survives a returned `Err`, and nothing here is retried
/// automatically.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VestingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    DecimalsError = 3,
    InsufficientTokensInContract = 4,
    InsufficientReleasableTokens = 5,
    InvalidSchedule = 6,
    InvalidDuration = 7,
    InvalidAmount = 8,
    InvalidSlicePeriod = 9,
    InvalidStart = 10,
    DurationShorterThanCliff = 11,
    NotRevokable = 12,
    Unauthorized = 13,
    ScheduleWasRevoked = 14,
    NotSupported = 15,
    InvalidAddress = 16,
    InvalidProof = 17,
    AlreadyClaimed = 18,
    Paused = 19,
    ReentrantCall = 20,
    AdminTransferFailed = 21,
    MerkleGateDisabled = 22,
    PurchasingDisabled = 23,
    InvalidPrice = 24,
}
