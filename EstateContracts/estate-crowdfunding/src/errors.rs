use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParameters = 3,
    CampaignNotFound = 4,
    CampaignClosed = 5,
    BelowMinimumInvestment = 6,
    ExceedsFundingTarget = 7,
    Unauthorized = 8,
    NotYetEligibleForWithdrawal = 9,
    AlreadyFinalized = 10,
    RewardMintFailed = 11,
    ArithmeticOverflow = 12,
}
