use soroban_sdk::{contracttype, Address, String};

/// Reward units minted per unit of payment token contributed.
pub const REWARD_MULTIPLIER: i128 = 100;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,                     // Config (instance)
    CampaignCount,              // Number of campaigns, also the next id (instance)
    Campaign(u32),              // Campaign ID -> Campaign (persistent)
    Contribution(u32, Address), // (Campaign ID, contributor) -> cumulative amount (persistent)
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub payment_token: Address, // Token contributions are paid in
    pub reward_token: Address,  // Contract exposing mint/balance
}

/// A funding round for one tokenized property.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub owner: Address,
    pub title: String,
    pub location: String,
    pub property_type: String,
    pub description: String,
    pub total_value: i128,    // Funding target
    pub token_supply: u64,    // Allocation units backing the property
    pub min_investment: i128, // Floor for a single contribution
    pub created_at: u64,
    pub deadline: u64, // Ledger timestamp, contributions rejected from here on
    pub raised_amount: i128,
    pub finalized: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyInfo {
    pub title: String,
    pub location: String,
    pub property_type: String,
    pub description: String,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyFinancials {
    pub total_value: i128,
    pub token_supply: u64,
    pub tokens_available: u64,
    pub raised_amount: i128,
    pub min_investment: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropertyStatus {
    pub fully_funded: bool,
    pub ended: bool,
    pub finalized: bool,
}
