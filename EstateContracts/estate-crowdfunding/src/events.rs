use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// Topic shared by every event of this contract.
pub const CAMPAIGN: Symbol = symbol_short!("CAMPAIGN");

pub const CREATED: Symbol = symbol_short!("CREATED");

pub const CONTRIB: Symbol = symbol_short!("CONTRIB");

pub const WITHDRAWN: Symbol = symbol_short!("WITHDRAWN");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u32,
    pub title: String,
    pub total_value: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub campaign_id: u32,
    pub amount: i128,
}

pub fn campaign_created(env: &Env, event: CampaignCreated) {
    env.events().publish((CAMPAIGN, CREATED), event);
}

pub fn contribution_made(env: &Env, event: ContributionMade) {
    env.events()
        .publish((CAMPAIGN, CONTRIB, event.contributor.clone()), event);
}

pub fn funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events().publish((CAMPAIGN, WITHDRAWN), event);
}
