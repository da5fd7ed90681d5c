use crate::errors::Error;
use crate::events::{self, CampaignCreated};
use crate::types::*;
use soroban_sdk::{Address, Env, String};

/// Registers a new campaign and returns its id.
///
/// Ids are handed out sequentially from zero and are never reused.
pub fn create_campaign(
    env: &Env,
    owner: Address,
    title: String,
    location: String,
    property_type: String,
    description: String,
    total_value: i128,
    token_supply: u64,
    min_investment: i128,
    duration_seconds: u64,
) -> Result<u32, Error> {
    owner.require_auth();

    if total_value <= 0
        || min_investment <= 0
        || min_investment > total_value
        || duration_seconds == 0
        || token_supply == 0
    {
        return Err(Error::InvalidParameters);
    }

    let created_at = env.ledger().timestamp();
    let deadline = created_at
        .checked_add(duration_seconds)
        .ok_or(Error::InvalidParameters)?;

    let campaign_id = next_campaign_id(env)?;

    let campaign = Campaign {
        id: campaign_id,
        owner,
        title: title.clone(),
        location,
        property_type,
        description,
        total_value,
        token_supply,
        min_investment,
        created_at,
        deadline,
        raised_amount: 0,
        finalized: false,
    };
    save_campaign(env, &campaign);

    events::campaign_created(
        env,
        CampaignCreated {
            campaign_id,
            title,
            total_value,
            deadline,
        },
    );

    Ok(campaign_id)
}

pub fn get_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn get_property_info(env: &Env, campaign_id: u32) -> Result<PropertyInfo, Error> {
    let campaign = get_campaign(env, campaign_id)?;
    Ok(PropertyInfo {
        title: campaign.title,
        location: campaign.location,
        property_type: campaign.property_type,
        description: campaign.description,
        owner: campaign.owner,
    })
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0u32)
}

// Only the ledger and the withdrawal path call this, after all checks passed.
pub(crate) fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign.id), campaign);
}

fn next_campaign_id(env: &Env) -> Result<u32, Error> {
    let campaign_id = campaign_count(env);
    let next = campaign_id
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    Ok(campaign_id)
}
