use crate::campaign::{get_campaign, save_campaign};
use crate::config::get_config;
use crate::errors::Error;
use crate::events::{self, ContributionMade};
use crate::rewards::{mint_reward, reward_for};
use crate::status::{allocation_for, is_ended};
use crate::types::*;
use soroban_sdk::{log, token, Address, Env};

/// Records a contribution and mints its reward, returning the contributor's
/// new cumulative amount for the campaign.
///
/// All checks run before the first write. The payment pull, the mint and both
/// ledger writes happen in the same invocation, so a failure in any of them
/// leaves nothing behind.
pub fn contribute(
    env: &Env,
    campaign_id: u32,
    contributor: Address,
    amount: i128,
) -> Result<i128, Error> {
    contributor.require_auth();

    let mut campaign = get_campaign(env, campaign_id)?;

    // Gates the single call, not the contributor's running total
    if amount <= 0 || amount < campaign.min_investment {
        return Err(Error::BelowMinimumInvestment);
    }

    if campaign.finalized || is_ended(&campaign, env.ledger().timestamp()) {
        return Err(Error::CampaignClosed);
    }

    let new_raised = campaign
        .raised_amount
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if new_raised > campaign.total_value {
        return Err(Error::ExceedsFundingTarget);
    }

    let new_contribution = get_contribution_amount(env, campaign_id, &contributor)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let reward = reward_for(amount)?;
    let config = get_config(env)?;

    token::Client::new(env, &config.payment_token).transfer(
        &contributor,
        &env.current_contract_address(),
        &amount,
    );
    mint_reward(env, &config.reward_token, &contributor, reward)?;

    campaign.raised_amount = new_raised;
    save_campaign(env, &campaign);
    env.storage().persistent().set(
        &DataKey::Contribution(campaign_id, contributor.clone()),
        &new_contribution,
    );

    log!(
        env,
        "contribution campaign: {}, amount: {}, raised: {}",
        campaign_id,
        amount,
        new_raised
    );

    events::contribution_made(
        env,
        ContributionMade {
            campaign_id,
            contributor,
            amount,
        },
    );

    Ok(new_contribution)
}

pub fn get_contribution(env: &Env, campaign_id: u32, contributor: Address) -> Result<i128, Error> {
    get_campaign(env, campaign_id)?;
    Ok(get_contribution_amount(env, campaign_id, &contributor))
}

pub fn get_token_allocation(
    env: &Env,
    campaign_id: u32,
    contributor: Address,
) -> Result<u64, Error> {
    let campaign = get_campaign(env, campaign_id)?;
    allocation_for(
        env,
        &campaign,
        get_contribution_amount(env, campaign_id, &contributor),
    )
}

fn get_contribution_amount(env: &Env, campaign_id: u32, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0i128)
}
