//! Status derived from a campaign record and the ledger clock.
//!
//! Nothing here is persisted except `finalized`, which the withdrawal path
//! owns. Every flag is recomputed on read so it can never drift from the
//! amounts and timestamps it depends on.

use crate::campaign::get_campaign;
use crate::errors::Error;
use crate::types::{Campaign, PropertyFinancials, PropertyStatus};
use soroban_sdk::{Env, I256};

pub fn is_fully_funded(campaign: &Campaign) -> bool {
    campaign.raised_amount >= campaign.total_value
}

pub fn is_ended(campaign: &Campaign, now: u64) -> bool {
    is_fully_funded(campaign) || now >= campaign.deadline
}

pub fn status_of(campaign: &Campaign, now: u64) -> PropertyStatus {
    PropertyStatus {
        fully_funded: is_fully_funded(campaign),
        ended: is_ended(campaign, now),
        finalized: campaign.finalized,
    }
}

/// Allocation units covered by `amount` of the campaign's target, rounded down.
///
/// The product is taken in 256 bits. With `amount <= total_value` the quotient
/// never exceeds `token_supply`, so it always fits back into a `u64`.
pub fn allocation_for(env: &Env, campaign: &Campaign, amount: i128) -> Result<u64, Error> {
    let units = I256::from_i128(env, amount)
        .mul(&I256::from_i128(env, campaign.token_supply as i128))
        .div(&I256::from_i128(env, campaign.total_value))
        .to_i128()
        .ok_or(Error::ArithmeticOverflow)?;
    u64::try_from(units).map_err(|_| Error::ArithmeticOverflow)
}

pub fn tokens_available(env: &Env, campaign: &Campaign) -> Result<u64, Error> {
    let allocated = allocation_for(env, campaign, campaign.raised_amount)?;
    Ok(campaign.token_supply.saturating_sub(allocated))
}

pub fn get_property_status(env: &Env, campaign_id: u32) -> Result<PropertyStatus, Error> {
    let campaign = get_campaign(env, campaign_id)?;
    Ok(status_of(&campaign, env.ledger().timestamp()))
}

pub fn get_property_financials(env: &Env, campaign_id: u32) -> Result<PropertyFinancials, Error> {
    let campaign = get_campaign(env, campaign_id)?;
    Ok(PropertyFinancials {
        total_value: campaign.total_value,
        token_supply: campaign.token_supply,
        tokens_available: tokens_available(env, &campaign)?,
        raised_amount: campaign.raised_amount,
        min_investment: campaign.min_investment,
        deadline: campaign.deadline,
    })
}
