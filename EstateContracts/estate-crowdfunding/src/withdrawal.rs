use crate::campaign::{get_campaign, save_campaign};
use crate::config::get_config;
use crate::errors::Error;
use crate::events::{self, FundsWithdrawn};
use crate::status::is_ended;
use soroban_sdk::{log, token, Address, Env};

/// Pays the raised amount out to the owner and closes the campaign for good.
pub fn withdraw_funds(env: &Env, campaign_id: u32, caller: Address) -> Result<(), Error> {
    caller.require_auth();

    let mut campaign = get_campaign(env, campaign_id)?;

    if caller != campaign.owner {
        return Err(Error::Unauthorized);
    }
    if !is_ended(&campaign, env.ledger().timestamp()) {
        return Err(Error::NotYetEligibleForWithdrawal);
    }
    if campaign.finalized {
        return Err(Error::AlreadyFinalized);
    }

    let config = get_config(env)?;
    let amount = campaign.raised_amount;

    campaign.finalized = true;
    save_campaign(env, &campaign);

    if amount > 0 {
        token::Client::new(env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &campaign.owner,
            &amount,
        );
    }

    log!(env, "withdrawal campaign: {}, amount: {}", campaign_id, amount);

    events::funds_withdrawn(
        env,
        FundsWithdrawn {
            campaign_id,
            amount,
        },
    );

    Ok(())
}
