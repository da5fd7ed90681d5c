use crate::config::get_config;
use crate::errors::Error;
use crate::types::REWARD_MULTIPLIER;
use soroban_sdk::{contractclient, log, Address, Env};

/// Capability the reward token has to offer. A Stellar Asset Contract whose
/// admin is this contract satisfies it, as does any contract with the same
/// two entry points.
#[allow(dead_code)]
#[contractclient(name = "RewardMinterClient")]
pub trait RewardMinter {
    fn mint(env: Env, to: Address, amount: i128);

    fn balance(env: Env, id: Address) -> i128;
}

pub fn reward_for(amount: i128) -> Result<i128, Error> {
    amount
        .checked_mul(REWARD_MULTIPLIER)
        .ok_or(Error::ArithmeticOverflow)
}

// Reachable only from the contribution path.
pub(crate) fn mint_reward(
    env: &Env,
    reward_token: &Address,
    contributor: &Address,
    reward: i128,
) -> Result<(), Error> {
    let minter = RewardMinterClient::new(env, reward_token);
    match minter.try_mint(contributor, &reward) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) => {
            log!(
                env,
                "reward mint rejected contributor: {}, reward: {}, error: {}",
                contributor.clone(),
                reward,
                err
            );
            Err(Error::RewardMintFailed)
        }
        _ => {
            log!(
                env,
                "reward mint failed contributor: {}, reward: {}",
                contributor.clone(),
                reward
            );
            Err(Error::RewardMintFailed)
        }
    }
}

pub fn reward_token(env: &Env) -> Result<Address, Error> {
    Ok(get_config(env)?.reward_token)
}

pub fn reward_balance(env: &Env, holder: Address) -> Result<i128, Error> {
    let config = get_config(env)?;
    Ok(RewardMinterClient::new(env, &config.reward_token).balance(&holder))
}
