use crate::errors::Error;
use crate::types::{Config, DataKey};
use soroban_sdk::{Address, Env};

pub fn initialize(
    env: &Env,
    admin: Address,
    payment_token: Address,
    reward_token: Address,
) -> Result<(), Error> {
    if env.storage().instance().has(&DataKey::Config) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();

    let config = Config {
        admin,
        payment_token,
        reward_token,
    };
    env.storage().instance().set(&DataKey::Config, &config);

    Ok(())
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}
