#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod campaign;
mod config;
mod errors;
mod events;
mod funding;
mod rewards;
mod status;
mod types;
mod withdrawal;

pub use errors::Error;
pub use events::{CampaignCreated, ContributionMade, FundsWithdrawn};
pub use rewards::{RewardMinter, RewardMinterClient};
pub use types::*;

#[contract]
pub struct EstateCrowdfunding;

#[contractimpl]
impl EstateCrowdfunding {
    // Initialize the contract
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        reward_token: Address,
    ) -> Result<(), Error> {
        config::initialize(&env, admin, payment_token, reward_token)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        config::get_config(&env)
    }

    // Campaign functions
    pub fn create_campaign(
        env: Env,
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
        campaign::create_campaign(
            &env,
            owner,
            title,
            location,
            property_type,
            description,
            total_value,
            token_supply,
            min_investment,
            duration_seconds,
        )
    }

    pub fn tokenize_property(
        env: Env,
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
        campaign::create_campaign(
            &env,
            owner,
            title,
            location,
            property_type,
            description,
            total_value,
            token_supply,
            min_investment,
            duration_seconds,
        )
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, Error> {
        campaign::get_campaign(&env, campaign_id)
    }

    pub fn get_property_info(env: Env, campaign_id: u32) -> Result<PropertyInfo, Error> {
        campaign::get_property_info(&env, campaign_id)
    }

    pub fn get_property_count(env: Env) -> u32 {
        campaign::campaign_count(&env)
    }

    pub fn campaign_count(env: Env) -> u32 {
        campaign::campaign_count(&env)
    }

    // Funding functions
    pub fn contribute(
        env: Env,
        campaign_id: u32,
        contributor: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        funding::contribute(&env, campaign_id, contributor, amount)
    }

    pub fn invest(
        env: Env,
        campaign_id: u32,
        contributor: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        funding::contribute(&env, campaign_id, contributor, amount)
    }

    pub fn get_contribution(
        env: Env,
        campaign_id: u32,
        contributor: Address,
    ) -> Result<i128, Error> {
        funding::get_contribution(&env, campaign_id, contributor)
    }

    pub fn get_token_allocation(
        env: Env,
        campaign_id: u32,
        contributor: Address,
    ) -> Result<u64, Error> {
        funding::get_token_allocation(&env, campaign_id, contributor)
    }

    // Status functions
    pub fn get_property_financials(
        env: Env,
        campaign_id: u32,
    ) -> Result<PropertyFinancials, Error> {
        status::get_property_financials(&env, campaign_id)
    }

    pub fn get_property_status(env: Env, campaign_id: u32) -> Result<PropertyStatus, Error> {
        status::get_property_status(&env, campaign_id)
    }

    // Withdrawal functions
    pub fn withdraw_funds(env: Env, campaign_id: u32, caller: Address) -> Result<(), Error> {
        withdrawal::withdraw_funds(&env, campaign_id, caller)
    }

    // Reward functions
    pub fn reward_token(env: Env) -> Result<Address, Error> {
        rewards::reward_token(&env)
    }

    pub fn reward_balance(env: Env, holder: Address) -> Result<i128, Error> {
        rewards::reward_balance(&env, holder)
    }
}
