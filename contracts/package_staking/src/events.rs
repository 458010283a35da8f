use soroban_sdk::{contracttype, Address, String};

use crate::types::RewardFrequency;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageAddedEvent {
    pub token: Address,
    pub name: String,
    pub lock_time: u64,
    pub reward_frequency: RewardFrequency,
    pub reward_percent: u32,
    pub min_deposit: i128,
    pub max_deposit: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageDisabledEvent {
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageDepositEvent {
    pub token: Address,
    pub user: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageWithdrawalEvent {
    pub token: Address,
    pub user: Address,
    /// Principal plus reward
    pub amount: i128,
    pub reward: i128,
}
