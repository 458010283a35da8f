use soroban_sdk::{contracttype, Address, String};

/// Fixed-point denominator for `reward_percent` (100_000 = 100% per round)
pub const REWARD_DENOMINATOR: i128 = 100_000;

pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardFrequency {
    /// One reward round per second
    Secondly = 0,
    /// One reward round per hour
    Hourly = 1,
    /// One reward round per day
    Daily = 2,
}

impl RewardFrequency {
    /// Length of one reward round in seconds
    pub fn period(&self) -> u64 {
        match self {
            RewardFrequency::Secondly => 1,
            RewardFrequency::Hourly => SECONDS_PER_HOUR,
            RewardFrequency::Daily => SECONDS_PER_DAY,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    /// Human readable label, must be non-empty
    pub name: String,
    /// Disabled packages reject new deposits only
    pub active: bool,
    /// Absolute ledger timestamp before which withdrawals are refused
    pub lock_time: u64,
    pub reward_frequency: RewardFrequency,
    /// Reward per round, scaled by REWARD_DENOMINATOR
    pub reward_percent: u32,
    /// Inclusive lower bound for a single deposit
    pub min_deposit: i128,
    /// Inclusive upper bound for a single deposit
    pub max_deposit: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserDeposit {
    /// Principal held in custody
    pub amount: i128,
    /// Ledger timestamp of the deposit, start of accrual
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    pub amount: i128,
    pub timestamp: u64,
    /// Reward that a withdrawal right now would pay on top of `amount`
    pub reward: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Initialized,
    Package(Address),          // token -> Package
    Deposit(Address, Address), // (user, token) -> UserDeposit
}
