use crate::types::{
    DataKey, Package, UserDeposit, ENTRY_BUMP_AMOUNT, ENTRY_LIFETIME_THRESHOLD,
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use soroban_sdk::{Address, Env};

pub struct Storage;

impl Storage {
    // Instance
    pub fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    // Owner
    pub fn get_owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    // Packages
    pub fn get_package(env: &Env, token: &Address) -> Option<Package> {
        env.storage()
            .persistent()
            .get(&DataKey::Package(token.clone()))
    }

    pub fn set_package(env: &Env, token: &Address, package: &Package) {
        env.storage()
            .persistent()
            .set(&DataKey::Package(token.clone()), package);
        Self::extend_package(env, token);
    }

    pub fn extend_package(env: &Env, token: &Address) {
        env.storage().persistent().extend_ttl(
            &DataKey::Package(token.clone()),
            ENTRY_LIFETIME_THRESHOLD,
            ENTRY_BUMP_AMOUNT,
        );
    }

    // Deposits
    pub fn get_deposit(env: &Env, user: &Address, token: &Address) -> Option<UserDeposit> {
        env.storage()
            .persistent()
            .get(&DataKey::Deposit(user.clone(), token.clone()))
    }

    pub fn set_deposit(env: &Env, user: &Address, token: &Address, deposit: &UserDeposit) {
        let key = DataKey::Deposit(user.clone(), token.clone());
        env.storage().persistent().set(&key, deposit);
        env.storage()
            .persistent()
            .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
    }

    pub fn remove_deposit(env: &Env, user: &Address, token: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Deposit(user.clone(), token.clone()));
    }
}
