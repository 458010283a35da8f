#![no_std]

mod error;
mod events;
mod ledger;
mod registry;
mod reward;
mod storage;
mod types;
mod validation;


pub use error::Error;
pub use types::{Package, RewardFrequency, UserInfo, REWARD_DENOMINATOR};

use ledger::Ledger;
use registry::Registry;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct PackageStaking;

#[contractimpl]
impl PackageStaking {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the contract with its owner
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        Storage::set_owner(&env, &owner);
        Storage::extend_instance(&env);
        log!(&env, "initialized", owner);

        Ok(())
    }

    /// Get the owner
    pub fn owner(env: Env) -> Result<Address, Error> {
        Storage::get_owner(&env).ok_or(Error::NotInitialized)
    }

    // ============================================
    // PACKAGE REGISTRY (owner only)
    // ============================================

    /// Create a package for `token`, replacing any existing one
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the owner
    /// - `InvalidPackage`: Empty name, inactive, or bad deposit bounds
    ///
    /// `token` is not checked here. It must be a contract implementing the
    /// token interface, otherwise every deposit against it traps inside the
    /// token call instead of returning a typed error.
    pub fn create_package(
        env: Env,
        caller: Address,
        token: Address,
        package: Package,
    ) -> Result<(), Error> {
        Storage::extend_instance(&env);
        Registry::create(&env, &caller, &token, &package)
    }

    /// Disable the package for `token`
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the owner
    /// - `NoSuchPackage`: No package for `token`
    pub fn disable_package(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        Storage::extend_instance(&env);
        Registry::disable(&env, &caller, &token)
    }

    /// Get the package for `token`
    pub fn get_package(env: Env, token: Address) -> Result<Package, Error> {
        Registry::get(&env, &token)
    }

    // ============================================
    // DEPOSIT LEDGER
    // ============================================

    /// Deposit `amount` of `token` into its package
    ///
    /// The user must have approved this contract for at least `amount`.
    pub fn deposit(env: Env, user: Address, token: Address, amount: i128) -> Result<(), Error> {
        Storage::extend_instance(&env);
        Ledger::deposit(&env, &user, &token, amount)
    }

    /// Withdraw principal plus reward, returns the amount paid
    pub fn withdraw(env: Env, user: Address, token: Address) -> Result<i128, Error> {
        Storage::extend_instance(&env);
        Ledger::withdraw(&env, &user, &token)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get the user's deposit and the reward accrued so far
    pub fn get_user_info(env: Env, user: Address, token: Address) -> UserInfo {
        Ledger::user_info(&env, &user, &token)
    }
}
