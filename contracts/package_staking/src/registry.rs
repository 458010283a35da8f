use crate::error::Error;
use crate::events::{PackageAddedEvent, PackageDisabledEvent};
use crate::storage::Storage;
use crate::types::Package;
use crate::validation::Validator;
use soroban_sdk::{log, Address, Env, Symbol};

pub struct Registry;

impl Registry {
    /// Create or replace the package for `token` (owner only)
    ///
    /// Replacing does not touch deposits already open against the token.
    pub fn create(
        env: &Env,
        caller: &Address,
        token: &Address,
        package: &Package,
    ) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        Validator::validate_package(package)?;

        Storage::set_package(env, token, package);

        log!(env, "package added", token.clone(), package.name.clone());
        env.events().publish(
            (Symbol::new(env, "package_added"), token.clone()),
            PackageAddedEvent {
                token: token.clone(),
                name: package.name.clone(),
                lock_time: package.lock_time,
                reward_frequency: package.reward_frequency,
                reward_percent: package.reward_percent,
                min_deposit: package.min_deposit,
                max_deposit: package.max_deposit,
            },
        );

        Ok(())
    }

    /// Stop accepting deposits for `token` (owner only, idempotent)
    pub fn disable(env: &Env, caller: &Address, token: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;

        let mut package = Storage::get_package(env, token).ok_or(Error::NoSuchPackage)?;
        package.active = false;
        Storage::set_package(env, token, &package);

        log!(env, "package disabled", token.clone());
        env.events().publish(
            (Symbol::new(env, "package_disabled"), token.clone()),
            PackageDisabledEvent {
                token: token.clone(),
            },
        );

        Ok(())
    }

    /// Package for `token` if it exists and is active
    pub fn validate_usable(env: &Env, token: &Address) -> Result<Package, Error> {
        Validator::validate_usable(Storage::get_package(env, token))
    }

    pub fn get(env: &Env, token: &Address) -> Result<Package, Error> {
        Storage::get_package(env, token).ok_or(Error::NoSuchPackage)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let owner = Storage::get_owner(env).ok_or(Error::NotInitialized)?;
        if caller != &owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
