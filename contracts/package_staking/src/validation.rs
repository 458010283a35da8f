use crate::error::Error;
use crate::types::Package;

pub struct Validator;

impl Validator {
    pub fn validate_package(package: &Package) -> Result<(), Error> {
        if package.name.len() == 0 {
            return Err(Error::InvalidPackage);
        }

        // A package created disabled could never take a deposit
        if !package.active {
            return Err(Error::InvalidPackage);
        }

        if package.min_deposit < 0 || package.max_deposit < package.min_deposit {
            return Err(Error::InvalidPackage);
        }

        Ok(())
    }

    pub fn validate_usable(package: Option<Package>) -> Result<Package, Error> {
        let package = package.ok_or(Error::NoSuchPackage)?;

        if !package.active {
            return Err(Error::PackageDisabled);
        }

        Ok(package)
    }

    pub fn validate_deposit_amount(package: &Package, amount: i128) -> Result<(), Error> {
        if amount < package.min_deposit || amount > package.max_deposit {
            return Err(Error::InvalidDepositAmount);
        }
        Ok(())
    }

    pub fn validate_unlocked(package: &Package, now: u64) -> Result<(), Error> {
        if now < package.lock_time {
            return Err(Error::WithdrawLocked);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RewardFrequency;
    use soroban_sdk::{Env, String};

    fn package(env: &Env, name: &str) -> Package {
        Package {
            name: String::from_str(env, name),
            active: true,
            lock_time: 1_000,
            reward_frequency: RewardFrequency::Daily,
            reward_percent: 100,
            min_deposit: 10,
            max_deposit: 1_000,
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let env = Env::default();
        let package = package(&env, "");
        assert_eq!(
            Validator::validate_package(&package),
            Err(Error::InvalidPackage)
        );
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let env = Env::default();
        let mut package = package(&env, "gold");
        package.min_deposit = 2_000;
        assert_eq!(
            Validator::validate_package(&package),
            Err(Error::InvalidPackage)
        );

        package.min_deposit = -1;
        assert_eq!(
            Validator::validate_package(&package),
            Err(Error::InvalidPackage)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let env = Env::default();
        let package = package(&env, "gold");

        assert!(Validator::validate_deposit_amount(&package, 10).is_ok());
        assert!(Validator::validate_deposit_amount(&package, 1_000).is_ok());
        assert_eq!(
            Validator::validate_deposit_amount(&package, 9),
            Err(Error::InvalidDepositAmount)
        );
        assert_eq!(
            Validator::validate_deposit_amount(&package, 1_001),
            Err(Error::InvalidDepositAmount)
        );
    }

    #[test]
    fn test_unlocked_at_lock_time() {
        let env = Env::default();
        let package = package(&env, "gold");

        assert_eq!(
            Validator::validate_unlocked(&package, 999),
            Err(Error::WithdrawLocked)
        );
        assert!(Validator::validate_unlocked(&package, 1_000).is_ok());
    }
}
