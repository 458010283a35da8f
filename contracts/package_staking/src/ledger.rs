use crate::error::Error;
use crate::events::{PackageDepositEvent, PackageWithdrawalEvent};
use crate::registry::Registry;
use crate::reward::RewardCalculator;
use crate::storage::Storage;
use crate::types::{UserDeposit, UserInfo};
use crate::validation::Validator;
use soroban_sdk::{log, token, Address, Env, Symbol};

pub struct Ledger;

impl Ledger {
    /// Pull `amount` of `token` from `user` into custody and open a deposit
    ///
    /// # Errors
    /// - `NoSuchPackage` / `PackageDisabled`: package not usable
    /// - `InsufficientAllowance`: user approved less than `amount`
    /// - `InvalidDepositAmount`: amount outside package bounds
    /// - `DepositAlreadyExists`: user already has a live deposit for `token`
    /// - `TransferFailed`: token contract rejected the transfer
    pub fn deposit(env: &Env, user: &Address, token: &Address, amount: i128) -> Result<(), Error> {
        user.require_auth();

        let package = Registry::validate_usable(env, token)?;
        Storage::extend_package(env, token);

        let custody = env.current_contract_address();
        let token_client = token::Client::new(env, token);

        if token_client.allowance(user, &custody) < amount {
            return Err(Error::InsufficientAllowance);
        }

        Validator::validate_deposit_amount(&package, amount)?;

        if Storage::get_deposit(env, user, token).is_some() {
            return Err(Error::DepositAlreadyExists);
        }

        // Nothing is recorded unless the funds actually arrived
        let transferred = token_client.try_transfer_from(&custody, user, &custody, &amount);
        if !matches!(transferred, Ok(Ok(()))) {
            log!(env, "deposit transfer failed", user.clone(), amount);
            return Err(Error::TransferFailed);
        }

        let deposit = UserDeposit {
            amount,
            timestamp: env.ledger().timestamp(),
        };
        Storage::set_deposit(env, user, token, &deposit);

        log!(env, "deposit recorded", user.clone(), amount, deposit.timestamp);
        env.events().publish(
            (Symbol::new(env, "package_deposit"), token.clone(), user.clone()),
            PackageDepositEvent {
                token: token.clone(),
                user: user.clone(),
                amount,
            },
        );

        Ok(())
    }

    /// Close the user's deposit and pay out principal plus reward
    ///
    /// Returns the amount transferred to `user`.
    ///
    /// # Errors
    /// - `NoSuchPackage`: no package for `token`
    /// - `WithdrawLocked`: package lock time not reached
    /// - `NoDeposit`: user has no live deposit for `token`
    /// - `ArithmeticOverflow`: reward or payout does not fit in i128
    /// - `TransferFailed`: payout rejected, deposit is left in place
    pub fn withdraw(env: &Env, user: &Address, token: &Address) -> Result<i128, Error> {
        user.require_auth();

        let package = Registry::get(env, token)?;
        Storage::extend_package(env, token);

        let now = env.ledger().timestamp();
        Validator::validate_unlocked(&package, now)?;

        let deposit = Storage::get_deposit(env, user, token).ok_or(Error::NoDeposit)?;

        let reward = RewardCalculator::accrued_reward(
            deposit.amount,
            package.reward_percent,
            package.reward_frequency,
            deposit.timestamp,
            now,
        )
        .ok_or(Error::ArithmeticOverflow)?;
        let payout = deposit
            .amount
            .checked_add(reward)
            .ok_or(Error::ArithmeticOverflow)?;

        // Clear before paying so the record can never be paid twice
        Storage::remove_deposit(env, user, token);

        let custody = env.current_contract_address();
        let token_client = token::Client::new(env, token);
        let transferred = token_client.try_transfer(&custody, user, &payout);
        if !matches!(transferred, Ok(Ok(()))) {
            Storage::set_deposit(env, user, token, &deposit);
            log!(env, "payout transfer failed", user.clone(), payout);
            return Err(Error::TransferFailed);
        }

        log!(env, "withdrawal paid", user.clone(), deposit.amount, reward);
        env.events().publish(
            (Symbol::new(env, "package_withdrawal"), token.clone(), user.clone()),
            PackageWithdrawalEvent {
                token: token.clone(),
                user: user.clone(),
                amount: payout,
                reward,
            },
        );

        Ok(payout)
    }

    /// Stored deposit and the reward a withdrawal would pay right now
    ///
    /// Ignores lock time and package state. Absent records read as zero.
    pub fn user_info(env: &Env, user: &Address, token: &Address) -> UserInfo {
        let deposit = Storage::get_deposit(env, user, token).unwrap_or(UserDeposit {
            amount: 0,
            timestamp: 0,
        });

        let reward = match Storage::get_package(env, token) {
            Some(package) => RewardCalculator::accrued_reward(
                deposit.amount,
                package.reward_percent,
                package.reward_frequency,
                deposit.timestamp,
                env.ledger().timestamp(),
            )
            .unwrap_or(0),
            None => 0,
        };

        UserInfo {
            amount: deposit.amount,
            timestamp: deposit.timestamp,
            reward,
        }
    }
}
