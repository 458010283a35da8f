use crate::types::{RewardFrequency, REWARD_DENOMINATOR};

pub struct RewardCalculator;

impl RewardCalculator {
    /// Whole reward rounds elapsed between `deposited_at` and `now`
    ///
    /// Partial rounds are discarded. A clock that reads earlier than the
    /// deposit yields zero rounds.
    pub fn calculate_rounds(deposited_at: u64, now: u64, frequency: RewardFrequency) -> u64 {
        now.saturating_sub(deposited_at) / frequency.period()
    }

    /// Reward for `amount` over `rounds`
    ///
    /// Formula: reward = floor(amount × reward_percent × rounds / 100_000)
    ///
    /// Example:
    /// - amount: 500, reward_percent: 100 (0.1%), rounds: 1_100
    /// - reward: 500 × 100 × 1_100 / 100_000 = 550
    pub fn calculate_reward(amount: i128, reward_percent: u32, rounds: u64) -> Option<i128> {
        amount
            .checked_mul(reward_percent as i128)?
            .checked_mul(rounds as i128)?
            .checked_div(REWARD_DENOMINATOR)
    }

    /// Reward accrued for a deposit made at `deposited_at`, observed at `now`
    pub fn accrued_reward(
        amount: i128,
        reward_percent: u32,
        frequency: RewardFrequency,
        deposited_at: u64,
        now: u64,
    ) -> Option<i128> {
        let rounds = Self::calculate_rounds(deposited_at, now, frequency);
        Self::calculate_reward(amount, reward_percent, rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

    #[test]
    fn test_secondly_reward() {
        let reward =
            RewardCalculator::accrued_reward(500, 100, RewardFrequency::Secondly, 1_000, 2_100)
                .unwrap();

        // 500 × 100 × 1_100 / 100_000
        assert_eq!(reward, 550);
    }

    #[test]
    fn test_hourly_discards_partial_round() {
        let start = 10_000u64;
        let now = start + 2 * SECONDS_PER_HOUR + 5;

        let rounds = RewardCalculator::calculate_rounds(start, now, RewardFrequency::Hourly);
        assert_eq!(rounds, 2);
    }

    #[test]
    fn test_daily_discards_partial_round() {
        let start = 10_000u64;
        let now = start + 3 * SECONDS_PER_DAY + 5;

        let rounds = RewardCalculator::calculate_rounds(start, now, RewardFrequency::Daily);
        assert_eq!(rounds, 3);

        // 1_000_000 × 1_000 (1%) × 3 / 100_000
        let reward = RewardCalculator::calculate_reward(1_000_000, 1_000, rounds).unwrap();
        assert_eq!(reward, 30_000);
    }

    #[test]
    fn test_zero_elapsed_pays_nothing() {
        let reward =
            RewardCalculator::accrued_reward(500, 100, RewardFrequency::Secondly, 1_000, 1_000)
                .unwrap();
        assert_eq!(reward, 0);
    }

    #[test]
    fn test_clock_behind_deposit_pays_nothing() {
        let rounds = RewardCalculator::calculate_rounds(5_000, 4_000, RewardFrequency::Secondly);
        assert_eq!(rounds, 0);
    }

    #[test]
    fn test_reward_rounds_down() {
        // 7 × 1 × 3 / 100_000 < 1
        let reward = RewardCalculator::calculate_reward(7, 1, 3).unwrap();
        assert_eq!(reward, 0);
    }

    #[test]
    fn test_overflow_is_reported() {
        let reward = RewardCalculator::calculate_reward(i128::MAX, 2, 1);
        assert!(reward.is_none());
    }
}
