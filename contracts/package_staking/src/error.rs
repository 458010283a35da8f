use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the owner
    Unauthorized = 10,

    // ============================================
    // PACKAGE ERRORS (20-29)
    // ============================================
    /// No package defined for this token
    NoSuchPackage = 20,
    /// Package exists but is disabled
    PackageDisabled = 21,
    /// Package payload failed validation (empty name, inactive, bad bounds)
    InvalidPackage = 22,

    // ============================================
    // DEPOSIT ERRORS (30-39)
    // ============================================
    /// Depositor has not approved enough tokens for the contract
    InsufficientAllowance = 30,
    /// Amount outside [min_deposit, max_deposit]
    InvalidDepositAmount = 31,
    /// A live deposit already exists for (user, token)
    DepositAlreadyExists = 32,

    // ============================================
    // WITHDRAWAL ERRORS (40-49)
    // ============================================
    /// Package lock time not reached yet
    WithdrawLocked = 40,
    /// No live deposit for (user, token)
    NoDeposit = 41,

    // ============================================
    // OPERATIONAL ERRORS (50-59)
    // ============================================
    /// Token contract rejected the transfer
    TransferFailed = 50,
    /// Reward or payout arithmetic overflowed
    ArithmeticOverflow = 51,
}
