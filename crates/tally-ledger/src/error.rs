/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// Transfer amounts must be finite and strictly positive.
    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },

    #[error("insufficient funds in {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: f64,
        requested: f64,
    },

    /// Read path only: the account was never seeded or credited.
    #[error("account not found: {0}")]
    NotFound(String),

    #[error("ledger lock poisoned")]
    LockPoisoned,
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
