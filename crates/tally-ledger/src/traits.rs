use std::collections::BTreeMap;

use crate::error::LedgerResult;
use crate::records::TransferReceipt;

/// Read boundary for balance queries.
pub trait LedgerReader: Send + Sync {
    /// Current balance of `account`.
    ///
    /// Returns `LedgerError::NotFound` if the account is absent from the
    /// mapping. An absent account is distinct from one holding zero.
    fn get_balance(&self, account: &str) -> LedgerResult<f64>;

    /// Consistent copy of every balance, taken under a single lock hold.
    fn snapshot(&self) -> LedgerResult<BTreeMap<String, f64>>;

    /// Number of accounts currently present.
    fn account_count(&self) -> LedgerResult<usize> {
        Ok(self.snapshot()?.len())
    }
}

/// Write boundary for fund movements.
pub trait LedgerWriter: Send + Sync {
    /// Move `amount` from `from` to `to` atomically.
    ///
    /// Fails with `InvalidAmount` unless `amount > 0`, and with
    /// `InsufficientFunds` when the source balance (absent counts as zero) is
    /// below `amount`. A credit that would overflow the destination to a
    /// non-finite balance is also `InvalidAmount`. A failed transfer never
    /// mutates the ledger. The destination is created on first credit.
    fn transfer(&self, from: &str, to: &str, amount: f64) -> LedgerResult<TransferReceipt>;
}

/// Full ledger surface handed to adapters as `Arc<dyn Ledger>`.
pub trait Ledger: LedgerReader + LedgerWriter {}

impl<T: LedgerReader + LedgerWriter> Ledger for T {}
