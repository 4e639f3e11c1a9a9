use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::records::TransferReceipt;
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory ledger for the server, tests, and embedding.
///
/// All balances live in a `HashMap` behind one `Mutex`. Reads take the same
/// exclusive lock as transfers, so a read can never observe half of a
/// transfer. Data is lost when the ledger is dropped.
pub struct InMemoryLedger {
    balances: Mutex<HashMap<String, f64>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
        }
    }

    /// Create a ledger pre-seeded with starting balances.
    ///
    /// Later entries win when an account name repeats.
    pub fn with_accounts<I, K>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let balances = accounts
            .into_iter()
            .map(|(name, balance)| (name.into(), balance))
            .collect();
        Self {
            balances: Mutex::new(balances),
        }
    }

    fn lock(&self) -> LedgerResult<MutexGuard<'_, HashMap<String, f64>>> {
        self.balances.lock().map_err(|_| LedgerError::LockPoisoned)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerReader for InMemoryLedger {
    fn get_balance(&self, account: &str) -> LedgerResult<f64> {
        let balances = self.lock()?;
        balances
            .get(account)
            .copied()
            .ok_or_else(|| LedgerError::NotFound(account.to_owned()))
    }

    fn snapshot(&self) -> LedgerResult<BTreeMap<String, f64>> {
        let balances = self.lock()?;
        Ok(balances
            .iter()
            .map(|(name, balance)| (name.clone(), *balance))
            .collect())
    }

    fn account_count(&self) -> LedgerResult<usize> {
        Ok(self.lock()?.len())
    }
}

impl LedgerWriter for InMemoryLedger {
    fn transfer(&self, from: &str, to: &str, amount: f64) -> LedgerResult<TransferReceipt> {
        // NaN fails `amount > 0.0` as well.
        if !(amount.is_finite() && amount > 0.0) {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let receipt = {
            let mut balances = self.lock()?;

            let available = balances.get(from).copied().unwrap_or(0.0);
            if available < amount {
                return Err(LedgerError::InsufficientFunds {
                    account: from.to_owned(),
                    balance: available,
                    requested: amount,
                });
            }

            if from == to {
                // Debit and credit of the same entry cancel out.
                TransferReceipt {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    amount,
                    from_balance: available,
                    to_balance: available,
                }
            } else {
                let to_balance = balances.get(to).copied().unwrap_or(0.0) + amount;
                if !to_balance.is_finite() {
                    return Err(LedgerError::InvalidAmount { amount });
                }

                let from_balance = available - amount;
                balances.insert(from.to_owned(), from_balance);
                balances.insert(to.to_owned(), to_balance);

                TransferReceipt {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    amount,
                    from_balance,
                    to_balance,
                }
            }
        };

        tracing::debug!(from, to, amount, "transfer applied");
        Ok(receipt)
    }
}

impl std::fmt::Debug for InMemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.account_count().ok();
        f.debug_struct("InMemoryLedger")
            .field("account_count", &count)
            .finish()
    }
}
