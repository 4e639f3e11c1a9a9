use serde::{Deserialize, Serialize};

/// Outcome of a successful transfer.
///
/// Balances are the values written inside the critical section, so they
/// reflect exactly this transfer and nothing that ran after it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub from_balance: f64,
    pub to_balance: f64,
}

impl TransferReceipt {
    pub fn is_self_transfer(&self) -> bool {
        self.from == self.to
    }
}
