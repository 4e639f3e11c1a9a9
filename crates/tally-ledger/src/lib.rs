//! Account ledger for Tally.
//!
//! This crate is the core of the service. It provides:
//! - `LedgerReader` / `LedgerWriter` trait boundaries for balance reads and transfers
//! - `InMemoryLedger`, a `HashMap` of balances behind a single exclusive lock
//! - `TransferReceipt`, the post-transfer view of both accounts
//!
//! # Design Rules
//!
//! 1. Every read and every write of the balance mapping happens under one lock.
//! 2. A transfer validates fully before it mutates; failures leave no trace.
//! 3. Absent accounts are `NotFound` on read but hold an implicit zero on transfer.
//! 4. Nothing inside a critical section blocks, awaits, or logs.

pub mod error;
pub mod memory;
pub mod records;
pub mod traits;

pub use error::{LedgerError, LedgerResult};
pub use memory::InMemoryLedger;
pub use records::TransferReceipt;
pub use traits::{Ledger, LedgerReader, LedgerWriter};
