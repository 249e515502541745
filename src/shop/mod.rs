//! Purchase workflow: collaborator ports, the transaction state machine,
//! and command dispatch.

pub mod dispatch;
pub mod transaction;

pub use dispatch::CommandDispatcher;
pub use transaction::PurchaseTransaction;

use crate::core::{Account, Requester, Result};
use async_trait::async_trait;
use log::info;

/// External currency ledger.
///
/// Lookup and debit are two independent round-trips; there is no
/// conditional-debit primitive, so concurrent purchases against the same
/// account can interleave between them.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Fetch the account linked to `identity`, or `None` if there is none.
    async fn get_account(&self, identity: &str) -> Result<Option<Account>>;

    /// Overwrite the account's balance with `new_balance`.
    async fn set_balance(&self, identity: &str, new_balance: i64) -> Result<()>;
}

/// Permission service of the host platform.
pub trait Authorizer: Send + Sync {
    fn has_capability(&self, requester: &Requester, capability: &str) -> bool;
}

/// Executes one fully rendered command string. Returns `false` on failure.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, requester: &Requester, command: &str) -> bool;
}

/// Record emitted after every successful debit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub requester: String,
    pub item: String,
    pub price: i64,
}

pub trait AuditSink: Send + Sync {
    fn record(&self, entry: &AuditRecord);
}

/// Audit sink writing through the `log` facade.
#[derive(Debug, Default)]
pub struct LogAudit;

impl AuditSink for LogAudit {
    fn record(&self, entry: &AuditRecord) {
        info!(
            "{} purchased command {} for {}",
            entry.requester, entry.item, entry.price
        );
    }
}
