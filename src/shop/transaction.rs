use super::{AuditRecord, AuditSink, Authorizer, CommandDispatcher, CommandExecutor, Ledger};
use crate::catalog::{Resolution, ShopConfig, resolve};
use crate::core::{PurchaseOutcome, PurchaseRequest, RejectReason, Result};
use log::debug;

/// One purchase run against a loaded catalog.
///
/// Steps execute strictly in order: validate, resolve, permission check,
/// account lookup, funds check, debit, dispatch. The lookup and the debit
/// are the only suspension points; no timeout is imposed on either, and
/// there is no mutual exclusion across concurrent purchases on the same
/// account.
pub struct PurchaseTransaction<'a> {
    catalog: &'a ShopConfig,
    authorizer: &'a dyn Authorizer,
    ledger: &'a dyn Ledger,
    executor: &'a dyn CommandExecutor,
    audit: &'a dyn AuditSink,
}

impl<'a> PurchaseTransaction<'a> {
    pub fn new(
        catalog: &'a ShopConfig,
        authorizer: &'a dyn Authorizer,
        ledger: &'a dyn Ledger,
        executor: &'a dyn CommandExecutor,
        audit: &'a dyn AuditSink,
    ) -> Self {
        Self {
            catalog,
            authorizer,
            ledger,
            executor,
            audit,
        }
    }

    /// Run the purchase to a terminal outcome.
    ///
    /// Rejections are data, not errors; an `Err` means the ledger transport
    /// itself failed.
    pub async fn run(&self, request: &PurchaseRequest) -> Result<PurchaseOutcome> {
        let query = request.query.trim();
        if query.is_empty() {
            return Ok(PurchaseOutcome::Rejected(RejectReason::UsageError));
        }

        let item = match resolve(&self.catalog.items, query) {
            Resolution::Match(item) => item,
            Resolution::NotFound => {
                debug!("purchase {}: no item matches '{}'", request.id, query);
                return Ok(PurchaseOutcome::Rejected(RejectReason::NotFound {
                    query: query.to_string(),
                }));
            }
            Resolution::Ambiguous(candidates) => {
                debug!(
                    "purchase {}: '{}' matches {} items",
                    request.id,
                    query,
                    candidates.len()
                );
                return Ok(PurchaseOutcome::Rejected(RejectReason::Ambiguous {
                    candidates,
                }));
            }
        };

        if !self
            .authorizer
            .has_capability(&request.requester, &item.purchase_permission)
        {
            return Ok(PurchaseOutcome::Rejected(RejectReason::PermissionDenied));
        }

        let Some(identity) = request.requester.account_name.as_deref() else {
            return Ok(PurchaseOutcome::Rejected(RejectReason::NoAccount));
        };

        let Some(account) = self.ledger.get_account(identity).await? else {
            return Ok(PurchaseOutcome::Rejected(RejectReason::NoAccount));
        };

        if account.balance < item.price {
            return Ok(PurchaseOutcome::Rejected(RejectReason::InsufficientFunds {
                price: item.price,
                balance: account.balance,
            }));
        }

        // Second, independent ledger round-trip: no compare-and-swap on the
        // balance read above.
        let new_balance = account.balance - item.price;
        self.ledger.set_balance(identity, new_balance).await?;
        debug!(
            "purchase {}: debited {} from '{}', balance {} -> {}",
            request.id, item.price, identity, account.balance, new_balance
        );

        let any_failed =
            CommandDispatcher::new(self.executor).dispatch_all(item, &request.requester);

        self.audit.record(&AuditRecord {
            requester: identity.to_string(),
            item: item.name.clone(),
            price: item.price,
        });

        if any_failed {
            Ok(PurchaseOutcome::PartiallyFailed {
                item: item.name.clone(),
                price: item.price,
                new_balance,
            })
        } else {
            Ok(PurchaseOutcome::Completed {
                item: item.name.clone(),
                price: item.price,
                new_balance,
            })
        }
    }
}
