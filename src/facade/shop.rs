use crate::catalog::ShopConfig;
use crate::config::JsonConfig;
use crate::core::{PurchaseOutcome, PurchaseRequest, RejectReason, Requester, Result, ShopError};
use crate::shop::{AuditSink, Authorizer, CommandExecutor, Ledger, PurchaseTransaction};
use std::path::Path;
use std::sync::Arc;

/// Usage lines shown for `help` and on unusable input.
pub const HELP_TEXT: [&str; 3] = [
    "/cmdshop help: Show this message",
    "/cmdshop list: List available items",
    "/cmdshop buy <item>: Buy command",
];

/// A parsed request from the host's word-split argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopRequest {
    Help,
    List,
    Buy(String),
}

impl ShopRequest {
    /// Parse the host's arguments. `None` means a missing or unknown
    /// subcommand and should be answered with the usage lines.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (first, rest) = args.split_first()?;
        if first.eq_ignore_ascii_case("help") {
            Some(Self::Help)
        } else if first.eq_ignore_ascii_case("list") {
            Some(Self::List)
        } else if first.eq_ignore_ascii_case("buy") {
            Some(Self::Buy(rest.join(" ")))
        } else {
            None
        }
    }
}

/// High-level shop API: owns the loaded catalog and the collaborator
/// handles, and serves the `help`/`list`/`buy` surface as user-visible
/// message lines.
///
/// Constructed once at startup and dropped at shutdown; there is no
/// ambient global instance.
pub struct Shop {
    config: JsonConfig<ShopConfig>,
    authorizer: Arc<dyn Authorizer>,
    ledger: Arc<dyn Ledger>,
    executor: Arc<dyn CommandExecutor>,
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for Shop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shop").finish_non_exhaustive()
    }
}

impl Shop {
    /// Load (or create) the catalog at `path` and assemble the shop.
    ///
    /// Fails fast on an unreadable or malformed config file.
    pub fn open<P: AsRef<Path>>(
        path: P,
        authorizer: Arc<dyn Authorizer>,
        ledger: Arc<dyn Ledger>,
        executor: Arc<dyn CommandExecutor>,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self> {
        let config = JsonConfig::<ShopConfig>::read(path)?;
        Self::validate(&config)?;
        Ok(Self {
            config,
            authorizer,
            ledger,
            executor,
            audit,
        })
    }

    fn validate(config: &JsonConfig<ShopConfig>) -> Result<()> {
        config.value().validate().map_err(|msg| {
            ShopError::ConfigMalformed(config.path().display().to_string(), msg)
        })
    }

    /// Re-read the backing file. Purchases never mutate the catalog; this
    /// is the only way in-process state observes external edits.
    pub fn reload(&mut self) -> Result<()> {
        self.config.reload()?;
        Self::validate(&self.config)
    }

    pub fn catalog(&self) -> &ShopConfig {
        self.config.value()
    }

    pub fn help(&self) -> Vec<String> {
        HELP_TEXT.iter().map(|s| s.to_string()).collect()
    }

    /// `Name: Price` pairs in catalog order.
    pub fn list(&self) -> Vec<String> {
        let mut lines = vec!["Available items:".to_string()];
        for item in &self.config.value().items {
            lines.push(format!("{}: {}", item.name, item.price));
        }
        lines
    }

    /// Run a purchase for `query`, returning the terminal outcome together
    /// with the message lines for the requester.
    pub async fn buy(
        &self,
        requester: Requester,
        query: &str,
    ) -> Result<(PurchaseOutcome, Vec<String>)> {
        let request = PurchaseRequest::new(requester, query);
        let transaction = PurchaseTransaction::new(
            self.config.value(),
            self.authorizer.as_ref(),
            self.ledger.as_ref(),
            self.executor.as_ref(),
            self.audit.as_ref(),
        );
        let outcome = transaction.run(&request).await?;
        let messages = messages_for(&outcome);
        Ok((outcome, messages))
    }

    /// Handle one inbound request; returns the message lines for the
    /// requester.
    pub async fn handle(&self, requester: Requester, args: &[&str]) -> Result<Vec<String>> {
        match ShopRequest::parse(args) {
            None => {
                let mut lines = vec!["Invalid usage! Usage:".to_string()];
                lines.extend(self.help());
                Ok(lines)
            }
            Some(ShopRequest::Help) => Ok(self.help()),
            Some(ShopRequest::List) => Ok(self.list()),
            Some(ShopRequest::Buy(query)) => Ok(self.buy(requester, &query).await?.1),
        }
    }
}

fn messages_for(outcome: &PurchaseOutcome) -> Vec<String> {
    match outcome {
        PurchaseOutcome::Completed { item, price, .. } => {
            vec![format!("Purchased command \"{}\" for {}.", item, price)]
        }
        PurchaseOutcome::PartiallyFailed { item, price, .. } => vec![
            format!(
                "There has been an error purchasing {}. Please check with the server admins.",
                item
            ),
            format!("Purchased command \"{}\" for {}.", item, price),
        ],
        PurchaseOutcome::Rejected(reason) => vec![match reason {
            RejectReason::UsageError => "Invalid item name!".to_string(),
            RejectReason::NotFound { query } => format!("Item \"{}\" not found!", query),
            RejectReason::Ambiguous { candidates } => {
                format!("More than one item matched: {}.", candidates.join(", "))
            }
            RejectReason::PermissionDenied => {
                "You don't have permission to buy this item!".to_string()
            }
            RejectReason::NoAccount => "You don't have a bank account!".to_string(),
            RejectReason::InsufficientFunds { .. } => "You cannot afford this item!".to_string(),
        }],
    }
}
