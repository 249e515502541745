//! # cmdshop
//!
//! Lets a user spend balance from an external currency ledger to unlock a
//! named, pre-configured batch of commands. The catalog lives in a JSON
//! config file (created with defaults on first run); a purchase resolves a
//! free-text query against it, checks permission and funds, debits the
//! ledger, then renders and dispatches the item's action templates.
//!
//! The ledger, the permission service, and the command interpreter are
//! external collaborators behind the traits in [`shop`].

pub mod catalog;
pub mod config;
pub mod core;
pub mod facade;
pub mod shop;
pub mod template;

// Re-export the main types for convenience.
pub use crate::core::{
    Account, PurchaseOutcome, PurchaseRequest, RejectReason, Requester, Result, ShopError,
};
pub use catalog::{CommandItem, Resolution, ShopConfig, resolve};
pub use config::JsonConfig;
pub use facade::{HELP_TEXT, Shop, ShopRequest};
pub use shop::{
    AuditRecord, AuditSink, Authorizer, CommandDispatcher, CommandExecutor, Ledger, LogAudit,
    PurchaseTransaction,
};
