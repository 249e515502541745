pub mod error;
pub mod types;

pub use error::{Result, ShopError};
pub use types::{Account, PurchaseOutcome, PurchaseRequest, Requester, RejectReason};
