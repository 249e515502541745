use uuid::Uuid;

/// Read-only view of a ledger account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub identity: String,
    pub balance: i64,
}

impl Account {
    pub fn new(identity: impl Into<String>, balance: i64) -> Self {
        Self {
            identity: identity.into(),
            balance,
        }
    }
}

/// Requester context captured from the host session at invocation time.
///
/// `account_name` is the linked ledger identity; a requester without one is
/// unregistered and cannot hold funds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requester {
    pub display_name: String,
    pub account_name: Option<String>,
    pub group: Option<String>,
    pub tile_x: i32,
    pub tile_y: i32,
    pub world_x: f32,
    pub world_y: f32,
    pub life: i32,
    pub mana: i32,
}

impl Requester {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Link the requester to a ledger account.
    pub fn account_name(mut self, name: impl Into<String>) -> Self {
        self.account_name = Some(name.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn position(mut self, tile_x: i32, tile_y: i32, world_x: f32, world_y: f32) -> Self {
        self.tile_x = tile_x;
        self.tile_y = tile_y;
        self.world_x = world_x;
        self.world_y = world_y;
        self
    }

    pub fn vitals(mut self, life: i32, mana: i32) -> Self {
        self.life = life;
        self.mana = mana;
        self
    }
}

/// Ephemeral per-invocation purchase request.
///
/// The generated id only exists for log correlation; it is never persisted.
#[derive(Debug, Clone)]
pub struct PurchaseRequest {
    pub id: Uuid,
    pub requester: Requester,
    pub query: String,
}

impl PurchaseRequest {
    pub fn new(requester: Requester, query: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester,
            query: query.into(),
        }
    }
}

/// Why a purchase was turned away before any balance changed hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Blank query.
    UsageError,
    /// No item name starts with the query.
    NotFound { query: String },
    /// More than one item name starts with the query.
    Ambiguous { candidates: Vec<String> },
    PermissionDenied,
    /// No linked ledger identity, or the ledger has no account for it.
    NoAccount,
    InsufficientFunds { price: i64, balance: i64 },
}

/// Terminal result of a purchase run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Debit succeeded and every action executed without reported failure.
    Completed {
        item: String,
        price: i64,
        new_balance: i64,
    },
    /// Balance was already debited; one or more actions failed to execute.
    /// No refund is issued.
    PartiallyFailed {
        item: String,
        price: i64,
        new_balance: i64,
    },
    Rejected(RejectReason),
}
