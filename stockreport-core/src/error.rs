use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// The kind of ledger object an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ObjectKind {
    Account,
    Commodity,
    Transaction,
    Split,
    Price,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ObjectKind::Account => "account",
            ObjectKind::Commodity => "commodity",
            ObjectKind::Transaction => "transaction",
            ObjectKind::Split => "split",
            ObjectKind::Price => "price",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LedgerError {
    #[error("no {kind} with guid {guid}")]
    NotFound { kind: ObjectKind, guid: String },
    #[error("duplicate {kind} guid {guid}")]
    Duplicate { kind: ObjectKind, guid: String },
    #[error("{kind} {guid} references unknown {target} {target_guid}")]
    Dangling {
        kind: ObjectKind,
        guid: String,
        target: ObjectKind,
        target_guid: String,
    },
    #[error("account {0} has no commodity")]
    MissingCommodity(String),
}

impl LedgerError {
    pub(crate) fn not_found(kind: ObjectKind, guid: &str) -> Self {
        LedgerError::NotFound {
            kind,
            guid: guid.to_string(),
        }
    }
}
