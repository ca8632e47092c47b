use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockreport_core::{Guid, LedgerError};
use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Conditions that abort an analysis run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("transaction {transaction} books on account {counterpart} of unsupported type {ty} (analyzing {account})")]
    UnexpectedAccountType {
        account: String,
        transaction: String,
        counterpart: String,
        ty: String,
    },
    #[error("transaction {transaction} does not balance for account {account}: off by {imbalance}")]
    AccountingIdentityViolation {
        account: String,
        transaction: String,
        imbalance: Decimal,
    },
    #[error("transaction {transaction} opens a holding period on account {account} while the period opened {open_since} is still open")]
    PeriodInvariantViolation {
        account: String,
        transaction: String,
        open_since: NaiveDate,
    },
}

/// Conditions that are reported but do not stop the analysis.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Warning<'a> {
    /// The transaction was left out of the account's figures.
    #[error("{date}: unclassified transaction {transaction} ({description}) on account {account}")]
    Unclassified {
        account: Guid<'a>,
        transaction: Guid<'a>,
        date: NaiveDate,
        description: String,
    },
    /// The account still holds shares but its commodity has no known price, so its unrealized
    /// gain is unknown.
    #[error("no price for {commodity}, unrealized gain of account {account} is unknown")]
    MissingPrice {
        account: Guid<'a>,
        commodity: String,
    },
}
