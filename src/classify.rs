use rust_decimal::Decimal;
use stockreport_core::{Account, AccountType, Guid, Ledger, Transaction};

use crate::delta::Delta;
use crate::error::{AnalysisError, AnalysisResult};

/// A transaction as seen from one holding account.
#[derive(Clone, Debug, PartialEq)]
pub struct Classified<'a> {
    pub delta: Delta,
    /// Commodity of the first split on an account holding a different security.
    pub other_commodity: Option<Guid<'a>>,
}

/// Sums up all splits of `transaction` relative to `account`.
///
/// Splits on `account` itself count as shares; every other split is sorted by the type of its
/// account. Fails on account types that have no meaning for a securities account and on deltas
/// that do not balance.
pub fn classify<'a>(
    ledger: &Ledger<'a>,
    account: &Account<'a>,
    transaction: &Transaction<'a>,
    tolerance: Decimal,
) -> AnalysisResult<Classified<'a>> {
    let mut delta = Delta::default();
    let mut other_commodity = None;

    for split_guid in &transaction.splits {
        let split = ledger.split(split_guid)?;
        if split.account == account.guid {
            delta.shares += split.quantity;
            delta.shares_value += split.value;
            continue;
        }

        let counterpart = ledger.account(&split.account)?;
        match counterpart.ty {
            AccountType::Expense => delta.expenses += split.value,
            AccountType::Bank | AccountType::Asset | AccountType::Equity | AccountType::Credit => {
                delta.activa_changes += split.value
            }
            AccountType::Income => delta.income -= split.value,
            AccountType::Stock | AccountType::Mutual => {
                if counterpart.commodity == account.commodity {
                    delta.shares_moved += split.quantity;
                    delta.shares_moved_value += split.value;
                } else {
                    delta.shares_other += split.quantity;
                    delta.shares_other_value += split.value;
                    if other_commodity.is_none() {
                        other_commodity = counterpart.commodity.clone();
                    }
                }
            }
            _ => {
                return Err(AnalysisError::UnexpectedAccountType {
                    account: account.guid.to_string(),
                    transaction: transaction.guid.to_string(),
                    counterpart: counterpart.guid.to_string(),
                    ty: counterpart.ty.to_string(),
                })
            }
        }
    }

    if !delta.is_balanced(tolerance) {
        return Err(AnalysisError::AccountingIdentityViolation {
            account: account.guid.to_string(),
            transaction: transaction.guid.to_string(),
            imbalance: delta.imbalance(),
        });
    }

    Ok(Classified {
        delta,
        other_commodity,
    })
}
