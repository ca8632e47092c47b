use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockreport_core::{Account, Guid, Ledger, Transaction};

use crate::category::{categorize, Category};
use crate::classify::classify;
use crate::delta::Delta;
use crate::error::{AnalysisError, AnalysisResult, Warning};
use crate::options::AnalysisOptions;

/// A classified transaction as booked into a holding.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<'a> {
    pub date: NaiveDate,
    pub transaction: Guid<'a>,
    pub description: String,
    pub category: Category,
    /// The delta after booking, e.g. with dividend income moved to `dividends`.
    pub delta: Delta,
    pub other_commodity: Option<Guid<'a>>,
}

/// Result of walking one account's history.
#[derive(Clone, Debug, PartialEq)]
pub struct Holding<'a> {
    /// Realized gain of closed periods plus dividends minus expenses.
    pub realized_gain: Decimal,
    /// Cost basis of the open position.
    pub shares_value: Decimal,
    pub expenses: Decimal,
    pub dividends: Decimal,
    /// Shares currently held.
    pub shares: Decimal,
    /// Sum of the lengths of all closed holding periods.
    pub realized_days: i64,
    /// Start of the open holding period.
    pub period_begin: Option<NaiveDate>,
    pub entries: Vec<Entry<'a>>,
    pub warnings: Vec<Warning<'a>>,
}

/// Running state while walking an account chronologically.
#[derive(Debug)]
struct Tracker<'t> {
    account: &'t str,
    tolerance: Decimal,
    sum: Delta,
    period_begin: Option<NaiveDate>,
    realized_days: i64,
}

impl<'t> Tracker<'t> {
    fn new(account: &'t str, tolerance: Decimal) -> Self {
        Tracker {
            account,
            tolerance,
            sum: Delta::default(),
            period_begin: None,
            realized_days: 0,
        }
    }

    fn add(&mut self, date: NaiveDate, transaction: &str, delta: &Delta) -> AnalysisResult<()> {
        self.sum += *delta;
        if !self.sum.is_balanced(self.tolerance) {
            return Err(AnalysisError::AccountingIdentityViolation {
                account: self.account.to_string(),
                transaction: transaction.to_string(),
                imbalance: self.sum.imbalance(),
            });
        }

        let moved_shares = !delta.shares.is_zero();
        if moved_shares && (self.sum.shares - delta.shares).abs() < self.tolerance {
            if let Some(open_since) = self.period_begin {
                return Err(AnalysisError::PeriodInvariantViolation {
                    account: self.account.to_string(),
                    transaction: transaction.to_string(),
                    open_since,
                });
            }
            self.period_begin = Some(date);
        }

        if self.sum.shares.abs() < self.tolerance {
            if moved_shares {
                if let Some(begin) = self.period_begin.take() {
                    self.realized_days += (date - begin).num_days();
                }
            }
            self.sum.realize();
        }
        Ok(())
    }

    fn finish<'a>(self, entries: Vec<Entry<'a>>, warnings: Vec<Warning<'a>>) -> Holding<'a> {
        Holding {
            realized_gain: self.sum.realized_gain + self.sum.dividends - self.sum.expenses,
            shares_value: self.sum.shares_value,
            expenses: self.sum.expenses,
            dividends: self.sum.dividends,
            shares: self.sum.shares,
            realized_days: self.realized_days,
            period_begin: self.period_begin,
            entries,
            warnings,
        }
    }
}

/// Transactions touching `account`, each once, ordered by post date. Transactions posted on the
/// same day keep the order of their first split on the account.
pub fn transactions_of<'l, 'a>(
    ledger: &'l Ledger<'a>,
    account: &Account<'a>,
) -> AnalysisResult<Vec<&'l Transaction<'a>>> {
    let mut seen = HashSet::new();
    let mut transactions = Vec::new();
    for split_guid in &account.splits {
        let split = ledger.split(split_guid)?;
        if seen.insert(split.transaction.as_ref()) {
            transactions.push(ledger.transaction(&split.transaction)?);
        }
    }
    transactions.sort_by_key(|t| t.post_date);
    Ok(transactions)
}

/// Walks the history of `account`, classifying and booking every transaction.
///
/// Unclassified transactions are skipped and reported in `Holding::warnings`. A holding period
/// opens when the share count leaves zero and closes when it returns there; the open cost basis
/// is realized at that point.
pub fn analyze_account<'a>(
    ledger: &Ledger<'a>,
    account: &Account<'a>,
    options: &AnalysisOptions,
) -> AnalysisResult<Holding<'a>> {
    let mut tracker = Tracker::new(&account.guid, options.tolerance);
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for transaction in transactions_of(ledger, account)? {
        let classified = classify(ledger, account, transaction, options.tolerance)?;
        let category = match categorize(&classified.delta) {
            Some(category) => category,
            None => {
                log::warn!(
                    "{}: cannot classify transaction {} ({}) on account {}: {:?}",
                    transaction.post_date,
                    transaction.guid,
                    transaction.description,
                    account.name,
                    classified.delta
                );
                warnings.push(Warning::Unclassified {
                    account: account.guid.clone(),
                    transaction: transaction.guid.clone(),
                    date: transaction.post_date,
                    description: transaction.description.to_string(),
                });
                continue;
            }
        };

        let delta = classified.delta.book(category);
        log::debug!(
            "{} {:<4} {} shares {} value on {}",
            transaction.post_date,
            category,
            delta.shares,
            delta.shares_value,
            account.name
        );
        tracker.add(transaction.post_date, &transaction.guid, &delta)?;
        entries.push(Entry {
            date: transaction.post_date,
            transaction: transaction.guid.clone(),
            description: transaction.description.to_string(),
            category,
            delta,
            other_commodity: classified.other_commodity,
        });
    }

    let holding = tracker.finish(entries, warnings);
    log::info!(
        "{}: {} shares, {} realized over {} days",
        account.name,
        holding.shares,
        holding.realized_gain,
        holding.realized_days
    );
    Ok(holding)
}
