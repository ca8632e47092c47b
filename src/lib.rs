//! Stock report analysis for double-entry securities ledgers.
//!
//! Every transaction touching a stock or mutual fund account is summed up from the account's
//! point of view into a [Delta](delta/struct.Delta.html), classified into a
//! [Category](category/enum.Category.html) and booked in chronological order. Booking tracks
//! holding periods: realized gain is locked in whenever the share count of an account returns
//! to zero. The [portfolio](portfolio/index.html) pass values open positions at the latest known
//! price and sums everything up.
//!
//! - `classify` - splits of one transaction relative to one account
//! - `categorize` - BUY, SELL, DIV, FEE, SPIN, SPLT, MERG, MOVE or CONV
//! - `analyze_account` - chronological walk over one account
//! - `analyze` - all security accounts plus totals
//!
//! Example
//! ```
//! use rust_decimal::Decimal;
//! use stockreport::{analyze, AnalysisOptions, Valuation};
//! use stockreport_core::*;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_commodity(Commodity::builder().guid("eur").mnemonic("EUR").build())?;
//! ledger.add_commodity(Commodity::builder().guid("acme").mnemonic("ACME").build())?;
//! ledger.add_account(Account::builder().guid("root").ty(AccountType::Root).build())?;
//! ledger.add_account(
//!     Account::builder().guid("bank").name("Bank").ty(AccountType::Bank)
//!         .parent("root").commodity("eur").build(),
//! )?;
//! ledger.add_account(
//!     Account::builder().guid("acme").name("ACME").ty(AccountType::Stock)
//!         .parent("root").commodity("acme").build(),
//! )?;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! ledger.add_transaction(
//!     Transaction::builder().guid("t1").currency("eur").post_date(date).build(),
//! )?;
//! for (guid, account, amount) in &[("s1", "acme", 1000), ("s2", "bank", -1000)] {
//!     let quantity = if *account == "acme" { 10 } else { *amount };
//!     ledger.add_split(
//!         Split::builder().guid(*guid).transaction("t1").account(*account)
//!             .value(Decimal::from(*amount)).quantity(Decimal::from(quantity)).build(),
//!     )?;
//! }
//! ledger.add_price(
//!     Price::builder().guid("p1").commodity("acme").currency("eur")
//!         .date(date).value(Decimal::from(120)).build(),
//! )?;
//!
//! let report = analyze(&ledger, &AnalysisOptions::default())?;
//! assert_eq!(report.accounts[0].valuation.unrealized_gain(), Some(Decimal::from(200)));
//! assert_eq!(report.totals.complete_gain, Decimal::from(200));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use category::{categorize, Category};
pub use classify::{classify, Classified};
pub use delta::Delta;
pub use error::{AnalysisError, AnalysisResult, Warning};
pub use holding::{analyze_account, transactions_of, Entry, Holding};
pub use options::AnalysisOptions;
pub use portfolio::{analyze, AccountReport, PortfolioReport, Totals, Valuation};

/// decision tree mapping a delta to a transaction category
pub mod category;
/// summing up the splits of one transaction for one account
pub mod classify;
pub mod delta;
pub mod error;
/// chronological booking of one account, holding periods and realized gain
pub mod holding;
pub mod options;
/// all security accounts of a ledger, valuation and totals
pub mod portfolio;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests;
