//! A small book shared by the unit tests.
//!
//! ```text
//! Assets            ASSET
//!   Bank            BANK
//!   Cash            CASH
//!   Depot           ASSET
//!     ACME          STOCK   ACME
//!     INITECH       STOCK   INITECH
//!     Widget Fund   MUTUAL  WIDGET
//!   Old Depot       ASSET
//!     ACME          STOCK   ACME
//! Income            INCOME
//!   Dividends       INCOME
//! Expenses          EXPENSE
//!   Fees            EXPENSE
//! ```
use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockreport_core::{Account, AccountType, Commodity, Ledger, Price, Split, Transaction};

use crate::classify::{classify, Classified};
use crate::error::AnalysisResult;
use crate::holding::{analyze_account, Holding};
use crate::options::AnalysisOptions;

pub fn d(n: i64) -> Decimal {
    Decimal::from(n)
}

pub fn date(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub struct Book {
    pub ledger: Ledger<'static>,
    prices: usize,
}

pub fn book() -> Book {
    let mut ledger = Ledger::new();
    for (guid, mnemonic, namespace) in &[
        ("eur", "EUR", "CURRENCY"),
        ("acme", "ACME", "NYSE"),
        ("initech", "INITECH", "NYSE"),
        ("widget", "WIDGET", "FUND"),
    ] {
        ledger
            .add_commodity(
                Commodity::builder()
                    .guid(*guid)
                    .mnemonic(*mnemonic)
                    .namespace(*namespace)
                    .build(),
            )
            .unwrap();
    }
    ledger
        .add_account(Account::builder().guid("root").ty(AccountType::Root).build())
        .unwrap();
    for (guid, name, parent, ty, commodity) in &[
        ("assets", "Assets", "root", AccountType::Asset, "eur"),
        ("bank", "Bank", "assets", AccountType::Bank, "eur"),
        ("cash", "Cash", "assets", AccountType::Cash, "eur"),
        ("depot", "Depot", "assets", AccountType::Asset, "eur"),
        ("acme", "ACME", "depot", AccountType::Stock, "acme"),
        ("initech", "INITECH", "depot", AccountType::Stock, "initech"),
        ("widget", "Widget Fund", "depot", AccountType::Mutual, "widget"),
        ("olddepot", "Old Depot", "assets", AccountType::Asset, "eur"),
        ("acme2", "ACME", "olddepot", AccountType::Stock, "acme"),
        ("income", "Income", "root", AccountType::Income, "eur"),
        ("dividends", "Dividends", "income", AccountType::Income, "eur"),
        ("expenses", "Expenses", "root", AccountType::Expense, "eur"),
        ("fees", "Fees", "expenses", AccountType::Expense, "eur"),
    ] {
        ledger
            .add_account(
                Account::builder()
                    .guid(*guid)
                    .name(*name)
                    .parent(*parent)
                    .ty(ty.clone())
                    .commodity(*commodity)
                    .build(),
            )
            .unwrap();
    }
    Book { ledger, prices: 0 }
}

impl Book {
    /// Adds a transaction in EUR with one split per `(account, quantity, value)`. The guid doubles
    /// as description.
    pub fn transaction_on(
        &mut self,
        guid: &'static str,
        (y, m, day): (i32, u32, u32),
        splits: &[(&'static str, i64, i64)],
    ) {
        self.ledger
            .add_transaction(
                Transaction::builder()
                    .guid(guid)
                    .currency("eur")
                    .post_date(date(y, m, day))
                    .description(guid)
                    .build(),
            )
            .unwrap();
        for (n, (account, quantity, value)) in splits.iter().enumerate() {
            self.ledger
                .add_split(
                    Split::builder()
                        .guid(format!("{}-{}", guid, n))
                        .transaction(guid)
                        .account(*account)
                        .quantity(d(*quantity))
                        .value(d(*value))
                        .build(),
                )
                .unwrap();
        }
    }

    pub fn price(&mut self, commodity: &'static str, (y, m, day): (i32, u32, u32), value: i64) {
        self.prices += 1;
        self.ledger
            .add_price(
                Price::builder()
                    .guid(format!("price-{}", self.prices))
                    .commodity(commodity)
                    .currency("eur")
                    .date(date(y, m, day))
                    .value(d(value))
                    .build(),
            )
            .unwrap();
    }

    pub fn classify(&self, account: &str, transaction: &str) -> AnalysisResult<Classified<'static>> {
        let account = self.ledger.account(account)?;
        let transaction = self.ledger.transaction(transaction)?;
        classify(&self.ledger, account, transaction, Decimal::new(1, 3))
    }

    pub fn analyze(&self, account: &str) -> AnalysisResult<Holding<'static>> {
        let account = self.ledger.account(account)?;
        analyze_account(&self.ledger, account, &AnalysisOptions::default())
    }
}
