use rust_decimal::Decimal;
use stockreport_core::{Account, Guid, Ledger, Price};

use crate::error::{AnalysisResult, Warning};
use crate::holding::{analyze_account, Holding};
use crate::options::AnalysisOptions;

/// Market valuation of what an account still holds.
#[derive(Clone, Debug, PartialEq)]
pub enum Valuation<'a> {
    /// No shares left, nothing unrealized.
    Flat,
    /// Valued at the latest known price.
    Priced {
        price: Price<'a>,
        market_value: Decimal,
        unrealized_gain: Decimal,
    },
    /// Shares are held but no price is known; the unrealized gain is indeterminate.
    MissingPrice,
}

impl Valuation<'_> {
    /// Unrealized gain, `None` if it cannot be determined.
    pub fn unrealized_gain(&self) -> Option<Decimal> {
        match self {
            Valuation::Flat => Some(Decimal::ZERO),
            Valuation::Priced {
                unrealized_gain, ..
            } => Some(*unrealized_gain),
            Valuation::MissingPrice => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccountReport<'a> {
    pub guid: Guid<'a>,
    pub name: String,
    /// Mnemonic of the security held.
    pub commodity: String,
    pub holding: Holding<'a>,
    pub valuation: Valuation<'a>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Totals {
    pub fees: Decimal,
    pub dividends: Decimal,
    pub realized_gain: Decimal,
    /// Sum over the accounts whose valuation is known.
    pub unrealized_gain: Decimal,
    pub complete_gain: Decimal,
    /// Accounts left out of `unrealized_gain` for lack of prices.
    pub indeterminate: usize,
}

impl Totals {
    /// Whether every open position could be valued.
    pub fn is_complete(&self) -> bool {
        self.indeterminate == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioReport<'a> {
    pub accounts: Vec<AccountReport<'a>>,
    pub totals: Totals,
    pub warnings: Vec<Warning<'a>>,
}

fn value<'a>(
    ledger: &Ledger<'a>,
    account: &Account<'a>,
    holding: &Holding<'a>,
    options: &AnalysisOptions,
) -> AnalysisResult<(Valuation<'a>, Option<Warning<'a>>)> {
    if holding.shares.abs() < options.tolerance {
        return Ok((Valuation::Flat, None));
    }
    let commodity = ledger.account_commodity(account)?;
    match commodity.latest_price() {
        Some(price) => {
            let market_value = holding.shares * price.value;
            Ok((
                Valuation::Priced {
                    price: price.clone(),
                    market_value,
                    unrealized_gain: market_value - holding.shares_value,
                },
                None,
            ))
        }
        None => {
            log::warn!(
                "no price for {} held in {}, unrealized gain unknown",
                commodity.mnemonic,
                account.name
            );
            Ok((
                Valuation::MissingPrice,
                Some(Warning::MissingPrice {
                    account: account.guid.clone(),
                    commodity: commodity.mnemonic.to_string(),
                }),
            ))
        }
    }
}

/// Analyzes every stock and mutual fund account of the ledger and sums up the results.
///
/// The complete gain adds the dividend total on top of the realized total, although each
/// account's realized gain already contains its dividends.
pub fn analyze<'a>(
    ledger: &Ledger<'a>,
    options: &AnalysisOptions,
) -> AnalysisResult<PortfolioReport<'a>> {
    let mut accounts = Vec::new();
    let mut warnings = Vec::new();
    let mut totals = Totals::default();

    for account in ledger.accounts().filter(|a| a.ty.is_security()) {
        let mut holding = analyze_account(ledger, account, options)?;
        warnings.extend(holding.warnings.iter().cloned());

        totals.fees += holding.expenses;
        totals.dividends += holding.dividends;
        totals.realized_gain += holding.realized_gain;

        let (valuation, warning) = value(ledger, account, &holding, options)?;
        match valuation.unrealized_gain() {
            Some(gain) => totals.unrealized_gain += gain,
            None => totals.indeterminate += 1,
        }
        if let Some(warning) = warning {
            holding.warnings.push(warning.clone());
            warnings.push(warning);
        }

        accounts.push(AccountReport {
            guid: account.guid.clone(),
            name: ledger.full_account_name(account, options.name_depth)?,
            commodity: ledger.account_commodity(account)?.mnemonic.to_string(),
            holding,
            valuation,
        });
    }

    totals.complete_gain = totals.realized_gain + totals.unrealized_gain + totals.dividends;
    Ok(PortfolioReport {
        accounts,
        totals,
        warnings,
    })
}
