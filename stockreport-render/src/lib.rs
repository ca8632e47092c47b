use rust_decimal::Decimal;
use std::{io, io::Write};
use stockreport::{AccountReport, Category, Entry, PortfolioReport, Totals, Valuation, Warning};
use thiserror::Error;


/// Renders analysis results as a plain text report.
///
/// Per account the report shows a summary of shares, cost basis, dividends and fees, the realized
/// gain and the valuation of what is still held; with `transactions` set every booked
/// transaction is listed as well. A totals block closes the report.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct TextRenderer {
    transactions: bool,
    currency: Option<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// List every booked transaction below the account name.
    pub fn with_transactions(mut self) -> Self {
        self.transactions = true;
        self
    }

    /// Currency label printed next to the totals.
    pub fn with_currency<S: Into<String>>(mut self, currency: S) -> Self {
        self.currency = Some(currency.into());
        self
    }

    fn currency_label(&self) -> String {
        match &self.currency {
            Some(currency) => format!("{} ", currency),
            None => String::new(),
        }
    }
}

pub fn render<W: Write>(w: &mut W, report: &PortfolioReport<'_>) -> Result<(), RenderError> {
    TextRenderer::default().render(report, w)
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

/// Rounds to cents and drops the sign of zero.
fn money(amount: Decimal) -> Decimal {
    let amount = amount.round_dp(2);
    if amount.is_zero() {
        Decimal::ZERO
    } else {
        amount
    }
}

fn quantity(shares: Decimal) -> Decimal {
    if shares.is_zero() {
        Decimal::ZERO
    } else {
        shares.normalize()
    }
}

const DATE_FORMAT: &str = "%d.%m.%Y";

impl<'a, W: Write> Renderer<&'a PortfolioReport<'_>, W> for TextRenderer {
    type Error = RenderError;
    fn render(&self, report: &'a PortfolioReport<'_>, w: &mut W) -> Result<(), Self::Error> {
        for account in &report.accounts {
            self.render(account, w)?;
        }
        for warning in &report.warnings {
            self.render(warning, w)?;
        }
        self.render(&report.totals, w)
    }
}

impl<'a, W: Write> Renderer<&'a AccountReport<'_>, W> for TextRenderer {
    type Error = RenderError;
    fn render(&self, account: &'a AccountReport<'_>, w: &mut W) -> Result<(), Self::Error> {
        let holding = &account.holding;
        writeln!(w, "{}", account.name)?;
        if self.transactions {
            for entry in &holding.entries {
                self.render(entry, w)?;
            }
        }
        writeln!(
            w,
            "  => {} shares, {:.2} cost basis, {:.2} dividends, {:.2} fees",
            quantity(holding.shares),
            money(holding.shares_value),
            money(holding.dividends),
            money(holding.expenses)
        )?;
        writeln!(
            w,
            "  => {:.2} realized, {} days held",
            money(holding.realized_gain),
            holding.realized_days
        )?;
        if let Some(begin) = holding.period_begin {
            writeln!(w, "  => holding since {}", begin.format(DATE_FORMAT))?;
        }
        match &account.valuation {
            Valuation::Flat => {}
            Valuation::Priced {
                price,
                market_value,
                unrealized_gain,
            } => writeln!(
                w,
                "  => share value {:.2} [on {}], {:.2} unrealized",
                money(*market_value),
                price.date.format(DATE_FORMAT),
                money(*unrealized_gain)
            )?,
            Valuation::MissingPrice => writeln!(
                w,
                "  => share value unknown, no price for {}",
                account.commodity
            )?,
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Entry<'_>, W> for TextRenderer {
    type Error = RenderError;
    fn render(&self, entry: &'a Entry<'_>, w: &mut W) -> Result<(), Self::Error> {
        let delta = &entry.delta;
        let amount = match entry.category {
            Category::Dividend => delta.dividends,
            _ => delta.shares_value,
        };
        writeln!(
            w,
            "    {} {:<4} {:>6} shares {:>10.2} fees {:>7.2}",
            entry.date.format(DATE_FORMAT),
            entry.category,
            quantity(delta.shares),
            money(amount),
            money(delta.expenses)
        )?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Warning<'_>, W> for TextRenderer {
    type Error = RenderError;
    fn render(&self, warning: &'a Warning<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(w, "! {}", warning)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Totals, W> for TextRenderer {
    type Error = RenderError;
    fn render(&self, totals: &'a Totals, w: &mut W) -> Result<(), Self::Error> {
        let cur = self.currency_label();
        writeln!(w, "-----------")?;
        writeln!(w, "{:>10.2} fees", money(totals.fees))?;
        writeln!(w, "{:>10.2} {}gain realized", money(totals.realized_gain), cur)?;
        write!(w, "{:>10.2} {}gain unrealized", money(totals.unrealized_gain), cur)?;
        match totals.indeterminate {
            0 => writeln!(w)?,
            1 => writeln!(w, " (1 account without price)")?,
            n => writeln!(w, " ({} accounts without price)", n)?,
        }
        writeln!(w, "{:>10.2} {}dividends", money(totals.dividends), cur)?;
        writeln!(w, "----")?;
        writeln!(w, "{:>10.2} {}complete gain", money(totals.complete_gain), cur)?;
        Ok(())
    }
}
