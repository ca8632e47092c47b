use std::borrow::Cow;

use typed_builder::TypedBuilder;

use super::price::Price;
use super::Guid;

/// Namespace GnuCash uses for ISO currencies.
pub const CURRENCY_NAMESPACE: &str = "CURRENCY";

/// A currency or security.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Commodity<'a> {
    #[builder(setter(into))]
    pub guid: Guid<'a>,

    /// Short symbol, e.g. `EUR` or a ticker.
    #[builder(setter(into))]
    pub mnemonic: Cow<'a, str>,

    #[builder(default, setter(into))]
    pub fullname: Cow<'a, str>,

    /// Either [CURRENCY_NAMESPACE](constant.CURRENCY_NAMESPACE.html) or the exchange/fund
    /// namespace of a security.
    #[builder(default, setter(into))]
    pub namespace: Cow<'a, str>,

    /// Number of decimal places used when displaying quantities.
    #[builder(default = 2)]
    pub precision: u32,

    /// Whether quotes for this commodity should be fetched.
    #[builder(default)]
    pub quote_flag: bool,

    #[builder(default, setter(into))]
    pub quote_source: Cow<'a, str>,

    /// Known prices, ascending by date. Maintained by the ledger.
    #[builder(default)]
    pub prices: Vec<Price<'a>>,
}

impl<'a> Commodity<'a> {
    pub fn is_currency(&self) -> bool {
        self.namespace == CURRENCY_NAMESPACE
    }

    /// The most recent known price.
    pub fn latest_price(&self) -> Option<&Price<'a>> {
        self.prices.last()
    }

    pub(crate) fn insert_price(&mut self, price: Price<'a>) {
        let at = self.prices.partition_point(|p| p.date <= price.date);
        self.prices.insert(at, price);
    }
}
