use std::borrow::Cow;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::Guid;

/// One leg of a transaction.
///
/// `value` is in the transaction's currency, `quantity` in the commodity of the account. For a
/// purchase of 10 shares at 100 EUR the stock split carries quantity `10` and value `1000`, the
/// bank split quantity and value `-1000`.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Split<'a> {
    #[builder(setter(into))]
    pub guid: Guid<'a>,

    #[builder(setter(into))]
    pub transaction: Guid<'a>,

    #[builder(setter(into))]
    pub account: Guid<'a>,

    pub value: Decimal,

    pub quantity: Decimal,

    #[builder(default, setter(into))]
    pub memo: Cow<'a, str>,
}
