use chrono::NaiveDate;
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::Guid;

/// A point-in-time exchange rate: one unit of `commodity` was worth `value` units of `currency`
/// on `date`.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Price<'a> {
    #[builder(setter(into))]
    pub guid: Guid<'a>,

    #[builder(setter(into))]
    pub commodity: Guid<'a>,

    #[builder(setter(into))]
    pub currency: Guid<'a>,

    pub date: NaiveDate,

    pub value: Decimal,
}
