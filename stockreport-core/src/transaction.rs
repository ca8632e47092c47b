use std::borrow::Cow;

use chrono::NaiveDate;
use typed_builder::TypedBuilder;

use super::Guid;

/// A balanced set of splits posted on one date.
///
/// Split values are denominated in `currency`; by double-entry convention they sum to zero.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Transaction<'a> {
    #[builder(setter(into))]
    pub guid: Guid<'a>,

    #[builder(setter(into))]
    pub currency: Guid<'a>,

    pub post_date: NaiveDate,

    #[builder(default, setter(into))]
    pub num: Cow<'a, str>,

    #[builder(default, setter(into))]
    pub description: Cow<'a, str>,

    /// Maintained by the ledger, in insertion order.
    #[builder(default)]
    pub splits: Vec<Guid<'a>>,
}
