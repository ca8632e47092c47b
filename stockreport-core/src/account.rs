use typed_builder::TypedBuilder;

use std::borrow::Cow;

use super::account_types::AccountType;
use super::Guid;

/// Represents an account.
///
/// Accounts form a tree below a single `ROOT` account. Every other account holds exactly one
/// commodity, which is the unit of the quantities of its splits. For `STOCK` and `MUTUAL`
/// accounts that commodity is the security held.
///
/// `children` and `splits` are maintained by the [Ledger](../struct.Ledger.html) and keep the
/// order in which objects were added.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Account<'a> {
    #[builder(setter(into))]
    pub guid: Guid<'a>,

    /// Name of the account, without its parents.
    #[builder(default, setter(into))]
    pub name: Cow<'a, str>,

    /// Type of the account.
    pub ty: AccountType<'a>,

    /// Commodity held in this account. Only the root account has none.
    #[builder(default, setter(strip_option, into))]
    pub commodity: Option<Guid<'a>>,

    #[builder(default, setter(strip_option, into))]
    pub parent: Option<Guid<'a>>,

    #[builder(default, setter(into))]
    pub description: Cow<'a, str>,

    #[builder(default)]
    pub children: Vec<Guid<'a>>,

    #[builder(default)]
    pub splits: Vec<Guid<'a>>,
}

impl Account<'_> {
    pub fn is_root(&self) -> bool {
        self.ty == AccountType::Root
    }
}
