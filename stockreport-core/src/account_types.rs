use std::borrow::Cow;
use std::fmt;

/// Account types as tagged in a GnuCash book.
///
/// Unknown tags are kept verbatim in `Other` so that consumers can decide whether a taxonomy they
/// do not understand is an error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum AccountType<'a> {
    None,
    Bank,
    Cash,
    Credit,
    Asset,
    Liability,
    Stock,
    Mutual,
    Currency,
    Income,
    Expense,
    Equity,
    Receivable,
    Payable,
    Root,
    Trading,
    Other(Cow<'a, str>),
}

impl AccountType<'_> {
    /// The tag used for this type in the ledger storage.
    pub fn as_str(&self) -> &str {
        match self {
            AccountType::None => "NONE",
            AccountType::Bank => "BANK",
            AccountType::Cash => "CASH",
            AccountType::Credit => "CREDIT",
            AccountType::Asset => "ASSET",
            AccountType::Liability => "LIABILITY",
            AccountType::Stock => "STOCK",
            AccountType::Mutual => "MUTUAL",
            AccountType::Currency => "CURRENCY",
            AccountType::Income => "INCOME",
            AccountType::Expense => "EXPENSE",
            AccountType::Equity => "EQUITY",
            AccountType::Receivable => "RECEIVABLE",
            AccountType::Payable => "PAYABLE",
            AccountType::Root => "ROOT",
            AccountType::Trading => "TRADING",
            AccountType::Other(tag) => tag,
        }
    }

    /// Whether accounts of this type hold shares of a security.
    pub fn is_security(&self) -> bool {
        matches!(self, AccountType::Stock | AccountType::Mutual)
    }
}

impl Default for AccountType<'_> {
    fn default() -> Self {
        AccountType::None
    }
}

impl fmt::Display for AccountType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> From<&'a str> for AccountType<'a> {
    fn from(s: &'a str) -> Self {
        Cow::from(s).into()
    }
}

impl From<String> for AccountType<'_> {
    fn from(s: String) -> Self {
        Cow::from(s).into()
    }
}

impl<'a> From<Cow<'a, str>> for AccountType<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        match &*s {
            "NONE" => AccountType::None,
            "BANK" => AccountType::Bank,
            "CASH" => AccountType::Cash,
            "CREDIT" => AccountType::Credit,
            "ASSET" => AccountType::Asset,
            "LIABILITY" => AccountType::Liability,
            "STOCK" => AccountType::Stock,
            "MUTUAL" => AccountType::Mutual,
            "CURRENCY" => AccountType::Currency,
            "INCOME" => AccountType::Income,
            "EXPENSE" => AccountType::Expense,
            "EQUITY" => AccountType::Equity,
            "RECEIVABLE" => AccountType::Receivable,
            "PAYABLE" => AccountType::Payable,
            "ROOT" => AccountType::Root,
            "TRADING" => AccountType::Trading,
            _ => AccountType::Other(s),
        }
    }
}
