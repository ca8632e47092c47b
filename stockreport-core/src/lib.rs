use std::borrow::Cow;
use std::collections::HashMap;

pub use account::Account;
pub use account_types::AccountType;
pub use commodity::Commodity;
pub use error::{LedgerError, LedgerResult, ObjectKind};
pub use price::Price;
pub use split::Split;
pub use transaction::Transaction;

pub mod account;
pub mod account_types;
pub mod commodity;
pub mod error;
pub mod price;
pub mod split;
pub mod transaction;

/// Identity of a ledger object.
pub type Guid<'a> = Cow<'a, str>;

/// Represents a complete, linked book: every account, commodity, transaction, split and price.
///
/// Objects are added bottom-up (commodities, then accounts parent-first, then transactions,
/// then their splits; prices once their commodity and currency exist). Every reference is checked
/// when an object is added, so lookups during analysis only fail for guids that were never part
/// of the book.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger<'a> {
    accounts: Vec<Account<'a>>,
    account_index: HashMap<Guid<'a>, usize>,
    commodities: HashMap<Guid<'a>, Commodity<'a>>,
    transactions: HashMap<Guid<'a>, Transaction<'a>>,
    splits: HashMap<Guid<'a>, Split<'a>>,
}

impl<'a> Ledger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_commodity(&mut self, commodity: Commodity<'a>) -> LedgerResult<()> {
        if self.commodities.contains_key(&commodity.guid) {
            return Err(duplicate(ObjectKind::Commodity, &commodity.guid));
        }
        self.commodities.insert(commodity.guid.clone(), commodity);
        Ok(())
    }

    pub fn add_account(&mut self, account: Account<'a>) -> LedgerResult<()> {
        if self.account_index.contains_key(&account.guid) {
            return Err(duplicate(ObjectKind::Account, &account.guid));
        }
        match &account.commodity {
            Some(commodity) if !self.commodities.contains_key(commodity) => {
                return Err(dangling(
                    ObjectKind::Account,
                    &account.guid,
                    ObjectKind::Commodity,
                    commodity,
                ));
            }
            None if !account.is_root() => {
                return Err(LedgerError::MissingCommodity(account.guid.to_string()));
            }
            _ => {}
        }
        if let Some(parent) = &account.parent {
            let idx = *self.account_index.get(parent).ok_or_else(|| {
                dangling(ObjectKind::Account, &account.guid, ObjectKind::Account, parent)
            })?;
            self.accounts[idx].children.push(account.guid.clone());
        }
        self.account_index
            .insert(account.guid.clone(), self.accounts.len());
        self.accounts.push(account);
        Ok(())
    }

    pub fn add_transaction(&mut self, transaction: Transaction<'a>) -> LedgerResult<()> {
        if self.transactions.contains_key(&transaction.guid) {
            return Err(duplicate(ObjectKind::Transaction, &transaction.guid));
        }
        if !self.commodities.contains_key(&transaction.currency) {
            return Err(dangling(
                ObjectKind::Transaction,
                &transaction.guid,
                ObjectKind::Commodity,
                &transaction.currency,
            ));
        }
        self.transactions
            .insert(transaction.guid.clone(), transaction);
        Ok(())
    }

    /// Adds a split and links it into its transaction and its account.
    pub fn add_split(&mut self, split: Split<'a>) -> LedgerResult<()> {
        if self.splits.contains_key(&split.guid) {
            return Err(duplicate(ObjectKind::Split, &split.guid));
        }
        let account_idx = *self.account_index.get(&split.account).ok_or_else(|| {
            dangling(ObjectKind::Split, &split.guid, ObjectKind::Account, &split.account)
        })?;
        let transaction = self.transactions.get_mut(&split.transaction).ok_or_else(|| {
            dangling(
                ObjectKind::Split,
                &split.guid,
                ObjectKind::Transaction,
                &split.transaction,
            )
        })?;
        transaction.splits.push(split.guid.clone());
        self.accounts[account_idx].splits.push(split.guid.clone());
        self.splits.insert(split.guid.clone(), split);
        Ok(())
    }

    /// Adds a price to its commodity, keeping the commodity's prices ordered by date.
    pub fn add_price(&mut self, price: Price<'a>) -> LedgerResult<()> {
        if !self.commodities.contains_key(&price.currency) {
            return Err(dangling(
                ObjectKind::Price,
                &price.guid,
                ObjectKind::Commodity,
                &price.currency,
            ));
        }
        let commodity = match self.commodities.get_mut(&price.commodity) {
            Some(commodity) => commodity,
            None => {
                return Err(dangling(
                    ObjectKind::Price,
                    &price.guid,
                    ObjectKind::Commodity,
                    &price.commodity,
                ))
            }
        };
        if commodity.prices.iter().any(|p| p.guid == price.guid) {
            return Err(duplicate(ObjectKind::Price, &price.guid));
        }
        commodity.insert_price(price);
        Ok(())
    }

    pub fn account(&self, guid: &str) -> LedgerResult<&Account<'a>> {
        self.account_index
            .get(guid)
            .map(|&idx| &self.accounts[idx])
            .ok_or_else(|| LedgerError::not_found(ObjectKind::Account, guid))
    }

    /// All accounts, in the order they were added.
    pub fn accounts(&self) -> impl Iterator<Item = &Account<'a>> {
        self.accounts.iter()
    }

    pub fn commodity(&self, guid: &str) -> LedgerResult<&Commodity<'a>> {
        self.commodities
            .get(guid)
            .ok_or_else(|| LedgerError::not_found(ObjectKind::Commodity, guid))
    }

    /// The commodity held in `account`.
    pub fn account_commodity(&self, account: &Account<'a>) -> LedgerResult<&Commodity<'a>> {
        let guid = account
            .commodity
            .as_ref()
            .ok_or_else(|| LedgerError::MissingCommodity(account.guid.to_string()))?;
        self.commodity(guid)
    }

    pub fn transaction(&self, guid: &str) -> LedgerResult<&Transaction<'a>> {
        self.transactions
            .get(guid)
            .ok_or_else(|| LedgerError::not_found(ObjectKind::Transaction, guid))
    }

    pub fn split(&self, guid: &str) -> LedgerResult<&Split<'a>> {
        self.splits
            .get(guid)
            .ok_or_else(|| LedgerError::not_found(ObjectKind::Split, guid))
    }

    /// Colon separated name of `account`, leaving out the root account.
    ///
    /// With `max_depth` set only the innermost `max_depth` levels are used, e.g. `Depot:ACME`
    /// instead of `Assets:Broker:Depot:ACME` for a depth of two.
    pub fn full_account_name(
        &self,
        account: &Account<'a>,
        max_depth: Option<usize>,
    ) -> LedgerResult<String> {
        let mut parts = Vec::new();
        let mut current = account;
        while !current.is_root() && max_depth.map_or(true, |depth| parts.len() < depth) {
            parts.push(current.name.as_ref());
            match &current.parent {
                Some(parent) => current = self.account(parent)?,
                None => break,
            }
        }
        parts.reverse();
        Ok(parts.join(":"))
    }
}

fn duplicate(kind: ObjectKind, guid: &str) -> LedgerError {
    LedgerError::Duplicate {
        kind,
        guid: guid.to_string(),
    }
}

fn dangling(kind: ObjectKind, guid: &str, target: ObjectKind, target_guid: &str) -> LedgerError {
    LedgerError::Dangling {
        kind,
        guid: guid.to_string(),
        target,
        target_guid: target_guid.to_string(),
    }
}
