use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;

use crate::category::Category;

/// Summary of everything one transaction does to one holding account.
///
/// Values are in the transaction currency and carry the ledger's signs, except `income`, which is
/// kept positive. A delta always balances:
///
/// ```text
/// income + dividends + realized_gain
///     == activa_changes + expenses + shares_value + shares_moved_value + shares_other_value
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Delta {
    /// Cash and other asset/liability accounts.
    pub activa_changes: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
    /// Quantity and value booked on the holding account itself.
    pub shares: Decimal,
    pub shares_value: Decimal,
    /// Same security, different account.
    pub shares_moved: Decimal,
    pub shares_moved_value: Decimal,
    /// Different security.
    pub shares_other: Decimal,
    pub shares_other_value: Decimal,
    pub dividends: Decimal,
    pub realized_gain: Decimal,
}

impl Delta {
    /// How far the delta is off balance. Zero for a consistent delta.
    pub fn imbalance(&self) -> Decimal {
        (self.income + self.dividends + self.realized_gain)
            - (self.activa_changes
                + self.expenses
                + self.shares_value
                + self.shares_moved_value
                + self.shares_other_value)
    }

    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.imbalance().abs() < tolerance
    }

    /// Applies the bookkeeping a category implies. Dividends move all income out of `income`.
    pub fn book(mut self, category: Category) -> Self {
        if category == Category::Dividend {
            self.dividends += self.income;
            self.income = Decimal::ZERO;
        }
        self
    }

    /// Locks in the open cost basis as realized gain.
    pub fn realize(&mut self) {
        self.realized_gain -= self.shares_value;
        self.shares_value = Decimal::ZERO;
    }
}

impl AddAssign for Delta {
    fn add_assign(&mut self, other: Delta) {
        self.activa_changes += other.activa_changes;
        self.income += other.income;
        self.expenses += other.expenses;
        self.shares += other.shares;
        self.shares_value += other.shares_value;
        self.shares_moved += other.shares_moved;
        self.shares_moved_value += other.shares_moved_value;
        self.shares_other += other.shares_other;
        self.shares_other_value += other.shares_other_value;
        self.dividends += other.dividends;
        self.realized_gain += other.realized_gain;
    }
}

impl Add for Delta {
    type Output = Delta;

    fn add(mut self, other: Delta) -> Delta {
        self += other;
        self
    }
}
