use std::fmt;

use rust_decimal::Decimal;

use crate::delta::Delta;

/// Economic meaning of a transaction for a holding account.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Buy,
    Sell,
    Dividend,
    Fee,
    /// Shares of another security received for holding this one.
    SpinOff,
    /// More shares at unchanged cost basis.
    Split,
    /// Fewer shares at unchanged cost basis (reverse split).
    Merge,
    /// Shares relocated to another account holding the same security.
    Move,
    /// Shares exchanged for shares of a different security.
    Conversion,
}

impl Category {
    /// Four letter tag used in reports.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Buy => "BUY",
            Category::Sell => "SELL",
            Category::Dividend => "DIV",
            Category::Fee => "FEE",
            Category::SpinOff => "SPIN",
            Category::Split => "SPLT",
            Category::Merge => "MERG",
            Category::Move => "MOVE",
            Category::Conversion => "CONV",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Decides what a transaction was from its delta alone. `None` if no rule applies.
///
/// Rules are tried in order; the first match wins.
pub fn categorize(delta: &Delta) -> Option<Category> {
    let zero = Decimal::ZERO;

    if delta.shares.is_zero() && delta.shares_moved.is_zero() && delta.shares_other.is_zero() {
        return if delta.income > delta.expenses {
            Some(Category::Dividend)
        } else if delta.expenses > delta.income {
            Some(Category::Fee)
        } else {
            None
        };
    }

    if delta.shares_moved.is_zero() && delta.shares_other.is_zero() {
        return if delta.shares > zero && (delta.activa_changes < zero || delta.income > zero) {
            Some(Category::Buy)
        } else if delta.shares < zero && delta.activa_changes > zero {
            Some(Category::Sell)
        } else if delta.shares > zero && !delta.shares_other_value.is_zero() {
            // other security splits with value but without net quantity
            Some(Category::SpinOff)
        } else if delta.shares_value.is_zero() {
            if delta.shares > zero {
                Some(Category::Split)
            } else {
                Some(Category::Merge)
            }
        } else {
            None
        };
    }

    if delta.shares.is_zero() && delta.shares_other > zero {
        Some(Category::SpinOff)
    } else if !delta.shares_moved.is_zero() && delta.shares_moved == -delta.shares {
        Some(Category::Move)
    } else if (delta.shares < zero && delta.shares_other > zero)
        || (delta.shares > zero && delta.shares_other < zero)
    {
        Some(Category::Conversion)
    } else {
        None
    }
}
