//! Cart line model

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::{MenuItem, MenuOption};

/// Selected options keyed by group name.
///
/// One concrete option per group name: VARIANT groups hold their single
/// selection, ADD_ON groups hold at most one toggled option under their own
/// name. A `BTreeMap` keeps flattened descriptions deterministic.
pub type SelectedOptions = BTreeMap<String, MenuOption>;

/// A configured item inside the cart.
///
/// `final_unit_price` is fixed at line creation; changing the option
/// selection later means creating a new line, not mutating this one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique per configuration + add event
    pub cart_line_id: String,
    pub item: MenuItem,
    pub selected_options: SelectedOptions,
    pub quantity: u32,
    /// base_price + sum of selected price modifiers, clamped at zero
    pub final_unit_price: Decimal,
}

impl CartLine {
    /// Create a line with quantity 1 and the price invariant applied.
    pub fn new(item: MenuItem, selected_options: SelectedOptions) -> Self {
        let modifiers: Decimal = selected_options.values().map(|o| o.price_modifier).sum();
        let final_unit_price = (item.base_price + modifiers).max(Decimal::ZERO);
        Self {
            cart_line_id: uuid::Uuid::new_v4().to_string(),
            item,
            selected_options,
            quantity: 1,
            final_unit_price,
        }
    }

    /// Line total at current quantity (exact, unrounded).
    pub fn line_total(&self) -> Decimal {
        self.final_unit_price * Decimal::from(self.quantity)
    }

    /// Flatten selections to `"Group: Choice; Group: Choice"` for receipts.
    pub fn flattened_options(&self) -> String {
        self.selected_options
            .iter()
            .map(|(group, option)| format!("{}: {}", group, option.name))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
