//! In-memory cart and totals computation
//!
//! The cart is mutated only by discrete UI actions on a single thread; there
//! is no concurrent mutation source and no locking. Totals are recomputed on
//! every read, never cached.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::cart::{CartLine, SelectedOptions};
use crate::models::menu::MenuItem;
use crate::money::{round_money, to_minor_units};

/// Default tax rate applied to the subtotal (13%)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Cart-level money amounts, exact until rendered.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Total rounded to currency precision (half-up to cents).
    pub fn total_rounded(&self) -> Decimal {
        round_money(self.total)
    }

    /// Chargeable amount in integer minor units (cents).
    pub fn total_minor_units(&self) -> i64 {
        to_minor_units(self.total)
    }
}

/// The customer's cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across lines (the cart badge number).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Add an item with no configurable options.
    ///
    /// Merges into an existing line of the same item id by incrementing
    /// quantity. Returns the line id the add landed on.
    pub fn add_simple(&mut self, item: MenuItem) -> String {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item.id == item.id && l.selected_options.is_empty())
        {
            line.quantity += 1;
            return line.cart_line_id.clone();
        }
        let line = CartLine::new(item, SelectedOptions::new());
        let id = line.cart_line_id.clone();
        self.lines.push(line);
        id
    }

    /// Add a configured item.
    ///
    /// Always appends a fresh line, even for an identical item and
    /// selection; configured adds never merge. This asymmetry with
    /// [`add_simple`](Self::add_simple) is deliberate and kept as observed.
    pub fn add_configured(&mut self, item: MenuItem, selections: SelectedOptions) -> String {
        let line = CartLine::new(item, selections);
        let id = line.cart_line_id.clone();
        self.lines.push(line);
        id
    }

    /// Set a line's quantity. Zero or below removes the line; there is no
    /// upper bound.
    pub fn update_quantity(&mut self, cart_line_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(cart_line_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.cart_line_id == cart_line_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove a line by id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, cart_line_id: &str) {
        self.lines.retain(|l| l.cart_line_id != cart_line_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute subtotal, tax and total at the given rate.
    pub fn totals(&self, tax_rate: Decimal) -> Totals {
        let subtotal: Decimal = self.lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal * tax_rate;
        Totals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Pre-fill the default selection for an item's required groups.
///
/// Each required group with at least one option defaults to its first
/// option; optional groups start unselected.
pub fn default_selections(item: &MenuItem) -> SelectedOptions {
    let mut selections = SelectedOptions::new();
    for group in &item.option_groups {
        if group.required
            && let Some(first) = group.options.first()
        {
            selections.insert(group.name.clone(), first.clone());
        }
    }
    selections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::{GroupKind, MenuOption, OptionGroup};
    use crate::money::to_decimal;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("Item {id}"),
            description: String::new(),
            base_price: to_decimal(price),
            category_slug: "rolls".into(),
            location_tag: "front".into(),
            option_groups: vec![],
        }
    }

    fn selections(group: &str, name: &str, modifier: f64) -> SelectedOptions {
        let mut s = SelectedOptions::new();
        s.insert(
            group.into(),
            MenuOption {
                name: name.into(),
                price_modifier: to_decimal(modifier),
            },
        );
        s
    }

    #[test]
    fn test_add_simple_merges_same_item() {
        let mut cart = Cart::new();
        let first = cart.add_simple(item("1", 10.0));
        let second = cart.add_simple(item("1", 10.0));
        assert_eq!(first, second);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_configured_never_merges() {
        let mut cart = Cart::new();
        cart.add_configured(item("1", 10.0), selections("Size", "Large", 2.0));
        cart.add_configured(item("1", 10.0), selections("Size", "Large", 2.0));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_simple_add_does_not_merge_into_configured_line() {
        let mut cart = Cart::new();
        cart.add_configured(item("1", 10.0), selections("Size", "Large", 2.0));
        cart.add_simple(item("1", 10.0));
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        let id = cart.add_simple(item("1", 10.0));
        cart.update_quantity(&id, 0);
        assert!(cart.is_empty());

        let id = cart.add_simple(item("1", 10.0));
        cart.update_quantity(&id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_replaces_in_place() {
        let mut cart = Cart::new();
        let id = cart.add_simple(item("1", 10.0));
        cart.update_quantity(&id, 7);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_update_quantity_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        let id = cart.add_simple(item("1", 10.0));
        cart.update_quantity(&id, i64::from(u32::MAX) + 2);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        let id = cart.add_simple(item("1", 10.0));
        cart.remove(&id);
        cart.remove(&id);
        cart.remove("never-existed");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_example_at_13_percent() {
        let mut cart = Cart::new();
        let a = cart.add_simple(item("1", 10.0));
        cart.update_quantity(&a, 2);
        cart.add_simple(item("2", 5.50));

        let totals = cart.totals(DEFAULT_TAX_RATE);
        assert_eq!(totals.subtotal, to_decimal(25.50));
        assert_eq!(totals.tax, "3.315".parse().unwrap());
        assert_eq!(totals.total, "28.815".parse().unwrap());
        assert_eq!(totals.total_rounded(), "28.82".parse().unwrap());
        assert_eq!(totals.total_minor_units(), 2882);
    }

    #[test]
    fn test_totals_recomputed_on_every_read() {
        let mut cart = Cart::new();
        let id = cart.add_simple(item("1", 10.0));
        assert_eq!(cart.totals(Decimal::ZERO).subtotal, to_decimal(10.0));
        cart.update_quantity(&id, 3);
        assert_eq!(cart.totals(Decimal::ZERO).subtotal, to_decimal(30.0));
    }

    #[test]
    fn test_default_selections_fill_required_groups() {
        let mut i = item("1", 15.99);
        i.option_groups = vec![
            OptionGroup {
                name: "Set".into(),
                kind: GroupKind::Variant,
                required: true,
                options: vec![
                    MenuOption {
                        name: "Set A".into(),
                        price_modifier: Decimal::ZERO,
                    },
                    MenuOption {
                        name: "Set B".into(),
                        price_modifier: to_decimal(-3.0),
                    },
                ],
            },
            OptionGroup {
                name: "Extras".into(),
                kind: GroupKind::AddOn,
                required: false,
                options: vec![MenuOption {
                    name: "Ginger".into(),
                    price_modifier: to_decimal(0.5),
                }],
            },
        ];

        let defaults = default_selections(&i);
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults["Set"].name, "Set A");
    }
}
