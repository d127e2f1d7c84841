//! Menu Model
//!
//! Canonical menu types. `OptionGroup`/`MenuOption` keep the raw API field
//! names (`type`, `items`, `priceModifier`) so option arrays deserialize
//! straight off the wire; everything else is produced by the normalizer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option group selection semantics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupKind {
    /// Single-select (radio semantics, e.g. size)
    Variant,
    /// Independently toggleable (checkbox semantics, e.g. toppings)
    AddOn,
}

/// One selectable choice within an option group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuOption {
    pub name: String,
    /// Signed amount added to the base price when selected
    #[serde(rename = "priceModifier", default)]
    pub price_modifier: Decimal,
}

/// Group of selectable options attached to a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    #[serde(default)]
    pub required: bool,
    /// Ordered; the first option is the default for required groups
    #[serde(rename = "items", default)]
    pub options: Vec<MenuOption>,
}

/// Canonical menu item, immutable once constructed from raw API data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable identity, derived from the raw item number
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative base price before option modifiers
    pub base_price: Decimal,
    /// Normalized category slug (e.g. "special-roll")
    pub category_slug: String,
    /// Kitchen routing tag (e.g. "front" / "back")
    pub location_tag: String,
    #[serde(default)]
    pub option_groups: Vec<OptionGroup>,
}

impl MenuItem {
    /// Whether this item opens the customization flow before adding to cart.
    pub fn has_options(&self) -> bool {
        !self.option_groups.is_empty()
    }
}

/// Category as rendered by the UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuCategory {
    /// Unique, normalized (lowercase, whitespace→hyphen, `&`→`and`)
    pub slug: String,
    pub display_name: String,
    pub items: Vec<MenuItem>,
}

/// Derive the category slug from its display text.
///
/// Lowercase, runs of whitespace become a single hyphen, `&` becomes `and`.
pub fn slugify(display: &str) -> String {
    let mut slug = String::with_capacity(display.len());
    let mut pending_hyphen = false;
    for ch in display.trim().chars() {
        if ch.is_whitespace() {
            pending_hyphen = !slug.is_empty();
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        if ch == '&' {
            slug.push_str("and");
        } else {
            for lc in ch.to_lowercase() {
                slug.push(lc);
            }
        }
    }
    slug
}
