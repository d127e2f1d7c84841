//! Raw item field extraction
//!
//! The menu API has shipped the same record with PascalCase, camelCase and
//! all-lowercase keys over time. Extraction probes a fixed alias chain per
//! logical field instead of guessing: the exact PascalCase key, then the
//! camelCase form, then the all-lowercase form. The first *present* value
//! wins; present-but-falsy values (`0`, `""`, `null`) are hits, only an
//! absent key is a miss.
//!
//! Schema v1 field keys:
//!
//! | Logical field | Key        |
//! |---------------|------------|
//! | id            | ItemNumber |
//! | name          | ItemName   |
//! | description   | Description|
//! | price         | Price      |
//! | category      | Category   |
//! | location      | Location   |
//! | options       | Options    |

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::menu::{MenuItem, OptionGroup, slugify};
use crate::money::to_decimal;

const KEY_ID: &str = "ItemNumber";
const KEY_NAME: &str = "ItemName";
const KEY_DESCRIPTION: &str = "Description";
const KEY_PRICE: &str = "Price";
const KEY_CATEGORY: &str = "Category";
const KEY_LOCATION: &str = "Location";
const KEY_OPTIONS: &str = "Options";

/// Placeholder for items that arrive without a name
const UNNAMED: &str = "Unnamed Item";

/// A raw item record plus the category display text it resolved to.
pub(crate) struct ValidItem {
    pub category_display: String,
    pub item: MenuItem,
}

/// View over one raw item object with alias-chain field access.
pub(crate) struct RawItem<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawItem<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// Probe exact key, then camelCase, then all-lowercase.
    fn field(&self, pascal_key: &str) -> Option<&'a Value> {
        if let Some(v) = self.fields.get(pascal_key) {
            return Some(v);
        }
        let camel = camel_case(pascal_key);
        if let Some(v) = self.fields.get(&camel) {
            return Some(v);
        }
        self.fields.get(&pascal_key.to_lowercase())
    }

    /// Category display text, or `None` when the item has no resolvable
    /// category. Such items are excluded from the menu entirely; there is
    /// no "uncategorized" bucket.
    pub fn category(&self) -> Option<&'a str> {
        match self.field(KEY_CATEGORY) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Transform into a canonical item. Returns `None` for category-less
    /// records (the deliberate filter, not a parse failure).
    pub fn transform(&self) -> Option<ValidItem> {
        let category_display = self.category()?.to_string();
        let item = MenuItem {
            id: coerce_string(self.field(KEY_ID)).unwrap_or_default(),
            name: coerce_string(self.field(KEY_NAME)).unwrap_or_else(|| UNNAMED.to_string()),
            description: coerce_string(self.field(KEY_DESCRIPTION)).unwrap_or_default(),
            base_price: coerce_price(self.field(KEY_PRICE)),
            category_slug: slugify(&category_display),
            location_tag: coerce_string(self.field(KEY_LOCATION)).unwrap_or_default(),
            option_groups: self.options(),
        };
        Some(ValidItem {
            category_display,
            item,
        })
    }

    fn options(&self) -> Vec<OptionGroup> {
        match self.field(KEY_OPTIONS) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                warn!(error = %err, "dropping unparseable option groups");
                Vec::new()
            }),
        }
    }
}

/// Lowercase the first character ("ItemNumber" -> "itemNumber").
fn camel_case(pascal_key: &str) -> String {
    let mut chars = pascal_key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// String-ish coercion: strings pass through unchanged (including `""`),
/// numbers stringify, null and absent are misses.
fn coerce_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Price coercion: numbers and numeric strings parse, anything else
/// (including absence) is 0. Negative prices clamp to 0.
fn coerce_price(value: Option<&Value>) -> Decimal {
    let price = match value {
        Some(Value::Number(n)) => n.as_f64().map(to_decimal).unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => Decimal::ZERO,
    };
    price.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_alias_priority() {
        let value = json!({ "itemName": "camel", "itemname": "lower" });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.field(KEY_NAME), Some(&json!("camel")));

        let value = json!({ "ItemName": "pascal", "itemName": "camel" });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.field(KEY_NAME), Some(&json!("pascal")));

        let value = json!({ "itemnumber": "7" });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.field(KEY_ID), Some(&json!("7")));
    }

    #[test]
    fn test_falsy_but_present_values_are_hits() {
        let value = json!({
            "ItemNumber": 0,
            "ItemName": "",
            "Price": 0,
            "Category": "Sides",
            "Description": ""
        });
        let raw = RawItem::from_value(&value).unwrap();
        let valid = raw.transform().unwrap();
        assert_eq!(valid.item.id, "0");
        assert_eq!(valid.item.name, "");
        assert_eq!(valid.item.base_price, Decimal::ZERO);
        assert_eq!(valid.item.description, "");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let value = json!({ "Category": "Sides" });
        let raw = RawItem::from_value(&value).unwrap();
        let valid = raw.transform().unwrap();
        assert_eq!(valid.item.name, "Unnamed Item");
        assert_eq!(valid.item.description, "");
        assert_eq!(valid.item.base_price, Decimal::ZERO);
        assert!(valid.item.option_groups.is_empty());
    }

    #[test]
    fn test_category_empty_or_missing_is_unresolvable() {
        let value = json!({ "ItemName": "Orphan" });
        assert!(RawItem::from_value(&value).unwrap().transform().is_none());

        let value = json!({ "ItemName": "Orphan", "Category": "" });
        assert!(RawItem::from_value(&value).unwrap().transform().is_none());

        let value = json!({ "ItemName": "Orphan", "Category": null });
        assert!(RawItem::from_value(&value).unwrap().transform().is_none());
    }

    #[test]
    fn test_price_coercions() {
        let value = json!({ "Category": "A", "Price": "12.50" });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.transform().unwrap().item.base_price, "12.50".parse().unwrap());

        let value = json!({ "Category": "A", "Price": -4.0 });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.transform().unwrap().item.base_price, Decimal::ZERO);

        let value = json!({ "Category": "A", "Price": "not a number" });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.transform().unwrap().item.base_price, Decimal::ZERO);
    }

    #[test]
    fn test_numeric_item_number_stringifies() {
        let value = json!({ "Category": "A", "ItemNumber": 42 });
        let raw = RawItem::from_value(&value).unwrap();
        assert_eq!(raw.transform().unwrap().item.id, "42");
    }

    #[test]
    fn test_malformed_options_degrade_to_empty() {
        let value = json!({
            "Category": "A",
            "Options": [{ "name": "Size", "type": "NOT_A_KIND", "items": [] }]
        });
        let raw = RawItem::from_value(&value).unwrap();
        assert!(raw.transform().unwrap().item.option_groups.is_empty());
    }
}
