//! Menu normalization pipeline
//!
//! Converts an untrusted, shape-variable menu payload into the canonical
//! ordered `Vec<MenuCategory>`. The pipeline:
//!
//! 1. unwrap the envelope (plain array | `{body: ...}` | `{Items: [...]}`)
//! 2. extract fields through the alias schema in [`raw`]
//! 3. drop records with no resolvable category
//! 4. group by category slug, apply the ordering policy, drop empties
//!
//! An unrecognized envelope fails the whole call; fetch-layer callers that
//! must degrade instead use [`normalize_or_empty`].

mod raw;

use serde_json::Value;
use tracing::warn;

use crate::error::NormalizeError;
use crate::models::menu::{MenuCategory, MenuItem, slugify};
use raw::{RawItem, ValidItem};

/// Unwrap the envelope down to the raw item array.
///
/// Accepted shapes, in detection order:
/// - plain array
/// - `{body: [...]}` or `{body: "<json-encoded array>"}` (API-gateway style)
/// - `{Items: [...]}` (DynamoDB scan style)
pub fn unwrap_items(payload: Value) -> Result<Vec<Value>, NormalizeError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut envelope) => {
            if let Some(body) = envelope.remove("body") {
                return match body {
                    Value::Array(items) => Ok(items),
                    Value::String(encoded) => match serde_json::from_str(&encoded)? {
                        Value::Array(items) => Ok(items),
                        _ => Err(NormalizeError::BodyNotArray),
                    },
                    _ => Err(NormalizeError::BodyNotArray),
                };
            }
            match envelope.remove("Items") {
                Some(Value::Array(items)) => Ok(items),
                Some(_) => Err(NormalizeError::BodyNotArray),
                None => Err(NormalizeError::UnrecognizedShape(
                    "object with neither `body` nor `Items`".into(),
                )),
            }
        }
        other => Err(NormalizeError::UnrecognizedShape(type_name(&other).into())),
    }
}

/// Normalize a raw payload into the categorized menu.
///
/// `preferred_order` is the fixed category preference list: categories in
/// the list come first in list position, the rest follow alphabetically.
/// An empty list sorts everything alphabetically.
pub fn normalize(
    payload: Value,
    preferred_order: &[String],
) -> Result<Vec<MenuCategory>, NormalizeError> {
    let raw_items = unwrap_items(payload)?;

    let valid: Vec<ValidItem> = raw_items
        .iter()
        .filter_map(RawItem::from_value)
        .filter_map(|raw| raw.transform())
        .collect();

    // Distinct display names in first-seen order, deduplicated by slug.
    let mut display_names: Vec<String> = Vec::new();
    for entry in &valid {
        let slug = slugify(&entry.category_display);
        if !display_names.iter().any(|seen| slugify(seen) == slug) {
            display_names.push(entry.category_display.clone());
        }
    }

    // Preferred names in list position, the rest alphabetically ignoring
    // case. A byte-wise final tiebreak keeps the order deterministic for
    // names that differ only in case.
    display_names.sort_by(|a, b| {
        let rank = |name: &str| {
            preferred_order
                .iter()
                .position(|p| p.as_str() == name)
                .unwrap_or(usize::MAX)
        };
        (rank(a), a.to_lowercase(), a.as_str()).cmp(&(rank(b), b.to_lowercase(), b.as_str()))
    });

    let categories = display_names
        .into_iter()
        .map(|display_name| {
            let slug = slugify(&display_name);
            let items = valid
                .iter()
                .filter(|entry| entry.item.category_slug == slug)
                .map(|entry| entry.item.clone())
                .collect::<Vec<_>>();
            MenuCategory {
                slug,
                display_name,
                items,
            }
        })
        .filter(|category| !category.items.is_empty())
        .collect();

    Ok(categories)
}

/// Normalize, degrading any failure to an empty menu with a logged warning.
///
/// This is the fetch-layer entry point: a malformed payload must never
/// throw past the data-fetch boundary.
pub fn normalize_or_empty(payload: Value, preferred_order: &[String]) -> Vec<MenuCategory> {
    match normalize(payload, preferred_order) {
        Ok(categories) => categories,
        Err(err) => {
            warn!(error = %err, "menu normalization failed, serving empty menu");
            Vec::new()
        }
    }
}

/// Filter the menu by a search term, matching item name or description
/// case-insensitively. Categories left with no matching items are dropped;
/// an empty term returns the menu unchanged.
pub fn filter_categories(categories: &[MenuCategory], term: &str) -> Vec<MenuCategory> {
    if term.is_empty() {
        return categories.to_vec();
    }
    let needle = term.to_lowercase();
    categories
        .iter()
        .filter_map(|category| {
            let items: Vec<MenuItem> = category
                .items
                .iter()
                .filter(|item| {
                    item.name.to_lowercase().contains(&needle)
                        || item.description.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            (!items.is_empty()).then(|| MenuCategory {
                slug: category.slug.clone(),
                display_name: category.display_name.clone(),
                items,
            })
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
