//! Data models
//!
//! Canonical UI-facing types produced by the normalizer plus cart state.
//! Wire payload types for the two checkout endpoints live in
//! [`crate::order`].

pub mod cart;
pub mod menu;

pub use cart::CartLine;
pub use menu::{GroupKind, MenuCategory, MenuItem, MenuOption, OptionGroup};
