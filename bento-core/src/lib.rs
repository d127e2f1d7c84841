//! Core types for the Bento ordering client
//!
//! Domain model, menu normalization pipeline, cart arithmetic and order
//! payload assembly. No I/O lives here; the HTTP glue is in `bento-client`.

pub mod cart;
pub mod error;
pub mod models;
pub mod money;
pub mod normalize;
pub mod order;
pub mod util;

// Re-exports
pub use cart::{Cart, Totals, default_selections};
pub use error::{CartError, NormalizeError};
pub use models::{CartLine, GroupKind, MenuCategory, MenuItem, MenuOption, OptionGroup};
pub use normalize::{filter_categories, normalize, normalize_or_empty};
pub use order::{Destination, Order, OrderPayload, PaymentIntentRequest, PaymentIntentResponse};
