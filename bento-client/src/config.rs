//! Client configuration and service-context resolution
//!
//! All endpoint URLs and keys are optional at construction; each operation
//! demands what it needs and fails fast with [`ClientError::Config`] when a
//! required value is absent.
//!
//! # Environment variables
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | MENU_API_URL | Menu fetch endpoint |
//! | ORDER_API_URL | Kitchen order-intake endpoint (dine-in) |
//! | PAYMENT_API_URL | Payment-intent endpoint (takeout) |
//! | ORDER_API_KEY | `x-api-key` for the intake endpoint |
//! | PAYMENT_PUBLISHABLE_KEY | Payment provider publishable key |
//! | SERVICE_MODE | `dine-in` \| `takeout` fallback mode |
//! | TABLE_ID | Fallback table identifier |
//! | TAX_RATE | Decimal tax rate, default `0.13` |
//! | REQUEST_TIMEOUT_SECS | HTTP timeout, default `30` |

use rust_decimal::Decimal;

use crate::error::{ClientError, ClientResult};
use bento_core::cart::DEFAULT_TAX_RATE;

/// Operating mode of the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceMode {
    /// Orders go to the kitchen intake endpoint, bound to a table
    #[default]
    DineIn,
    /// Orders go through the payment processor
    Takeout,
}

/// Resolved operating context, computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceContext {
    pub mode: ServiceMode,
    /// Set for dine-in contexts that identified a table
    pub table: Option<String>,
}

impl ServiceContext {
    /// Resolve mode and table from the page location.
    ///
    /// Precedence: hostname substring match, then the `/table-<n>/` path
    /// segment, then the configured fallback.
    pub fn resolve(hostname: &str, path: &str, config: &ClientConfig) -> Self {
        if hostname.to_lowercase().contains("takeout") {
            return Self {
                mode: ServiceMode::Takeout,
                table: None,
            };
        }
        if let Some(table) = table_from_path(path) {
            return Self {
                mode: ServiceMode::DineIn,
                table: Some(table),
            };
        }
        Self {
            mode: config.fallback_mode,
            table: config.fallback_table.clone(),
        }
    }
}

/// Extract the table number from a `/table-<n>/` path segment.
fn table_from_path(path: &str) -> Option<String> {
    path.split('/').find_map(|segment| {
        let digits = segment.strip_prefix("table-")?;
        (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .then(|| digits.to_string())
    })
}

/// Client configuration for the ordering frontend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub menu_url: Option<String>,
    pub order_url: Option<String>,
    pub payment_url: Option<String>,
    /// `x-api-key` value for the intake endpoint
    pub api_key: Option<String>,
    /// Payment provider publishable key, handed to the payment SDK
    pub publishable_key: Option<String>,
    pub tax_rate: Decimal,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Additional attempts after a failed menu fetch
    pub menu_retry: u32,
    /// Fixed category ordering preference; empty means alphabetical
    pub preferred_categories: Vec<String>,
    /// Mode used when neither hostname nor path resolves one
    pub fallback_mode: ServiceMode,
    pub fallback_table: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            menu_url: None,
            order_url: None,
            payment_url: None,
            api_key: None,
            publishable_key: None,
            tax_rate: DEFAULT_TAX_RATE,
            timeout: 30,
            menu_retry: 2,
            preferred_categories: Vec::new(),
            fallback_mode: ServiceMode::default(),
            fallback_table: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables, using defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            menu_url: std::env::var("MENU_API_URL").ok(),
            order_url: std::env::var("ORDER_API_URL").ok(),
            payment_url: std::env::var("PAYMENT_API_URL").ok(),
            api_key: std::env::var("ORDER_API_KEY").ok(),
            publishable_key: std::env::var("PAYMENT_PUBLISHABLE_KEY").ok(),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE),
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            menu_retry: 2,
            preferred_categories: Vec::new(),
            fallback_mode: match std::env::var("SERVICE_MODE").as_deref() {
                Ok("takeout") => ServiceMode::Takeout,
                _ => ServiceMode::DineIn,
            },
            fallback_table: std::env::var("TABLE_ID").ok(),
        }
    }

    pub fn with_menu_url(mut self, url: impl Into<String>) -> Self {
        self.menu_url = Some(url.into());
        self
    }

    pub fn with_order_url(mut self, url: impl Into<String>) -> Self {
        self.order_url = Some(url.into());
        self
    }

    pub fn with_payment_url(mut self, url: impl Into<String>) -> Self {
        self.payment_url = Some(url.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_preferred_categories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_categories = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fallback(mut self, mode: ServiceMode, table: Option<String>) -> Self {
        self.fallback_mode = mode;
        self.fallback_table = table;
        self
    }

    // Required-value accessors, failing fast at the point of use.

    pub fn require_menu_url(&self) -> ClientResult<&str> {
        require(&self.menu_url, "MENU_API_URL")
    }

    pub fn require_order_url(&self) -> ClientResult<&str> {
        require(&self.order_url, "ORDER_API_URL")
    }

    pub fn require_payment_url(&self) -> ClientResult<&str> {
        require(&self.payment_url, "PAYMENT_API_URL")
    }

    pub fn require_api_key(&self) -> ClientResult<&str> {
        require(&self.api_key, "ORDER_API_KEY")
    }
}

fn require<'a>(value: &'a Option<String>, name: &str) -> ClientResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| ClientError::Config(format!("{name} is not set")))
}
