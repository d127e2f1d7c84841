//! Chat-widget config loader
//!
//! The third-party chat widget loads from an iframe loader script; this side
//! only selects and fetches its JSON config. Load-once state is owned by
//! the [`WidgetLoader`] handle the composition root creates at startup;
//! there is no module-level mutable flag. A failed load is logged and the
//! rest of the application is unaffected.

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::config::ServiceMode;
use crate::http::HttpGateway;

/// Capability handle for the widget's one-time initialization.
#[derive(Debug)]
pub struct WidgetLoader {
    gateway: HttpGateway,
    config_url: String,
    state: OnceCell<Option<Value>>,
}

impl WidgetLoader {
    pub fn new(gateway: HttpGateway, config_url: impl Into<String>) -> Self {
        Self {
            gateway,
            config_url: config_url.into(),
            state: OnceCell::new(),
        }
    }

    /// Pick the widget config file for this deployment.
    ///
    /// Takeout hosts get the takeout config; everything else gets the
    /// dine-in one.
    pub fn select_config_url(base_url: &str, hostname: &str, mode: ServiceMode) -> String {
        let variant = if mode == ServiceMode::Takeout || hostname.to_lowercase().contains("takeout")
        {
            "takeout"
        } else {
            "dine-in"
        };
        format!(
            "{}/chatbot-loader-config-{}.json",
            base_url.trim_end_matches('/'),
            variant
        )
    }

    /// Fetch the widget config exactly once, no matter how often called.
    ///
    /// Returns `None` when the config failed to load; the failure is
    /// remembered and not retried (same one-shot semantics as the script
    /// guard it replaces).
    pub async fn ensure_initialized(&self) -> Option<&Value> {
        self.state
            .get_or_init(|| async {
                match self.gateway.get_value(&self.config_url, None).await {
                    Ok(config) => {
                        info!(url = %self.config_url, "chat widget config loaded");
                        Some(config)
                    }
                    Err(err) => {
                        warn!(error = %err, url = %self.config_url, "chat widget config failed to load");
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    /// Whether initialization has been attempted (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.state.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_selection_by_mode_and_host() {
        let url = WidgetLoader::select_config_url(
            "https://assets.example.com/",
            "order.example.com",
            ServiceMode::DineIn,
        );
        assert_eq!(url, "https://assets.example.com/chatbot-loader-config-dine-in.json");

        let url = WidgetLoader::select_config_url(
            "https://assets.example.com",
            "order.example.com",
            ServiceMode::Takeout,
        );
        assert_eq!(url, "https://assets.example.com/chatbot-loader-config-takeout.json");

        // Takeout hostname overrides a dine-in mode
        let url = WidgetLoader::select_config_url(
            "https://assets.example.com",
            "takeout.example.com",
            ServiceMode::DineIn,
        );
        assert!(url.ends_with("takeout.json"));
    }
}
