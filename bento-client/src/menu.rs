//! Menu fetching

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpGateway;
use bento_core::models::menu::MenuCategory;
use bento_core::normalize::normalize_or_empty;

/// Fetches and normalizes the menu.
#[derive(Debug, Clone)]
pub struct MenuClient {
    gateway: HttpGateway,
    config: ClientConfig,
}

impl MenuClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let gateway = HttpGateway::new(config.timeout)?;
        Ok(Self { gateway, config })
    }

    pub fn with_gateway(config: ClientConfig, gateway: HttpGateway) -> Self {
        Self { gateway, config }
    }

    /// Fetch the raw menu payload and normalize it.
    ///
    /// A failed request is retried up to `menu_retry` additional times with
    /// the identical fetch; the final failure propagates to the caller's
    /// error boundary (a retryable load error). A 2xx response that is not
    /// a recognizable menu shape degrades to an empty menu instead; that
    /// failure mode never reaches the UI as an error.
    pub async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>> {
        let url = self.config.require_menu_url()?;
        let mut attempt: u32 = 0;
        let payload = loop {
            match self
                .gateway
                .get_value(url, self.config.api_key.as_deref())
                .await
            {
                Ok(payload) => break payload,
                Err(err) if attempt < self.config.menu_retry => {
                    attempt += 1;
                    warn!(error = %err, attempt, "menu fetch failed, retrying");
                }
                Err(err) => return Err(err),
            }
        };
        let menu = normalize_or_empty(payload, &self.config.preferred_categories);
        debug!(categories = menu.len(), "menu loaded");
        Ok(menu)
    }
}
