//! Thin reqwest wrapper shared by the menu and checkout clients

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Header carrying the intake API key
const API_KEY_HEADER: &str = "x-api-key";

/// Shared HTTP gateway with a configured timeout.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
}

impl HttpGateway {
    pub fn new(timeout_secs: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// GET a JSON value of any shape.
    pub async fn get_value(&self, url: &str, api_key: Option<&str>) -> ClientResult<Value> {
        let mut req = self.client.get(url);
        if let Some(key) = api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<T, B>(&self, url: &str, api_key: Option<&str>, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + Sync,
    {
        let mut req = self.client.post(url).json(body);
        if let Some(key) = api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body where only the status matters; the response body is
    /// unconstrained and discarded.
    pub async fn post_expect_ok<B>(&self, url: &str, api_key: Option<&str>, body: &B) -> ClientResult<()>
    where
        B: serde::Serialize + Sync,
    {
        let mut req = self.client.post(url).json(body);
        if let Some(key) = api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
