//! Typed client for a running `/fetch-url` proxy.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::models::{ErrorResponse, FetchUrlResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid proxy URL: {0}")]
    InvalidProxyUrl(#[from] url::ParseError),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy answered with its own `{ "error": ... }` body.
    #[error("{message}")]
    Proxy { status: u16, message: String },

    #[error("Unexpected response from proxy (status {status})")]
    Malformed { status: u16 },
}

#[derive(Clone, Debug)]
pub struct ProxyClient {
    http: Client,
    base_url: Url,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(ProxyClient { http, base_url })
    }

    /// Full proxy URL for `target`, with `target` query-encoded.
    pub fn endpoint(&self, target: &str) -> Result<Url, ClientError> {
        let mut endpoint = self.base_url.join("fetch-url")?;
        endpoint.query_pairs_mut().append_pair("url", target);
        Ok(endpoint)
    }

    /// Ask the proxy for the raw body of `target`.
    pub async fn fetch_html(&self, target: &str) -> Result<String, ClientError> {
        let endpoint = self.endpoint(target)?;
        let response = self.http.get(endpoint).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<FetchUrlResponse>(&bytes)
                .map(|body| body.contents)
                .map_err(|_| ClientError::Malformed {
                    status: status.as_u16(),
                })
        } else {
            match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(body) => Err(ClientError::Proxy {
                    status: status.as_u16(),
                    message: body.error,
                }),
                Err(_) => Err(ClientError::Malformed {
                    status: status.as_u16(),
                }),
            }
        }
    }
}
