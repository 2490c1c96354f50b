//! Application state shared across handlers.

use crate::cms::CmsClient;
use crate::config::Config;
use crate::contract::RpcDropClient;
use alloy_primitives::Address;
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use tracing::info;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub cms: CmsClient,
    pub http: reqwest::Client,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: Config) -> Result<Self, crate::Error> {
        let http = reqwest::Client::new();
        let cms = CmsClient::new(http.clone(), &config)?;

        info!(
            project = %config.cms_project_id,
            dataset = %config.cms_dataset,
            cdn = config.cms_use_cdn,
            "CMS client initialized"
        );

        Ok(Self {
            cms,
            http,
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        })
    }

    /// Build the contract SDK client for a collection's drop address.
    /// Returns `None` when the address is absent or unparseable; every
    /// contract operation is then a no-op by design of the controller.
    pub fn drop_client(&self, address: &str) -> Option<RpcDropClient> {
        let contract: Address = address.trim().parse().ok()?;
        Some(RpcDropClient::new(
            self.http.clone(),
            &self.config.rpc_url,
            contract,
        ))
    }
}
