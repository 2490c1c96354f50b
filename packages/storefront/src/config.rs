//! Storefront configuration.

use serde::Deserialize;

/// Configuration for the storefront service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Drop-gateway RPC endpoint the contract SDK client talks to.
    #[serde(default = "defaults::rpc_url")]
    pub rpc_url: String,

    #[serde(default = "defaults::cms_project_id")]
    pub cms_project_id: String,

    #[serde(default = "defaults::cms_dataset")]
    pub cms_dataset: String,

    #[serde(default = "defaults::cms_api_version")]
    pub cms_api_version: String,

    /// Query the CMS through its CDN edge instead of the live API.
    #[serde(default = "defaults::cms_use_cdn")]
    pub cms_use_cdn: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            rpc_url: defaults::rpc_url(),
            cms_project_id: defaults::cms_project_id(),
            cms_dataset: defaults::cms_dataset(),
            cms_api_version: defaults::cms_api_version(),
            cms_use_cdn: defaults::cms_use_cdn(),
        }
    }
}

mod defaults {
    pub fn bind_address() -> String {
        "0.0.0.0:3050".into()
    }

    pub fn rpc_url() -> String {
        if let Ok(url) = std::env::var("STOREFRONT_RPC_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        "https://rpc.ankr.com/eth".into()
    }

    pub fn cms_project_id() -> String {
        std::env::var("SANITY_PROJECT_ID").unwrap_or_default()
    }

    pub fn cms_dataset() -> String {
        std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".into())
    }

    pub fn cms_api_version() -> String {
        "v2021-03-25".into()
    }

    pub fn cms_use_cdn() -> bool {
        std::env::var("STOREFRONT_ENV")
            .map(|e| e.eq_ignore_ascii_case("production"))
            .unwrap_or(false)
    }
}
