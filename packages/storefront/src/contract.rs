//! Drop-contract SDK surface.
//!
//! The storefront only ever needs four operations: read the claim
//! conditions, read total supply, list claimed tokens, and claim. The
//! [`DropSdk`] trait is that seam; [`RpcDropClient`] is the production
//! implementation, a pass-through to a drop gateway speaking JSON-RPC 2.0.
//! Contract internals (ABI, eligibility rules) stay opaque behind it.

use crate::Error;
use alloy_primitives::{Address, U256};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// One pricing tier of the drop's claim conditions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimCondition {
    #[serde(rename = "currencyMetadata")]
    pub currency_metadata: CurrencyMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyMetadata {
    /// Human-readable price, e.g. `"0.01"`.
    #[serde(rename = "displayValue")]
    pub display_value: String,
}

/// A token already claimed from the drop. Only the count of these is
/// ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimedToken {
    pub id: U256,
    pub owner: Address,
}

/// Per-token result of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub id: U256,
    #[serde(rename = "transactionHash")]
    pub tx_hash: String,
}

/// The contract operations the drop page consumes.
#[allow(async_fn_in_trait)]
pub trait DropSdk {
    async fn get_claim_conditions(&self) -> Result<Vec<ClaimCondition>, Error>;
    async fn total_supply(&self) -> Result<U256, Error>;
    async fn get_all_claimed(&self) -> Result<Vec<ClaimedToken>, Error>;
    async fn claim_to(&self, to: Address, quantity: u64) -> Result<Vec<ClaimReceipt>, Error>;
}

#[derive(Debug, Deserialize)]
struct RpcError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

/// JSON-RPC pass-through to the drop gateway for one contract.
#[derive(Debug, Clone)]
pub struct RpcDropClient {
    http: reqwest::Client,
    rpc_url: String,
    contract: Address,
}

impl RpcDropClient {
    pub fn new(http: reqwest::Client, rpc_url: &str, contract: Address) -> Self {
        Self {
            http,
            rpc_url: rpc_url.to_string(),
            contract,
        }
    }

    pub fn contract(&self) -> Address {
        self.contract
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, Error> {
        debug!(method, contract = %self.contract, "Drop gateway call");

        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let resp = self
            .http
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Rpc(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::Rpc(format!("gateway returned {}", resp.status())));
        }

        let rpc: RpcResponse<T> = resp
            .json()
            .await
            .map_err(|e| Error::Rpc(format!("bad gateway response: {e}")))?;

        if let Some(err) = rpc.error {
            return Err(Error::Rpc(err.message));
        }
        rpc.result
            .ok_or_else(|| Error::Rpc("empty gateway result".into()))
    }
}

impl DropSdk for RpcDropClient {
    async fn get_claim_conditions(&self) -> Result<Vec<ClaimCondition>, Error> {
        self.call("drop_getClaimConditions", json!([self.contract]))
            .await
    }

    async fn total_supply(&self) -> Result<U256, Error> {
        self.call("drop_totalSupply", json!([self.contract])).await
    }

    async fn get_all_claimed(&self) -> Result<Vec<ClaimedToken>, Error> {
        self.call("drop_getAllClaimed", json!([self.contract])).await
    }

    async fn claim_to(&self, to: Address, quantity: u64) -> Result<Vec<ClaimReceipt>, Error> {
        // The one write; the gateway rejects with an opaque error on any
        // failure (funds, signature, sold out) and we surface none of them
        // individually.
        self.call("drop_claimTo", json!([self.contract, to, quantity]))
            .await
            .map_err(|e| Error::Claim(e.to_string()))
    }
}
