//! Response types for the storefront API.

use crate::contract::ClaimReceipt;
use crate::notify::Toast;
use serde::Serialize;
use storefront_types::{Collection, DropState};

/// Response from the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cms_project: String,
    pub uptime_secs: u64,
    pub requests: u64,
}

/// The collection page payload: the CMS projection plus resolved image
/// URLs so the page never touches asset references directly.
#[derive(Serialize)]
pub struct CollectionResponse {
    pub collection: Collection,
    pub main_image_url: String,
    pub preview_image_url: String,
}

/// Supply / price snapshot for a drop.
#[derive(Serialize)]
pub struct DropStatusResponse {
    pub claimed_supply: usize,
    /// Decimal string; on-chain supply may exceed native integer range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<String>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_display: Option<String>,
    pub sold_out: bool,
}

impl DropStatusResponse {
    pub fn from_state(state: &DropState) -> Self {
        Self {
            claimed_supply: state.claimed_supply,
            total_supply: state.total_supply.map(|t| t.to_string()),
            loading: state.loading,
            price_display: state.price_display.clone(),
            sold_out: state.sold_out(),
        }
    }
}

/// Response from the mint endpoint.
#[derive(Serialize)]
pub struct MintResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipts: Option<Vec<ClaimReceipt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub drop: DropStatusResponse,
    /// The toast log of the attempt, pending entry marked dismissed.
    pub toasts: Vec<Toast>,
}

impl MintResponse {
    pub fn ok(receipts: Vec<ClaimReceipt>, state: &DropState, toasts: Vec<Toast>) -> Self {
        Self {
            success: true,
            receipts: Some(receipts),
            error: None,
            drop: DropStatusResponse::from_state(state),
            toasts,
        }
    }

    pub fn err(error: impl Into<String>, state: &DropState, toasts: Vec<Toast>) -> Self {
        Self {
            success: false,
            receipts: None,
            error: Some(error.into()),
            drop: DropStatusResponse::from_state(state),
            toasts,
        }
    }
}
