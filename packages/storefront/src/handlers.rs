//! HTTP request handlers.

use crate::controller::{DropPageController, MintOutcome};
use crate::notify::RecordingNotifier;
use crate::response::{CollectionResponse, DropStatusResponse, HealthResponse, MintResponse};
use crate::state::AppState;
use crate::wallet::MemorySession;
use crate::Error;
use alloy_primitives::Address;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use storefront_types::Collection;
use tracing::info;

/// Health check with basic metrics.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        cms_project: state.config.cms_project_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        requests: state.request_count.load(Ordering::Relaxed),
    })
}

/// The server-side page load: fetch the collection before anything else
/// runs. A missing record short-circuits to 404 — no contract call is
/// ever made on that path.
async fn load_collection(state: &AppState, slug: &str) -> Result<Collection, Error> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    require_collection(state.cms.fetch_collection(slug).await?)
}

/// Every handler chains this with `?` before it builds a contract
/// client, so an unknown slug yields 404 with zero contract calls.
fn require_collection(found: Option<Collection>) -> Result<Collection, Error> {
    found.ok_or(Error::NotFound)
}

/// Serve the collection page payload.
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<CollectionResponse>, Error> {
    let collection = load_collection(&state, &slug).await?;

    let project = &state.config.cms_project_id;
    let dataset = &state.config.cms_dataset;
    let main_image_url = collection
        .main_image
        .url(project, dataset)
        .map_err(|e| Error::Cms(e.to_string()))?;
    let preview_image_url = collection
        .preview_image
        .url(project, dataset)
        .map_err(|e| Error::Cms(e.to_string()))?;

    Ok(Json(CollectionResponse {
        collection,
        main_image_url,
        preview_image_url,
    }))
}

/// Run the page reads and return the supply / price snapshot.
pub async fn get_drop_status(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<DropStatusResponse>, Error> {
    let collection = load_collection(&state, &slug).await?;
    let contract = state.drop_client(&collection.address);

    let mut page = DropPageController::new(
        contract,
        MemorySession::disconnected(),
        RecordingNotifier::new(),
    );
    page.load().await;

    Ok(Json(DropStatusResponse::from_state(page.state())))
}

#[derive(Debug, Deserialize)]
pub struct MintRequest {
    /// The connected wallet's EOA address.
    pub address: String,
}

/// One mint attempt for the caller's wallet.
pub async fn post_mint(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(request): Json<MintRequest>,
) -> Result<impl IntoResponse, Error> {
    let collection = load_collection(&state, &slug).await?;

    let wallet: Address = request
        .address
        .trim()
        .parse()
        .map_err(|_| Error::Claim("invalid wallet address".into()))?;

    info!(slug, wallet = %wallet, "Mint requested");

    let contract = state.drop_client(&collection.address);
    let mut page = DropPageController::new(
        contract,
        MemorySession::connected(wallet),
        RecordingNotifier::new(),
    );

    // Page lifecycle: supply and price load before the click lands.
    page.load().await;
    let outcome = page.mint().await;
    let toasts = page.notifier().toasts().to_vec();

    let response = match outcome {
        MintOutcome::Minted(receipts) => (
            StatusCode::OK,
            Json(MintResponse::ok(receipts, page.state(), toasts)),
        ),
        MintOutcome::Failed => (
            StatusCode::BAD_REQUEST,
            Json(MintResponse::err("claim rejected", page.state(), toasts)),
        ),
        MintOutcome::Ignored => (
            StatusCode::BAD_REQUEST,
            Json(MintResponse::err(
                "drop unavailable for this collection",
                page.state(),
                toasts,
            )),
        ),
    };

    Ok(response)
}
