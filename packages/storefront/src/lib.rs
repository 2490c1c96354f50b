//! # NFT Drop Storefront
//!
//! A minimal single-page NFT-minting storefront: serves a collection
//! page fetched from a headless CMS, tracks a wallet session, and claims
//! tokens through a drop-contract gateway. The one component with real
//! design content is the [`controller::DropPageController`], which keeps
//! the page's supply / loading / price state consistent with
//! asynchronous outcomes.
//!
//! ## Quick Start
//! ```bash
//! SANITY_PROJECT_ID=xyz cargo run --bin storefront
//! ```
//!
//! ## Endpoints
//! - `GET /health` - Health check with metrics
//! - `GET /collections/{slug}` - Collection page payload (404 when unknown)
//! - `GET /collections/{slug}/drop` - Supply and price snapshot
//! - `POST /collections/{slug}/mint` - Claim one token for a wallet

pub mod cms;
pub mod config;
pub mod contract;
pub mod controller;
mod error;
mod handlers;
pub mod notify;
mod response;
mod router;
mod state;
pub mod wallet;

pub use config::Config;
pub use error::Error;
pub use router::create as create_router;
pub use state::AppState;
