//! Shared types and pure logic for the NFT drop storefront.
//! Zero service dependency — usable by any page frontend.

mod collection;
mod drop_state;
mod error;

pub use collection::{Collection, Creator, ImageAsset, ImageRef, Slug};
pub use drop_state::{DropState, MintButtonLabel};
pub use error::StorefrontError;
