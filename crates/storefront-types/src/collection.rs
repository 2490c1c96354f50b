//! The collection projection returned by the CMS query, plus the
//! CDN URL builder for its image asset references.
//!
//! Field names follow the CMS wire format (`_id`, `nftCollectionName`,
//! `mainImage.asset._ref`, `slug.current`) so the projection deserializes
//! without an intermediate mapping layer.

use crate::StorefrontError;
use serde::{Deserialize, Serialize};

/// Slug wrapper matching the CMS `{ "current": "..." }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// Pointer to a CMS-hosted image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// An image field as projected by the CMS (`mainImage { asset }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: ImageAsset,
}

impl ImageRef {
    /// Resolve the asset reference to a CDN URL.
    ///
    /// References look like `image-<assetid>-<WxH>-<ext>` and map to
    /// `https://cdn.sanity.io/images/<project>/<dataset>/<assetid>-<WxH>.<ext>`.
    pub fn url(&self, project_id: &str, dataset: &str) -> Result<String, StorefrontError> {
        let r = &self.asset.reference;
        let invalid = || StorefrontError::InvalidImageRef(r.clone());

        let rest = r.strip_prefix("image-").ok_or_else(invalid)?;
        let (stem, ext) = rest.rsplit_once('-').ok_or_else(invalid)?;
        if stem.is_empty() || ext.is_empty() || !stem.contains('-') {
            return Err(invalid());
        }

        Ok(format!(
            "https://cdn.sanity.io/images/{project_id}/{dataset}/{stem}.{ext}"
        ))
    }
}

/// The creator entity a collection points back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub slug: Slug,
}

/// One NFT drop collection, fetched once per page load.
/// Immutable after fetch; destroyed on navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "nftCollectionName")]
    pub nft_collection_name: String,
    /// The drop contract address tokens are claimed from.
    pub address: String,
    #[serde(rename = "mainImage")]
    pub main_image: ImageRef,
    #[serde(rename = "previewImage")]
    pub preview_image: ImageRef,
    pub slug: Slug,
    pub creator: Creator,
}
