//! Headless-CMS query client.
//!
//! Issues the one fixed-shape collection query the page needs and maps a
//! `result: null` response to `Ok(None)` so the page handler can return
//! not-found before any contract call happens.

use crate::{Config, Error};
use serde::Deserialize;
use storefront_types::Collection;
use tracing::debug;
use url::Url;

/// The collection projection, keyed by slug.
const COLLECTION_QUERY: &str = r#"*[_type == "collection" && slug.current == $id][0]{
  _id,
  title,
  address,
  description,
  nftCollectionName,
  mainImage { asset },
  previewImage { asset },
  slug { current },
  creator-> {
    _id,
    name,
    address,
    slug { current },
  },
}"#;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Option<Collection>,
}

/// Read-only client for the CMS query API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    query_url: Url,
}

impl CmsClient {
    /// Build the client from configuration. The query endpoint is
    /// `https://<project>.<host>/<apiVersion>/data/query/<dataset>`, where
    /// the host is the CDN edge when the CDN flag is set.
    pub fn new(http: reqwest::Client, config: &Config) -> Result<Self, Error> {
        if config.cms_project_id.is_empty() {
            return Err(Error::Config("cms_project_id is not set".into()));
        }
        let host = if config.cms_use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        let query_url = Url::parse(&format!(
            "https://{}.{}/{}/data/query/{}",
            config.cms_project_id, host, config.cms_api_version, config.cms_dataset
        ))
        .map_err(|e| Error::Config(format!("invalid cms endpoint: {e}")))?;

        Ok(Self { http, query_url })
    }

    /// Fetch the collection for a slug; `None` when no record matches.
    pub async fn fetch_collection(&self, slug: &str) -> Result<Option<Collection>, Error> {
        debug!(slug, "Fetching collection from CMS");

        // GROQ params travel as JSON-encoded query-string values.
        let id_param = serde_json::to_string(slug)
            .map_err(|e| Error::Cms(format!("encoding slug param: {e}")))?;

        let resp = self
            .http
            .get(self.query_url.clone())
            .query(&[("query", COLLECTION_QUERY), ("$id", id_param.as_str())])
            .send()
            .await
            .map_err(|e| Error::Cms(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::Cms(format!("cms returned {}", resp.status())));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Cms(e.to_string()))?;
        parse_query_response(&body)
    }
}

/// Parse a CMS query response body into an optional collection.
fn parse_query_response(body: &str) -> Result<Option<Collection>, Error> {
    let parsed: QueryResponse =
        serde_json::from_str(body).map_err(|e| Error::Cms(format!("bad cms response: {e}")))?;
    Ok(parsed.result)
}
