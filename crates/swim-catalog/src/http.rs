//! HTTP catalog source
//!
//! Fetches the same `home.json` and `sets/<refId>.json` documents as
//! [`DirectorySource`](crate::DirectorySource), relative to a base URL.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::model::{CuratedSet, PageBlock};
use crate::source::{check_ref_id, parse_home, parse_ref_set, CatalogSource};
use crate::CatalogError;

/// Public catalog the home page was built against
pub const DEFAULT_BASE_URL: &str = "https://cd-static.bamgrid.com/dp-117731241344/";

const USER_AGENT: &str = concat!("swim-catalog/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    /// Source rooted at `base`. A base without a trailing slash is treated
    /// as a directory anyway.
    pub fn new(base: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;
        Self::with_client(base, client)
    }

    /// Source rooted at `base` that sends requests through `client`
    pub fn with_client(base: &str, client: Client) -> Result<Self, CatalogError> {
        let mut base = Url::parse(base)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::UnsupportedScheme(base.scheme().to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn home_url(&self) -> Result<Url, CatalogError> {
        Ok(self.base.join("home.json")?)
    }

    pub fn set_url(&self, ref_id: &str) -> Result<Url, CatalogError> {
        check_ref_id(ref_id)?;
        Ok(self.base.join(&format!("sets/{ref_id}.json"))?)
    }

    fn fetch(&self, url: Url) -> Result<String, CatalogError> {
        tracing::debug!(%url, "fetching catalog document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))
    }
}

impl CatalogSource for HttpSource {
    fn home_page_blocks(&self) -> Result<Vec<PageBlock>, CatalogError> {
        parse_home(&self.fetch(self.home_url()?)?)
    }

    fn ref_set(&self, ref_id: &str) -> Result<CuratedSet, CatalogError> {
        parse_ref_set(&self.fetch(self.set_url(ref_id)?)?)
    }
}
