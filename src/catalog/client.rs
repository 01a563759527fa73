//! HTTP client for the remote recipe catalog.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{LadleError, Result};
use crate::recipe::{Category, Recipe, RecipeId};

use super::cache::CatalogCache;
use super::wire::{normalize_recipes, CategoriesResponse, RecipesResponse};

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ladle.dev/v1";

/// Default cache TTL for catalog responses.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Blocking client for the recipe catalog API.
///
/// All responses are normalized at this boundary; callers only ever see
/// [`Recipe`] and [`Category`] values. With a cache attached, fresh
/// entries are served without touching the network and stale entries are
/// served when the network is down or the session is offline.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    cache: Option<CatalogCache>,
    cache_ttl_secs: u64,
    offline: bool,
}

impl CatalogClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("ladle/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            cache: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            offline: false,
        }
    }

    /// Attach a response cache.
    pub fn with_cache(mut self, cache: CatalogCache, ttl_secs: u64) -> Self {
        self.cache = Some(cache);
        self.cache_ttl_secs = ttl_secs;
        self
    }

    /// Serve only from cache; any URL not cached becomes an error.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List catalog categories.
    pub fn categories(&self) -> Result<Vec<Category>> {
        let url = self.endpoint("categories");
        let body = self.fetch(&url)?;

        let response: CategoriesResponse = parse(&url, &body)?;
        Ok(response
            .categories
            .into_iter()
            .filter_map(|c| c.normalize())
            .collect())
    }

    /// List recipes in a category.
    pub fn recipes_in_category(&self, category: &str) -> Result<Vec<Recipe>> {
        let mut url = reqwest::Url::parse(&self.endpoint("recipes")).map_err(|e| {
            LadleError::Catalog {
                url: self.base_url.clone(),
                message: e.to_string(),
            }
        })?;
        url.query_pairs_mut().append_pair("category", category);
        let url = url.to_string();

        let body = self.fetch(&url)?;
        let response: RecipesResponse = parse(&url, &body)?;
        Ok(normalize_recipes(response.recipes))
    }

    /// Fetch a single recipe by id.
    pub fn recipe(&self, id: &RecipeId) -> Result<Recipe> {
        let url = self.endpoint(&format!("recipes/{}", id));
        let body = self.fetch(&url)?;

        let response: RecipesResponse = parse(&url, &body)?;
        normalize_recipes(response.recipes)
            .into_iter()
            .next()
            .ok_or_else(|| LadleError::UnknownRecipe { id: id.to_string() })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch a URL through the cache.
    ///
    /// Order: fresh cache hit, then network (storing the response), then
    /// stale cache fallback on transport failure. Offline sessions serve
    /// whatever the cache has, fresh or not.
    fn fetch(&self, url: &str) -> Result<String> {
        let cached = self.cache.as_ref().and_then(|c| c.lookup(url));

        if let Some(hit) = &cached {
            if hit.fresh || self.offline {
                tracing::debug!(url, fresh = hit.fresh, "serving catalog response from cache");
                return Ok(hit.body.clone());
            }
        }

        if self.offline {
            return Err(LadleError::Catalog {
                url: url.to_string(),
                message: "offline and not cached".to_string(),
            });
        }

        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                if let Some(hit) = cached {
                    tracing::warn!(url, "catalog unreachable, serving stale cache: {}", e);
                    return Ok(hit.body);
                }
                return Err(LadleError::Catalog {
                    url: url.to_string(),
                    message: e.to_string(),
                });
            }
        };

        if !response.status().is_success() {
            return Err(LadleError::Catalog {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text().map_err(|e| LadleError::Catalog {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(url, &body, self.cache_ttl_secs) {
                tracing::warn!(url, "failed to cache catalog response: {}", e);
            }
        }

        Ok(body)
    }
}

fn parse<'a, T: serde::Deserialize<'a>>(url: &str, body: &'a str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| LadleError::Catalog {
        url: url.to_string(),
        message: format!("invalid response: {}", e),
    })
}
