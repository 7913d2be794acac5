use crate::constants::USER_AGENT;
use crate::prelude::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the product list comes from.
pub trait ProductSource {
    fn fetch_products(&self) -> Result<Vec<Product>>;

    fn describe(&self) -> String;
}

/// Blocking `GET` against the products endpoint.
#[derive(Debug, Clone)]
pub struct HttpClient {
    url: String,
    timeout: Duration,
}

impl HttpClient {

    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self { url: url.into(), timeout }
    }

    /// Whole seconds for `minreq`, rounding any sub-second part up.
    fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs() + u64::from(self.timeout.subsec_nanos() > 0)
    }

    fn send_request(&self) -> Result<minreq::Response> {
        let response = minreq::get(&self.url)
            .with_header("User-Agent", USER_AGENT)
            .with_header("Accept", "application/json")
            .with_timeout(self.timeout_secs())
            .send()
            .with_context(|| format!("Failed to send request to {url}", url = self.url))?;

        if response.status_code != 200 {
            bail!("HTTP error {status} from {url}", status = response.status_code, url = self.url);
        }

        Ok(response)
    }

    fn fetch_text(&self) -> Result<String> {
        let response = self.send_request()?;
        let text = response
            .as_str()
            .with_context(|| format!("Response from {url} is not valid UTF-8", url = self.url))?;
        Ok(text.to_string())
    }
}

impl ProductSource for HttpClient {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        let body = self.fetch_text()?;
        Product::parse_list(&body)
            .with_context(|| format!("Response from {url} is not a product list", url = self.url))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the product list from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl ProductSource for FileSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        let body = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {path}", path = self.path.display()))?;
        Product::parse_list(&body)
            .with_context(|| format!("{path} is not a product list", path = self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl ProductSource for Vec<Product> {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "in-memory products".to_string()
    }
}

/// Loads the product list once and groups it into a [`Catalog`] that both
/// the menu tables and the category options are rendered from.
pub struct Repository<S> {
    source: S,
    hide_unavailable: bool,
}

impl <S: ProductSource> Repository<S> {

    pub const fn new(source: S) -> Self {
        Self { source, hide_unavailable: false }
    }

    #[must_use]
    pub fn hide_unavailable(mut self, hide: bool) -> Self {
        self.hide_unavailable = hide;
        self
    }

    pub fn load(&self) -> Result<Catalog> {
        let source = self.source.describe();
        tracing::info!(%source, "fetching products");

        let products = self.source.fetch_products()?;
        let fetched = products.len();

        let catalog = if self.hide_unavailable {
            Catalog::from_products(products.into_iter().filter(Product::is_available))
        } else {
            Catalog::from_products(products)
        };

        tracing::info!(
            products = fetched,
            shown = catalog.product_count(),
            categories = catalog.category_count(),
            "catalog loaded"
        );

        Ok(catalog)
    }
}
