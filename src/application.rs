use crate::config::Config;
use crate::page::Page;
use crate::populator::Populator;
use crate::prelude::*;
use crate::repository::{FileSource, HttpClient, Repository};

use std::io::Write;
use std::path::Path;

pub struct Application {
    config: Config,
}

impl Application {

    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches and groups the products, from `file` when given and from the
    /// configured endpoint otherwise.
    pub fn load_catalog(&self, file: Option<&Path>) -> Result<Catalog> {
        match file {
            Some(path) => Repository::new(FileSource::new(path))
                .hide_unavailable(self.config.hide_unavailable)
                .load(),
            None => Repository::new(HttpClient::new(&self.config.endpoint, self.config.timeout()))
                .hide_unavailable(self.config.hide_unavailable)
                .load(),
        }
    }

    /// Builds the full menu page. A catalog that fails to load leaves both
    /// sections empty unless `strict` is set, in which case the error is
    /// returned.
    pub fn render_page(&self, file: Option<&Path>, strict: bool) -> Result<Page> {
        let catalog = match self.load_catalog(file) {
            Ok(catalog) => catalog,
            Err(error) if !strict => {
                tracing::warn!(error = format!("{error:#}"), "could not load products, rendering an empty menu");
                Catalog::default()
            }
            Err(error) => return Err(error),
        };

        self.render_catalog(&catalog)
    }

    pub fn render_catalog(&self, catalog: &Catalog) -> Result<Page> {
        if catalog.is_empty() {
            tracing::warn!("no products to show, the menu will be empty");
        }

        let mut page = Page::new(&self.config.title, self.config.stylesheet.as_deref());
        let summary = Populator::populate(&mut page, catalog)?;

        tracing::info!(
            containers = summary.menu.containers,
            tables = summary.menu.tables,
            rows = summary.menu.rows,
            buttons = summary.options,
            "menu rendered"
        );

        Ok(page)
    }

    /// Writes `page` to `output`, or to the configured output, or to stdout.
    pub fn write_page(&self, page: &Page, output: Option<&Path>) -> Result<()> {
        let html = page.to_html();
        match output.or(self.config.output.as_deref()) {
            Some(path) => {
                std::fs::write(path, html)
                    .with_context(|| format!("Failed to write {path}", path = path.display()))?;
                tracing::info!(path = %path.display(), "page written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes()).context("Failed to write page to stdout")?;
                stdout.flush().context("Failed to flush stdout")?;
            }
        }

        Ok(())
    }

    /// Distinct categories in menu order with the anchor each one links to.
    pub fn categories(&self, file: Option<&Path>) -> Result<Vec<(String, Anchor)>> {
        let catalog = self.load_catalog(file)?;
        Ok(catalog
            .anchors()
            .map(|(category, anchor)| (category.to_string(), anchor))
            .collect())
    }
}
