//! Pre-rendered site: the page and every fragment it can request
//!
//! Everything the site serves is a pure function of the catalog and the
//! configuration, so it is rendered once and shared by the server and the
//! static export.

use std::collections::BTreeMap;

use showreel_core::{Catalog, Expansion, MenuState, ShowreelConfig};

use crate::assets::StaticFileHandler;
use crate::error::Result;
use crate::pages::PortfolioPage;
use crate::routes;

/// Rendered page, fragments and assets.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    index: String,
    fragments: BTreeMap<String, String>,
    assets: StaticFileHandler,
    tile_count: usize,
}

impl RenderedSite {
    /// Validates the inputs and renders everything.
    ///
    /// # Errors
    /// - `WebError::Core` - Invalid catalog or configuration
    pub fn build(catalog: Catalog, config: ShowreelConfig) -> Result<Self> {
        catalog.validate()?;
        config.validate()?;

        let tile_count = catalog.entries().count();
        let page = PortfolioPage::new(catalog, config);
        let mut fragments = BTreeMap::new();

        for state in [MenuState::Closed, MenuState::Open] {
            fragments.insert(routes::menu_fragment(state), page.menu_region(state));
        }

        for state in [Expansion::Collapsed, Expansion::Expanded] {
            fragments.insert(routes::records_fragment(state), page.records_remainder(state));
        }

        for id in page.catalog().video_ids() {
            if let Some(player) = page.player(id.as_str()) {
                fragments.insert(routes::player_fragment(&id), player);
            }
        }

        let site = Self {
            index: page.render(),
            fragments,
            assets: StaticFileHandler::new(&page.config().reveal),
            tile_count,
        };

        tracing::info!(
            tiles = site.tile_count,
            fragments = site.fragments.len(),
            "Site rendered"
        );

        Ok(site)
    }

    /// The full page document.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Fragment at a URL path such as `/fragments/nav/open.html`.
    pub fn fragment(&self, path: &str) -> Option<&str> {
        self.fragments.get(path).map(String::as_str)
    }

    /// All fragments keyed by URL path.
    pub fn fragments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fragments
            .iter()
            .map(|(path, html)| (path.as_str(), html.as_str()))
    }

    pub fn assets(&self) -> &StaticFileHandler {
        &self.assets
    }

    /// Number of tiles across both galleries.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }
}
