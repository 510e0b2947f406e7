//! htmx partial update handlers
//!
//! Serve the pre-rendered fragments the page swaps in: the activated player
//! of a tile, the header with the mobile menu, and the records past the
//! preview.

pub mod gallery;
pub mod navigation;
pub mod player;

use axum::response::Html;

use crate::error::{Result, WebError};
use crate::routes;
use crate::server::AppState;

// Re-export main htmx handlers
pub use gallery::records_remainder;
pub use navigation::menu_region;
pub use player::player_frame;

/// Looks up a rendered fragment by URL path.
fn fragment(state: &AppState, path: &str) -> Result<Html<String>> {
    state
        .site
        .fragment(path)
        .map(|html| Html(html.to_string()))
        .ok_or_else(|| WebError::FragmentNotFound {
            name: path.to_string(),
        })
}

/// Splits `{name}.html`, rejecting anything else as an unknown fragment.
fn fragment_name(file: &str) -> Result<&str> {
    routes::fragment_stem(file).ok_or_else(|| WebError::FragmentNotFound {
        name: file.to_string(),
    })
}
