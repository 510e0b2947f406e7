//! Mobile menu toggling

use axum::extract::{Path, State};
use axum::response::Html;
use showreel_core::MenuState;

use super::{fragment, fragment_name};
use crate::error::{Result, WebError};
use crate::routes;
use crate::server::AppState;

/// Returns the header with the mobile menu open or closed.
pub async fn menu_region(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Html<String>> {
    let menu = MenuState::from_name(fragment_name(&file)?)
        .ok_or_else(|| WebError::FragmentNotFound { name: file.clone() })?;

    fragment(&state, &routes::menu_fragment(menu))
}
