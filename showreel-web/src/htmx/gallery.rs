//! Records "show all" toggling

use axum::extract::{Path, State};
use axum::response::Html;
use showreel_core::Expansion;

use super::{fragment, fragment_name};
use crate::error::{Result, WebError};
use crate::routes;
use crate::server::AppState;

/// Returns the records past the preview, shown or hidden, with the toggle.
pub async fn records_remainder(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Html<String>> {
    let expansion = Expansion::from_name(fragment_name(&file)?)
        .ok_or_else(|| WebError::FragmentNotFound { name: file.clone() })?;

    fragment(&state, &routes::records_fragment(expansion))
}
