//! Tile activation

use axum::extract::{Path, State};
use axum::response::Html;
use showreel_core::VideoId;

use super::{fragment, fragment_name};
use crate::error::{Result, WebError};
use crate::routes;
use crate::server::AppState;

/// Returns the player frame that replaces an activated tile's thumbnail.
///
/// Only identifiers present in the catalog have a player.
pub async fn player_frame(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Html<String>> {
    let id = VideoId::new(fragment_name(&file)?).ok_or_else(|| WebError::FragmentNotFound {
        name: file.clone(),
    })?;

    tracing::debug!(%id, "Player requested");
    fragment(&state, &routes::player_fragment(&id))
}
