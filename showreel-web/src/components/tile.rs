//! Lazy media tile markup
//!
//! The thumbnail frame carries an htmx activation button that swaps the frame
//! for the player fragment. The player frame has no button, so once swapped in
//! there is no way back to the thumbnail.

use showreel_core::{MediaTile, TilePresentation};

use super::escape_html;
use crate::routes;

const FRAME_CLASSES: &str = "tile-frame relative aspect-video w-full overflow-hidden rounded-[6px] bg-black/10";

const PLAYER_ALLOW: &str =
    "accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Renders a tile: its media frame followed by the caption.
pub fn media_tile(tile: &MediaTile) -> String {
    format!(
        r#"<div class="space-y-3">
            {}
            <div class="text-sm tracking-wide opacity-80">{}</div>
        </div>"#,
        tile_frame(tile),
        escape_html(tile.title())
    )
}

/// Renders only the media frame of a tile, in its current presentation.
///
/// This is also the body of the player fragment.
pub fn tile_frame(tile: &MediaTile) -> String {
    match tile.presentation() {
        TilePresentation::Placeholder { .. } => {
            format!(r#"<div class="{FRAME_CLASSES}" data-tile-state="placeholder"></div>"#)
        }
        TilePresentation::Thumbnail {
            title,
            id,
            thumbnail_url,
        } => format!(
            r#"<div class="{FRAME_CLASSES}" data-tile-state="thumbnail">
                <button type="button"
                        class="absolute inset-0 h-full w-full"
                        hx-get="{player_path}"
                        hx-target="closest .tile-frame"
                        hx-swap="outerHTML"
                        aria-label="Play {title}">
                    <img src="{thumbnail}" alt="" loading="lazy" class="absolute inset-0 h-full w-full object-cover">
                    <div class="absolute inset-0 bg-black/15"></div>
                    <div class="absolute inset-0 grid place-items-center">
                        <div class="h-12 w-12 rounded-full border border-white/60 bg-black/20"></div>
                    </div>
                </button>
            </div>"#,
            player_path = routes::player_fragment(id),
            title = escape_html(title),
            thumbnail = escape_html(&thumbnail_url),
        ),
        TilePresentation::Player {
            title, embed_url, ..
        } => format!(
            r#"<div class="{FRAME_CLASSES}" data-tile-state="player">
                <iframe class="absolute inset-0 h-full w-full"
                        src="{src}"
                        title="{title}"
                        allow="{PLAYER_ALLOW}"
                        referrerpolicy="strict-origin-when-cross-origin"
                        loading="lazy"
                        allowfullscreen></iframe>
            </div>"#,
            src = escape_html(&embed_url),
            title = escape_html(title),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_tile_offers_activation() {
        let tile = MediaTile::new("Demo & Co", "https://youtu.be/xyz");
        let html = media_tile(&tile);
        assert!(html.contains(r#"src="https://i.ytimg.com/vi/xyz/hqdefault.jpg""#));
        assert!(html.contains(r#"hx-get="/fragments/player/xyz.html""#));
        assert!(html.contains(r#"aria-label="Play Demo &amp; Co""#));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_placeholder_tile_has_no_controls() {
        let tile = MediaTile::new("Broken", "not a url");
        let html = media_tile(&tile);
        assert!(html.contains(r#"data-tile-state="placeholder""#));
        assert!(html.contains("Broken"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("hx-get"));
    }

    #[test]
    fn test_activated_frame_is_player_only() {
        let mut tile = MediaTile::new("Demo", "https://youtu.be/xyz");
        tile.activate();
        let html = tile_frame(&tile);
        assert!(html.contains(
            r#"src="https://www.youtube.com/embed/xyz?rel=0&amp;modestbranding=1&amp;playsinline=1""#
        ));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(!html.contains("<button"));
        assert!(!html.contains("hqdefault"));
    }

    #[test]
    fn test_repeated_activation_renders_identically() {
        let mut tile = MediaTile::new("Demo", "https://youtu.be/xyz");
        tile.activate();
        let first = tile_frame(&tile);
        tile.activate();
        assert_eq!(tile_frame(&tile), first);
    }
}
