//! Lazy media tile
//!
//! Shows a thumbnail for a catalog entry and only upgrades to the embedded
//! player after the visitor asks for it. The upgrade is one-way.

use crate::catalog::VideoEntry;
use crate::video::{VideoId, extract_video_id};

/// What a tile currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilePresentation<'a> {
    /// The URL has no recognizable identifier; title only, no controls.
    Placeholder { title: &'a str },
    /// Preview image with an activation control.
    Thumbnail {
        title: &'a str,
        id: &'a VideoId,
        thumbnail_url: String,
    },
    /// Embedded player, shown after activation.
    Player {
        title: &'a str,
        id: &'a VideoId,
        embed_url: String,
    },
}

impl TilePresentation<'_> {
    /// Whether the presentation offers an activation control.
    pub fn is_activatable(&self) -> bool {
        matches!(self, TilePresentation::Thumbnail { .. })
    }
}

/// One gallery tile with its activation state.
#[derive(Debug, Clone)]
pub struct MediaTile {
    title: String,
    url: String,
    resolved_id: Option<VideoId>,
    activated: bool,
}

impl MediaTile {
    /// Creates a tile, resolving the identifier once.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let resolved_id = extract_video_id(&url);
        Self {
            title: title.into(),
            url,
            resolved_id,
            activated: false,
        }
    }

    pub fn from_entry(entry: &VideoEntry) -> Self {
        Self::new(entry.title, entry.url)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn resolved_id(&self) -> Option<&VideoId> {
        self.resolved_id.as_ref()
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Replaces the source URL. The identifier is only recomputed when the
    /// URL differs from the current one; activation state is kept.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url == self.url {
            return;
        }
        self.resolved_id = extract_video_id(&url);
        self.url = url;
    }

    /// Handles one activation signal.
    ///
    /// Returns `true` only for the call that performed the transition. Tiles
    /// without an identifier never activate.
    pub fn activate(&mut self) -> bool {
        if self.activated || self.resolved_id.is_none() {
            return false;
        }
        self.activated = true;
        tracing::debug!(title = %self.title, "Tile activated");
        true
    }

    /// Current presentation, derived from the resolved id and activation.
    pub fn presentation(&self) -> TilePresentation<'_> {
        match &self.resolved_id {
            None => TilePresentation::Placeholder { title: &self.title },
            Some(id) if self.activated => TilePresentation::Player {
                title: &self.title,
                id,
                embed_url: id.embed_url(),
            },
            Some(id) => TilePresentation::Thumbnail {
                title: &self.title,
                id,
                thumbnail_url: id.thumbnail_url(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_before_activation() {
        let tile = MediaTile::new("Demo", "https://youtu.be/xyz");
        assert!(!tile.is_activated());
        match tile.presentation() {
            TilePresentation::Thumbnail { thumbnail_url, .. } => {
                assert_eq!(thumbnail_url, "https://i.ytimg.com/vi/xyz/hqdefault.jpg");
            }
            other => panic!("expected thumbnail, got {other:?}"),
        }
        assert!(tile.presentation().is_activatable());
    }

    #[test]
    fn test_single_activation_shows_player() {
        let mut tile = MediaTile::new("Demo", "https://youtu.be/xyz");
        assert!(tile.activate());
        match tile.presentation() {
            TilePresentation::Player { embed_url, .. } => {
                assert!(embed_url.starts_with("https://www.youtube.com/embed/xyz?"));
            }
            other => panic!("expected player, got {other:?}"),
        }
    }

    #[test]
    fn test_second_activation_is_noop() {
        let mut tile = MediaTile::new("Demo", "https://youtu.be/xyz");
        assert!(tile.activate());
        let first_embed = match tile.presentation() {
            TilePresentation::Player { embed_url, .. } => embed_url,
            other => panic!("expected player, got {other:?}"),
        };
        assert!(!tile.activate());
        match tile.presentation() {
            TilePresentation::Player { embed_url, .. } => assert_eq!(embed_url, first_embed),
            other => panic!("expected player, got {other:?}"),
        }
    }

    #[test]
    fn test_activation_never_reverts() {
        let mut tile = MediaTile::new("Demo", "https://youtu.be/xyz");
        tile.activate();
        for _ in 0..3 {
            assert!(matches!(tile.presentation(), TilePresentation::Player { .. }));
        }
        tile.set_url("https://youtu.be/xyz");
        assert!(matches!(tile.presentation(), TilePresentation::Player { .. }));
    }

    #[test]
    fn test_unresolvable_tile_is_placeholder() {
        let mut tile = MediaTile::new("Broken", "not a url");
        assert_eq!(
            tile.presentation(),
            TilePresentation::Placeholder { title: "Broken" }
        );
        assert!(!tile.presentation().is_activatable());
        assert!(!tile.activate());
        assert!(!tile.is_activated());
    }

    #[test]
    fn test_set_url_recomputes_only_on_change() {
        let mut tile = MediaTile::new("Demo", "https://youtu.be/first");
        tile.set_url("https://youtu.be/first");
        assert_eq!(tile.resolved_id().unwrap().as_str(), "first");

        tile.set_url("https://www.youtube.com/watch?v=second");
        assert_eq!(tile.resolved_id().unwrap().as_str(), "second");
        assert_eq!(tile.url(), "https://www.youtube.com/watch?v=second");

        tile.set_url("garbage");
        assert!(tile.resolved_id().is_none());
    }

    #[test]
    fn test_from_entry() {
        let entry = VideoEntry::new("Entry", "https://www.youtube.com/embed/abc123");
        let tile = MediaTile::from_entry(&entry);
        assert_eq!(tile.title(), "Entry");
        assert_eq!(tile.resolved_id().unwrap().as_str(), "abc123");
    }
}
