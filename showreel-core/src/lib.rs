//! Showreel Core - catalog and interaction logic for the portfolio site
//!
//! This crate holds everything about the site that is not markup: the video
//! catalog, identifier extraction for hosted videos, and the small state
//! machines behind lazy media tiles, scroll reveals and page toggles.

pub mod catalog;
pub mod config;
pub mod reveal;
pub mod tile;
pub mod toggle;
pub mod tracing_setup;
pub mod video;

// Re-export main types for convenient access
pub use catalog::{Catalog, Collection, CollectionKind, VideoEntry};
pub use config::ShowreelConfig;
pub use reveal::{ClientViewport, Reveal, RevealState, Threshold, UnsupportedViewport, Viewport};
pub use tile::{MediaTile, TilePresentation};
pub use toggle::{Expansion, GalleryExpansion, MenuState};
pub use video::{VideoId, extract_video_id};

/// Errors raised by the core crate.
///
/// Identifier extraction never fails; an unrecognized URL is simply an entry
/// without a video id. These cover catalog authoring mistakes and configuration.
#[derive(Debug, thiserror::Error)]
pub enum ShowreelError {
    #[error("Empty title at position {position} in {collection}")]
    EmptyTitle {
        collection: &'static str,
        position: usize,
    },

    #[error("Duplicate title '{title}' in {collection}")]
    DuplicateTitle {
        collection: &'static str,
        title: String,
    },

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },
}

pub type Result<T> = std::result::Result<T, ShowreelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_source() {
        let duplicate = ShowreelError::DuplicateTitle {
            collection: "records",
            title: "Muroki — Songwriting".to_string(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Duplicate title 'Muroki — Songwriting' in records"
        );

        let config = ShowreelError::Configuration {
            reason: "records preview must show at least one entry".to_string(),
        };
        assert!(config.to_string().starts_with("Configuration error:"));
    }
}
