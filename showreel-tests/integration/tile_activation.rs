//! Tile activation across the core state machine and the rendered markup

use showreel_core::{Catalog, MediaTile, TilePresentation, extract_video_id};
use showreel_web::components::{media_tile, tile_frame};

#[test]
fn test_every_catalog_entry_resolves() {
    for entry in Catalog::portfolio().entries() {
        assert!(
            extract_video_id(entry.url).is_some(),
            "unresolvable: {}",
            entry.title
        );
    }
}

#[test]
fn test_activation_is_one_way() {
    let entry = &Catalog::portfolio().broadcast.entries()[0];
    let mut tile = MediaTile::from_entry(entry);
    assert!(media_tile(&tile).contains("<button"));

    assert!(tile.activate());
    assert!(!tile.activate());
    assert!(matches!(tile.presentation(), TilePresentation::Player { .. }));

    let frame = tile_frame(&tile);
    assert!(frame.contains("<iframe"));
    assert!(!frame.contains("<button"));
}

#[test]
fn test_changing_url_keeps_activation() {
    let mut tile = MediaTile::new("Session", "https://youtu.be/first");
    tile.activate();
    tile.set_url("https://www.youtube.com/watch?v=second");

    match tile.presentation() {
        TilePresentation::Player { embed_url, .. } => {
            assert!(embed_url.starts_with("https://www.youtube.com/embed/second?"));
        }
        other => panic!("expected player, got {other:?}"),
    }
}

#[test]
fn test_unresolvable_url_never_activates() {
    let mut tile = MediaTile::new("Broken", "https://vimeo.com/12345");
    assert!(!tile.activate());
    assert!(!tile.is_activated());
    assert!(matches!(
        tile.presentation(),
        TilePresentation::Placeholder { .. }
    ));
}
