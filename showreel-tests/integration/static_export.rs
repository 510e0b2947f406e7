//! Static export serves the same URLs as the server

use showreel_core::{Catalog, ShowreelConfig};
use showreel_web::{RenderedSite, export_site};
use tempfile::TempDir;

#[tokio::test]
async fn test_every_requested_fragment_is_exported() {
    let site = RenderedSite::build(Catalog::portfolio(), ShowreelConfig::default()).unwrap();
    let output = TempDir::new().unwrap();

    let summary = export_site(&site, output.path(), None).await.unwrap();
    assert_eq!(summary.total(), 27);

    let index = std::fs::read_to_string(output.path().join("index.html")).unwrap();
    for request in index.split(r#"hx-get=""#).skip(1) {
        let path = &request[..request.find('"').unwrap()];
        let file = output.path().join(path.trim_start_matches('/'));
        assert!(file.is_file(), "missing export for {path}");
    }

    for asset in ["assets/site.js", "assets/site.css"] {
        assert!(output.path().join(asset).is_file(), "missing {asset}");
    }
}

#[tokio::test]
async fn test_export_with_reveal_disabled_shows_everything() {
    let mut config = ShowreelConfig::default();
    config.reveal.enabled = false;
    let site = RenderedSite::build(Catalog::portfolio(), config).unwrap();
    let output = TempDir::new().unwrap();

    export_site(&site, output.path(), None).await.unwrap();

    let index = std::fs::read_to_string(output.path().join("index.html")).unwrap();
    assert!(!index.contains(r#"class="fade-in""#));
    let script = std::fs::read_to_string(output.path().join("assets/site.js")).unwrap();
    assert!(script.contains("var REVEAL_ENABLED = false;"));
}
