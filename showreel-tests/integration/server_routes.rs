//! End-to-end HTTP tests against a bound server

use std::net::SocketAddr;

use showreel_core::{Catalog, ShowreelConfig};
use showreel_web::ShowreelServer;
use tempfile::TempDir;

/// Starts a server on an ephemeral port serving `photos` under `/photos`.
async fn spawn_server(photos: &TempDir) -> SocketAddr {
    let mut config = ShowreelConfig::for_testing();
    config.server.photos_dir = photos.path().to_path_buf();

    let server = ShowreelServer::bind(Catalog::portfolio(), config)
        .await
        .unwrap();
    let address = server.local_addr().unwrap();
    tokio::spawn(server.serve());
    address
}

#[tokio::test]
async fn test_index_renders_initial_state() {
    let photos = TempDir::new().unwrap();
    let address = spawn_server(&photos).await;

    let response = reqwest::get(format!("http://{address}/")).await.unwrap();
    assert_eq!(response.status(), 200);
    let html = response.text().await.unwrap();

    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains("<iframe"));
    // Testing preset previews 2 records, then all 8 broadcast tiles.
    assert_eq!(html.matches(r#"data-tile-state="thumbnail""#).count(), 10);
    assert!(html.contains("Show all (10 more)"));
}

#[tokio::test]
async fn test_activation_flow() {
    let photos = TempDir::new().unwrap();
    let address = spawn_server(&photos).await;

    let index = reqwest::get(format!("http://{address}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let player_path = index
        .split(r#"hx-get=""#)
        .skip(1)
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .find(|path| path.starts_with("/fragments/player/"))
        .unwrap();

    let response = reqwest::get(format!("http://{address}{player_path}"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let frame = response.text().await.unwrap();
    assert!(frame.contains("https://www.youtube.com/embed/"));
    assert!(!frame.contains("<button"));
}

#[tokio::test]
async fn test_unknown_fragments_are_not_found() {
    let photos = TempDir::new().unwrap();
    let address = spawn_server(&photos).await;

    for path in [
        "/fragments/player/dQw4w9WgXcQ.html",
        "/fragments/nav/ajar.html",
        "/fragments/records/everything.html",
        "/assets/site.wasm",
    ] {
        let response = reqwest::get(format!("http://{address}{path}")).await.unwrap();
        assert_eq!(response.status(), 404, "{path}");
    }
}

#[tokio::test]
async fn test_photos_and_health() {
    let photos = TempDir::new().unwrap();
    std::fs::write(photos.path().join("IMG_2537.JPG"), b"jpeg-bytes").unwrap();
    let address = spawn_server(&photos).await;

    let photo = reqwest::get(format!("http://{address}/photos/IMG_2537.JPG"))
        .await
        .unwrap();
    assert_eq!(photo.status(), 200);
    assert_eq!(photo.bytes().await.unwrap().as_ref(), b"jpeg-bytes");

    let health: serde_json::Value = reqwest::get(format!("http://{address}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["tiles"], 20);
}

#[tokio::test]
async fn test_bind_conflict_reports_address() {
    let photos = TempDir::new().unwrap();
    let address = spawn_server(&photos).await;

    let mut config = ShowreelConfig::for_testing();
    config.server.port = address.port();

    let result = ShowreelServer::bind(Catalog::portfolio(), config).await;
    let error = result.err().unwrap();
    assert!(error.to_string().contains(&address.port().to_string()));
}

#[tokio::test]
async fn test_records_toggle_leaves_started_tiles_alone() {
    let photos = TempDir::new().unwrap();
    let address = spawn_server(&photos).await;

    let first_record = Catalog::portfolio().records.entries()[0].video_id().unwrap();
    let first_player = format!("/fragments/player/{}.html", first_record.path_segment());

    let index = reqwest::get(format!("http://{address}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(index.contains(&first_player));

    for state in ["expanded", "collapsed"] {
        let fragment = reqwest::get(format!("http://{address}/fragments/records/{state}.html"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(!fragment.contains(&first_player), "{state} re-renders the preview");
        assert!(!fragment.contains(r#"id="records-grid""#));
        assert!(fragment.contains(r#"hx-swap-oob="true""#));
    }
}
