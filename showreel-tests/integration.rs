//! Integration tests for Showreel
//!
//! Exercise the server over a real socket, the static export on disk, and
//! workspace-wide style rules.

#[path = "style.rs"]
mod style;

#[path = "integration/server_routes.rs"]
mod server_routes;

#[path = "integration/static_export.rs"]
mod static_export;

#[path = "integration/tile_activation.rs"]
mod tile_activation;
