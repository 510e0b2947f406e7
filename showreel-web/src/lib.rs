//! Showreel Web - single-page portfolio server
//!
//! Server-side rendered page with htmx fragments for tile activation, the
//! mobile menu and the records gallery. The same rendered output is served
//! over HTTP or exported as static files.

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]

pub mod assets;
pub mod components;
pub mod error;
pub mod export;
pub mod htmx;
pub mod pages;
pub mod routes;
pub mod server;
pub mod site;

// Re-export main types
pub use error::{Result, WebError};
pub use export::{ExportSummary, export_site};
pub use server::{AppState, ShowreelServer, router, run_server};
pub use site::RenderedSite;
