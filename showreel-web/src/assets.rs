//! Static assets for the portfolio page: the site script and stylesheet

use std::collections::BTreeMap;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use showreel_core::config::RevealConfig;

use crate::routes;

/// A generated asset with its MIME type.
#[derive(Debug, Clone)]
pub struct StaticFile {
    pub content: String,
    pub mime_type: &'static str,
}

/// In-memory assets keyed by their URL path.
#[derive(Debug, Clone)]
pub struct StaticFileHandler {
    files: BTreeMap<&'static str, StaticFile>,
}

impl StaticFileHandler {
    /// Builds the asset set for the given reveal settings.
    pub fn new(reveal: &RevealConfig) -> Self {
        let mut files = BTreeMap::new();

        files.insert(
            routes::SCRIPT_PATH,
            StaticFile {
                content: site_script(reveal),
                mime_type: "application/javascript",
            },
        );

        files.insert(
            routes::STYLESHEET_PATH,
            StaticFile {
                content: SITE_CSS.to_string(),
                mime_type: "text/css",
            },
        );

        Self { files }
    }

    /// Serves an asset by URL path.
    ///
    /// # Errors
    /// - `StatusCode::NOT_FOUND` - No asset registered at `path`
    pub fn serve(&self, path: &str) -> Result<Response, StatusCode> {
        let file = self.files.get(path).ok_or(StatusCode::NOT_FOUND)?;
        Ok((
            [
                (header::CONTENT_TYPE, file.mime_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            file.content.clone(),
        )
            .into_response())
    }

    /// All assets with their URL paths.
    pub fn files(&self) -> impl Iterator<Item = (&'static str, &StaticFile)> {
        self.files.iter().map(|(path, file)| (*path, file))
    }
}

/// Client half of the reveal wrapper and tile activation.
///
/// Observes every hidden `.fade-in` block, including blocks swapped in by
/// htmx, and releases the observation on reveal or when htmx removes the
/// block. Without `IntersectionObserver`, or with reveals turned off,
/// everything is shown immediately.
fn site_script(reveal: &RevealConfig) -> String {
    format!(
        r#"// Showreel site script
(function () {{
    'use strict';

    var REVEAL_ENABLED = {enabled};
    var THRESHOLD = {threshold};
    var observer = null;

    function reveal(el) {{
        el.classList.add('is-visible');
    }}

    if (REVEAL_ENABLED && 'IntersectionObserver' in window) {{
        observer = new IntersectionObserver(function (entries) {{
            entries.forEach(function (entry) {{
                if (entry.isIntersecting) {{
                    reveal(entry.target);
                    observer.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: THRESHOLD }});
    }}

    function hiddenBlocks(root) {{
        var found = [];
        if (root.classList && root.classList.contains('fade-in') && !root.classList.contains('is-visible')) {{
            found.push(root);
        }}
        if (root.querySelectorAll) {{
            root.querySelectorAll('.fade-in:not(.is-visible)').forEach(function (el) {{
                found.push(el);
            }});
        }}
        return found;
    }}

    function observeWithin(root) {{
        hiddenBlocks(root).forEach(function (el) {{
            if (observer) {{
                observer.observe(el);
            }} else {{
                reveal(el);
            }}
        }});
    }}

    document.addEventListener('DOMContentLoaded', function () {{
        observeWithin(document);
    }});

    document.addEventListener('htmx:load', function (evt) {{
        observeWithin(evt.target);
    }});

    document.addEventListener('htmx:beforeCleanupElement', function (evt) {{
        if (observer && evt.target.classList && evt.target.classList.contains('fade-in')) {{
            observer.unobserve(evt.target);
        }}
    }});
}})();
"#,
        enabled = reveal.enabled,
        threshold = reveal.threshold,
    )
}

const SITE_CSS: &str = r#"/* Showreel site styles */

:root {
    --light: #f4f1ea;
    --dark: #1c1b19;
}

html {
    scroll-behavior: smooth;
}

body {
    background: var(--light);
    color: var(--dark);
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

.heading {
    font-family: 'Cormorant Garamond', 'Times New Roman', serif;
    font-weight: 500;
}

.fade-in {
    opacity: 0;
    transform: translateY(16px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

.fade-in.is-visible {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .fade-in {
        transition: none;
        transform: none;
    }
}

.tile-frame iframe {
    border: 0;
}
"#;

#[cfg(test)]
mod tests {
    use showreel_core::Threshold;

    use super::*;

    #[test]
    fn test_handler_registers_both_assets() {
        let handler = StaticFileHandler::new(&RevealConfig::default());
        let paths: Vec<_> = handler.files().map(|(path, _)| path).collect();
        assert_eq!(paths, vec![routes::STYLESHEET_PATH, routes::SCRIPT_PATH]);
    }

    #[test]
    fn test_script_uses_configured_threshold() {
        let reveal = RevealConfig {
            enabled: true,
            threshold: Threshold::new(0.4).unwrap(),
        };
        let script = site_script(&reveal);
        assert!(script.contains("var THRESHOLD = 0.4;"));
        assert!(script.contains("var REVEAL_ENABLED = true;"));
        assert!(script.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn test_script_reveals_everything_when_disabled() {
        let reveal = RevealConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(site_script(&reveal).contains("var REVEAL_ENABLED = false;"));
    }

    #[test]
    fn test_css_content() {
        let handler = StaticFileHandler::new(&RevealConfig::default());
        let (_, css) = handler
            .files()
            .find(|(path, _)| *path == routes::STYLESHEET_PATH)
            .unwrap();
        assert!(css.content.contains(".fade-in.is-visible"));
        assert_eq!(css.mime_type, "text/css");
    }

    #[test]
    fn test_serve_existing_file() {
        let handler = StaticFileHandler::new(&RevealConfig::default());
        let response = handler.serve(routes::SCRIPT_PATH).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );
    }

    #[test]
    fn test_serve_nonexistent_file() {
        let handler = StaticFileHandler::new(&RevealConfig::default());
        assert_eq!(
            handler.serve("/assets/missing.css").unwrap_err(),
            StatusCode::NOT_FOUND
        );
    }
}
