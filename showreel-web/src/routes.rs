//! URL paths shared by the server, the rendered markup and the static export
//!
//! Every htmx fragment lives at a path ending in `.html` so the exported
//! directory answers the same requests as the running server.

use showreel_core::{Expansion, MenuState, VideoId};

pub const INDEX_PATH: &str = "/";
pub const SCRIPT_PATH: &str = "/assets/site.js";
pub const STYLESHEET_PATH: &str = "/assets/site.css";
pub const PHOTOS_PREFIX: &str = "/photos";
pub const HEALTH_PATH: &str = "/health";

pub const FRAGMENT_SUFFIX: &str = ".html";

/// Fragment holding the activated player for `id`.
pub fn player_fragment(id: &VideoId) -> String {
    format!("/fragments/player/{}{FRAGMENT_SUFFIX}", id.path_segment())
}

/// Fragment holding the header with the mobile menu in `state`.
pub fn menu_fragment(state: MenuState) -> String {
    format!("/fragments/nav/{}{FRAGMENT_SUFFIX}", state.as_str())
}

/// Fragment holding the records grid in `state`.
pub fn records_fragment(state: Expansion) -> String {
    format!("/fragments/records/{}{FRAGMENT_SUFFIX}", state.as_str())
}

/// Strips the `.html` suffix from a fragment file name.
pub fn fragment_stem(file: &str) -> Option<&str> {
    file.strip_suffix(FRAGMENT_SUFFIX)
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_paths() {
        let id = VideoId::new("jcrNNpMkBQ4").unwrap();
        assert_eq!(player_fragment(&id), "/fragments/player/jcrNNpMkBQ4.html");
        assert_eq!(menu_fragment(MenuState::Open), "/fragments/nav/open.html");
        assert_eq!(
            records_fragment(Expansion::Expanded),
            "/fragments/records/expanded.html"
        );
    }

    #[test]
    fn test_fragment_stem() {
        assert_eq!(fragment_stem("open.html"), Some("open"));
        assert_eq!(fragment_stem(".html"), None);
        assert_eq!(fragment_stem("open"), None);
    }
}
