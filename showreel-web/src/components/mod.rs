//! Reusable HTML components for the htmx + Tailwind page
//!
//! Components are server-rendered HTML fragments that can be used
//! in the full page or as htmx partial updates. All styling uses Tailwind CSS.

pub mod gallery;
pub mod layout;
pub mod reveal;
pub mod tile;

use maud::html;

// Re-export main component functions
pub use gallery::{GalleryParams, gallery_grid, gallery_remainder};
pub use layout::{contact_section, hero_section, page_header, section_heading};
pub use reveal::reveal_block;
pub use tile::{media_tile, tile_frame};

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    html! { (text) }.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text_unchanged() {
        assert_eq!(escape_html("Muroki — Songwriting"), "Muroki — Songwriting");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_html(r#"Don Broco & "Nickelback" <live>"#),
            "Don Broco &amp; &quot;Nickelback&quot; &lt;live&gt;"
        );
    }
}
