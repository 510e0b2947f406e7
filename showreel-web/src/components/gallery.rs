//! Gallery grid of lazy media tiles
//!
//! An expandable gallery renders its preview once. "Show all" and "Show
//! fewer" only swap the remainder region after the preview, so tiles in the
//! preview, including any a visitor has started playing, stay in the page.

use showreel_core::{Expansion, GalleryExpansion, MediaTile, VideoEntry};

use super::tile::media_tile;
use crate::routes;

/// Parameters for rendering a gallery grid
pub struct GalleryParams<'a> {
    /// Element id of the gallery container
    pub container_id: &'a str,
    pub entries: &'a [VideoEntry],
    /// `None` renders every entry without a "show all" control
    pub expansion: Option<GalleryExpansion>,
    /// Colour classes for the expand button, matching the section background
    pub button_class: &'a str,
}

/// Id of the swappable region holding the entries past the preview.
pub fn remainder_id(container_id: &str) -> String {
    format!("{container_id}-more")
}

/// Id of the element holding the expand toggle.
pub fn toggle_id(container_id: &str) -> String {
    format!("{container_id}-toggle")
}

/// Renders a two-column grid of tiles.
///
/// `wrap` places each rendered tile in its surrounding block (the reveal
/// wrapper on the page) and receives the entry's index in the collection.
pub fn gallery_grid<F>(params: GalleryParams<'_>, mut wrap: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    let GalleryParams {
        container_id,
        entries,
        expansion,
        button_class,
    } = params;

    let Some(expansion) = expansion.filter(|e| e.is_truncating(entries.len())) else {
        return format!(
            r#"<div id="{container_id}">
            <div class="mt-12 grid grid-cols-1 gap-x-10 gap-y-14 md:grid-cols-2">{}</div>
        </div>"#,
            render_tiles(entries, 0, &mut wrap)
        );
    };

    format!(
        r#"<div id="{container_id}">
            <div class="mt-12 grid grid-cols-1 gap-x-10 gap-y-14 md:grid-cols-2">{preview}{remainder}</div>
            {toggle}
        </div>"#,
        preview = render_tiles(expansion.preview(entries), 0, &mut wrap),
        remainder = remainder_region(container_id, entries, expansion, &mut wrap),
        toggle = expand_toggle(container_id, expansion, entries.len(), button_class, false),
    )
}

/// Renders the swap fragment for an expansion state: the remainder region
/// plus an out-of-band replacement for the toggle.
pub fn gallery_remainder<F>(params: GalleryParams<'_>, mut wrap: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    let GalleryParams {
        container_id,
        entries,
        expansion,
        button_class,
    } = params;
    let expansion = expansion.unwrap_or_else(|| GalleryExpansion::new(entries.len()));

    format!(
        "{}\n{}",
        remainder_region(container_id, entries, expansion, &mut wrap),
        expand_toggle(container_id, expansion, entries.len(), button_class, true)
    )
}

fn render_tiles<F>(entries: &[VideoEntry], offset: usize, wrap: &mut F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| wrap(offset + index, &media_tile(&MediaTile::from_entry(entry))))
        .collect()
}

/// Display-contents wrapper so remainder tiles flow in the same grid.
fn remainder_region<F>(
    container_id: &str,
    entries: &[VideoEntry],
    expansion: GalleryExpansion,
    wrap: &mut F,
) -> String
where
    F: FnMut(usize, &str) -> String,
{
    let offset = expansion.preview(entries).len();
    format!(
        r#"<div id="{id}" class="contents">{tiles}</div>"#,
        id = remainder_id(container_id),
        tiles = render_tiles(expansion.remainder(entries), offset, wrap),
    )
}

fn expand_toggle(
    container_id: &str,
    expansion: GalleryExpansion,
    total: usize,
    button_class: &str,
    out_of_band: bool,
) -> String {
    let (label, expanded) = match expansion.state() {
        Expansion::Collapsed => (format!("Show all ({} more)", expansion.hidden_count(total)), false),
        Expansion::Expanded => ("Show fewer".to_string(), true),
    };
    let oob = if out_of_band { r#" hx-swap-oob="true""# } else { "" };

    format!(
        r##"<div id="{toggle_id}" class="mt-14 text-center"{oob}>
            <button type="button"
                    class="text-sm tracking-[0.18em] underline-offset-4 hover:underline {button_class}"
                    hx-get="{path}"
                    hx-target="#{remainder_id}"
                    hx-swap="outerHTML"
                    aria-expanded="{expanded}"
                    aria-controls="{remainder_id}">{label}</button>
        </div>"##,
        toggle_id = toggle_id(container_id),
        remainder_id = remainder_id(container_id),
        path = routes::records_fragment(expansion.state().toggled()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENTRIES: &[VideoEntry] = &[
        VideoEntry::new("One", "https://youtu.be/one"),
        VideoEntry::new("Two", "https://youtu.be/two"),
        VideoEntry::new("Three", "https://youtu.be/three"),
    ];

    fn plain(_: usize, tile: &str) -> String {
        tile.to_string()
    }

    fn records(state: Expansion) -> GalleryParams<'static> {
        GalleryParams {
            container_id: "records-grid",
            entries: ENTRIES,
            expansion: Some(GalleryExpansion::with_state(2, state)),
            button_class: "text-dark/70",
        }
    }

    #[test]
    fn test_collapsed_grid_renders_prefix_and_toggle() {
        let html = gallery_grid(records(Expansion::Collapsed), plain);
        assert!(html.contains("One"));
        assert!(html.contains("Two"));
        assert!(!html.contains("Three"));
        assert!(html.contains(r#"<div id="records-grid-more" class="contents"></div>"#));
        assert!(html.contains("Show all (1 more)"));
        assert!(html.contains(r#"hx-get="/fragments/records/expanded.html""#));
        assert!(html.contains(r##"hx-target="#records-grid-more""##));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("hx-swap-oob"));
    }

    #[test]
    fn test_toggle_fragments_never_rerender_preview_tiles() {
        for state in [Expansion::Expanded, Expansion::Collapsed] {
            let html = gallery_remainder(records(state), plain);
            for preview in ["one", "two"] {
                assert!(!html.contains(&format!("/vi/{preview}/")));
                assert!(!html.contains(&format!("/fragments/player/{preview}.html")));
            }
            assert!(!html.contains(r#"id="records-grid""#));
            assert!(html.starts_with(r#"<div id="records-grid-more""#));
            assert!(html.contains(r#"id="records-grid-toggle" class="mt-14 text-center" hx-swap-oob="true""#));
        }
    }

    #[test]
    fn test_expanded_fragment_renders_remainder() {
        let html = gallery_remainder(records(Expansion::Expanded), plain);
        assert!(html.contains("Three"));
        assert!(html.contains("Show fewer"));
        assert!(html.contains(r#"hx-get="/fragments/records/collapsed.html""#));

        let collapsed = gallery_remainder(records(Expansion::Collapsed), plain);
        assert!(!collapsed.contains("Three"));
        assert!(collapsed.contains("Show all (1 more)"));
    }

    #[test]
    fn test_unlimited_grid_has_no_toggle() {
        let html = gallery_grid(
            GalleryParams {
                container_id: "broadcast-grid",
                entries: ENTRIES,
                expansion: None,
                button_class: "",
            },
            plain,
        );
        assert_eq!(html.matches("<button").count(), ENTRIES.len());
        assert!(!html.contains("Show all"));
        assert!(!html.contains("broadcast-grid-more"));
    }

    #[test]
    fn test_wrapper_sees_collection_indices() {
        let mut seen = Vec::new();
        gallery_grid(records(Expansion::Collapsed), |index, tile| {
            seen.push(index);
            format!("<section>{tile}</section>")
        });
        gallery_remainder(records(Expansion::Expanded), |index, tile| {
            seen.push(index);
            tile.to_string()
        });
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
