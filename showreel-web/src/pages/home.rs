//! Portfolio page - the whole single-page site and its swappable regions

use showreel_core::config::RevealConfig;
use showreel_core::{
    Catalog, ClientViewport, Expansion, GalleryExpansion, MediaTile, MenuState, Reveal,
    ShowreelConfig, UnsupportedViewport,
};

use crate::components::layout::{self, ContactLink, SITE_NAME, SITE_ROLES};
use crate::components::{GalleryParams, gallery_grid, gallery_remainder, reveal_block, tile_frame};
use crate::routes;

pub const HERO_PHOTO: &str = "/photos/IMG_2537.JPG";
pub const BROADCAST_PHOTO: &str = "/photos/000158150003.jpg";
pub const PORTRAIT_PHOTO: &str = "/photos/Scan@harriettkbols.JPG";

pub const RECORDS_GRID_ID: &str = "records-grid";
pub const BROADCAST_GRID_ID: &str = "broadcast-grid";

const ABOUT_BLURB: &str = "Writing records. Producing artists. Leading live shows.";

const CONTACT_LINKS: [ContactLink<'static>; 2] = [
    ContactLink {
        label: "Management",
        text: "jill@echobeachmusic.com",
        href: "mailto:jill@echobeachmusic.com",
        external: false,
    },
    ContactLink {
        label: "Instagram",
        text: "@benjacksoncook",
        href: "https://instagram.com/benjacksoncook",
        external: true,
    },
];

/// Renders the portfolio page and the fragments it requests.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    catalog: Catalog,
    config: ShowreelConfig,
}

impl PortfolioPage {
    pub fn new(catalog: Catalog, config: ShowreelConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShowreelConfig {
        &self.config
    }

    /// Renders the complete document in its initial state: menu closed,
    /// records collapsed, no tile activated.
    pub fn render(&self) -> String {
        let content = format!(
            r#"{header}
            <main id="top">
                {hero}
                {records}
                {broadcast}
                {about}
                {contact}
            </main>"#,
            header = layout::page_header(MenuState::Closed),
            hero = layout::hero_section(HERO_PHOTO),
            records = self.records_section(),
            broadcast = self.broadcast_section(),
            about = self.about_section(),
            contact = self.contact_section(),
        );

        render_page(&content, &self.config.reveal)
    }

    /// Header fragment with the mobile menu in `state`.
    pub fn menu_region(&self, state: MenuState) -> String {
        layout::page_header(state)
    }

    /// Records fragment for `state`: only the entries past the preview, so
    /// toggling never re-renders a tile already on the page.
    pub fn records_remainder(&self, state: Expansion) -> String {
        gallery_remainder(self.records_params(state), |index, tile| {
            self.reveal(&format!("records-{index}"), tile)
        })
    }

    fn records_params(&self, state: Expansion) -> GalleryParams<'static> {
        GalleryParams {
            container_id: RECORDS_GRID_ID,
            entries: self.catalog.records.entries(),
            expansion: Some(GalleryExpansion::with_state(
                self.config.gallery.records_visible,
                state,
            )),
            button_class: "text-dark/70",
        }
    }

    /// Activated player fragment for a catalog video, `None` for ids the
    /// catalog does not contain.
    pub fn player(&self, id: &str) -> Option<String> {
        let entry = self.catalog.find_by_id(id)?;
        let mut tile = MediaTile::from_entry(entry);
        tile.activate();
        Some(tile_frame(&tile))
    }

    fn records_section(&self) -> String {
        let heading = self.reveal(
            "records-heading",
            &layout::section_heading("Records", "Writing • Production", "text-dark/70"),
        );

        format!(
            r#"<section id="records" class="bg-light">
                <div class="mx-auto max-w-6xl px-6 py-24 md:py-28">
                    {heading}
                    {grid}
                </div>
            </section>"#,
            grid = gallery_grid(self.records_params(Expansion::Collapsed), |index, tile| {
                self.reveal(&format!("records-{index}"), tile)
            }),
        )
    }

    fn broadcast_section(&self) -> String {
        let heading = self.reveal(
            "broadcast-heading",
            &layout::section_heading(
                "Broadcast & Live Direction",
                "Musical Direction • Arrangement • Keys",
                "text-light/70",
            ),
        );

        let grid = gallery_grid(
            GalleryParams {
                container_id: BROADCAST_GRID_ID,
                entries: self.catalog.broadcast.entries(),
                expansion: None,
                button_class: "text-light/70",
            },
            |index, tile| self.reveal(&format!("broadcast-{index}"), tile),
        );

        format!(
            r#"<section id="broadcast" class="bg-dark text-light">
                <div class="mx-auto max-w-6xl px-6 py-24 md:py-28">
                    {heading}
                    <div class="mt-12 overflow-hidden rounded-[6px]">{banner}</div>
                    {grid}
                </div>
            </section>"#,
            banner = layout::framed_photo(BROADCAST_PHOTO, "aspect-[21/9]", true),
        )
    }

    fn about_section(&self) -> String {
        format!(
            r#"<section id="about" class="bg-light">
                <div class="mx-auto max-w-3xl px-6 py-24 md:py-28">{}</div>
            </section>"#,
            self.reveal("about", &layout::about_content(ABOUT_BLURB, PORTRAIT_PHOTO))
        )
    }

    fn contact_section(&self) -> String {
        format!(
            r#"<section id="contact" class="bg-dark text-light">
                <div class="mx-auto max-w-3xl px-6 py-24 md:py-28">{}</div>
            </section>"#,
            self.reveal("contact", &layout::contact_section(&CONTACT_LINKS))
        )
    }

    /// Mounts a reveal wrapper for one block and renders it.
    ///
    /// The server-side mount only decides the initial class; the wrapper is
    /// dropped, releasing its registration, as soon as the markup exists.
    fn reveal(&self, target: &str, content: &str) -> String {
        let threshold = self.config.reveal.threshold;
        if self.config.reveal.enabled {
            reveal_block(&Reveal::mount(&ClientViewport, target, threshold), content)
        } else {
            reveal_block(&Reveal::mount(&UnsupportedViewport, target, threshold), content)
        }
    }
}

/// Wraps page content in the document shell: head, Tailwind and htmx.
pub fn render_page(content: &str, reveal: &RevealConfig) -> String {
    let reveal_attr = if reveal.enabled { "on" } else { "off" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{SITE_NAME}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{SITE_NAME} — {SITE_ROLES}">
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script>
        tailwind.config = {{
            theme: {{
                extend: {{
                    colors: {{
                        light: '#f4f1ea',
                        dark: '#1c1b19'
                    }}
                }}
            }}
        }}
    </script>
    <link rel="stylesheet" href="{stylesheet}">
    <noscript><style>.fade-in {{ opacity: 1; transform: none; }}</style></noscript>
    <script src="{script}" defer></script>
</head>
<body class="antialiased" data-reveal="{reveal_attr}">
    <div class="min-h-screen bg-light text-dark">
        {content}
    </div>
</body>
</html>"#,
        stylesheet = routes::STYLESHEET_PATH,
        script = routes::SCRIPT_PATH,
    )
}
