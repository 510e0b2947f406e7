//! Layout components - header, navigation, hero, section headings, contact

use showreel_core::MenuState;

use super::escape_html;
use crate::routes;

/// Site name shown in the header, hero and document title.
pub const SITE_NAME: &str = "Ben Jackson-Cook";

/// Role line under the name.
pub const SITE_ROLES: &str = "Songwriter / Producer / Musical Director / Touring Keys Player";

/// In-page sections reachable from the navigation, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("records", "Records"),
    ("broadcast", "Broadcast & Live"),
    ("about", "About"),
    ("contact", "Contact"),
];

/// Renders the sticky site header with the mobile menu in `menu` state.
///
/// The whole header is the htmx swap target for the menu button and for the
/// links inside the open mobile menu, so `aria-expanded` always matches what
/// is shown.
pub fn page_header(menu: MenuState) -> String {
    let desktop_links: String = NAV_LINKS
        .iter()
        .map(|(anchor, label)| {
            format!(
                r##"<a href="#{anchor}" class="text-sm tracking-wide text-dark/80 hover:text-dark">{}</a>"##,
                escape_html(label)
            )
        })
        .collect();

    let mobile_nav = if menu.is_open() {
        mobile_menu()
    } else {
        String::new()
    };

    format!(
        r##"<header class="sticky top-0 z-50 border-b border-black/5 bg-light/85 backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <a href="#top" class="heading text-base tracking-wide">{name}</a>
                <nav class="hidden items-center gap-8 md:flex">{desktop_links}</nav>
                <button type="button"
                        class="md:hidden text-sm tracking-wide text-dark/80"
                        hx-get="{toggle_path}"
                        hx-target="closest header"
                        hx-swap="outerHTML"
                        aria-expanded="{expanded}"
                        aria-controls="mobile-nav">Menu</button>
            </div>
            {mobile_nav}
        </header>"##,
        name = SITE_NAME,
        toggle_path = routes::menu_fragment(menu.toggled()),
        expanded = menu.is_open(),
    )
}

/// Links of the open mobile menu; following one closes the menu and scrolls
/// to its section.
fn mobile_menu() -> String {
    let close_path = routes::menu_fragment(MenuState::Closed);
    let links: String = NAV_LINKS
        .iter()
        .map(|(anchor, label)| {
            format!(
                r##"<a href="#{anchor}"
                   hx-get="{close_path}"
                   hx-target="closest header"
                   hx-swap="outerHTML show:#{anchor}:top"
                   class="text-sm tracking-wide opacity-80">{}</a>"##,
                escape_html(label)
            )
        })
        .collect();

    format!(
        r#"<div id="mobile-nav" class="border-t border-black/5 bg-light">
            <div class="mx-auto grid max-w-6xl gap-4 px-6 py-6">{links}</div>
        </div>"#
    )
}

/// Renders the full-height hero with the background photo.
pub fn hero_section(photo: &str) -> String {
    format!(
        r#"<section class="relative min-h-[100svh]">
            <img src="{photo}" alt="" class="absolute inset-0 h-full w-full object-cover" fetchpriority="high">
            <div class="absolute inset-0 bg-light/35"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-light/55 to-light"></div>
            <div class="relative mx-auto flex min-h-[100svh] max-w-6xl items-center px-6">
                <div class="max-w-3xl">
                    <h1 class="heading text-5xl leading-[1.05] tracking-tight sm:text-6xl">{SITE_NAME}</h1>
                    <div class="mt-6 text-base tracking-wide text-dark/80 sm:text-lg">{SITE_ROLES}</div>
                </div>
            </div>
        </section>"#,
        photo = escape_html(photo),
    )
}

/// Renders a section title with its tagline.
///
/// `muted_class` carries the tagline colour, which differs between light and
/// dark sections.
pub fn section_heading(title: &str, tagline: &str, muted_class: &str) -> String {
    format!(
        r#"<h2 class="heading text-4xl tracking-tight">{}</h2>
        <div class="mt-3 text-sm tracking-[0.18em] {muted_class}">{}</div>"#,
        escape_html(title),
        escape_html(tagline)
    )
}

/// Renders a decorative photo in a rounded frame with the given aspect class.
pub fn framed_photo(photo: &str, aspect_class: &str, overlay: bool) -> String {
    let overlay_html = if overlay {
        r#"<div class="absolute inset-0 bg-black/35"></div>"#
    } else {
        ""
    };

    format!(
        r#"<div class="relative {aspect_class} w-full">
            <img src="{}" alt="" loading="lazy" class="absolute inset-0 h-full w-full object-cover">
            {overlay_html}
        </div>"#,
        escape_html(photo)
    )
}

/// Renders the about blurb with the portrait.
pub fn about_content(blurb: &str, portrait: &str) -> String {
    format!(
        r#"<div class="text-center">
            <h2 class="heading text-4xl tracking-tight">About</h2>
            <div class="mt-10 text-lg leading-8 tracking-wide text-dark/85">{}</div>
            <div class="mx-auto mt-12 w-full max-w-sm overflow-hidden rounded-[6px] bg-black/10">
                {}
            </div>
        </div>"#,
        escape_html(blurb),
        framed_photo(portrait, "aspect-[4/5]", false)
    )
}

/// One way of getting in touch.
pub struct ContactLink<'a> {
    pub label: &'a str,
    pub text: &'a str,
    pub href: &'a str,
    pub external: bool,
}

/// Renders the contact block.
pub fn contact_section(links: &[ContactLink<'_>]) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            let target = if link.external {
                r#" target="_blank" rel="noreferrer""#
            } else {
                ""
            };
            format!(
                r#"<div>
                    <div class="text-light/70">{}</div>
                    <a class="mt-1 block text-light hover:text-light/90" href="{}"{target}>{}</a>
                </div>"#,
                escape_html(link.label),
                escape_html(link.href),
                escape_html(link.text)
            )
        })
        .collect();

    format!(
        r#"<div class="text-center">
            <h2 class="heading text-4xl tracking-tight">Contact</h2>
            <div class="mt-12 space-y-10 text-base tracking-wide">{items}</div>
        </div>"#
    )
}
