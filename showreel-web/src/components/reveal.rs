//! Scroll reveal wrapper markup

use showreel_core::{Reveal, RevealState};

/// Wraps `content` in a fade-in block reflecting the wrapper's state.
///
/// Observing blocks render hidden and are picked up by the client script;
/// revealed blocks render visible and are never observed.
pub fn reveal_block<R>(reveal: &Reveal<R>, content: &str) -> String {
    let state_class = match reveal.state() {
        RevealState::Observing => "fade-in",
        RevealState::Revealed => "fade-in is-visible",
    };

    format!(r#"<div class="{state_class}">{content}</div>"#)
}

#[cfg(test)]
mod tests {
    use showreel_core::{ClientViewport, Threshold, UnsupportedViewport};

    use super::*;

    #[test]
    fn test_observed_block_renders_hidden() {
        let reveal = Reveal::mount(&ClientViewport, "about", Threshold::default());
        assert_eq!(
            reveal_block(&reveal, "<p>hi</p>"),
            r#"<div class="fade-in"><p>hi</p></div>"#
        );
    }

    #[test]
    fn test_unobservable_block_renders_visible() {
        let reveal = Reveal::mount(&UnsupportedViewport, "about", Threshold::default());
        assert!(reveal_block(&reveal, "x").contains("fade-in is-visible"));
    }
}
