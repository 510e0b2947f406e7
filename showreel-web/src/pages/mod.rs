//! Full page rendering using the component system
//!
//! The site is a single page; its swappable regions are rendered by the same
//! type so fragments and the initial document can never drift apart.

pub mod home;

pub use home::{PortfolioPage, render_page};
