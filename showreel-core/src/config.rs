//! Centralized configuration for Showreel.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::reveal::Threshold;
use crate::{Result, ShowreelError};

/// Central configuration for all Showreel components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct ShowreelConfig {
    pub server: ServerConfig,
    pub gallery: GalleryConfig,
    pub reveal: RevealConfig,
    pub export: ExportConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: IpAddr,
    /// Port to bind to (0 picks a free port)
    pub port: u16,
    /// Directory served under `/photos`
    pub photos_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            photos_dir: PathBuf::from("photos"),
        }
    }
}

/// Gallery display configuration.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Records shown before "Show all" is pressed
    pub records_visible: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { records_visible: 6 }
    }
}

/// Scroll reveal configuration.
#[derive(Debug, Clone)]
pub struct RevealConfig {
    /// Disable to render every block revealed, without scroll observation
    pub enabled: bool,
    /// Visible fraction that triggers the reveal
    pub threshold: Threshold,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: Threshold::default(),
        }
    }
}

/// Static export configuration.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory for the exported site
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl ShowreelConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults. Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = parse_override(&lookup, "SHOWREEL_HOST", |v| v.parse::<IpAddr>().ok()) {
            config.server.host = host;
        }

        if let Some(port) = parse_override(&lookup, "SHOWREEL_PORT", |v| v.parse::<u16>().ok()) {
            config.server.port = port;
        }

        if let Some(dir) = lookup("SHOWREEL_PHOTOS_DIR") {
            config.server.photos_dir = PathBuf::from(dir);
        }

        if let Some(count) =
            parse_override(&lookup, "SHOWREEL_RECORDS_VISIBLE", |v| v.parse::<usize>().ok())
        {
            config.gallery.records_visible = count;
        }

        if let Some(threshold) = parse_override(&lookup, "SHOWREEL_REVEAL_THRESHOLD", |v| {
            v.parse::<f64>().ok().and_then(Threshold::new)
        }) {
            config.reveal.threshold = threshold;
        }

        if let Some(enabled) = parse_override(&lookup, "SHOWREEL_REVEAL", |v| v.parse::<bool>().ok()) {
            config.reveal.enabled = enabled;
        }

        config
    }

    /// Checks settings that would produce a broken page.
    ///
    /// # Errors
    /// - `ShowreelError::Configuration` - Records preview would be empty
    pub fn validate(&self) -> Result<()> {
        if self.gallery.records_visible == 0 {
            return Err(ShowreelError::Configuration {
                reason: "records preview must show at least one entry".to_string(),
            });
        }
        Ok(())
    }

    /// Creates a configuration optimized for testing.
    ///
    /// Binds an ephemeral port and shows a small records preview.
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            gallery: GalleryConfig { records_visible: 2 },
            ..Default::default()
        }
    }
}

/// Reads `key` and parses it, logging a warning and yielding `None` when the
/// value is present but unusable.
fn parse_override<F, T, P>(lookup: &F, key: &str, parse: P) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Option<T>,
{
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "Ignoring invalid configuration override");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = ShowreelConfig::default();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.server.photos_dir, PathBuf::from("photos"));
        assert_eq!(config.gallery.records_visible, 6);
        assert!(config.reveal.enabled);
        assert_eq!(config.reveal.threshold.ratio(), 0.15);
        assert_eq!(config.export.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ShowreelConfig::from_lookup(lookup_from(&[
            ("SHOWREEL_HOST", "0.0.0.0"),
            ("SHOWREEL_PORT", "8080"),
            ("SHOWREEL_PHOTOS_DIR", "/srv/photos"),
            ("SHOWREEL_RECORDS_VISIBLE", "4"),
            ("SHOWREEL_REVEAL_THRESHOLD", "0.3"),
            ("SHOWREEL_REVEAL", "false"),
        ]));

        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.server.photos_dir, PathBuf::from("/srv/photos"));
        assert_eq!(config.gallery.records_visible, 4);
        assert_eq!(config.reveal.threshold.ratio(), 0.3);
        assert!(!config.reveal.enabled);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = ShowreelConfig::from_lookup(lookup_from(&[
            ("SHOWREEL_HOST", "localhost:3000"),
            ("SHOWREEL_PORT", "99999"),
            ("SHOWREEL_RECORDS_VISIBLE", "-1"),
            ("SHOWREEL_REVEAL_THRESHOLD", "1.5"),
            ("SHOWREEL_REVEAL", "sometimes"),
        ]));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.gallery.records_visible, 6);
        assert_eq!(config.reveal.threshold.ratio(), 0.15);
        assert!(config.reveal.enabled);
    }

    #[test]
    fn test_parse_override_reports_unusable_values() {
        let lookup = lookup_from(&[("SHOWREEL_PORT", " 8080 "), ("SHOWREEL_REVEAL", "yes")]);

        assert_eq!(
            parse_override(&lookup, "SHOWREEL_PORT", |v| v.parse::<u16>().ok()),
            Some(8080)
        );
        assert_eq!(
            parse_override(&lookup, "SHOWREEL_REVEAL", |v| v.parse::<bool>().ok()),
            None
        );
        assert_eq!(
            parse_override(&lookup, "SHOWREEL_HOST", |v| v.parse::<IpAddr>().ok()),
            None
        );
    }

    #[test]
    fn test_reveal_override_accepts_only_booleans() {
        let mut config = ShowreelConfig::from_lookup(lookup_from(&[("SHOWREEL_REVEAL", "false")]));
        assert!(!config.reveal.enabled);
        config = ShowreelConfig::from_lookup(lookup_from(&[("SHOWREEL_REVEAL", "FALSE")]));
        assert!(config.reveal.enabled);
    }

    #[test]
    fn test_empty_records_preview_rejected() {
        let mut config = ShowreelConfig::default();
        assert!(config.validate().is_ok());
        config.gallery.records_visible = 0;
        assert!(matches!(
            config.validate(),
            Err(ShowreelError::Configuration { .. })
        ));
    }

    #[test]
    fn test_testing_preset() {
        let config = ShowreelConfig::for_testing();
        assert_eq!(config.server.port, 0);
        assert_eq!(config.gallery.records_visible, 2);
        assert!(config.reveal.enabled);
    }
}
