//! Site configuration.
//!
//! Loaded from `site.toml`. Every key is optional; missing keys fall back to
//! the values the page was designed with.
//!
//! The browser build embeds `site.toml` and only goes through
//! [`SiteConfig::from_toml_str`]. The path loaders are for native tooling
//! (build scripts, config linting) that reads the file from disk.
//!
//! ```toml
//! [scroll]
//! threshold_px = 50
//! anchor_px = 100
//!
//! [stats]
//! steps = 100
//! visibility_threshold = 0.5
//!
//! [assets]
//! logo_url = "https://ucarecdn.com/.../"
//! hero_background_url = "https://ucarecdn.com/.../"
//!
//! [images]
//! domains = ["ucarecdn.com"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::counter::{CounterAnimator, DEFAULT_STEPS};
use crate::error::ConfigError;
use crate::scroll::{DEFAULT_ANCHOR_PX, DEFAULT_SCROLL_THRESHOLD_PX, ScrollTracker};
use crate::state::PageState;
use crate::trigger::{DEFAULT_VISIBILITY_THRESHOLD, VisibilityTrigger};

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll tracker parameters
    pub scroll: ScrollConfig,
    /// Stats animation parameters
    pub stats: StatsConfig,
    /// Externally hosted images
    pub assets: AssetConfig,
    /// Image hosting allow-list
    pub images: ImageConfig,
}

/// `[scroll]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset past which the navigation bar turns solid
    pub threshold_px: f64,
    /// Anchor line used for active-section detection
    pub anchor_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            anchor_px: DEFAULT_ANCHOR_PX,
        }
    }
}

/// `[stats]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Ticks from zero to target
    pub steps: u32,
    /// Visible fraction of the panel that starts the animation
    pub visibility_threshold: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}

/// `[assets]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Navigation logo
    pub logo_url: String,
    /// Hero background image
    pub hero_background_url: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            logo_url: "https://ucarecdn.com/a353e3ce-c258-4daf-8791-9614e8da35c0/-/format/auto/"
                .into(),
            hero_background_url: "https://ucarecdn.com/93fdb395-dbe7-424d-abdd-3f4f080ee55d/"
                .into(),
        }
    }
}

/// `[images]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Hosts images may be served from
    pub domains: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            domains: vec!["ucarecdn.com".into(), "yourdomain.com".into()],
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to default site config");
                Self::default()
            }
        }
    }

    /// Check ranges and that every asset is served from an allowed host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stats.steps == 0 {
            return Err(ConfigError::OutOfRange {
                field: "stats.steps",
                reason: "must be at least 1",
            });
        }
        if !(self.stats.visibility_threshold > 0.0 && self.stats.visibility_threshold <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "stats.visibility_threshold",
                reason: "must be in (0, 1]",
            });
        }
        if self.scroll.threshold_px < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "scroll.threshold_px",
                reason: "must not be negative",
            });
        }
        if self.scroll.anchor_px < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "scroll.anchor_px",
                reason: "must not be negative",
            });
        }
        self.check_image("assets.logo_url", &self.assets.logo_url)?;
        self.check_image("assets.hero_background_url", &self.assets.hero_background_url)
    }

    fn check_image(&self, field: &'static str, raw: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidUrl {
            field,
            url: raw.to_string(),
        };
        let url = Url::parse(raw).map_err(|_| invalid())?;
        let host = url.host_str().ok_or_else(invalid)?;
        if self.images.domains.iter().any(|d| d.eq_ignore_ascii_case(host)) {
            Ok(())
        } else {
            Err(ConfigError::DisallowedHost {
                field,
                host: host.to_string(),
            })
        }
    }

    /// Scroll tracker built from `[scroll]`.
    pub fn scroll_tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.scroll.threshold_px, self.scroll.anchor_px)
    }

    /// Idle stats trigger built from `[stats]`.
    pub fn visibility_trigger(&self) -> VisibilityTrigger {
        VisibilityTrigger::new(self.stats.visibility_threshold)
    }

    /// Fresh animator built from `[stats]`.
    pub fn animator(&self) -> CounterAnimator {
        CounterAnimator::new(self.stats.steps)
    }

    /// Page state for a new page view.
    pub fn page_state(&self) -> PageState {
        PageState::new(self.visibility_trigger(), self.animator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_design_values() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_tracker(), ScrollTracker::default());
        assert_eq!(config.visibility_trigger(), VisibilityTrigger::default());
        assert_eq!(config.animator(), CounterAnimator::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[scroll]
anchor_px = 120

[images]
domains = ["cdn.example.org", "ucarecdn.com"]
"#,
        )
        .unwrap();
        assert_eq!(config.scroll.anchor_px, 120.0);
        assert_eq!(config.scroll.threshold_px, 50.0);
        assert_eq!(config.stats, StatsConfig::default());
        assert_eq!(config.images.domains.len(), 2);
    }

    #[test]
    fn rejects_disallowed_image_host() {
        let config = SiteConfig::from_toml_str(
            r#"
[assets]
logo_url = "https://images.example.net/logo.png"
"#,
        )
        .unwrap();
        match config.validate() {
            Err(ConfigError::DisallowedHost { field, host }) => {
                assert_eq!(field, "assets.logo_url");
                assert_eq!(host, "images.example.net");
            }
            other => panic!("expected DisallowedHost, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_urls_and_ranges() {
        let mut config = SiteConfig::default();
        config.assets.hero_background_url = "not a url".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "assets.hero_background_url", .. })
        ));

        let mut config = SiteConfig::default();
        config.stats.steps = 0;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { .. })));

        let mut config = SiteConfig::default();
        config.stats.visibility_threshold = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn host_match_ignores_case() {
        let mut config = SiteConfig::default();
        config.images.domains = vec!["UcareCDN.com".into()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::load_from_path(&temp.path().join("site.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[stats]\nsteps = 60\nvisibility_threshold = 0.25").unwrap();

        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.stats.steps, 60);
        assert_eq!(config.visibility_trigger().threshold(), 0.25);
    }

    #[test]
    fn invalid_file_falls_back_leniently_but_not_strictly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "[stats\nsteps = ").unwrap();

        assert_eq!(SiteConfig::load_from_path(&path), SiteConfig::default());
        assert!(matches!(
            SiteConfig::try_load_from_path(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
