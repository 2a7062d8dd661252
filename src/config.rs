use crate::constants::*;
use crate::core::parallax::ParallaxParams;
use crate::core::perf::PerfParams;
use crate::core::twinkle::TwinkleParams;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },

    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// CSS selectors locating the elements each effect drives.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub fade: String,
    pub constellation: String,
    pub star: String,
    pub nav_link: String,
    pub navbar: String,
    pub navbar_link: String,
    pub overlay_menu: String,
    pub overlay_toggle: String,
    pub overlay_close: String,
    pub overlay_link: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            fade: FADE_SELECTOR.to_string(),
            constellation: CONSTELLATION_SELECTOR.to_string(),
            star: STAR_SELECTOR.to_string(),
            nav_link: NAV_LINK_SELECTOR.to_string(),
            navbar: NAVBAR_SELECTOR.to_string(),
            navbar_link: NAVBAR_LINK_SELECTOR.to_string(),
            overlay_menu: OVERLAY_MENU_SELECTOR.to_string(),
            overlay_toggle: OVERLAY_TOGGLE_SELECTOR.to_string(),
            overlay_close: OVERLAY_CLOSE_SELECTOR.to_string(),
            overlay_link: OVERLAY_LINK_SELECTOR.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub threshold: f64,
    pub bottom_offset_px: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            threshold: FADE_THRESHOLD,
            bottom_offset_px: FADE_BOTTOM_OFFSET_PX,
        }
    }
}

impl FadeConfig {
    /// Observer root margin: only the bottom edge is pulled in.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_offset_px)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub breakpoint_px: f64,
    pub overlay_open_class: String,
    pub navbar_open_class: String,
    pub compact_class: String,
    pub toggle_class: String,
    pub toggle_text: String,
    pub toggle_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            overlay_open_class: OVERLAY_OPEN_CLASS.to_string(),
            navbar_open_class: NAVBAR_OPEN_CLASS.to_string(),
            compact_class: NAVBAR_COMPACT_CLASS.to_string(),
            toggle_class: MENU_TOGGLE_CLASS.to_string(),
            toggle_text: MENU_TOGGLE_TEXT.to_string(),
            toggle_label: MENU_TOGGLE_LABEL.to_string(),
        }
    }
}

/// Everything the page effects can be tuned with. Missing sections and
/// fields fall back to the defaults in `constants.rs`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub selectors: Selectors,
    pub fade: FadeConfig,
    pub parallax: ParallaxParams,
    pub menu: MenuConfig,
    pub twinkle: TwinkleParams,
    pub perf: PerfParams,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            selectors: Selectors::default(),
            fade: FadeConfig::default(),
            parallax: ParallaxParams::default(),
            menu: MenuConfig::default(),
            twinkle: TwinkleParams::default(),
            perf: PerfParams::default(),
        }
    }
}

fn ensure(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, reason })
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.twinkle;
        ensure(
            (0.0..=1.0).contains(&self.fade.threshold),
            "fade.threshold",
            "must be within [0, 1]",
        )?;
        ensure(
            self.fade.bottom_offset_px >= 0.0,
            "fade.bottom_offset_px",
            "must not be negative",
        )?;
        ensure(
            self.parallax.amplitude >= 0.0,
            "parallax.amplitude",
            "must not be negative",
        )?;
        ensure(
            self.menu.breakpoint_px >= 0.0,
            "menu.breakpoint_px",
            "must not be negative",
        )?;
        ensure(t.interval_ms > 0, "twinkle.interval_ms", "must be positive")?;
        ensure(
            (0.0..=1.0).contains(&t.probability),
            "twinkle.probability",
            "must be within [0, 1]",
        )?;
        ensure(
            0.0 <= t.min_opacity && t.min_opacity <= t.max_opacity && t.max_opacity <= 1.0,
            "twinkle opacity",
            "must satisfy 0 <= min_opacity <= max_opacity <= 1",
        )?;
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
