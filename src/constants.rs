/// Default tuning for every page effect.
///
/// These are the values used when the page does not embed a `#site-config`
/// override, and the reference values the host tests check against.
// Fade-in trigger region
pub const FADE_THRESHOLD: f64 = 0.1; // minimum visible fraction
pub const FADE_BOTTOM_OFFSET_PX: f64 = 50.0; // shrinks the viewport bottom edge

// Parallax
pub const PARALLAX_BASE_SPEED: f64 = 0.5; // speed of the first layer
pub const PARALLAX_SPEED_STEP: f64 = 0.3; // added per layer index
pub const PARALLAX_AMPLITUDE: f64 = 10.0; // px per unit of pointer fraction * speed

// Mobile navigation
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // compact layout at or below this width
pub const MENU_TOGGLE_TEXT: &str = "☰";
pub const MENU_TOGGLE_LABEL: &str = "Toggle mobile menu";

// Star twinkle
pub const TWINKLE_INTERVAL_MS: u32 = 2000;
pub const TWINKLE_PROBABILITY: f64 = 0.1; // per star per tick
pub const TWINKLE_MIN_OPACITY: f64 = 0.2;
pub const TWINKLE_MAX_OPACITY: f64 = 1.0;

// Low-end device downgrade
pub const LOW_END_MAX_CORES: u32 = 2;
pub const REDUCED_ANIMATION_DURATION: &str = "0.5s";
pub const ANIMATION_DURATION_PROPERTY: &str = "--animation-duration";

// Markup hooks
pub const FADE_SELECTOR: &str = ".fade-in";
pub const CONSTELLATION_SELECTOR: &str = ".constellation";
pub const STAR_SELECTOR: &str = ".star";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAVBAR_LINK_SELECTOR: &str = ".navbar .nav-link";
pub const OVERLAY_MENU_SELECTOR: &str = ".mobile-nav-menu";
pub const OVERLAY_TOGGLE_SELECTOR: &str = ".mobile-nav-toggle";
pub const OVERLAY_CLOSE_SELECTOR: &str = ".mobile-nav-close";
pub const OVERLAY_LINK_SELECTOR: &str = ".mobile-nav-menu .nav-link";

// Presentation classes toggled by the menu controller
pub const OVERLAY_OPEN_CLASS: &str = "active";
pub const NAVBAR_OPEN_CLASS: &str = "mobile-open";
pub const NAVBAR_COMPACT_CLASS: &str = "mobile-nav";
pub const MENU_TOGGLE_CLASS: &str = "mobile-menu-toggle";

// Optional JSON override embedded in the page
pub const CONFIG_SCRIPT_ID: &str = "site-config";
pub const DEFAULT_LOG_LEVEL: &str = "info";
