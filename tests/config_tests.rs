// Host-side tests for site configuration loading and validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod perf {
        include!("../src/core/perf.rs");
    }
    pub mod twinkle {
        include!("../src/core/twinkle.rs");
    }
}
mod config {
    include!("../src/config.rs");
}

use config::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").expect("defaults");
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.log_level().ok(), Some(log::LevelFilter::Info));
    assert_eq!(cfg.selectors.constellation, ".constellation");
    assert_eq!(cfg.menu.breakpoint_px, 768.0);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let cfg = SiteConfig::from_json(
        r#"{ "log_level": "debug", "parallax": { "amplitude": 20 }, "twinkle": { "interval_ms": 500 } }"#,
    )
    .expect("valid");
    assert_eq!(cfg.log_level().ok(), Some(log::LevelFilter::Debug));
    assert_eq!(cfg.parallax.amplitude, 20.0);
    assert_eq!(cfg.parallax.base_speed, 0.5);
    assert_eq!(cfg.twinkle.interval_ms, 500);
    assert_eq!(cfg.twinkle.probability, 0.1);
}

#[test]
fn root_margin_pulls_in_bottom_edge_only() {
    assert_eq!(FadeConfig::default().root_margin(), "0px 0px -50px 0px");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases = [
        r#"{ "twinkle": { "probability": 1.5 } }"#,
        r#"{ "twinkle": { "interval_ms": 0 } }"#,
        r#"{ "twinkle": { "min_opacity": 0.9, "max_opacity": 0.3 } }"#,
        r#"{ "fade": { "threshold": -0.1 } }"#,
        r#"{ "menu": { "breakpoint_px": -1 } }"#,
    ];
    for json in cases {
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }), "{json}: {err}");
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: loud");
}
