// Host-side tests for navigation link classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

#[test]
fn fragment_links_scroll_and_suppress_navigation() {
    let action = classify_href(Some("#about"));
    assert_eq!(action, LinkAction::ScrollTo("about"));
    assert!(action.prevents_default());
}

#[test]
fn bare_hash_is_intercepted_without_target() {
    let action = classify_href(Some("#"));
    assert_eq!(action, LinkAction::Intercept);
    assert!(action.prevents_default());
}

#[test]
fn other_links_navigate_normally() {
    for href in ["/menu", "https://example.com/#about", "menu.html", ""] {
        let action = classify_href(Some(href));
        assert_eq!(action, LinkAction::Navigate, "{href}");
        assert!(!action.prevents_default());
    }
}

#[test]
fn missing_href_navigates_normally() {
    assert_eq!(classify_href(None), LinkAction::Navigate);
}
