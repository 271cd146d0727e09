// Host-side tests for the page contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn colors_are_hex_triplets() {
    for c in [PAD_FILL, KNOB_IDLE_FILL, KNOB_TRACKING_FILL, WHEEL_VELOCITY_FILL] {
        assert!(is_hex_color(c), "{c}");
    }
    // tracking must be visibly different from idle
    assert_ne!(KNOB_IDLE_FILL, KNOB_TRACKING_FILL);
}

#[test]
fn element_ids_are_distinct_and_plain() {
    let ids = [
        PAD_CANVAS_ID,
        COMMAND_STATUS_ID,
        TELEMETRY_STATUS_ID,
        TRIM_ANGLE_OUT_ID,
        TRIM_CANCEL_ID,
        TRIM_ZERO_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.contains(char::is_whitespace), "{a:?}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(!WHEEL_CANVAS_PREFIX.is_empty());
}

#[test]
fn posts_are_form_encoded() {
    assert_eq!(FORM_CONTENT_TYPE, "application/x-www-form-urlencoded");
}
