// Host-side tests for the page decoration helpers.

use rand::{rngs::StdRng, SeedableRng};
use story_core::page::*;
use story_core::FIREFLY_COUNT;

#[test]
fn reveal_threshold_is_150px_above_bottom() {
    assert!(should_reveal(649.0, 800.0));
    assert!(!should_reveal(650.0, 800.0));
    assert!(should_reveal(-20.0, 800.0));
    assert!(!should_reveal(0.0, 100.0));
}

#[test]
fn nav_target_sits_below_header() {
    assert_eq!(nav_scroll_target(300.0, 1000.0), 1250.0);
    assert_eq!(nav_scroll_target(-100.0, 100.0), -50.0);
}

#[test]
fn synopsis_ids() {
    let ids: Vec<String> = SYNOPSIS_LANGS.iter().map(|l| synopsis_id(l)).collect();
    assert_eq!(ids, ["synopsis-ms", "synopsis-en", "synopsis-dusun"]);
}

#[test]
fn fireflies_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let flies = fireflies(&mut rng);
    assert_eq!(flies.len(), FIREFLY_COUNT);
    for f in &flies {
        assert!((0.0..100.0).contains(&f.left_vw));
        assert!((0.0..100.0).contains(&f.top_vh));
        assert!((0.0..10.0).contains(&f.delay_sec));
        assert!((10.0..30.0).contains(&f.duration_sec));
    }
}

#[test]
fn firefly_style_units() {
    let f = Firefly {
        left_vw: 12.5,
        top_vh: 40.0,
        delay_sec: 3.0,
        duration_sec: 17.5,
    };
    let props = f.style_props();
    assert_eq!(props[0], ("left", "12.5vw".to_string()));
    assert_eq!(props[1], ("top", "40vh".to_string()));
    assert_eq!(props[2], ("animation-delay", "3s".to_string()));
    assert_eq!(props[3], ("animation-duration", "17.5s".to_string()));
}
