use super::*;

#[test]
fn breakpoint_is_exclusive() {
    assert!(is_narrow(767));
    assert!(!is_narrow(768));
    assert!(is_narrow(0));
    assert!(!is_narrow(1920));
}

#[test]
fn headless_reports_wide() {
    let state = ViewportState::headless();
    assert_eq!(state.width_px, None);
    assert!(!state.narrow);
}

#[test]
fn measured_classifies_width() {
    assert!(ViewportState::measured(500).narrow);
    let wide = ViewportState::measured(1024);
    assert_eq!(wide.width_px, Some(1024));
    assert!(!wide.narrow);
}
