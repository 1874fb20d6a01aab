use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu.open);
}

#[test]
fn ui_state_default_section_is_hero() {
    let state = UiState::default();
    assert_eq!(state.active_section, 0);
    assert_eq!(state.active_section_id(), "hero");
}

#[test]
fn ui_state_default_filter_is_all() {
    let state = UiState::default();
    assert_eq!(state.filter, "all");
}

#[test]
fn ui_state_default_flags_off() {
    let state = UiState::default();
    assert!(!state.loaded);
    assert!(!state.dark_mode);
    assert!(!state.navbar_scrolled);
    assert!(!state.back_to_top_visible);
}

// =============================================================
// Serialization (debug snapshot)
// =============================================================

#[test]
fn ui_state_serializes_for_the_debug_log() {
    let state = UiState::default();
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"active_section\":0"));
    assert!(json.contains("\"filter\":\"all\""));
}
