use super::*;

// --- Toggle ---

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::default();
    assert_eq!(menu.apply(MenuEvent::ToggleClick), Some(true));
    assert!(menu.open);
    assert_eq!(menu.apply(MenuEvent::ToggleClick), Some(false));
    assert!(!menu.open);
}

#[test]
fn double_toggle_restores_the_original_state() {
    let mut menu = MenuState { open: false };
    menu.apply(MenuEvent::ToggleClick);
    menu.apply(MenuEvent::ToggleClick);
    assert_eq!(menu, MenuState { open: false });
}

// --- Forced-close events ---

#[test]
fn link_click_closes_an_open_menu() {
    let mut menu = MenuState { open: true };
    assert_eq!(menu.apply(MenuEvent::LinkClick), Some(false));
}

#[test]
fn link_click_on_a_closed_menu_is_a_no_op() {
    let mut menu = MenuState { open: false };
    assert_eq!(menu.apply(MenuEvent::LinkClick), None);
    assert!(!menu.open);
}

#[test]
fn outside_click_closes_only_when_open() {
    let mut menu = MenuState { open: true };
    assert_eq!(menu.apply(MenuEvent::OutsideClick), Some(false));
    assert_eq!(menu.apply(MenuEvent::OutsideClick), None);
}

#[test]
fn escape_closes_only_when_open() {
    let mut menu = MenuState { open: true };
    assert_eq!(menu.apply(MenuEvent::EscapeKey), Some(false));
    assert_eq!(menu.apply(MenuEvent::EscapeKey), None);
}

// --- Resize breakpoint ---

#[test]
fn desktop_resize_closes_an_open_menu() {
    let mut menu = MenuState { open: true };
    assert_eq!(menu.apply(MenuEvent::Resized { viewport_width: 1024.0 }), Some(false));
}

#[test]
fn resize_at_or_below_breakpoint_keeps_the_menu_open() {
    let mut menu = MenuState { open: true };
    assert_eq!(menu.apply(MenuEvent::Resized { viewport_width: 768.0 }), None);
    assert_eq!(menu.apply(MenuEvent::Resized { viewport_width: 400.0 }), None);
    assert!(menu.open);
}

#[test]
fn desktop_resize_on_a_closed_menu_is_a_no_op() {
    let mut menu = MenuState { open: false };
    assert_eq!(menu.apply(MenuEvent::Resized { viewport_width: 1920.0 }), None);
}
