use super::*;

// --- card_matches ---

#[test]
fn all_matches_every_card() {
    assert!(card_matches("all", "web api"));
    assert!(card_matches("all", "cli"));
    assert!(card_matches("all", ""));
}

#[test]
fn tag_filter_matches_cards_carrying_the_tag() {
    // Card 1 tagged {web, api}, card 2 tagged {cli}.
    assert!(card_matches("web", "web api"));
    assert!(!card_matches("web", "cli"));

    assert!(card_matches("cli", "cli"));
    assert!(!card_matches("cli", "web api"));
}

#[test]
fn tag_must_match_whole_words() {
    assert!(!card_matches("web", "webapp"));
    assert!(!card_matches("api", "web-api"));
}

#[test]
fn extra_whitespace_between_tags_is_ignored() {
    assert!(card_matches("api", "  web   api "));
}

// --- card_step ---

#[test]
fn matching_card_reveals_with_settle_delay() {
    assert_eq!(card_step(true), FilterStep::Reveal { settle_delay_ms: 100 });
}

#[test]
fn non_matching_card_conceals_with_hide_delay() {
    assert_eq!(card_step(false), FilterStep::Conceal { hide_delay_ms: 300 });
}

// --- Expansion ---

#[test]
fn panel_starts_collapsed_with_learn_more_label() {
    let panel = Expansion::default();
    assert!(!panel.expanded);
    assert_eq!(panel.button_label(), "Learn More");
}

#[test]
fn expanding_reveals_and_relabels() {
    let mut panel = Expansion::default();
    let step = panel.toggle();
    assert!(panel.expanded);
    assert_eq!(step, FilterStep::Reveal { settle_delay_ms: 10 });
    assert_eq!(panel.button_label(), "Show Less");
}

#[test]
fn collapsing_conceals_and_restores_the_label() {
    let mut panel = Expansion { expanded: true };
    let step = panel.toggle();
    assert!(!panel.expanded);
    assert_eq!(step, FilterStep::Conceal { hide_delay_ms: 300 });
    assert_eq!(panel.button_label(), "Learn More");
}

#[test]
fn panels_are_independent() {
    let mut first = Expansion::default();
    let second = Expansion::default();
    first.toggle();
    assert!(first.expanded);
    assert!(!second.expanded);
}
