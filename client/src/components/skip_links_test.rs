use super::*;

#[test]
fn exactly_two_targets_with_literal_hrefs() {
    let hrefs = SKIP_TARGETS.iter().map(|(href, _)| *href).collect::<Vec<_>>();
    assert_eq!(hrefs, vec!["#main-content", "#navigation"]);
}

#[test]
fn every_target_has_a_label() {
    assert!(SKIP_TARGETS.iter().all(|(_, label)| !label.trim().is_empty()));
}
