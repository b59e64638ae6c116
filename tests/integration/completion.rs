//! End-to-end completion tests

use crate::{Fixture, MARKERS};

#[test]
fn first_argument_completes_actions() {
    let fixture = Fixture::new(MARKERS);
    let command = fixture.command();

    assert_eq!(command.complete(&[""]), vec!["delete", "info", "tp"]);
    assert_eq!(command.complete(&["i"]), vec!["info"]);
    assert!(command.complete(&["warp"]).is_empty());
}

#[test]
fn later_arguments_complete_labels() {
    let fixture = Fixture::new(MARKERS);
    let command = fixture.command();

    assert_eq!(
        command.complete(&["tp", "spawn"]),
        vec!["Old Spawn (old_spawn)", "Spawn Point (spawn)"]
    );
    assert_eq!(command.complete(&["info", "nether", "po"]), vec!["Nether Portal (portal)"]);
}

#[test]
fn completion_ignores_the_action_word() {
    let fixture = Fixture::new(MARKERS);
    let command = fixture.command();

    assert_eq!(command.complete(&["warp", "shop"]), vec!["Shop (shop)"]);
}

#[test]
fn completion_sees_edits() {
    let fixture = Fixture::new(MARKERS);
    let command = fixture.command();
    assert!(command.complete(&["tp", "mine"]).is_empty());

    fixture.write(
        "sets:\n  s:\n    markers:\n      mine: { label: Mine, world: world, x: 1, y: 12, z: 1 }\n",
        2_000,
    );
    assert_eq!(command.complete(&["tp", "mine"]), vec!["Mine (mine)"]);
}
