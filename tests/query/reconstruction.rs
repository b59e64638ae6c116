//! Id reconstruction tests

use markerutils_query::MarkerQuery;
use proptest::prelude::*;

fn reconstruct(tokens: &[&str]) -> String {
    MarkerQuery::from_tokens(tokens).unwrap().to_string()
}

#[test]
fn no_tokens() {
    assert!(MarkerQuery::from_tokens::<&str>(&[]).is_none());
}

#[test]
fn last_plain_token_is_the_id() {
    assert_eq!(reconstruct(&["spawn"]), "spawn");
    assert_eq!(reconstruct(&["Old", "Spawn", "spawn"]), "spawn");
}

#[test]
fn completed_candidate_yields_id() {
    assert_eq!(reconstruct(&["Old", "Spawn", "(old_spawn)"]), "old_spawn");
}

#[test]
fn parenthesized_id_with_spaces() {
    assert_eq!(reconstruct(&["(My", "Marker)"]), "My Marker");
    assert_eq!(reconstruct(&["Lookout", "(My", "Marker)"]), "My Marker");
}

#[test]
fn unbalanced_close_uses_every_token() {
    assert_eq!(reconstruct(&["a", "b)"]), "a b)");
}

#[test]
fn label_parentheses_are_not_the_id() {
    // Completing "Tower (North)" gives "Tower (North) (tower)".
    assert_eq!(reconstruct(&["Tower", "(North)", "(tower)"]), "tower");
}

#[test]
fn open_only_is_kept() {
    assert_eq!(reconstruct(&["(spawn"]), "(spawn");
}

#[test]
fn empty_parentheses() {
    assert_eq!(reconstruct(&["()"]), "");
}

proptest! {
    #[test]
    fn id_without_spaces_round_trips(
        label in "[A-Za-z ]{0,20}",
        id in "[A-Za-z0-9_]{1,16}",
    ) {
        let candidate = format!("{label} ({id})");
        let tokens: Vec<&str> = candidate.split(' ').collect();
        let query = MarkerQuery::from_tokens(&tokens).unwrap();
        prop_assert_eq!(query.as_str(), id.as_str());
    }

    #[test]
    fn id_with_spaces_round_trips_when_label_has_no_parentheses(
        label in "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}",
        id in "[a-z]{1,6}( [a-z]{1,6}){1,3}",
    ) {
        let candidate = format!("{label} ({id})");
        let tokens: Vec<&str> = candidate.split(' ').collect();
        let query = MarkerQuery::from_tokens(&tokens).unwrap();
        prop_assert_eq!(query.as_str(), id.as_str());
    }
}
