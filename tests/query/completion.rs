//! Label completion tests

use markerutils_foundation::MarkerIndex;
use markerutils_query::{ActionWord, MarkerQuery, QueryResolver};

use crate::index;

#[test]
fn matches_label_substring_ignoring_case() {
    let index = index();
    assert_eq!(
        QueryResolver::complete("SPAWN", &index),
        vec!["Old Spawn (old_spawn)", "Spawn Point (spawn)"]
    );
}

#[test]
fn ids_are_not_searched() {
    let index = index();
    assert!(QueryResolver::complete("old_", &index).is_empty());
}

#[test]
fn empty_fragment_lists_everything_sorted() {
    let index = index();
    assert_eq!(
        QueryResolver::complete("", &index),
        vec![
            "Lookout (My Marker)",
            "Old Spawn (old_spawn)",
            "Shop (shop)",
            "Spawn Point (spawn)",
            "Tower (North) (tower)",
        ]
    );
}

#[test]
fn tokens_are_joined_with_spaces() {
    let index = index();
    assert_eq!(
        QueryResolver::complete_tokens(&["old", "sp"], &index),
        vec!["Old Spawn (old_spawn)"]
    );
    assert!(QueryResolver::complete_tokens(&["old", "", "sp"], &index).is_empty());
}

#[test]
fn empty_index_has_no_candidates() {
    assert!(QueryResolver::complete("", &MarkerIndex::new()).is_empty());
}

#[test]
fn every_candidate_resolves_to_its_marker() {
    let index = index();
    for candidate in QueryResolver::complete("", &index) {
        let tokens: Vec<&str> = candidate.split(' ').collect();
        let query = MarkerQuery::from_tokens(&tokens).unwrap();
        let marker = QueryResolver::resolve(&query, &index).marker().unwrap();
        assert_eq!(marker.display_candidate(), candidate);
    }
}

#[test]
fn action_words_complete_by_prefix() {
    assert_eq!(ActionWord::complete(""), vec!["delete", "info", "tp"]);
    assert_eq!(ActionWord::complete("D"), vec!["delete"]);
    assert!(ActionWord::complete("x").is_empty());
    assert!("TP".parse::<ActionWord>().is_err());
}
