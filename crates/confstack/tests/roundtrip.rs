//! Round-trip and idempotence properties for the three output styles.
//!
//! Responsibilities:
//! - Parsing a rendered store with the same options reconstructs the same
//!   key/value/comment data, for each style.
//! - Rendering, re-parsing, and rendering again is byte-identical.
//!
//! Invariants:
//! - Generated stores place top-level keys before sectioned ones: the INI
//!   family has no way to return to "no section" after a header, so stores
//!   are only round-trippable in the order parsing itself would produce.

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;

use confstack::{Flags, Options, Store, Style};

fn no_vars() -> HashMap<String, String> {
    HashMap::new()
}

fn reparse(text: &str, options: Options) -> Store {
    let mut store = Store::new();
    store.parse_str_with(text, options, &no_vars());
    store
}

fn value_pairs(store: &Store) -> Vec<(String, String)> {
    store
        .iter()
        .filter_map(|e| Some((e.key()?.to_string(), e.value()?.to_string())))
        .collect()
}

fn build_store(pairs: &BTreeMap<String, String>) -> Store {
    let mut store = Store::new();
    // Top-level keys first; see the module note.
    for (key, value) in pairs.iter().filter(|(k, _)| !k.contains('.')) {
        store.set_str(key, value);
    }
    for (key, value) in pairs.iter().filter(|(k, _)| k.contains('.')) {
        store.set_str(key, value);
    }
    store
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,5}", 1..=3).prop_map(|segments| segments.join("."))
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_./:-]{0,12}"
}

proptest! {
    #[test]
    fn parse_of_render_preserves_key_value_pairs(
        pairs in prop::collection::btree_map(key_strategy(), value_strategy(), 0..12),
        style in prop_oneof![Just(Style::Ini), Just(Style::Git), Just(Style::Sub)],
    ) {
        let options = Options::new().with_style(style);
        let store = build_store(&pairs);

        let rendered = store.render(options);
        let reparsed = reparse(&rendered, options);

        prop_assert_eq!(value_pairs(&store), value_pairs(&reparsed));
    }

    #[test]
    fn second_render_is_byte_identical(
        pairs in prop::collection::btree_map(key_strategy(), value_strategy(), 0..12),
        style in prop_oneof![Just(Style::Ini), Just(Style::Git), Just(Style::Sub)],
    ) {
        let options = Options::new().with_style(style);
        let store = build_store(&pairs);

        let first = store.render(options);
        let second = reparse(&first, options).render(options);

        prop_assert_eq!(first, second);
    }
}

#[test]
fn comment_cycle_is_idempotent_in_every_style() {
    let input = "\
; database settings
[db]
host = localhost ; primary
port = 5432

; feature toggles
[features]
list = a, b, c
";

    for style in [Style::Ini, Style::Git, Style::Sub] {
        let options = Options::new().with_style(style).with_flags(Flags::COMMENTS);
        let store = reparse(input, options);

        let first = store.render(options);
        let again = reparse(&first, options);
        let second = again.render(options);

        assert_eq!(first, second, "style {style:?} is not idempotent");
        assert_eq!(value_pairs(&store), value_pairs(&again));
        assert_eq!(
            comment_of(&again, "db.host").as_deref(),
            Some("primary"),
            "style {style:?} lost the inline comment"
        );
    }
}

#[test]
fn quoted_values_survive_a_cycle_in_every_style() {
    for style in [Style::Ini, Style::Git, Style::Sub] {
        let options = Options::new().with_style(style);
        let store = reparse("[s]\na = \"  padded  \"\nb = \"\"wrapped\"\"\n", options);
        assert_eq!(store.get_str("s.a", ""), "  padded  ");
        assert_eq!(store.get_str("s.b", ""), "\"wrapped\"");

        let rendered = store.render(options);
        let again = reparse(&rendered, options);

        assert_eq!(
            again.get_str("s.a", ""),
            "  padded  ",
            "style {style:?} lost the surrounding whitespace"
        );
        assert_eq!(again.get_str("s.b", ""), "\"wrapped\"");
        assert_eq!(again.render(options), rendered);
    }
}

#[test]
fn escaped_marker_survives_a_comment_cycle() {
    let options = Options::new().with_flags(Flags::COMMENTS);
    let mut store = Store::new();
    store.set_str("shell.prompt", "PS1; export PS1");

    let rendered = store.render(options);
    let reparsed = reparse(&rendered, options);

    assert_eq!(reparsed.get_str("shell.prompt", ""), "PS1; export PS1");
}

#[test]
fn git_subsection_survives_a_full_cycle() {
    let options = Options::new().with_style(Style::Git);
    let store = reparse("[remote \"origin\"]\nurl = git://host/repo\n", options);

    let rendered = store.render(options);
    assert_eq!(rendered, "[remote \"origin\"]\n\turl = git://host/repo\n");

    let again = reparse(&rendered, options);
    assert_eq!(again.get_str("remote.origin.url", ""), "git://host/repo");
    assert_eq!(again.render(options), rendered);
}

fn comment_of(store: &Store, key: &str) -> Option<String> {
    store
        .iter()
        .find(|e| e.key() == Some(key))
        .and_then(|e| e.comment().map(str::to_string))
}
