//! Fuzz target for username configuration.
//!
//! Arbitrary username entries are compiled as patterns. Invalid entries
//! must be rejected with an error and leave the annotated text unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use social_text::{AnnotatedText, EntityKind, EntityKinds};

fuzz_target!(|input: (Vec<String>, String)| {
    let (usernames, text) = input;
    let mut annotated = AnnotatedText::with_text(&text);
    annotated.set_enabled_kinds(EntityKinds::all());
    let before = annotated.index().clone();

    if annotated.set_usernames(&usernames).is_err() {
        assert_eq!(annotated.index(), &before);
        assert!(annotated.usernames().is_empty());
        return;
    }

    for occurrence in annotated.occurrences(EntityKind::Username) {
        assert!(!occurrence.is_empty());
        assert!(occurrence.end() <= annotated.len_bytes());
    }
});
