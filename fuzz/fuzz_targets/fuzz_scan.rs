//! Fuzz target for entity scanning and hit-testing.
//!
//! Arbitrary text must scan without panicking, every occurrence must slice
//! the text on char boundaries, and hit-testing must stay in bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use social_text::{EntityKinds, EntityScanner, HitBounds};

fuzz_target!(|data: &str| {
    let Ok(scanner) = EntityScanner::new(["Nodes", "bob"]) else {
        return;
    };
    let index = scanner.scan(data, EntityKinds::all());

    for occurrence in index.iter() {
        assert_eq!(&data[occurrence.range.clone()], occurrence.text);
    }

    for offset in 0..=data.len().min(512) {
        for bounds in [HitBounds::Exclusive, HitBounds::Inclusive] {
            if let Some(hit) = index.occurrence_at(offset, bounds) {
                assert!(hit.start() <= offset && offset <= hit.end());
            }
        }
    }
});
