//! AnnotatedText re-derivation benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use social_text::{
    AnnotatedText, AnnotatorOptions, EmojiSizeFixup, EntityKind, EntityKinds, Style,
};
use std::hint::black_box;
use std::sync::Arc;

const POST: &str = "Launch day 🎉 @team shipped #v2 at https://example.com/post ask Nodes ";

fn annotated() -> AnnotatedText {
    let options = AnnotatorOptions::default()
        .with_enabled_kinds(EntityKinds::all())
        .with_usernames(["Nodes"]);
    let mut text = AnnotatedText::with_options(options).unwrap();
    text.set_glyph_fixup(Some(Arc::new(EmojiSizeFixup::default())));
    text
}

fn content_updates(c: &mut Criterion) {
    let mut text = annotated();
    let short = POST;
    let long = POST.repeat(128);

    c.bench_function("set_content_short", |b| {
        b.iter(|| text.set_content(black_box(short)));
    });

    c.bench_function("set_content_9k", |b| {
        b.iter(|| text.set_content(black_box(&long)));
    });

    text.set_content(&long);
    c.bench_function("insert_char_9k", |b| {
        b.iter(|| {
            text.insert(black_box(10), "x");
            text.remove(10..11);
        });
    });
}

fn styling(c: &mut Criterion) {
    let mut text = annotated();
    text.set_styled_content(&POST.repeat(128), Style::sized(15.0));

    c.bench_function("restyle_9k", |b| {
        b.iter(|| text.set_style(EntityKind::Hashtag, black_box(Style::bold())));
    });

    c.bench_function("runs_9k", |b| {
        b.iter(|| black_box(&text).runs());
    });
}

criterion_group!(benches, content_updates, styling);
criterion_main!(benches);
