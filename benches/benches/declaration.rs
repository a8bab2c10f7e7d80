// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_declaration`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use understory_css_property::{ParserMode, PropertyId, ValueId};
use understory_css_value::{Separator, Value, identifier, initial_placeholder, pixels};
use understory_declaration::{
    DeclarationRead, ImmutableDeclarations, MutableDeclarations, PropertyEntry,
};

/// A block shaped like a typical rule: a few shorthands plus longhands.
fn sample_block() -> MutableDeclarations {
    let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
    block.set_shorthand(PropertyId::Margin, pixels(4), false);
    block.set_shorthand(PropertyId::Padding, pixels(2), false);
    block.set_entry(PropertyEntry::new(PropertyId::PaddingLeft, pixels(3), false));
    block.set_shorthand(PropertyId::BorderWidth, pixels(1), false);
    block.set_keyword(PropertyId::BorderStyle, ValueId::Solid, false);
    block.set_keyword(PropertyId::BorderColor, ValueId::Red, false);
    block.set_keyword(PropertyId::Display, ValueId::Block, false);
    block.set_keyword(PropertyId::Color, ValueId::Blue, true);
    block.set_entry(PropertyEntry::new(PropertyId::Width, pixels(100), false));
    block
}

fn layered_block(layers: usize) -> MutableDeclarations {
    let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
    block.set_shorthand(PropertyId::Background, initial_placeholder(), false);
    let images = Value::list(
        Separator::Comma,
        (0..layers).map(|i| Value::url(&format!("layer{i}.png"))),
    );
    block.set_entry(
        PropertyEntry::new(PropertyId::BackgroundImage, images, false)
            .set_from_shorthand(PropertyId::Background),
    );
    block
}

fn bench_declaration(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: PropertyEntry={} MutableDeclarations={} ImmutableDeclarations={}",
            core::mem::size_of::<PropertyEntry>(),
            core::mem::size_of::<MutableDeclarations>(),
            core::mem::size_of::<ImmutableDeclarations>(),
        );
    });

    let block = sample_block();
    let frozen = block.to_immutable();

    let mut group = c.benchmark_group("declaration/query");

    group.bench_function("property_value/mutable", |b| {
        b.iter(|| black_box(block.property_value(black_box(PropertyId::Width))));
    });

    group.bench_function("property_value/immutable", |b| {
        b.iter(|| black_box(frozen.property_value(black_box(PropertyId::Width))));
    });

    group.bench_function("shorthand/margin", |b| {
        b.iter(|| black_box(frozen.property_as_string(PropertyId::Margin)));
    });

    group.bench_function("shorthand/border", |b| {
        b.iter(|| black_box(frozen.property_as_string(PropertyId::BorderWidth)));
    });

    group.bench_function("as_text", |b| {
        b.iter(|| black_box(frozen.as_text()));
    });

    group.finish();

    let mut group = c.benchmark_group("declaration/layered");
    for layers in [1_usize, 4, 16] {
        let block = layered_block(layers);
        group.bench_function(BenchmarkId::new("background", layers), |b| {
            b.iter(|| black_box(block.property_as_string(PropertyId::Background)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("declaration/mutate");

    group.bench_function("set_shorthand/margin", |b| {
        b.iter_batched(
            sample_block,
            |mut block| {
                black_box(block.set_shorthand(PropertyId::Margin, pixels(8), false));
                black_box(block);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("set_entry/in_place", |b| {
        b.iter_batched(
            sample_block,
            |mut block| {
                black_box(block.set_entry(PropertyEntry::new(PropertyId::Width, pixels(50), false)));
                black_box(block);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("remove_property/padding", |b| {
        b.iter_batched(
            sample_block,
            |mut block| {
                black_box(block.remove_property(PropertyId::Padding));
                black_box(block);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("freeze", |b| {
        b.iter(|| black_box(block.to_immutable()));
    });

    group.bench_function("set_shorthand/font_keyword", |b| {
        b.iter_batched(
            || MutableDeclarations::new(ParserMode::HtmlStandard),
            |mut block| {
                black_box(block.set_shorthand(
                    PropertyId::Font,
                    identifier(ValueId::Caption),
                    false,
                ));
                black_box(block);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_declaration);
criterion_main!(benches);
