// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthand and whole-block text.

mod common;

use common::TestParser;
use understory_css_property::{ParserMode, PropertyId, PropertySettings, ValueId};
use understory_css_value::{Separator, Value, identifier, initial_placeholder};
use understory_declaration::{DeclarationRead, MutableDeclarations, PropertyEntry};

fn parse(text: &str) -> MutableDeclarations {
    let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
    block.parse_declaration(text, &TestParser, &PropertySettings::new());
    block
}

#[test]
fn box_shorthand_folds_sides() {
    let block = parse("margin: 1px");
    assert_eq!(block.property_as_string(PropertyId::Margin).as_deref(), Some("1px"));

    let block = parse("margin: 1px 2px 1px 2px");
    assert_eq!(
        block.property_as_string(PropertyId::Margin).as_deref(),
        Some("1px 2px")
    );

    let block = parse("margin: 1px 2px 3px 4px");
    assert_eq!(
        block.property_as_string(PropertyId::Margin).as_deref(),
        Some("1px 2px 3px 4px")
    );
}

#[test]
fn whole_block_round_trips() {
    let block = parse("margin: 1px 2px; overflow: hidden auto; color: red !important");
    let text = block.as_text();
    assert_eq!(
        text,
        "margin: 1px 2px; overflow: hidden auto; color: red !important;"
    );

    let reparsed = parse(&text);
    assert_eq!(reparsed.entries(), block.entries());
    assert_eq!(reparsed.as_text(), text);
}

#[test]
fn longhand_text_is_stable() {
    let block = parse("padding: 3px 4px");
    let first = block.property_as_string(PropertyId::PaddingLeft);
    let second = block.property_as_string(PropertyId::PaddingLeft);
    assert_eq!(first.as_deref(), Some("4px"));
    assert_eq!(first, second);
}

#[test]
fn mixed_importance_falls_back_to_longhands() {
    let block = parse("overflow-x: hidden !important; overflow-y: scroll");
    assert_eq!(block.property_as_string(PropertyId::Overflow), None);
    assert_eq!(
        block.as_text(),
        "overflow-x: hidden !important; overflow-y: scroll;"
    );
}

#[test]
fn uniform_wide_keyword_is_the_shorthand_text() {
    let block = parse("margin: inherit");
    assert_eq!(
        block.property_as_string(PropertyId::Margin).as_deref(),
        Some("inherit")
    );

    let block = parse("margin: inherit; margin-left: initial");
    assert_eq!(block.property_as_string(PropertyId::Margin), None);
}

#[test]
fn pending_substitution_writes_original_text() {
    let block = parse("margin: var(--gap) 2px");
    assert_eq!(
        block.property_as_string(PropertyId::Margin).as_deref(),
        Some("var(--gap) 2px")
    );
    assert_eq!(block.as_text(), "margin: var(--gap) 2px;");

    // One longhand overridden: the shorthand no longer applies.
    let block = parse("margin: var(--gap) 2px; margin-top: 1px");
    assert_eq!(block.property_as_string(PropertyId::Margin), None);
}

#[test]
fn size_forces_position_in_later_layer_only() {
    let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
    block.set_shorthand(PropertyId::Background, initial_placeholder(), false);
    let layers = |items: [Value; 2]| Value::list(Separator::Comma, items);
    for (id, value) in [
        (
            PropertyId::BackgroundImage,
            layers([Value::url("a.png"), Value::url("b.png")]),
        ),
        (
            PropertyId::BackgroundSize,
            layers([initial_placeholder(), identifier(ValueId::Contain)]),
        ),
    ] {
        block.set_entry(
            PropertyEntry::new(id, value, false).set_from_shorthand(PropertyId::Background),
        );
    }

    let text = block
        .property_as_string(PropertyId::Background)
        .unwrap_or_default();
    let (first, second) = text.split_once(", ").unwrap_or_default();
    assert!(!first.contains(" / "), "first layer has no size: {text}");
    assert!(second.ends_with("0% 0% / contain"), "second layer: {text}");
}

#[test]
fn animation_name_keyword_is_disambiguated() {
    let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
    block.set_shorthand(PropertyId::Animation, initial_placeholder(), false);
    block.set_entry(
        PropertyEntry::new(PropertyId::AnimationName, Value::custom_ident("infinite"), false)
            .set_from_shorthand(PropertyId::Animation),
    );
    assert_eq!(
        block.property_as_string(PropertyId::Animation).as_deref(),
        Some("1 infinite")
    );
}

#[test]
fn border_shorthand_from_longhands() {
    let block = parse("border-width: 2px; border-style: solid; border-color: red");
    assert_eq!(
        block.property_as_string(PropertyId::BorderWidth).as_deref(),
        Some("2px")
    );
    // `border` also needs the border-image longhands.
    assert_eq!(block.property_as_string(PropertyId::Border), None);
    assert_eq!(
        block.as_text(),
        "border-width: 2px; border-style: solid; border-color: red;"
    );
}

#[test]
fn opacity_percentage_is_a_fraction() {
    let block = parse("opacity: 50%");
    assert_eq!(block.property_as_string(PropertyId::Opacity).as_deref(), Some("0.5"));
}

#[test]
fn custom_properties_keep_their_name() {
    let block = parse("--accent: red; color: blue !important");
    assert_eq!(block.as_text(), "--accent: red; color: blue !important;");
    assert_eq!(block.custom_property_as_string("--accent").as_deref(), Some("red"));
}

#[test]
fn immutable_block_serializes_the_same() {
    let block = parse("padding: 1px 2px; margin: 0px; display: block");
    let frozen = block.to_immutable();
    assert_eq!(frozen.as_text(), block.as_text());
    assert_eq!(
        frozen.property_as_string(PropertyId::Padding).as_deref(),
        Some("1px 2px")
    );
    assert_eq!(frozen.property_as_keyword(PropertyId::Display), Some(ValueId::Block));
}
