// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing blocks through text.

mod common;

use common::TestParser;
use understory_css_property::{ParserMode, PropertyId, PropertySettings, ValueId};
use understory_css_value::pixels;
use understory_declaration::{
    DeclarationRead, ImmutableDeclarations, MutableDeclarations, PropertyEntry,
};

fn block() -> MutableDeclarations {
    MutableDeclarations::new(ParserMode::HtmlStandard)
}

fn set(block: &mut MutableDeclarations, id: PropertyId, text: &str) -> bool {
    block.set_property_text(id, text, false, &TestParser, &PropertySettings::new())
}

#[test]
fn logical_write_shadows_physical_longhand() {
    let mut block = block();
    set(&mut block, PropertyId::MarginTop, "1px");
    set(&mut block, PropertyId::MarginBlockStart, "5px");
    set(&mut block, PropertyId::MarginTop, "2px");

    let order: Vec<PropertyId> = block.properties().map(|property| property.id()).collect();
    assert_eq!(order, [PropertyId::MarginBlockStart, PropertyId::MarginTop]);
    assert_eq!(
        block.property_as_string(PropertyId::MarginTop).as_deref(),
        Some("2px")
    );
    assert_eq!(block.as_text(), "margin-block-start: 5px; margin-top: 2px;");
}

#[test]
fn plain_rewrite_stays_in_place() {
    let mut block = block();
    set(&mut block, PropertyId::Width, "1px");
    set(&mut block, PropertyId::Height, "2px");
    set(&mut block, PropertyId::Width, "3px");
    assert_eq!(block.as_text(), "width: 3px; height: 2px;");
}

#[test]
fn rejected_text_leaves_block_alone() {
    let mut block = block();
    set(&mut block, PropertyId::Margin, "1px");
    let revision = block.revision();
    assert!(!set(&mut block, PropertyId::Margin, "1px 2px 3px 4px 5px"));
    assert_eq!(block.revision(), revision);
    assert_eq!(block.property_as_string(PropertyId::Margin).as_deref(), Some("1px"));
}

#[test]
fn empty_text_removes() {
    let mut block = block();
    set(&mut block, PropertyId::Padding, "1px");
    assert!(set(&mut block, PropertyId::Padding, ""));
    assert!(block.is_empty());
}

#[test]
fn custom_property_set_and_remove() {
    let mut block = block();
    assert!(block.set_custom_property("--x", "1px", true));
    assert!(block.custom_property_is_important("--x"));

    assert_eq!(block.remove_custom_property("--x").as_deref(), Some("1px"));
    assert_eq!(block.custom_property_value("--x"), None);
    assert!(block.is_empty());
}

#[test]
fn important_custom_property_survives_normal_write() {
    let mut block = block();
    block.set_custom_property("--x", "1px", true);
    assert!(!block.set_custom_property("--x", "2px", false));
    assert_eq!(block.custom_property_as_string("--x").as_deref(), Some("1px"));
}

#[test]
fn remove_shorthand_returns_its_text() {
    let mut block = block();
    set(&mut block, PropertyId::Margin, "1px 2px");
    assert_eq!(block.remove_property(PropertyId::Margin).as_deref(), Some("1px 2px"));
    assert!(!block.has_property(PropertyId::MarginLeft));
    assert_eq!(block.remove_property(PropertyId::Margin), None);
}

#[test]
fn merge_lets_other_block_win() {
    let mut base = block();
    set(&mut base, PropertyId::Color, "red");
    set(&mut base, PropertyId::Width, "1px");

    let overrides = ImmutableDeclarations::new(
        &[PropertyEntry::new(PropertyId::Color, pixels(0), false)],
        ParserMode::HtmlStandard,
    );
    assert!(base.merge_and_override_on_conflict(&overrides));
    assert_eq!(base.as_text(), "color: 0px; width: 1px;");
}

#[test]
fn parse_declaration_reports_changes() {
    let settings = PropertySettings::new();
    let mut block = block();
    assert!(block.parse_declaration("margin: 1px; color: red", &TestParser, &settings));
    let revision = block.revision();

    assert!(!block.parse_declaration("margin: 1px; color: red", &TestParser, &settings));
    assert_eq!(block.revision(), revision);

    assert!(block.parse_declaration("color: blue", &TestParser, &settings));
    assert_eq!(block.property_as_keyword(PropertyId::Color), Some(ValueId::Blue));
    assert!(!block.has_property(PropertyId::MarginTop));
}

#[test]
fn block_properties_copy_and_remove() {
    let mut block = block();
    set(&mut block, PropertyId::TextAlign, "center");
    set(&mut block, PropertyId::Color, "red");

    let copy = block.copy_block_properties();
    assert_eq!(copy.as_text(), "text-align: center;");

    assert!(block.remove_block_properties());
    assert_eq!(block.as_text(), "color: red;");
}

#[test]
fn mutable_copy_is_independent() {
    let mut original = block();
    set(&mut original, PropertyId::Width, "1px");
    let frozen = original.to_immutable();

    let mut copy = frozen.mutable_copy();
    set(&mut copy, PropertyId::Width, "2px");
    assert_eq!(frozen.property_as_string(PropertyId::Width).as_deref(), Some("1px"));
    assert_eq!(copy.property_as_string(PropertyId::Width).as_deref(), Some("2px"));
}

#[test]
#[should_panic(expected = "is not exposed")]
#[cfg(debug_assertions)]
fn disabled_property_is_not_writable() {
    let settings = PropertySettings::builder()
        .disable(PropertyId::MaskImage)
        .build();
    let mut block = block();
    block.set_property_text(PropertyId::MaskImage, "none", false, &TestParser, &settings);
}

#[test]
fn internal_property_is_writable_in_author_blocks() {
    let mut block = block();
    assert!(set(&mut block, PropertyId::InternalTextAutosizingStatus, "1"));
    assert!(block.has_property(PropertyId::InternalTextAutosizingStatus));
}

#[test]
fn internal_property_in_user_agent_sheet() {
    let mut block = MutableDeclarations::new(ParserMode::UserAgentSheet);
    assert!(set(&mut block, PropertyId::InternalTextAutosizingStatus, "1"));
    assert!(block.has_property(PropertyId::InternalTextAutosizingStatus));
}

#[test]
fn entries_compare_by_value() {
    let mut a = block();
    let mut b = block();
    set(&mut a, PropertyId::Width, "10px");
    b.set_entry(PropertyEntry::new(PropertyId::Width, pixels(10), false));
    assert_eq!(a.entries(), b.entries());
}
