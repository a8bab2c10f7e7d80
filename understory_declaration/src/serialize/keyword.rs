// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthands that map keywords: legacy breaks, `container`, and the
//! `place-*` alignment pairs.

use alloc::string::String;

use understory_css_property::{PropertyId, ValueId, shorthand_longhands};

use super::{common_value, keyword_of, longhand_text, shorthand_value};
use crate::read::DeclarationRead;

fn single_longhand(shorthand: PropertyId) -> Option<PropertyId> {
    shorthand_longhands(shorthand).first().copied()
}

fn keyword_text(keyword: ValueId) -> Option<String> {
    Some(String::from(keyword.name()))
}

/// `page-break-before` and `page-break-after`: `page` reads back as
/// `always`.
pub(super) fn page_break<B: DeclarationRead + ?Sized>(
    block: &B,
    shorthand: PropertyId,
) -> Option<String> {
    match keyword_of(block, single_longhand(shorthand)?)? {
        ValueId::Page => keyword_text(ValueId::Always),
        keyword @ (ValueId::Auto | ValueId::Avoid | ValueId::Left | ValueId::Right) => {
            keyword_text(keyword)
        }
        _ => None,
    }
}

/// `page-break-inside` and `-webkit-column-break-inside`.
pub(super) fn break_inside<B: DeclarationRead + ?Sized>(
    block: &B,
    shorthand: PropertyId,
) -> Option<String> {
    match keyword_of(block, single_longhand(shorthand)?)? {
        keyword @ (ValueId::Auto | ValueId::Avoid) => keyword_text(keyword),
        _ => None,
    }
}

/// `-webkit-column-break-before` and `-webkit-column-break-after`.
pub(super) fn column_break<B: DeclarationRead + ?Sized>(
    block: &B,
    shorthand: PropertyId,
) -> Option<String> {
    match keyword_of(block, single_longhand(shorthand)?)? {
        ValueId::Column => keyword_text(ValueId::Always),
        ValueId::AvoidColumn => keyword_text(ValueId::Avoid),
        ValueId::Auto => keyword_text(ValueId::Auto),
        _ => None,
    }
}

/// `container`: the name alone while the type is `normal`.
pub(super) fn container<B: DeclarationRead + ?Sized>(block: &B) -> String {
    if keyword_of(block, PropertyId::ContainerType) == Some(ValueId::Normal) {
        return longhand_text(block, PropertyId::ContainerName);
    }
    shorthand_value(block, PropertyId::Container, " / ")
}

/// `place-content`, `place-items`, and `place-self`: one value when both
/// axes agree.
pub(super) fn alignment<B: DeclarationRead + ?Sized>(block: &B, shorthand: PropertyId) -> String {
    match common_value(block, shorthand) {
        Some(text) if !text.is_empty() => text,
        _ => shorthand_value(block, shorthand, " "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutable::MutableDeclarations;
    use understory_css_property::ParserMode;
    use understory_css_value::{Value, initial_placeholder};

    fn block() -> MutableDeclarations {
        MutableDeclarations::new(ParserMode::HtmlStandard)
    }

    #[test]
    fn page_break_maps_page_to_always() {
        let mut block = block();
        block.set_keyword(PropertyId::BreakAfter, ValueId::Page, false);
        assert_eq!(
            page_break(&block, PropertyId::PageBreakAfter).as_deref(),
            Some("always")
        );
        block.set_keyword(PropertyId::BreakAfter, ValueId::Left, false);
        assert_eq!(
            page_break(&block, PropertyId::PageBreakAfter).as_deref(),
            Some("left")
        );
        block.set_keyword(PropertyId::BreakAfter, ValueId::Column, false);
        assert_eq!(page_break(&block, PropertyId::PageBreakAfter), None);
    }

    #[test]
    fn column_break_maps_column_keywords() {
        let mut block = block();
        block.set_keyword(PropertyId::BreakBefore, ValueId::Column, false);
        assert_eq!(
            column_break(&block, PropertyId::WebkitColumnBreakBefore).as_deref(),
            Some("always")
        );
        block.set_keyword(PropertyId::BreakBefore, ValueId::AvoidColumn, false);
        assert_eq!(
            column_break(&block, PropertyId::WebkitColumnBreakBefore).as_deref(),
            Some("avoid")
        );
        block.set_keyword(PropertyId::BreakBefore, ValueId::Page, false);
        assert_eq!(column_break(&block, PropertyId::WebkitColumnBreakBefore), None);
    }

    #[test]
    fn break_inside_accepts_auto_and_avoid() {
        let mut block = block();
        block.set_keyword(PropertyId::BreakInside, ValueId::Avoid, false);
        assert_eq!(
            break_inside(&block, PropertyId::PageBreakInside).as_deref(),
            Some("avoid")
        );
        block.set_keyword(PropertyId::BreakInside, ValueId::AvoidPage, false);
        assert_eq!(break_inside(&block, PropertyId::PageBreakInside), None);
    }

    #[test]
    fn container_omits_normal_type() {
        let mut block = block();
        block.set_shorthand(PropertyId::Container, initial_placeholder(), false);
        block.set_entry(
            crate::entry::PropertyEntry::new(
                PropertyId::ContainerName,
                Value::custom_ident("sidebar"),
                false,
            )
            .set_from_shorthand(PropertyId::Container),
        );
        assert_eq!(container(&block), "sidebar");

        block.set_keyword(PropertyId::ContainerType, ValueId::InlineSize, false);
        assert_eq!(container(&block), "sidebar / inline-size");
    }

    #[test]
    fn alignment_collapses_equal_axes() {
        let mut block = block();
        block.set_keyword(PropertyId::AlignItems, ValueId::Center, false);
        block.set_keyword(PropertyId::JustifyItems, ValueId::Center, false);
        assert_eq!(alignment(&block, PropertyId::PlaceItems), "center");

        block.set_keyword(PropertyId::JustifyItems, ValueId::Start, false);
        assert_eq!(alignment(&block, PropertyId::PlaceItems), "center start");
    }

    #[test]
    fn place_self_collapses_equal_axes() {
        let mut block = block();
        block.set_keyword(PropertyId::PlaceSelf, ValueId::Center, false);
        assert_eq!(
            block.property_as_string(PropertyId::PlaceSelf).as_deref(),
            Some("center")
        );
        block.set_keyword(PropertyId::JustifySelf, ValueId::Stretch, false);
        assert_eq!(
            block.property_as_string(PropertyId::PlaceSelf).as_deref(),
            Some("center stretch")
        );
    }
}
