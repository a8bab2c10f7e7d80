// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `font`, `font-variant` and `font-synthesis`.
//!
//! These return an empty string when the longhands cannot be written as the
//! shorthand; the caller turns that into "not representable".

use alloc::string::String;

use understory_css_property::{PropertyId, ValueId, shorthand_longhands};

use super::{keyword_expanding_initial_placeholder, keyword_of, text_expanding_initial_placeholder};
use crate::read::DeclarationRead;

/// Longhands that `font` resets but cannot write.
const RESET_ONLY: [(PropertyId, ValueId); 9] = [
    (PropertyId::FontVariantLigatures, ValueId::Normal),
    (PropertyId::FontVariantPosition, ValueId::Normal),
    (PropertyId::FontVariantNumeric, ValueId::Normal),
    (PropertyId::FontVariantAlternates, ValueId::Normal),
    (PropertyId::FontVariantEastAsian, ValueId::Normal),
    (PropertyId::FontKerning, ValueId::Auto),
    (PropertyId::FontSizeAdjust, ValueId::None),
    (PropertyId::FontFeatureSettings, ValueId::Normal),
    (PropertyId::FontVariationSettings, ValueId::Normal),
];

/// `Some(keyword)` when every longhand holds the same system font keyword,
/// `Some(None)` when only some do.
fn system_font<B: DeclarationRead + ?Sized>(block: &B) -> Option<Option<ValueId>> {
    let mut keyword: Option<ValueId> = None;
    let mut all_system = true;
    for &longhand in shorthand_longhands(PropertyId::Font) {
        // The raw value: `property_value` hides system keywords.
        let found = block
            .find_property_index(longhand)
            .and_then(|index| block.property_at(index).value().keyword_id())
            .filter(|keyword| keyword.is_system_font());
        match found {
            Some(found) => {
                if *keyword.get_or_insert(found) != found {
                    return Some(None);
                }
            }
            None => all_system = false,
        }
    }
    let keyword = keyword?;
    Some(all_system.then_some(keyword))
}

/// A present longhand whose keyword is not `expected`. Non-keywords never
/// match.
fn differs_from<B: DeclarationRead + ?Sized>(block: &B, id: PropertyId, expected: ValueId) -> bool {
    block
        .property_value(id)
        .is_some_and(|value| keyword_expanding_initial_placeholder(id, value) != Some(expected))
}

/// The keyword `font-stretch` is written as. Percentages map to a keyword
/// only when one names them exactly.
fn stretch_keyword<B: DeclarationRead + ?Sized>(block: &B) -> Result<Option<ValueId>, ()> {
    let Some(value) = block.property_value(PropertyId::FontStretch) else {
        return Ok(None);
    };
    if let Some(percentage) = value.percentage_value() {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the round trip below rejects anything f32 cannot hold"
        )]
        let narrowed = percentage as f32;
        if f64::from(narrowed) != percentage {
            return Err(());
        }
        return ValueId::font_stretch_for_percentage(narrowed)
            .map(Some)
            .ok_or(());
    }
    keyword_expanding_initial_placeholder(PropertyId::FontStretch, value)
        .map(Some)
        .ok_or(())
}

/// `font`: `[style] [variant-caps] [weight] [stretch] size [/ line-height]
/// family`, or a system font keyword.
pub(super) fn font<B: DeclarationRead + ?Sized>(block: &B) -> String {
    if let Some(system) = system_font(block) {
        return system.map(|keyword| String::from(keyword.name())).unwrap_or_default();
    }

    if RESET_ONLY
        .iter()
        .any(|&(longhand, initial)| differs_from(block, longhand, initial))
    {
        tracing::trace!("font resets a longhand it cannot write");
        return String::new();
    }

    let (Some(size), Some(family)) = (
        block.property_value(PropertyId::FontSize),
        block.property_value(PropertyId::FontFamily),
    ) else {
        return String::new();
    };

    if differs_from(block, PropertyId::FontVariantCaps, ValueId::Normal)
        && differs_from(block, PropertyId::FontVariantCaps, ValueId::SmallCaps)
    {
        return String::new();
    }

    let Ok(stretch) = stretch_keyword(block) else {
        return String::new();
    };

    let mut out = String::new();
    let mut append = |prefix: &str, text: &str| {
        if !out.is_empty() {
            out.push_str(prefix);
        }
        out.push_str(text);
    };
    let optional = |id: PropertyId| {
        let value = block.property_value(id)?;
        if keyword_expanding_initial_placeholder(id, value) == Some(ValueId::Normal) {
            return None;
        }
        Some(text_expanding_initial_placeholder(id, value))
    };

    for id in [
        PropertyId::FontStyle,
        PropertyId::FontVariantCaps,
        PropertyId::FontWeight,
    ] {
        if let Some(text) = optional(id) {
            append(" ", &text);
        }
    }
    if let Some(stretch) = stretch
        && stretch != ValueId::Normal
    {
        append(" ", stretch.name());
    }
    append(" ", &text_expanding_initial_placeholder(PropertyId::FontSize, size));
    if let Some(text) = optional(PropertyId::LineHeight) {
        append(" / ", &text);
    }
    append(" ", &text_expanding_initial_placeholder(PropertyId::FontFamily, family));
    out
}

/// `font-variant`: the non-`normal` variant longhands, or `normal`.
pub(super) fn variant<B: DeclarationRead + ?Sized>(block: &B) -> String {
    let ligatures_none = keyword_of(block, PropertyId::FontVariantLigatures) == Some(ValueId::None);
    let mut out = String::new();
    for &longhand in shorthand_longhands(PropertyId::FontVariant) {
        // Only a system font keyword hides a longhand here.
        let Some(value) = block.property_value(longhand) else {
            return String::new();
        };
        if value.is_initial_placeholder() || value.is_keyword(ValueId::Normal) {
            continue;
        }
        // `none` ligatures cannot be combined with anything else.
        if ligatures_none && longhand != PropertyId::FontVariantLigatures {
            return String::new();
        }
        if !out.is_empty() {
            out.push(' ');
        }
        value.serialize(&mut out);
    }
    if out.is_empty() {
        out.push_str(ValueId::Normal.name());
    }
    out
}

/// `font-synthesis`: `none`, or the synthesized aspects.
pub(super) fn synthesis<B: DeclarationRead + ?Sized>(block: &B) -> String {
    let words = [
        (PropertyId::FontSynthesisWeight, "weight"),
        (PropertyId::FontSynthesisStyle, "style"),
        (PropertyId::FontSynthesisSmallCaps, "small-caps"),
    ];
    let mut out = String::new();
    for (longhand, word) in words {
        if keyword_of(block, longhand) != Some(ValueId::Auto) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    if out.is_empty() {
        out.push_str(ValueId::None.name());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PropertyEntry;
    use crate::mutable::MutableDeclarations;
    use understory_css_property::ParserMode;
    use understory_css_value::{Value, identifier, initial_placeholder, pixels};

    fn font_block(entries: &[(PropertyId, Value)]) -> MutableDeclarations {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::Font, initial_placeholder(), false);
        for (id, value) in entries {
            block.set_entry(
                PropertyEntry::new(*id, value.clone(), false).set_from_shorthand(PropertyId::Font),
            );
        }
        block
    }

    #[test]
    fn font_orders_components() {
        let block = font_block(&[
            (PropertyId::FontStyle, identifier(ValueId::Italic)),
            (PropertyId::FontWeight, identifier(ValueId::Bold)),
            (PropertyId::FontSize, pixels(12)),
            (PropertyId::LineHeight, Value::number(1.5)),
            (PropertyId::FontFamily, Value::font_family("serif")),
        ]);
        assert_eq!(font(&block), "italic bold 12px / 1.5 serif");
    }

    #[test]
    fn font_maps_stretch_percentage() {
        let block = font_block(&[
            (PropertyId::FontStretch, Value::percentage(75.0)),
            (PropertyId::FontSize, pixels(10)),
            (PropertyId::FontFamily, Value::font_family("serif")),
        ]);
        assert_eq!(font(&block), "condensed 10px serif");

        let block = font_block(&[
            (PropertyId::FontStretch, Value::percentage(80.0)),
            (PropertyId::FontSize, pixels(10)),
            (PropertyId::FontFamily, Value::font_family("serif")),
        ]);
        assert_eq!(font(&block), "");
    }

    #[test]
    fn font_rejects_unwritable_longhands() {
        let block = font_block(&[
            (PropertyId::FontSize, pixels(10)),
            (PropertyId::FontFamily, Value::font_family("serif")),
            (PropertyId::FontKerning, identifier(ValueId::None)),
        ]);
        assert_eq!(font(&block), "");

        let block = font_block(&[
            (PropertyId::FontSize, pixels(10)),
            (PropertyId::FontFamily, Value::font_family("serif")),
            (PropertyId::FontVariantCaps, identifier(ValueId::AllSmallCaps)),
        ]);
        assert_eq!(font(&block), "");
    }

    #[test]
    fn font_system_keyword() {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::Font, identifier(ValueId::Caption), false);
        assert_eq!(font(&block), "caption");

        block.set_entry(
            PropertyEntry::new(PropertyId::FontSize, pixels(10), false)
                .set_from_shorthand(PropertyId::Font),
        );
        assert_eq!(font(&block), "");
    }

    #[test]
    fn variant_skips_normal() {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::FontVariant, initial_placeholder(), false);
        assert_eq!(variant(&block), "normal");

        block.set_keyword(PropertyId::FontVariantCaps, ValueId::SmallCaps, false);
        assert_eq!(variant(&block), "small-caps");

        block.set_keyword(PropertyId::FontVariantLigatures, ValueId::None, false);
        assert_eq!(variant(&block), "");
    }

    #[test]
    fn synthesis_lists_aspects() {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::FontSynthesis, identifier(ValueId::None), false);
        assert_eq!(synthesis(&block), "none");

        block.set_keyword(PropertyId::FontSynthesisWeight, ValueId::Auto, false);
        block.set_keyword(PropertyId::FontSynthesisSmallCaps, ValueId::Auto, false);
        assert_eq!(synthesis(&block), "weight small-caps");
    }
}
