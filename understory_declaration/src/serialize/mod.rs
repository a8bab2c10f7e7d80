// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthand reconstruction and whole-block text.
//!
//! A shorthand is written back only when its current longhands can be
//! expressed by it without loss. [`property_as_string`] first runs the checks
//! every shorthand shares (all longhands present, same importance, consistent
//! CSS-wide keywords and `var()` substitution), then hands off to a
//! per-shorthand strategy. Anything that would lose information yields `None`.

mod border;
mod font;
mod grid;
mod keyword;
mod layered;
mod offset;

use alloc::string::String;

use understory_css_property::{
    MatchingShorthands, PropertyId, ValueId, shorthand_longhands, shorthands_for_longhand,
};
use understory_css_value::{PendingSubstitution, Value, fold_box_sides, format_number};

use crate::read::DeclarationRead;

/// Outcome of the checks shared by every shorthand.
#[derive(Debug)]
enum Gate {
    /// Run the shorthand's own strategy.
    Continue,
    /// The longhands cannot be expressed by the shorthand.
    Unrepresentable,
    /// The shorthand's text is already known.
    Text(String),
}

fn unrepresentable(shorthand: PropertyId, reason: &'static str) -> Gate {
    tracing::trace!(
        shorthand = shorthand.name(),
        reason,
        "shorthand not representable"
    );
    Gate::Unrepresentable
}

fn common_shorthand_checks<B: DeclarationRead + ?Sized>(block: &B, shorthand: PropertyId) -> Gate {
    let mut wide_keyword: Option<ValueId> = None;
    let mut all_wide = true;
    let mut importance: Option<bool> = None;
    let mut first_pending: Option<Option<&PendingSubstitution>> = None;

    for &longhand in shorthand_longhands(shorthand) {
        let Some(index) = block.find_property_index(longhand) else {
            return unrepresentable(shorthand, "missing longhand");
        };
        let property = block.property_at(index);

        let important = property.is_important();
        if *importance.get_or_insert(important) != important {
            return unrepresentable(shorthand, "mixed importance");
        }

        let value = property.value();
        match value.css_wide_keyword() {
            Some(keyword) => {
                if !all_wide || *wide_keyword.get_or_insert(keyword) != keyword {
                    return unrepresentable(shorthand, "mixed CSS-wide keywords");
                }
                continue;
            }
            None if wide_keyword.is_some() => {
                return unrepresentable(shorthand, "mixed CSS-wide keywords");
            }
            None => all_wide = false,
        }

        if value.is_variable_reference() {
            return unrepresentable(shorthand, "longhand holds var()");
        }

        let pending = value.as_pending_substitution();
        if pending.is_some_and(|pending| pending.shorthand() != shorthand) {
            return unrepresentable(shorthand, "substitution pending for another shorthand");
        }
        match first_pending {
            None => first_pending = Some(pending),
            Some(first) if first.is_some() != pending.is_some() => {
                return unrepresentable(shorthand, "partial substitution");
            }
            Some(_) => {}
        }
    }

    if let Some(keyword) = wide_keyword {
        return Gate::Text(keyword.name().into());
    }
    if let Some(Some(pending)) = first_pending {
        return Gate::Text(pending.shorthand_value().css_text());
    }
    Gate::Continue
}

/// Serializes a longhand or shorthand from `block`.
pub(crate) fn property_as_string<B: DeclarationRead + ?Sized>(
    block: &B,
    id: PropertyId,
) -> Option<String> {
    if let Some(value) = block.property_value(id) {
        if id.is_opacity_like()
            && let Some(percent) = value.percentage_value()
        {
            return Some(format_number(percent / 100.0));
        }
        return Some(text_expanding_initial_placeholder(id, value));
    }
    if !id.is_shorthand() {
        return None;
    }

    let text = match common_shorthand_checks(block, id) {
        Gate::Unrepresentable => return None,
        Gate::Text(text) => text,
        Gate::Continue => serialize_shorthand(block, id)?,
    };
    (!text.is_empty()).then_some(text)
}

fn serialize_shorthand<B: DeclarationRead + ?Sized>(block: &B, id: PropertyId) -> Option<String> {
    use PropertyId as P;
    match id {
        P::All | P::Marker => common_value(block, id),
        P::Animation
        | P::Background
        | P::BackgroundPosition
        | P::Mask
        | P::MaskPosition
        | P::Transition => layered::serialize(block, id),
        P::BorderTop
        | P::BorderRight
        | P::BorderBottom
        | P::BorderLeft
        | P::BorderBlockStart
        | P::BorderBlockEnd
        | P::BorderInlineStart
        | P::BorderInlineEnd
        | P::ColumnRule
        | P::Columns
        | P::Flex
        | P::FlexFlow
        | P::ListStyle
        | P::Outline => Some(shorthand_value(block, id, " ")),
        P::BorderBlockColor
        | P::BorderBlockStyle
        | P::BorderBlockWidth
        | P::BorderInlineColor
        | P::BorderInlineStyle
        | P::BorderInlineWidth
        | P::Gap
        | P::InsetBlock
        | P::InsetInline
        | P::MarginBlock
        | P::MarginInline
        | P::Overflow
        | P::PaddingBlock
        | P::PaddingInline => Some(two_values(block, id)),
        P::BorderColor | P::BorderStyle | P::BorderWidth | P::Inset | P::Margin | P::Padding => {
            Some(four_values(block, id))
        }
        P::Border => border::border(block),
        P::BorderBlock => border::triplet(
            block,
            P::BorderBlockWidth,
            P::BorderBlockStyle,
            P::BorderBlockColor,
        ),
        P::BorderInline => border::triplet(
            block,
            P::BorderInlineWidth,
            P::BorderInlineStyle,
            P::BorderInlineColor,
        ),
        P::BorderImage => border::image(block),
        P::BorderRadius => border::radius(block),
        P::Container => Some(keyword::container(block)),
        P::GridArea => grid::area(block),
        P::GridRow | P::GridColumn => grid::row_or_column(block, id),
        P::GridTemplate => grid::template(block),
        P::Grid => grid::grid(block),
        P::PageBreakAfter | P::PageBreakBefore => keyword::page_break(block, id),
        P::PageBreakInside | P::WebkitColumnBreakInside => keyword::break_inside(block, id),
        P::WebkitColumnBreakAfter | P::WebkitColumnBreakBefore => keyword::column_break(block, id),
        P::PlaceContent | P::PlaceItems | P::PlaceSelf => {
            Some(keyword::alignment(block, id))
        }
        P::Offset => Some(offset::offset(block)),
        P::Font => Some(font::font(block)),
        P::FontVariant => Some(font::variant(block)),
        P::FontSynthesis => Some(font::synthesis(block)),
        _ => None,
    }
}

// ==================== Shared helpers ====================

/// The text of `value`, with the omitted-component placeholder replaced by
/// the initial value of `id`. Comma lists expand item by item.
pub(crate) fn text_expanding_initial_placeholder(id: PropertyId, value: &Value) -> String {
    if value.is_initial_placeholder() {
        return id.initial_text().map(String::from).unwrap_or_default();
    }
    if let Some(list) = value.as_comma_list() {
        let mut out = String::new();
        for (index, item) in list.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            out.push_str(&text_expanding_initial_placeholder(id, item));
        }
        return out;
    }
    value.css_text()
}

/// The keyword of `value`, with the placeholder resolved to the initial
/// keyword of `id`.
pub(crate) fn keyword_expanding_initial_placeholder(id: PropertyId, value: &Value) -> Option<ValueId> {
    if value.is_initial_placeholder() {
        return id.initial_keyword();
    }
    value.keyword_id()
}

/// The keyword of a longhand in `block`.
fn keyword_of<B: DeclarationRead + ?Sized>(block: &B, id: PropertyId) -> Option<ValueId> {
    keyword_expanding_initial_placeholder(id, block.property_value(id)?)
}

/// The text of a longhand, empty when absent.
fn longhand_text<B: DeclarationRead + ?Sized>(block: &B, id: PropertyId) -> String {
    property_as_string(block, id).unwrap_or_default()
}

/// Joins the explicitly written longhands of `shorthand`.
fn shorthand_value<B: DeclarationRead + ?Sized>(
    block: &B,
    shorthand: PropertyId,
    separator: &str,
) -> String {
    let mut out = String::new();
    for &longhand in shorthand_longhands(shorthand) {
        if block.is_property_implicit(longhand) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(&longhand_text(block, longhand));
    }
    out
}

/// The text shared by every longhand of `shorthand`.
fn common_value<B: DeclarationRead + ?Sized>(block: &B, shorthand: PropertyId) -> Option<String> {
    let mut longhands = shorthand_longhands(shorthand).iter();
    let first = longhand_text(block, *longhands.next()?);
    longhands
        .all(|&longhand| longhand_text(block, longhand) == first)
        .then_some(first)
}

fn two_values<B: DeclarationRead + ?Sized>(block: &B, shorthand: PropertyId) -> String {
    let [first, second] = shorthand_longhands(shorthand) else {
        return String::new();
    };
    let first = longhand_text(block, *first);
    let second = longhand_text(block, *second);
    if first == second {
        return first;
    }
    let mut out = first;
    out.push(' ');
    out.push_str(&second);
    out
}

fn four_values<B: DeclarationRead + ?Sized>(block: &B, shorthand: PropertyId) -> String {
    let [top, right, bottom, left] = shorthand_longhands(shorthand) else {
        return String::new();
    };
    fold_box_sides(
        &longhand_text(block, *top),
        &longhand_text(block, *right),
        &longhand_text(block, *bottom),
        &longhand_text(block, *left),
    )
}

// ==================== Whole block ====================

/// Returns `true` if `shorthand` may stand in for `longhand` in whole-block
/// text.
fn can_use_shorthand_for_longhand(shorthand: PropertyId, longhand: PropertyId) -> bool {
    use PropertyId as P;
    match shorthand {
        P::Font
        | P::FontVariant
        | P::FontSynthesis
        | P::PageBreakAfter
        | P::PageBreakBefore
        | P::PageBreakInside
        | P::WebkitColumnBreakAfter
        | P::WebkitColumnBreakBefore
        | P::WebkitColumnBreakInside
        | P::BorderTop
        | P::BorderRight
        | P::BorderBottom
        | P::BorderLeft
        | P::BorderBlockStart
        | P::BorderBlockEnd
        | P::BorderInlineStart
        | P::BorderInlineEnd
        | P::ColumnRule
        | P::Columns
        | P::Container
        | P::Gap
        | P::GridArea
        | P::GridColumn
        | P::GridRow
        | P::MaskPosition
        | P::Offset
        | P::PlaceContent
        | P::PlaceItems
        | P::PlaceSelf => false,
        P::Mask => !matches!(longhand, P::MaskComposite | P::MaskMode | P::MaskSize),
        _ => true,
    }
}

/// Serializes every entry, folding longhands into the first shorthand that
/// represents them.
///
/// Each shorthand is tried at most once and emitted at most once; once used,
/// the remaining longhands it covers are skipped.
pub(crate) fn as_text<B: DeclarationRead + ?Sized>(block: &B) -> String {
    const SHORTHAND_COUNT: usize = PropertyId::SHORTHANDS.len();
    let mut used = [false; SHORTHAND_COUNT];
    let mut appeared = [false; SHORTHAND_COUNT];

    let mut out = String::new();
    for property in block.properties() {
        let longhand = property.id();
        let candidates: MatchingShorthands = match property.value().as_pending_substitution() {
            Some(pending) => core::iter::once(pending.shorthand()).collect(),
            None => {
                let mut shorthands = shorthands_for_longhand(longhand);
                shorthands.retain(|shorthand| can_use_shorthand_for_longhand(*shorthand, longhand));
                shorthands
            }
        };

        let mut name = property.name();
        let mut text = None;
        let mut already_used = false;
        for shorthand in candidates {
            let Some(index) = shorthand.shorthand_index() else {
                continue;
            };
            if used[index] {
                already_used = true;
                break;
            }
            if appeared[index] {
                continue;
            }
            appeared[index] = true;
            if let Some(shorthand_text) = property_as_string(block, shorthand) {
                used[index] = true;
                name = shorthand.name();
                text = Some(shorthand_text);
                break;
            }
        }
        if already_used {
            continue;
        }

        let text =
            text.unwrap_or_else(|| text_expanding_initial_placeholder(longhand, property.value()));
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(&text);
        if property.is_important() {
            out.push_str(" !important");
        }
        out.push(';');
    }
    out
}
