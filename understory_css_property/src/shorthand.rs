// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthand expansion tables and the longhand → shorthand reverse map.

use smallvec::SmallVec;

use crate::PropertyId;
use crate::PropertyId as P;

/// The most shorthands any single longhand belongs to.
pub const MAX_SHORTHANDS_PER_LONGHAND: usize = 4;

/// Shorthands containing a longhand, most longhands first.
pub type MatchingShorthands = SmallVec<[PropertyId; MAX_SHORTHANDS_PER_LONGHAND]>;

const AUTHOR_LONGHAND_COUNT: usize = {
    let mut count = 0;
    let mut i = 0;
    while i < PropertyId::LONGHANDS.len() {
        if !PropertyId::LONGHANDS[i].is_internal() {
            count += 1;
        }
        i += 1;
    }
    count
};
const ALL_LONGHANDS: [PropertyId; AUTHOR_LONGHAND_COUNT] = {
    let mut out = [P::Color; AUTHOR_LONGHAND_COUNT];
    let mut n = 0;
    let mut i = 0;
    while i < PropertyId::LONGHANDS.len() {
        let id = PropertyId::LONGHANDS[i];
        if !id.is_internal() {
            out[n] = id;
            n += 1;
        }
        i += 1;
    }
    out
};
/// `all` covers every longhand an author can write.
const ALL: &[PropertyId] = &ALL_LONGHANDS;
const ANIMATION: &[PropertyId] = &[
    P::AnimationDuration,
    P::AnimationTimingFunction,
    P::AnimationDelay,
    P::AnimationIterationCount,
    P::AnimationDirection,
    P::AnimationFillMode,
    P::AnimationPlayState,
    P::AnimationName,
];
const BACKGROUND: &[PropertyId] = &[
    P::BackgroundImage,
    P::BackgroundPositionX,
    P::BackgroundPositionY,
    P::BackgroundSize,
    P::BackgroundRepeat,
    P::BackgroundAttachment,
    P::BackgroundOrigin,
    P::BackgroundClip,
    P::BackgroundColor,
];
const BACKGROUND_POSITION: &[PropertyId] = &[P::BackgroundPositionX, P::BackgroundPositionY];
const BORDER: &[PropertyId] = &[
    P::BorderTopWidth,
    P::BorderRightWidth,
    P::BorderBottomWidth,
    P::BorderLeftWidth,
    P::BorderTopStyle,
    P::BorderRightStyle,
    P::BorderBottomStyle,
    P::BorderLeftStyle,
    P::BorderTopColor,
    P::BorderRightColor,
    P::BorderBottomColor,
    P::BorderLeftColor,
    P::BorderImageSource,
    P::BorderImageSlice,
    P::BorderImageWidth,
    P::BorderImageOutset,
    P::BorderImageRepeat,
];
const BORDER_BLOCK: &[PropertyId] = &[
    P::BorderBlockStartWidth,
    P::BorderBlockEndWidth,
    P::BorderBlockStartStyle,
    P::BorderBlockEndStyle,
    P::BorderBlockStartColor,
    P::BorderBlockEndColor,
];
const BORDER_BLOCK_COLOR: &[PropertyId] = &[P::BorderBlockStartColor, P::BorderBlockEndColor];
const BORDER_BLOCK_STYLE: &[PropertyId] = &[P::BorderBlockStartStyle, P::BorderBlockEndStyle];
const BORDER_BLOCK_WIDTH: &[PropertyId] = &[P::BorderBlockStartWidth, P::BorderBlockEndWidth];
const BORDER_BLOCK_START: &[PropertyId] = &[
    P::BorderBlockStartWidth,
    P::BorderBlockStartStyle,
    P::BorderBlockStartColor,
];
const BORDER_BLOCK_END: &[PropertyId] = &[
    P::BorderBlockEndWidth,
    P::BorderBlockEndStyle,
    P::BorderBlockEndColor,
];
const BORDER_INLINE: &[PropertyId] = &[
    P::BorderInlineStartWidth,
    P::BorderInlineEndWidth,
    P::BorderInlineStartStyle,
    P::BorderInlineEndStyle,
    P::BorderInlineStartColor,
    P::BorderInlineEndColor,
];
const BORDER_INLINE_COLOR: &[PropertyId] = &[P::BorderInlineStartColor, P::BorderInlineEndColor];
const BORDER_INLINE_STYLE: &[PropertyId] = &[P::BorderInlineStartStyle, P::BorderInlineEndStyle];
const BORDER_INLINE_WIDTH: &[PropertyId] = &[P::BorderInlineStartWidth, P::BorderInlineEndWidth];
const BORDER_INLINE_START: &[PropertyId] = &[
    P::BorderInlineStartWidth,
    P::BorderInlineStartStyle,
    P::BorderInlineStartColor,
];
const BORDER_INLINE_END: &[PropertyId] = &[
    P::BorderInlineEndWidth,
    P::BorderInlineEndStyle,
    P::BorderInlineEndColor,
];
const BORDER_TOP: &[PropertyId] = &[P::BorderTopWidth, P::BorderTopStyle, P::BorderTopColor];
const BORDER_RIGHT: &[PropertyId] = &[P::BorderRightWidth, P::BorderRightStyle, P::BorderRightColor];
const BORDER_BOTTOM: &[PropertyId] = &[
    P::BorderBottomWidth,
    P::BorderBottomStyle,
    P::BorderBottomColor,
];
const BORDER_LEFT: &[PropertyId] = &[P::BorderLeftWidth, P::BorderLeftStyle, P::BorderLeftColor];
const BORDER_COLOR: &[PropertyId] = &[
    P::BorderTopColor,
    P::BorderRightColor,
    P::BorderBottomColor,
    P::BorderLeftColor,
];
const BORDER_STYLE: &[PropertyId] = &[
    P::BorderTopStyle,
    P::BorderRightStyle,
    P::BorderBottomStyle,
    P::BorderLeftStyle,
];
const BORDER_WIDTH: &[PropertyId] = &[
    P::BorderTopWidth,
    P::BorderRightWidth,
    P::BorderBottomWidth,
    P::BorderLeftWidth,
];
const BORDER_IMAGE: &[PropertyId] = &[
    P::BorderImageSource,
    P::BorderImageSlice,
    P::BorderImageWidth,
    P::BorderImageOutset,
    P::BorderImageRepeat,
];
const BORDER_RADIUS: &[PropertyId] = &[
    P::BorderTopLeftRadius,
    P::BorderTopRightRadius,
    P::BorderBottomRightRadius,
    P::BorderBottomLeftRadius,
];
const COLUMN_RULE: &[PropertyId] = &[P::ColumnRuleWidth, P::ColumnRuleStyle, P::ColumnRuleColor];
const COLUMNS: &[PropertyId] = &[P::ColumnWidth, P::ColumnCount];
const CONTAINER: &[PropertyId] = &[P::ContainerName, P::ContainerType];
const FLEX: &[PropertyId] = &[P::FlexGrow, P::FlexShrink, P::FlexBasis];
const FLEX_FLOW: &[PropertyId] = &[P::FlexDirection, P::FlexWrap];
const FONT: &[PropertyId] = &[
    P::FontStyle,
    P::FontVariantCaps,
    P::FontWeight,
    P::FontStretch,
    P::FontSize,
    P::LineHeight,
    P::FontFamily,
    P::FontVariantLigatures,
    P::FontVariantPosition,
    P::FontVariantNumeric,
    P::FontVariantAlternates,
    P::FontVariantEastAsian,
    P::FontKerning,
    P::FontSizeAdjust,
    P::FontFeatureSettings,
    P::FontVariationSettings,
];
const FONT_SYNTHESIS: &[PropertyId] = &[
    P::FontSynthesisWeight,
    P::FontSynthesisStyle,
    P::FontSynthesisSmallCaps,
];
const FONT_VARIANT: &[PropertyId] = &[
    P::FontVariantLigatures,
    P::FontVariantCaps,
    P::FontVariantAlternates,
    P::FontVariantNumeric,
    P::FontVariantEastAsian,
    P::FontVariantPosition,
];
const GAP: &[PropertyId] = &[P::RowGap, P::ColumnGap];
const GRID: &[PropertyId] = &[
    P::GridTemplateRows,
    P::GridTemplateColumns,
    P::GridTemplateAreas,
    P::GridAutoRows,
    P::GridAutoColumns,
    P::GridAutoFlow,
];
const GRID_AREA: &[PropertyId] = &[
    P::GridRowStart,
    P::GridColumnStart,
    P::GridRowEnd,
    P::GridColumnEnd,
];
const GRID_COLUMN: &[PropertyId] = &[P::GridColumnStart, P::GridColumnEnd];
const GRID_ROW: &[PropertyId] = &[P::GridRowStart, P::GridRowEnd];
const GRID_TEMPLATE: &[PropertyId] = &[
    P::GridTemplateRows,
    P::GridTemplateColumns,
    P::GridTemplateAreas,
];
const INSET: &[PropertyId] = &[P::Top, P::Right, P::Bottom, P::Left];
const INSET_BLOCK: &[PropertyId] = &[P::InsetBlockStart, P::InsetBlockEnd];
const INSET_INLINE: &[PropertyId] = &[P::InsetInlineStart, P::InsetInlineEnd];
const LIST_STYLE: &[PropertyId] = &[P::ListStylePosition, P::ListStyleImage, P::ListStyleType];
const MARGIN: &[PropertyId] = &[P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft];
const MARGIN_BLOCK: &[PropertyId] = &[P::MarginBlockStart, P::MarginBlockEnd];
const MARGIN_INLINE: &[PropertyId] = &[P::MarginInlineStart, P::MarginInlineEnd];
const MARKER: &[PropertyId] = &[P::MarkerStart, P::MarkerMid, P::MarkerEnd];
const MASK: &[PropertyId] = &[
    P::MaskImage,
    P::MaskPositionX,
    P::MaskPositionY,
    P::MaskSize,
    P::MaskRepeat,
    P::MaskOrigin,
    P::MaskClip,
    P::MaskComposite,
    P::MaskMode,
];
const MASK_POSITION: &[PropertyId] = &[P::MaskPositionX, P::MaskPositionY];
const OFFSET: &[PropertyId] = &[
    P::OffsetPosition,
    P::OffsetPath,
    P::OffsetDistance,
    P::OffsetRotate,
    P::OffsetAnchor,
];
const OUTLINE: &[PropertyId] = &[P::OutlineColor, P::OutlineStyle, P::OutlineWidth];
const OVERFLOW: &[PropertyId] = &[P::OverflowX, P::OverflowY];
const PADDING: &[PropertyId] = &[
    P::PaddingTop,
    P::PaddingRight,
    P::PaddingBottom,
    P::PaddingLeft,
];
const PADDING_BLOCK: &[PropertyId] = &[P::PaddingBlockStart, P::PaddingBlockEnd];
const PADDING_INLINE: &[PropertyId] = &[P::PaddingInlineStart, P::PaddingInlineEnd];
const PAGE_BREAK_AFTER: &[PropertyId] = &[P::BreakAfter];
const PAGE_BREAK_BEFORE: &[PropertyId] = &[P::BreakBefore];
const PAGE_BREAK_INSIDE: &[PropertyId] = &[P::BreakInside];
const PLACE_CONTENT: &[PropertyId] = &[P::AlignContent, P::JustifyContent];
const PLACE_ITEMS: &[PropertyId] = &[P::AlignItems, P::JustifyItems];
const PLACE_SELF: &[PropertyId] = &[P::AlignSelf, P::JustifySelf];
const TRANSITION: &[PropertyId] = &[
    P::TransitionProperty,
    P::TransitionDuration,
    P::TransitionTimingFunction,
    P::TransitionDelay,
];

/// Returns the longhands a shorthand expands to, in canonical order.
///
/// Longhands and [`PropertyId::Custom`] expand to nothing.
///
/// ```rust
/// use understory_css_property::{PropertyId, shorthand_longhands};
///
/// assert_eq!(
///     shorthand_longhands(PropertyId::Gap),
///     &[PropertyId::RowGap, PropertyId::ColumnGap]
/// );
/// assert!(shorthand_longhands(PropertyId::RowGap).is_empty());
/// ```
#[must_use]
pub const fn shorthand_longhands(id: PropertyId) -> &'static [PropertyId] {
    match id {
        P::All => ALL,
        P::Animation => ANIMATION,
        P::Background => BACKGROUND,
        P::BackgroundPosition => BACKGROUND_POSITION,
        P::Border => BORDER,
        P::BorderBlock => BORDER_BLOCK,
        P::BorderBlockColor => BORDER_BLOCK_COLOR,
        P::BorderBlockEnd => BORDER_BLOCK_END,
        P::BorderBlockStart => BORDER_BLOCK_START,
        P::BorderBlockStyle => BORDER_BLOCK_STYLE,
        P::BorderBlockWidth => BORDER_BLOCK_WIDTH,
        P::BorderBottom => BORDER_BOTTOM,
        P::BorderColor => BORDER_COLOR,
        P::BorderImage => BORDER_IMAGE,
        P::BorderInline => BORDER_INLINE,
        P::BorderInlineColor => BORDER_INLINE_COLOR,
        P::BorderInlineEnd => BORDER_INLINE_END,
        P::BorderInlineStart => BORDER_INLINE_START,
        P::BorderInlineStyle => BORDER_INLINE_STYLE,
        P::BorderInlineWidth => BORDER_INLINE_WIDTH,
        P::BorderLeft => BORDER_LEFT,
        P::BorderRadius => BORDER_RADIUS,
        P::BorderRight => BORDER_RIGHT,
        P::BorderStyle => BORDER_STYLE,
        P::BorderTop => BORDER_TOP,
        P::BorderWidth => BORDER_WIDTH,
        P::ColumnRule => COLUMN_RULE,
        P::Columns => COLUMNS,
        P::Container => CONTAINER,
        P::Flex => FLEX,
        P::FlexFlow => FLEX_FLOW,
        P::Font => FONT,
        P::FontSynthesis => FONT_SYNTHESIS,
        P::FontVariant => FONT_VARIANT,
        P::Gap => GAP,
        P::Grid => GRID,
        P::GridArea => GRID_AREA,
        P::GridColumn => GRID_COLUMN,
        P::GridRow => GRID_ROW,
        P::GridTemplate => GRID_TEMPLATE,
        P::Inset => INSET,
        P::InsetBlock => INSET_BLOCK,
        P::InsetInline => INSET_INLINE,
        P::ListStyle => LIST_STYLE,
        P::Margin => MARGIN,
        P::MarginBlock => MARGIN_BLOCK,
        P::MarginInline => MARGIN_INLINE,
        P::Marker => MARKER,
        P::Mask => MASK,
        P::MaskPosition => MASK_POSITION,
        P::Offset => OFFSET,
        P::Outline => OUTLINE,
        P::Overflow => OVERFLOW,
        P::Padding => PADDING,
        P::PaddingBlock => PADDING_BLOCK,
        P::PaddingInline => PADDING_INLINE,
        P::PageBreakAfter | P::WebkitColumnBreakAfter => PAGE_BREAK_AFTER,
        P::PageBreakBefore | P::WebkitColumnBreakBefore => PAGE_BREAK_BEFORE,
        P::PageBreakInside | P::WebkitColumnBreakInside => PAGE_BREAK_INSIDE,
        P::PlaceContent => PLACE_CONTENT,
        P::PlaceItems => PLACE_ITEMS,
        P::PlaceSelf => PLACE_SELF,
        P::Transition => TRANSITION,
        _ => &[],
    }
}

type ReverseRow = [Option<PropertyId>; MAX_SHORTHANDS_PER_LONGHAND];

/// Shorthands containing each longhand, indexed by longhand id.
///
/// `all` is left out: entries never record it and whole-block text never
/// folds longhands into it.
static REVERSE_MAP: [ReverseRow; PropertyId::LONGHANDS.len()] = build_reverse_map();

const fn longhand_count(shorthand: Option<PropertyId>) -> usize {
    match shorthand {
        Some(shorthand) => shorthand_longhands(shorthand).len(),
        None => 0,
    }
}

const fn build_reverse_map() -> [ReverseRow; PropertyId::LONGHANDS.len()] {
    let mut map = [[None; MAX_SHORTHANDS_PER_LONGHAND]; PropertyId::LONGHANDS.len()];
    let mut s = 0;
    while s < PropertyId::SHORTHANDS.len() {
        let shorthand = PropertyId::SHORTHANDS[s];
        let longhands: &[PropertyId] = match shorthand {
            P::All => &[],
            _ => shorthand_longhands(shorthand),
        };
        let mut l = 0;
        while l < longhands.len() {
            let row = &mut map[longhands[l].index() as usize];
            assert!(
                row[MAX_SHORTHANDS_PER_LONGHAND - 1].is_none(),
                "shorthand index must fit in two bits"
            );
            // Insert before the first shorthand with fewer longhands.
            let mut position = 0;
            while position < MAX_SHORTHANDS_PER_LONGHAND
                && row[position].is_some()
                && longhand_count(row[position]) >= longhands.len()
            {
                position += 1;
            }
            let mut shift = MAX_SHORTHANDS_PER_LONGHAND - 1;
            while shift > position {
                row[shift] = row[shift - 1];
                shift -= 1;
            }
            row[position] = Some(shorthand);
            l += 1;
        }
        s += 1;
    }
    map
}

/// Returns every shorthand containing `longhand`, ordered by descending
/// longhand count (ties keep id order). `all` is never listed.
///
/// The answer comes from a table built at compile time.
///
/// ```rust
/// use understory_css_property::{PropertyId, shorthands_for_longhand};
///
/// let shorthands = shorthands_for_longhand(PropertyId::BorderTopWidth);
/// assert_eq!(
///     shorthands.as_slice(),
///     &[PropertyId::Border, PropertyId::BorderWidth, PropertyId::BorderTop]
/// );
/// ```
#[must_use]
pub fn shorthands_for_longhand(longhand: PropertyId) -> MatchingShorthands {
    REVERSE_MAP
        .get(usize::from(longhand.index()))
        .map(|row| row.iter().map_while(|shorthand| *shorthand).collect())
        .unwrap_or_default()
}

/// Returns the position of `shorthand` within [`shorthands_for_longhand`].
#[must_use]
pub fn shorthand_position(longhand: PropertyId, shorthand: PropertyId) -> Option<usize> {
    shorthands_for_longhand(longhand)
        .iter()
        .position(|id| *id == shorthand)
}
