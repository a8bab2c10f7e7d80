// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial values.
//!
//! Shorthand serialization omits components equal to their longhand's initial
//! value. Most initial values are keywords; the rest are compared by their
//! serialized text.

use crate::{PropertyId, ValueId};

/// The initial value of a longhand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Initial {
    /// A keyword, compared by id.
    Keyword(ValueId),
    /// Anything else, compared by serialized text.
    Text(&'static str),
}

impl Initial {
    /// Returns the serialized form.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Keyword(keyword) => keyword.name(),
            Self::Text(text) => text,
        }
    }
}

impl PropertyId {
    /// Returns the initial value of this longhand.
    ///
    /// `None` for shorthands, custom properties, and longhands whose initial
    /// value depends on the user agent (`color`, `font-family`).
    #[must_use]
    pub const fn initial(self) -> Option<Initial> {
        use Initial::{Keyword, Text};
        use ValueId as K;
        let initial = match self {
            Self::Opacity
            | Self::FillOpacity
            | Self::StrokeOpacity
            | Self::FloodOpacity
            | Self::StopOpacity => Text("1"),
            Self::Display => Keyword(K::Inline),
            Self::Width
            | Self::Height
            | Self::InlineSize
            | Self::BlockSize
            | Self::Top
            | Self::Right
            | Self::Bottom
            | Self::Left
            | Self::InsetBlockStart
            | Self::InsetBlockEnd
            | Self::InsetInlineStart
            | Self::InsetInlineEnd => Keyword(K::Auto),

            Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::MarginBlockStart
            | Self::MarginBlockEnd
            | Self::MarginInlineStart
            | Self::MarginInlineEnd
            | Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::PaddingBlockStart
            | Self::PaddingBlockEnd
            | Self::PaddingInlineStart
            | Self::PaddingInlineEnd
            | Self::BorderTopLeftRadius
            | Self::BorderTopRightRadius
            | Self::BorderBottomRightRadius
            | Self::BorderBottomLeftRadius
            | Self::TextIndent => Text("0px"),

            Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth
            | Self::BorderBlockStartWidth
            | Self::BorderBlockEndWidth
            | Self::BorderInlineStartWidth
            | Self::BorderInlineEndWidth
            | Self::OutlineWidth
            | Self::ColumnRuleWidth => Keyword(K::Medium),
            Self::BorderTopStyle
            | Self::BorderRightStyle
            | Self::BorderBottomStyle
            | Self::BorderLeftStyle
            | Self::BorderBlockStartStyle
            | Self::BorderBlockEndStyle
            | Self::BorderInlineStartStyle
            | Self::BorderInlineEndStyle
            | Self::OutlineStyle
            | Self::ColumnRuleStyle => Keyword(K::None),
            Self::BorderTopColor
            | Self::BorderRightColor
            | Self::BorderBottomColor
            | Self::BorderLeftColor
            | Self::BorderBlockStartColor
            | Self::BorderBlockEndColor
            | Self::BorderInlineStartColor
            | Self::BorderInlineEndColor
            | Self::OutlineColor
            | Self::ColumnRuleColor => Keyword(K::CurrentColor),

            Self::BorderImageSource => Keyword(K::None),
            Self::BorderImageSlice => Text("100%"),
            Self::BorderImageWidth => Text("1"),
            Self::BorderImageOutset => Text("0"),
            Self::BorderImageRepeat => Keyword(K::Stretch),

            Self::BackgroundImage | Self::MaskImage => Keyword(K::None),
            Self::BackgroundPositionX
            | Self::BackgroundPositionY
            | Self::MaskPositionX
            | Self::MaskPositionY => Text("0%"),
            Self::BackgroundSize | Self::MaskSize => Keyword(K::Auto),
            Self::BackgroundRepeat | Self::MaskRepeat => Keyword(K::Repeat),
            Self::BackgroundAttachment => Keyword(K::Scroll),
            Self::BackgroundOrigin => Keyword(K::PaddingBox),
            Self::BackgroundClip | Self::MaskOrigin | Self::MaskClip => Keyword(K::BorderBox),
            Self::BackgroundColor => Keyword(K::Transparent),
            Self::MaskComposite => Keyword(K::Add),
            Self::MaskMode => Keyword(K::MatchSource),

            Self::AnimationDuration
            | Self::AnimationDelay
            | Self::TransitionDuration
            | Self::TransitionDelay => Text("0s"),
            Self::AnimationTimingFunction | Self::TransitionTimingFunction => Keyword(K::Ease),
            Self::AnimationIterationCount => Text("1"),
            Self::AnimationDirection => Keyword(K::Normal),
            Self::AnimationFillMode | Self::AnimationName => Keyword(K::None),
            Self::AnimationPlayState => Keyword(K::Running),
            Self::TransitionProperty => Keyword(K::All),

            Self::FontStyle
            | Self::FontVariantCaps
            | Self::FontWeight
            | Self::FontStretch
            | Self::LineHeight
            | Self::FontVariantLigatures
            | Self::FontVariantPosition
            | Self::FontVariantNumeric
            | Self::FontVariantAlternates
            | Self::FontVariantEastAsian
            | Self::FontFeatureSettings
            | Self::FontVariationSettings => Keyword(K::Normal),
            Self::FontSize => Keyword(K::Medium),
            Self::FontKerning
            | Self::FontSynthesisWeight
            | Self::FontSynthesisStyle
            | Self::FontSynthesisSmallCaps => Keyword(K::Auto),
            Self::FontSizeAdjust => Keyword(K::None),

            Self::ListStylePosition => Keyword(K::Outside),
            Self::ListStyleImage => Keyword(K::None),
            Self::ListStyleType => Keyword(K::Disc),

            Self::FlexGrow => Text("0"),
            Self::FlexShrink => Text("1"),
            Self::FlexBasis => Keyword(K::Auto),
            Self::FlexDirection => Keyword(K::Row),
            Self::FlexWrap => Keyword(K::Nowrap),

            Self::RowGap | Self::ColumnGap => Keyword(K::Normal),
            Self::ColumnWidth | Self::ColumnCount => Keyword(K::Auto),

            Self::OverflowX | Self::OverflowY => Keyword(K::Visible),

            Self::AlignContent | Self::JustifyContent | Self::AlignItems | Self::JustifyItems => {
                Keyword(K::Normal)
            }
            Self::AlignSelf | Self::JustifySelf => Keyword(K::Auto),

            Self::GridRowStart
            | Self::GridColumnStart
            | Self::GridRowEnd
            | Self::GridColumnEnd
            | Self::GridAutoRows
            | Self::GridAutoColumns => Keyword(K::Auto),
            Self::GridTemplateRows | Self::GridTemplateColumns | Self::GridTemplateAreas => {
                Keyword(K::None)
            }
            Self::GridAutoFlow => Keyword(K::Row),

            Self::ContainerName => Keyword(K::None),
            Self::ContainerType => Keyword(K::Normal),

            Self::BreakBefore | Self::BreakAfter | Self::BreakInside => Keyword(K::Auto),

            Self::MarkerStart | Self::MarkerMid | Self::MarkerEnd => Keyword(K::None),

            Self::TextAlign => Keyword(K::Start),
            Self::Orphans | Self::Widows => Text("2"),

            Self::OffsetPosition => Keyword(K::Normal),
            Self::OffsetPath => Keyword(K::None),
            Self::OffsetDistance => Text("0px"),
            Self::OffsetRotate | Self::OffsetAnchor => Keyword(K::Auto),

            Self::BoxShadow | Self::WebkitBoxReflect => Keyword(K::None),
            Self::Clip | Self::InternalTextAutosizingStatus => Keyword(K::Auto),

            _ => return None,
        };
        Some(initial)
    }

    /// Returns the initial keyword of this longhand, if its initial value is a keyword.
    #[must_use]
    #[inline]
    pub const fn initial_keyword(self) -> Option<ValueId> {
        match self.initial() {
            Some(Initial::Keyword(keyword)) => Some(keyword),
            _ => None,
        }
    }

    /// Returns the serialized initial value of this longhand.
    #[must_use]
    #[inline]
    pub const fn initial_text(self) -> Option<&'static str> {
        match self.initial() {
            Some(initial) => Some(initial.text()),
            None => None,
        }
    }
}
