// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property identification.
//!
//! [`PropertyId`] is a dense `u16` enum. Longhands come first, then the single
//! [`PropertyId::Custom`] id shared by every `--*` property, then shorthands.
//! The ordering is part of the contract: [`PropertyId::is_shorthand`] and
//! [`PropertyId::shorthand_index`] are plain range checks.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Static per-property traits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// The property inherits by default.
        const INHERITED = 1 << 0;
        /// Only user-agent sheets may set the property.
        const INTERNAL = 1 << 1;
        /// The property takes one value per background/mask/animation layer.
        const LAYERED = 1 << 2;
        /// Percentages serialize as bare fractions (`50%` reads back as `0.5`).
        const OPACITY_LIKE = 1 << 3;
    }
}

macro_rules! properties {
    (
        longhands { $($long:ident = $long_name:literal,)* }
        shorthands { $($short:ident = $short_name:literal,)* }
    ) => {
        /// Identifies a CSS property.
        ///
        /// # Example
        ///
        /// ```rust
        /// use understory_css_property::PropertyId;
        ///
        /// let id = PropertyId::from_name("Margin-Top").unwrap();
        /// assert_eq!(id, PropertyId::MarginTop);
        /// assert_eq!(id.name(), "margin-top");
        /// assert!(!id.is_shorthand());
        /// assert!(PropertyId::Margin.is_shorthand());
        /// ```
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum PropertyId {
            $(
                #[doc = concat!("`", $long_name, "`")]
                $long,
            )*
            /// Any custom property (`--*`). The name is carried by the value.
            Custom,
            $(
                #[doc = concat!("`", $short_name, "` (shorthand)")]
                $short,
            )*
        }

        impl PropertyId {
            /// Every longhand, in id order.
            pub const LONGHANDS: &'static [Self] = &[$(Self::$long,)*];

            /// Every shorthand, in id order.
            pub const SHORTHANDS: &'static [Self] = &[$(Self::$short,)*];

            /// Returns the CSS name of this property.
            ///
            /// [`PropertyId::Custom`] has no single name and returns `"--"`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$long => $long_name,)*
                    Self::Custom => "--",
                    $(Self::$short => $short_name,)*
                }
            }
        }
    };
}

properties! {
    longhands {
        Color = "color",
        Opacity = "opacity",
        FillOpacity = "fill-opacity",
        StrokeOpacity = "stroke-opacity",
        FloodOpacity = "flood-opacity",
        StopOpacity = "stop-opacity",
        Display = "display",
        Width = "width",
        Height = "height",
        InlineSize = "inline-size",
        BlockSize = "block-size",

        MarginTop = "margin-top",
        MarginRight = "margin-right",
        MarginBottom = "margin-bottom",
        MarginLeft = "margin-left",
        MarginBlockStart = "margin-block-start",
        MarginBlockEnd = "margin-block-end",
        MarginInlineStart = "margin-inline-start",
        MarginInlineEnd = "margin-inline-end",

        PaddingTop = "padding-top",
        PaddingRight = "padding-right",
        PaddingBottom = "padding-bottom",
        PaddingLeft = "padding-left",
        PaddingBlockStart = "padding-block-start",
        PaddingBlockEnd = "padding-block-end",
        PaddingInlineStart = "padding-inline-start",
        PaddingInlineEnd = "padding-inline-end",

        Top = "top",
        Right = "right",
        Bottom = "bottom",
        Left = "left",
        InsetBlockStart = "inset-block-start",
        InsetBlockEnd = "inset-block-end",
        InsetInlineStart = "inset-inline-start",
        InsetInlineEnd = "inset-inline-end",

        BorderTopWidth = "border-top-width",
        BorderRightWidth = "border-right-width",
        BorderBottomWidth = "border-bottom-width",
        BorderLeftWidth = "border-left-width",
        BorderTopStyle = "border-top-style",
        BorderRightStyle = "border-right-style",
        BorderBottomStyle = "border-bottom-style",
        BorderLeftStyle = "border-left-style",
        BorderTopColor = "border-top-color",
        BorderRightColor = "border-right-color",
        BorderBottomColor = "border-bottom-color",
        BorderLeftColor = "border-left-color",
        BorderBlockStartWidth = "border-block-start-width",
        BorderBlockEndWidth = "border-block-end-width",
        BorderInlineStartWidth = "border-inline-start-width",
        BorderInlineEndWidth = "border-inline-end-width",
        BorderBlockStartStyle = "border-block-start-style",
        BorderBlockEndStyle = "border-block-end-style",
        BorderInlineStartStyle = "border-inline-start-style",
        BorderInlineEndStyle = "border-inline-end-style",
        BorderBlockStartColor = "border-block-start-color",
        BorderBlockEndColor = "border-block-end-color",
        BorderInlineStartColor = "border-inline-start-color",
        BorderInlineEndColor = "border-inline-end-color",

        BorderTopLeftRadius = "border-top-left-radius",
        BorderTopRightRadius = "border-top-right-radius",
        BorderBottomRightRadius = "border-bottom-right-radius",
        BorderBottomLeftRadius = "border-bottom-left-radius",

        BorderImageSource = "border-image-source",
        BorderImageSlice = "border-image-slice",
        BorderImageWidth = "border-image-width",
        BorderImageOutset = "border-image-outset",
        BorderImageRepeat = "border-image-repeat",

        OutlineColor = "outline-color",
        OutlineStyle = "outline-style",
        OutlineWidth = "outline-width",

        BackgroundImage = "background-image",
        BackgroundPositionX = "background-position-x",
        BackgroundPositionY = "background-position-y",
        BackgroundSize = "background-size",
        BackgroundRepeat = "background-repeat",
        BackgroundAttachment = "background-attachment",
        BackgroundOrigin = "background-origin",
        BackgroundClip = "background-clip",
        BackgroundColor = "background-color",

        MaskImage = "mask-image",
        MaskPositionX = "mask-position-x",
        MaskPositionY = "mask-position-y",
        MaskSize = "mask-size",
        MaskRepeat = "mask-repeat",
        MaskOrigin = "mask-origin",
        MaskClip = "mask-clip",
        MaskComposite = "mask-composite",
        MaskMode = "mask-mode",

        AnimationDuration = "animation-duration",
        AnimationTimingFunction = "animation-timing-function",
        AnimationDelay = "animation-delay",
        AnimationIterationCount = "animation-iteration-count",
        AnimationDirection = "animation-direction",
        AnimationFillMode = "animation-fill-mode",
        AnimationPlayState = "animation-play-state",
        AnimationName = "animation-name",

        TransitionProperty = "transition-property",
        TransitionDuration = "transition-duration",
        TransitionTimingFunction = "transition-timing-function",
        TransitionDelay = "transition-delay",

        FontStyle = "font-style",
        FontVariantCaps = "font-variant-caps",
        FontWeight = "font-weight",
        FontStretch = "font-stretch",
        FontSize = "font-size",
        LineHeight = "line-height",
        FontFamily = "font-family",
        FontVariantLigatures = "font-variant-ligatures",
        FontVariantPosition = "font-variant-position",
        FontVariantNumeric = "font-variant-numeric",
        FontVariantAlternates = "font-variant-alternates",
        FontVariantEastAsian = "font-variant-east-asian",
        FontKerning = "font-kerning",
        FontSizeAdjust = "font-size-adjust",
        FontFeatureSettings = "font-feature-settings",
        FontVariationSettings = "font-variation-settings",
        FontSynthesisWeight = "font-synthesis-weight",
        FontSynthesisStyle = "font-synthesis-style",
        FontSynthesisSmallCaps = "font-synthesis-small-caps",

        ListStylePosition = "list-style-position",
        ListStyleImage = "list-style-image",
        ListStyleType = "list-style-type",

        FlexGrow = "flex-grow",
        FlexShrink = "flex-shrink",
        FlexBasis = "flex-basis",
        FlexDirection = "flex-direction",
        FlexWrap = "flex-wrap",

        RowGap = "row-gap",
        ColumnGap = "column-gap",
        ColumnWidth = "column-width",
        ColumnCount = "column-count",
        ColumnRuleWidth = "column-rule-width",
        ColumnRuleStyle = "column-rule-style",
        ColumnRuleColor = "column-rule-color",

        OverflowX = "overflow-x",
        OverflowY = "overflow-y",

        AlignContent = "align-content",
        JustifyContent = "justify-content",
        AlignItems = "align-items",
        JustifyItems = "justify-items",
        AlignSelf = "align-self",
        JustifySelf = "justify-self",

        GridRowStart = "grid-row-start",
        GridColumnStart = "grid-column-start",
        GridRowEnd = "grid-row-end",
        GridColumnEnd = "grid-column-end",
        GridTemplateRows = "grid-template-rows",
        GridTemplateColumns = "grid-template-columns",
        GridTemplateAreas = "grid-template-areas",
        GridAutoRows = "grid-auto-rows",
        GridAutoColumns = "grid-auto-columns",
        GridAutoFlow = "grid-auto-flow",

        ContainerName = "container-name",
        ContainerType = "container-type",

        BreakBefore = "break-before",
        BreakAfter = "break-after",
        BreakInside = "break-inside",

        MarkerStart = "marker-start",
        MarkerMid = "marker-mid",
        MarkerEnd = "marker-end",

        TextAlign = "text-align",
        TextIndent = "text-indent",
        Orphans = "orphans",
        Widows = "widows",

        OffsetPosition = "offset-position",
        OffsetPath = "offset-path",
        OffsetDistance = "offset-distance",
        OffsetRotate = "offset-rotate",
        OffsetAnchor = "offset-anchor",

        BoxShadow = "box-shadow",
        Clip = "clip",
        WebkitBoxReflect = "-webkit-box-reflect",
        InternalTextAutosizingStatus = "-internal-text-autosizing-status",
    }
    shorthands {
        All = "all",
        Animation = "animation",
        Background = "background",
        BackgroundPosition = "background-position",
        Border = "border",
        BorderBlock = "border-block",
        BorderBlockColor = "border-block-color",
        BorderBlockEnd = "border-block-end",
        BorderBlockStart = "border-block-start",
        BorderBlockStyle = "border-block-style",
        BorderBlockWidth = "border-block-width",
        BorderBottom = "border-bottom",
        BorderColor = "border-color",
        BorderImage = "border-image",
        BorderInline = "border-inline",
        BorderInlineColor = "border-inline-color",
        BorderInlineEnd = "border-inline-end",
        BorderInlineStart = "border-inline-start",
        BorderInlineStyle = "border-inline-style",
        BorderInlineWidth = "border-inline-width",
        BorderLeft = "border-left",
        BorderRadius = "border-radius",
        BorderRight = "border-right",
        BorderStyle = "border-style",
        BorderTop = "border-top",
        BorderWidth = "border-width",
        ColumnRule = "column-rule",
        Columns = "columns",
        Container = "container",
        Flex = "flex",
        FlexFlow = "flex-flow",
        Font = "font",
        FontSynthesis = "font-synthesis",
        FontVariant = "font-variant",
        Gap = "gap",
        Grid = "grid",
        GridArea = "grid-area",
        GridColumn = "grid-column",
        GridRow = "grid-row",
        GridTemplate = "grid-template",
        Inset = "inset",
        InsetBlock = "inset-block",
        InsetInline = "inset-inline",
        ListStyle = "list-style",
        Margin = "margin",
        MarginBlock = "margin-block",
        MarginInline = "margin-inline",
        Marker = "marker",
        Mask = "mask",
        MaskPosition = "mask-position",
        Offset = "offset",
        Outline = "outline",
        Overflow = "overflow",
        Padding = "padding",
        PaddingBlock = "padding-block",
        PaddingInline = "padding-inline",
        PageBreakAfter = "page-break-after",
        PageBreakBefore = "page-break-before",
        PageBreakInside = "page-break-inside",
        PlaceContent = "place-content",
        PlaceItems = "place-items",
        PlaceSelf = "place-self",
        Transition = "transition",
        WebkitColumnBreakAfter = "-webkit-column-break-after",
        WebkitColumnBreakBefore = "-webkit-column-break-before",
        WebkitColumnBreakInside = "-webkit-column-break-inside",
    }
}

impl PropertyId {
    /// Total number of ids, including [`PropertyId::Custom`].
    pub const COUNT: usize = Self::LONGHANDS.len() + 1 + Self::SHORTHANDS.len();

    /// Returns the dense index of this id.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self as u16
    }

    /// Looks up an id by its dense index.
    #[must_use]
    pub fn from_index(index: u16) -> Option<Self> {
        let index = usize::from(index);
        let longhands = Self::LONGHANDS.len();
        if index < longhands {
            Some(Self::LONGHANDS[index])
        } else if index == longhands {
            Some(Self::Custom)
        } else {
            Self::SHORTHANDS.get(index - longhands - 1).copied()
        }
    }

    /// Looks up a property by name, ignoring ASCII case.
    ///
    /// Any `--*` name maps to [`PropertyId::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if is_custom_property_name(name) {
            return Some(Self::Custom);
        }
        Self::LONGHANDS
            .iter()
            .chain(Self::SHORTHANDS)
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Returns `true` if this id expands to longhands.
    #[must_use]
    #[inline]
    pub const fn is_shorthand(self) -> bool {
        self as u16 > Self::Custom as u16
    }

    /// Returns `true` for real longhands (not shorthands, not [`PropertyId::Custom`]).
    #[must_use]
    #[inline]
    pub const fn is_longhand(self) -> bool {
        (self as u16) < Self::Custom as u16
    }

    /// Returns the position of this shorthand within [`PropertyId::SHORTHANDS`].
    ///
    /// Whole-block serialization keys its used/appeared sets by this index.
    #[must_use]
    #[inline]
    pub const fn shorthand_index(self) -> Option<usize> {
        if self.is_shorthand() {
            Some((self as u16 - Self::Custom as u16 - 1) as usize)
        } else {
            None
        }
    }

    /// Returns the static traits of this property.
    #[must_use]
    pub const fn flags(self) -> PropertyFlags {
        match self {
            Self::FillOpacity | Self::StrokeOpacity => {
                PropertyFlags::INHERITED.union(PropertyFlags::OPACITY_LIKE)
            }
            Self::Color
            | Self::FontStyle
            | Self::FontVariantCaps
            | Self::FontWeight
            | Self::FontStretch
            | Self::FontSize
            | Self::LineHeight
            | Self::FontFamily
            | Self::FontVariantLigatures
            | Self::FontVariantPosition
            | Self::FontVariantNumeric
            | Self::FontVariantAlternates
            | Self::FontVariantEastAsian
            | Self::FontKerning
            | Self::FontSizeAdjust
            | Self::FontFeatureSettings
            | Self::FontVariationSettings
            | Self::FontSynthesisWeight
            | Self::FontSynthesisStyle
            | Self::FontSynthesisSmallCaps
            | Self::ListStylePosition
            | Self::ListStyleImage
            | Self::ListStyleType
            | Self::TextAlign
            | Self::TextIndent
            | Self::Orphans
            | Self::Widows
            | Self::MarkerStart
            | Self::MarkerMid
            | Self::MarkerEnd => PropertyFlags::INHERITED,
            Self::Opacity | Self::FloodOpacity | Self::StopOpacity => PropertyFlags::OPACITY_LIKE,
            Self::BackgroundImage
            | Self::BackgroundPositionX
            | Self::BackgroundPositionY
            | Self::BackgroundSize
            | Self::BackgroundRepeat
            | Self::BackgroundAttachment
            | Self::BackgroundOrigin
            | Self::BackgroundClip
            | Self::MaskImage
            | Self::MaskPositionX
            | Self::MaskPositionY
            | Self::MaskSize
            | Self::MaskRepeat
            | Self::MaskOrigin
            | Self::MaskClip
            | Self::MaskComposite
            | Self::MaskMode
            | Self::AnimationDuration
            | Self::AnimationTimingFunction
            | Self::AnimationDelay
            | Self::AnimationIterationCount
            | Self::AnimationDirection
            | Self::AnimationFillMode
            | Self::AnimationPlayState
            | Self::AnimationName
            | Self::TransitionProperty
            | Self::TransitionDuration
            | Self::TransitionTimingFunction
            | Self::TransitionDelay => PropertyFlags::LAYERED,
            Self::InternalTextAutosizingStatus => PropertyFlags::INTERNAL,
            _ => PropertyFlags::empty(),
        }
    }

    /// Returns `true` if the property inherits by default.
    #[must_use]
    #[inline]
    pub const fn is_inherited(self) -> bool {
        self.flags().contains(PropertyFlags::INHERITED)
    }

    /// Returns `true` if only user-agent sheets may set the property.
    #[must_use]
    #[inline]
    pub const fn is_internal(self) -> bool {
        self.flags().contains(PropertyFlags::INTERNAL)
    }

    /// Returns `true` if percentages serialize as bare fractions.
    #[must_use]
    #[inline]
    pub const fn is_opacity_like(self) -> bool {
        self.flags().contains(PropertyFlags::OPACITY_LIKE)
    }
}

/// Returns `true` for `--*` names with at least one character after the dashes.
#[must_use]
pub fn is_custom_property_name(name: &str) -> bool {
    name.len() > 2 && name.starts_with("--")
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyId").field(&self.name()).finish()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_ordered() {
        assert_eq!(PropertyId::Color.index(), 0);
        assert_eq!(
            usize::from(PropertyId::Custom.index()),
            PropertyId::LONGHANDS.len()
        );
        for (i, id) in PropertyId::SHORTHANDS.iter().enumerate() {
            assert_eq!(id.shorthand_index(), Some(i));
            assert!(id.is_shorthand());
            assert!(!id.is_longhand());
        }
        for id in PropertyId::LONGHANDS {
            assert!(id.is_longhand());
            assert_eq!(id.shorthand_index(), None);
        }
    }

    #[test]
    fn from_index_round_trips() {
        for index in 0..PropertyId::COUNT {
            let index = u16::try_from(index).unwrap();
            assert_eq!(PropertyId::from_index(index).unwrap().index(), index);
        }
        let past_end = u16::try_from(PropertyId::COUNT).unwrap();
        assert_eq!(PropertyId::from_index(past_end), None);
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(
            PropertyId::from_name("BACKGROUND-color"),
            Some(PropertyId::BackgroundColor)
        );
        assert_eq!(
            PropertyId::from_name("-webkit-column-break-after"),
            Some(PropertyId::WebkitColumnBreakAfter)
        );
        assert_eq!(PropertyId::from_name("--accent"), Some(PropertyId::Custom));
        assert_eq!(PropertyId::from_name("--"), None);
        assert_eq!(PropertyId::from_name("no-such-property"), None);
    }

    #[test]
    fn flags() {
        assert!(PropertyId::Color.is_inherited());
        assert!(!PropertyId::MarginTop.is_inherited());
        assert!(PropertyId::FillOpacity.is_inherited());
        assert!(PropertyId::FillOpacity.is_opacity_like());
        assert!(PropertyId::Opacity.is_opacity_like());
        assert!(!PropertyId::Opacity.is_inherited());
        assert!(PropertyId::InternalTextAutosizingStatus.is_internal());
        assert!(PropertyId::BackgroundClip.flags().contains(PropertyFlags::LAYERED));
    }
}
