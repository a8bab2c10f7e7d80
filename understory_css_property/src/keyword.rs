// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword identification.

use core::fmt;

macro_rules! keywords {
    ($($variant:ident = $name:literal,)*) => {
        /// Identifies a CSS keyword value.
        ///
        /// # Example
        ///
        /// ```rust
        /// use understory_css_property::ValueId;
        ///
        /// assert_eq!(ValueId::from_name("Ease-In-Out"), Some(ValueId::EaseInOut));
        /// assert_eq!(ValueId::CurrentColor.name(), "currentcolor");
        /// assert!(ValueId::RevertLayer.is_css_wide());
        /// ```
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum ValueId {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl ValueId {
            /// Every keyword, in id order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the CSS spelling of this keyword.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

keywords! {
    Inherit = "inherit",
    Initial = "initial",
    Unset = "unset",
    Revert = "revert",
    RevertLayer = "revert-layer",

    Auto = "auto",
    None = "none",
    Normal = "normal",
    All = "all",
    Medium = "medium",
    Thin = "thin",
    Thick = "thick",

    CurrentColor = "currentcolor",
    Transparent = "transparent",
    Black = "black",
    White = "white",
    Red = "red",
    Green = "green",
    Blue = "blue",
    Yellow = "yellow",
    Gray = "gray",
    Orange = "orange",

    Center = "center",
    Left = "left",
    Right = "right",
    Top = "top",
    Bottom = "bottom",
    Start = "start",
    End = "end",

    Solid = "solid",
    Dotted = "dotted",
    Dashed = "dashed",
    Double = "double",
    Hidden = "hidden",
    Groove = "groove",
    Ridge = "ridge",
    Inset = "inset",
    Outset = "outset",

    Visible = "visible",
    Scroll = "scroll",
    Clip = "clip",
    Fixed = "fixed",
    Local = "local",

    Repeat = "repeat",
    RepeatX = "repeat-x",
    RepeatY = "repeat-y",
    NoRepeat = "no-repeat",
    Space = "space",
    Round = "round",
    Stretch = "stretch",

    BorderBox = "border-box",
    PaddingBox = "padding-box",
    ContentBox = "content-box",
    Text = "text",
    NoClip = "no-clip",
    Cover = "cover",
    Contain = "contain",

    Add = "add",
    Subtract = "subtract",
    Intersect = "intersect",
    Exclude = "exclude",
    MatchSource = "match-source",
    Alpha = "alpha",
    Luminance = "luminance",

    Ease = "ease",
    EaseIn = "ease-in",
    EaseOut = "ease-out",
    EaseInOut = "ease-in-out",
    Linear = "linear",
    StepStart = "step-start",
    StepEnd = "step-end",
    Infinite = "infinite",
    Reverse = "reverse",
    Alternate = "alternate",
    AlternateReverse = "alternate-reverse",
    Forwards = "forwards",
    Backwards = "backwards",
    Both = "both",
    Running = "running",
    Paused = "paused",

    Italic = "italic",
    Oblique = "oblique",
    Bold = "bold",
    Bolder = "bolder",
    Lighter = "lighter",
    SmallCaps = "small-caps",
    AllSmallCaps = "all-small-caps",
    PetiteCaps = "petite-caps",
    UltraCondensed = "ultra-condensed",
    ExtraCondensed = "extra-condensed",
    Condensed = "condensed",
    SemiCondensed = "semi-condensed",
    SemiExpanded = "semi-expanded",
    Expanded = "expanded",
    ExtraExpanded = "extra-expanded",
    UltraExpanded = "ultra-expanded",
    Caption = "caption",
    Icon = "icon",
    Menu = "menu",
    MessageBox = "message-box",
    SmallCaption = "small-caption",
    StatusBar = "status-bar",
    Weight = "weight",
    Style = "style",
    CommonLigatures = "common-ligatures",
    NoCommonLigatures = "no-common-ligatures",
    Sub = "sub",
    Super = "super",
    LiningNums = "lining-nums",
    OldstyleNums = "oldstyle-nums",
    TabularNums = "tabular-nums",
    HistoricalForms = "historical-forms",
    Ruby = "ruby",
    FullWidth = "full-width",
    Jis78 = "jis78",

    Inside = "inside",
    Outside = "outside",
    Disc = "disc",
    Circle = "circle",
    Square = "square",
    Decimal = "decimal",

    Row = "row",
    RowReverse = "row-reverse",
    Column = "column",
    ColumnReverse = "column-reverse",
    Nowrap = "nowrap",
    Wrap = "wrap",
    WrapReverse = "wrap-reverse",
    Dense = "dense",
    FlexStart = "flex-start",
    FlexEnd = "flex-end",
    Baseline = "baseline",
    SpaceBetween = "space-between",
    SpaceAround = "space-around",
    SpaceEvenly = "space-evenly",
    Span = "span",

    Size = "size",
    InlineSize = "inline-size",

    Page = "page",
    Always = "always",
    Avoid = "avoid",
    AvoidPage = "avoid-page",
    AvoidColumn = "avoid-column",
    Recto = "recto",
    Verso = "verso",

    Block = "block",
    Inline = "inline",
    InlineBlock = "inline-block",
    Flex = "flex",
    Grid = "grid",
    Contents = "contents",
}

impl ValueId {
    /// Looks up a keyword by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Returns the dense index of this keyword.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self as u16
    }

    /// Returns `true` for `inherit`, `initial`, `unset`, `revert`, and `revert-layer`.
    #[must_use]
    #[inline]
    pub const fn is_css_wide(self) -> bool {
        matches!(
            self,
            Self::Inherit | Self::Initial | Self::Unset | Self::Revert | Self::RevertLayer
        )
    }

    /// Returns `true` for the system font keywords accepted by `font`.
    #[must_use]
    #[inline]
    pub const fn is_system_font(self) -> bool {
        matches!(
            self,
            Self::Caption
                | Self::Icon
                | Self::Menu
                | Self::MessageBox
                | Self::SmallCaption
                | Self::StatusBar
        )
    }

    /// Returns `true` for the `font-stretch` keywords.
    #[must_use]
    #[inline]
    pub const fn is_font_stretch(self) -> bool {
        matches!(
            self,
            Self::UltraCondensed
                | Self::ExtraCondensed
                | Self::Condensed
                | Self::SemiCondensed
                | Self::Normal
                | Self::SemiExpanded
                | Self::Expanded
                | Self::ExtraExpanded
                | Self::UltraExpanded
        )
    }

    /// Maps a `font-stretch` percentage onto its keyword, if one names it exactly.
    #[must_use]
    pub fn font_stretch_for_percentage(percentage: f32) -> Option<Self> {
        const TABLE: [(f32, ValueId); 9] = [
            (50.0, ValueId::UltraCondensed),
            (62.5, ValueId::ExtraCondensed),
            (75.0, ValueId::Condensed),
            (87.5, ValueId::SemiCondensed),
            (100.0, ValueId::Normal),
            (112.5, ValueId::SemiExpanded),
            (125.0, ValueId::Expanded),
            (150.0, ValueId::ExtraExpanded),
            (200.0, ValueId::UltraExpanded),
        ];
        TABLE
            .iter()
            .find(|(value, _)| *value == percentage)
            .map(|(_, keyword)| *keyword)
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueId").field(&self.name()).finish()
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
