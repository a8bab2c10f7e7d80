// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical property groups.
//!
//! A physical longhand (`margin-top`) and a logical longhand
//! (`margin-block-start`) may resolve to the same box edge depending on the
//! writing mode. Such pairs share a [`LogicalGroup`] but differ in
//! [`MappingLogic`], and their relative order in a declaration block decides
//! which one wins.

use crate::PropertyId;

/// A family of longhands whose members may alias depending on writing mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalGroup {
    /// `margin-*`
    Margin,
    /// `padding-*`
    Padding,
    /// `top`/`right`/`bottom`/`left` and `inset-*`
    Inset,
    /// `border-*-width`
    BorderWidth,
    /// `border-*-style`
    BorderStyle,
    /// `border-*-color`
    BorderColor,
    /// `width`/`height` and `inline-size`/`block-size`
    Size,
}

/// Whether a longhand names a physical side or a flow-relative one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MappingLogic {
    /// `top`, `right`, `bottom`, `left`, `width`, `height`.
    Physical,
    /// `block-start`, `inline-end`, `inline-size`, ...
    Logical,
}

impl PropertyId {
    /// Returns the logical group and mapping logic of this longhand, if any.
    #[must_use]
    pub const fn logical_group(self) -> Option<(LogicalGroup, MappingLogic)> {
        use LogicalGroup as G;
        use MappingLogic::{Logical, Physical};
        let entry = match self {
            Self::MarginTop | Self::MarginRight | Self::MarginBottom | Self::MarginLeft => {
                (G::Margin, Physical)
            }
            Self::MarginBlockStart
            | Self::MarginBlockEnd
            | Self::MarginInlineStart
            | Self::MarginInlineEnd => (G::Margin, Logical),
            Self::PaddingTop | Self::PaddingRight | Self::PaddingBottom | Self::PaddingLeft => {
                (G::Padding, Physical)
            }
            Self::PaddingBlockStart
            | Self::PaddingBlockEnd
            | Self::PaddingInlineStart
            | Self::PaddingInlineEnd => (G::Padding, Logical),
            Self::Top | Self::Right | Self::Bottom | Self::Left => (G::Inset, Physical),
            Self::InsetBlockStart
            | Self::InsetBlockEnd
            | Self::InsetInlineStart
            | Self::InsetInlineEnd => (G::Inset, Logical),
            Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth => (G::BorderWidth, Physical),
            Self::BorderBlockStartWidth
            | Self::BorderBlockEndWidth
            | Self::BorderInlineStartWidth
            | Self::BorderInlineEndWidth => (G::BorderWidth, Logical),
            Self::BorderTopStyle
            | Self::BorderRightStyle
            | Self::BorderBottomStyle
            | Self::BorderLeftStyle => (G::BorderStyle, Physical),
            Self::BorderBlockStartStyle
            | Self::BorderBlockEndStyle
            | Self::BorderInlineStartStyle
            | Self::BorderInlineEndStyle => (G::BorderStyle, Logical),
            Self::BorderTopColor
            | Self::BorderRightColor
            | Self::BorderBottomColor
            | Self::BorderLeftColor => (G::BorderColor, Physical),
            Self::BorderBlockStartColor
            | Self::BorderBlockEndColor
            | Self::BorderInlineStartColor
            | Self::BorderInlineEndColor => (G::BorderColor, Logical),
            Self::Width | Self::Height => (G::Size, Physical),
            Self::InlineSize | Self::BlockSize => (G::Size, Logical),
            _ => return None,
        };
        Some(entry)
    }
}

/// Returns `true` when both longhands belong to the same logical group but one
/// is physical and the other flow-relative.
///
/// ```rust
/// use understory_css_property::{
///     PropertyId, are_in_same_logical_group_with_different_mapping_logic,
/// };
///
/// assert!(are_in_same_logical_group_with_different_mapping_logic(
///     PropertyId::MarginTop,
///     PropertyId::MarginBlockStart,
/// ));
/// assert!(!are_in_same_logical_group_with_different_mapping_logic(
///     PropertyId::MarginTop,
///     PropertyId::MarginLeft,
/// ));
/// ```
#[must_use]
pub fn are_in_same_logical_group_with_different_mapping_logic(
    a: PropertyId,
    b: PropertyId,
) -> bool {
    match (a.logical_group(), b.logical_group()) {
        (Some((group_a, logic_a)), Some((group_b, logic_b))) => {
            group_a == group_b && logic_a != logic_b
        }
        _ => false,
    }
}
