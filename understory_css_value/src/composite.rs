// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-component values with their own serialization rules.

use std::sync::Arc;

use smallvec::SmallVec;
use understory_css_property::{PropertyId, ValueId};

use crate::Value;
use crate::primitive::serialize_string;

/// Folds four box sides into the shortest equivalent 1–4 value text.
///
/// A side is omitted when it equals its opposite (left vs right, bottom vs
/// top), and right is omitted when it equals top and nothing after it is
/// printed.
///
/// ```rust
/// use understory_css_value::fold_box_sides;
///
/// assert_eq!(fold_box_sides("1px", "1px", "1px", "1px"), "1px");
/// assert_eq!(fold_box_sides("1px", "2px", "1px", "2px"), "1px 2px");
/// assert_eq!(fold_box_sides("1px", "2px", "3px", "2px"), "1px 2px 3px");
/// assert_eq!(fold_box_sides("1px", "2px", "3px", "4px"), "1px 2px 3px 4px");
/// ```
#[must_use]
pub fn fold_box_sides(top: &str, right: &str, bottom: &str, left: &str) -> String {
    let show_left = right != left;
    let show_bottom = top != bottom || show_left;
    let show_right = top != right || show_bottom;

    let mut out = String::from(top);
    if show_right {
        out.push(' ');
        out.push_str(right);
    }
    if show_bottom {
        out.push(' ');
        out.push_str(bottom);
    }
    if show_left {
        out.push(' ');
        out.push_str(left);
    }
    out
}

/// `rect(top, right, bottom, left)`, as used by `clip`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    /// Top edge.
    pub top: Value,
    /// Right edge.
    pub right: Value,
    /// Bottom edge.
    pub bottom: Value,
    /// Left edge.
    pub left: Value,
}

impl Rect {
    pub(crate) fn serialize(&self, out: &mut String) {
        out.push_str("rect(");
        self.top.serialize(out);
        out.push_str(", ");
        self.right.serialize(out);
        out.push_str(", ");
        self.bottom.serialize(out);
        out.push_str(", ");
        self.left.serialize(out);
        out.push(')');
    }
}

/// Four box sides that serialize in folded form.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    /// Top side.
    pub top: Value,
    /// Right side.
    pub right: Value,
    /// Bottom side.
    pub bottom: Value,
    /// Left side.
    pub left: Value,
}

impl Quad {
    /// Creates a quad with all four sides equal.
    #[must_use]
    pub fn uniform(value: Value) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    pub(crate) fn serialize(&self, out: &mut String) {
        out.push_str(&fold_box_sides(
            &self.top.css_text(),
            &self.right.css_text(),
            &self.bottom.css_text(),
            &self.left.css_text(),
        ));
    }
}

/// One `box-shadow` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Option<Value>,
    /// Horizontal offset.
    pub x: Option<Value>,
    /// Vertical offset.
    pub y: Option<Value>,
    /// Blur radius.
    pub blur: Option<Value>,
    /// Spread distance.
    pub spread: Option<Value>,
    /// The `inset` keyword.
    pub style: Option<Value>,
}

impl Shadow {
    pub(crate) fn serialize(&self, out: &mut String) {
        let parts = [
            &self.color,
            &self.x,
            &self.y,
            &self.blur,
            &self.spread,
            &self.style,
        ];
        let mut first = true;
        for part in parts.into_iter().flatten() {
            if !first {
                out.push(' ');
            }
            first = false;
            part.serialize(out);
        }
    }
}

/// A `-webkit-box-reflect` value.
#[derive(Clone, Debug, PartialEq)]
pub struct Reflect {
    /// `above`, `below`, `left`, or `right`.
    pub direction: ValueId,
    /// Distance between the box and its reflection.
    pub offset: Value,
    /// Optional mask image.
    pub mask: Option<Value>,
}

impl Reflect {
    pub(crate) fn serialize(&self, out: &mut String) {
        out.push_str(self.direction.name());
        out.push(' ');
        self.offset.serialize(out);
        if let Some(mask) = &self.mask {
            out.push(' ');
            mask.serialize(out);
        }
    }
}

/// A `border-image-slice` value.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderImageSlice {
    /// Slice offsets.
    pub slices: Quad,
    /// The `fill` keyword.
    pub fill: bool,
}

impl BorderImageSlice {
    pub(crate) fn serialize(&self, out: &mut String) {
        self.slices.serialize(out);
        if self.fill {
            out.push_str(" fill");
        }
    }
}

/// A `border-image-width` value.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderImageWidth {
    /// Widths per side.
    pub widths: Quad,
    /// Set by legacy `-webkit-border-image` parsing, where the widths also
    /// replace `border-*-width`. Such values cannot be written back as
    /// `border-image`.
    pub overrides_border_widths: bool,
}

impl BorderImageWidth {
    pub(crate) fn serialize(&self, out: &mut String) {
        self.widths.serialize(out);
    }
}

/// A bracketed list of grid line names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLineNames {
    /// The names, in order.
    pub names: SmallVec<[Arc<str>; 2]>,
}

impl GridLineNames {
    pub(crate) fn serialize(&self, out: &mut String) {
        out.push('[');
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(name);
        }
        out.push(']');
    }
}

/// A `grid-template-areas` value: one string per row.
#[derive(Clone, Debug, PartialEq)]
pub struct GridTemplateAreas {
    /// Row strings, each a space-separated list of area names.
    pub rows: Vec<Arc<str>>,
    /// Number of columns named by every row.
    pub column_count: usize,
}

impl GridTemplateAreas {
    /// Number of rows.
    #[must_use]
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns row `index` as a quoted string.
    #[must_use]
    pub fn string_for_row(&self, index: usize) -> Option<String> {
        let row = self.rows.get(index)?;
        let mut out = String::new();
        serialize_string(&mut out, row);
        Some(out)
    }

    pub(crate) fn serialize(&self, out: &mut String) {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            serialize_string(out, row);
        }
    }
}

/// A longhand whose value is only known once a shorthand's `var()` references
/// are substituted.
///
/// Every longhand of the shorthand holds a copy; the original shorthand text
/// is kept so the shorthand can be written back verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSubstitution {
    shorthand: PropertyId,
    shorthand_value: Value,
}

impl PendingSubstitution {
    /// Creates a pending substitution for `shorthand`.
    #[must_use]
    pub fn new(shorthand: PropertyId, shorthand_value: Value) -> Self {
        debug_assert!(shorthand.is_shorthand(), "pending substitution needs a shorthand");
        Self {
            shorthand,
            shorthand_value,
        }
    }

    /// The shorthand the value was written for.
    #[must_use]
    #[inline]
    pub fn shorthand(&self) -> PropertyId {
        self.shorthand
    }

    /// The unsubstituted shorthand value.
    #[must_use]
    #[inline]
    pub fn shorthand_value(&self) -> &Value {
        &self.shorthand_value
    }
}

/// A custom property's name and raw token text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomPropertyValue {
    name: Arc<str>,
    text: Arc<str>,
}

impl CustomPropertyValue {
    /// Creates a custom property value.
    #[must_use]
    pub fn new(name: &str, text: &str) -> Self {
        debug_assert!(
            understory_css_property::is_custom_property_name(name),
            "custom property names start with --"
        );
        Self {
            name: Arc::from(name),
            text: Arc::from(text),
        }
    }

    /// The `--name`.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value text.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}
