// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value node.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use understory_css_property::{Initial, PropertyId, ValueId};

use crate::composite::{
    BorderImageSlice, BorderImageWidth, CustomPropertyValue, GridLineNames, GridTemplateAreas,
    PendingSubstitution, Quad, Rect, Reflect, Shadow,
};
use crate::primitive::{Primitive, Unit};
use crate::Color;

/// How the items of a [`ValueList`] are joined.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `a b`
    Space,
    /// `a, b`
    Comma,
    /// `a / b`
    Slash,
}

impl Separator {
    /// Returns the text placed between items.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
            Self::Slash => " / ",
        }
    }
}

/// An ordered list of values.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueList {
    separator: Separator,
    items: SmallVec<[Value; 4]>,
}

impl ValueList {
    /// Creates a list.
    #[must_use]
    pub fn new(separator: Separator, items: impl IntoIterator<Item = Value>) -> Self {
        Self {
            separator,
            items: items.into_iter().collect(),
        }
    }

    /// The separator.
    #[must_use]
    #[inline]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Number of items.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list has no items.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns item `index`.
    #[must_use]
    #[inline]
    pub fn item(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// The items as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Iterates over the items.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub(crate) fn serialize(&self, out: &mut String) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(self.separator.as_str());
            }
            item.serialize(out);
        }
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Every shape a [`Value`] can take.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    /// A single token or pair.
    Primitive(Primitive),
    /// A separated list.
    List(ValueList),
    /// `rect(...)`
    Rect(Rect),
    /// Four box sides.
    Quad(Quad),
    /// One `box-shadow` layer.
    Shadow(Shadow),
    /// `-webkit-box-reflect`
    Reflect(Reflect),
    /// `border-image-slice`
    BorderImageSlice(BorderImageSlice),
    /// `border-image-width`
    BorderImageWidth(BorderImageWidth),
    /// `[name ...]`
    GridLineNames(GridLineNames),
    /// `grid-template-areas`
    GridTemplateAreas(GridTemplateAreas),
    /// A shorthand value waiting on `var()` substitution.
    PendingSubstitution(PendingSubstitution),
    /// A custom property's name and text.
    CustomProperty(CustomPropertyValue),
    /// Longhand text containing `var()`.
    VariableReference(Arc<str>),
    /// The stand-in a shorthand writes for an omitted component.
    ///
    /// Prints as nothing on its own; declaration blocks substitute the
    /// longhand's initial text.
    InitialPlaceholder,
}

/// An immutable, cheaply cloned CSS value.
///
/// Cloning shares the node. Equality is structural, with an identity fast
/// path, so interned and freshly built values compare equal.
///
/// # Example
///
/// ```rust
/// use understory_css_value::{Separator, Value};
/// use understory_css_property::ValueId;
///
/// let layers = Value::list(
///     Separator::Comma,
///     [Value::keyword(ValueId::Repeat), Value::keyword(ValueId::NoRepeat)],
/// );
/// assert_eq!(layers.css_text(), "repeat, no-repeat");
/// assert_eq!(Value::px(10.0), Value::px(10.0));
/// ```
#[derive(Clone)]
pub struct Value(Arc<ValueKind>);

impl Value {
    /// Wraps a node.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self(Arc::new(kind))
    }

    /// Returns the node.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ValueKind {
        &self.0
    }

    /// Returns `true` when both handles share one node.
    #[must_use]
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    // ==================== Constructors ====================

    fn primitive(primitive: Primitive) -> Self {
        Self::new(ValueKind::Primitive(primitive))
    }

    /// A unitless number.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::primitive(Primitive::Number(value))
    }

    /// An integer.
    #[must_use]
    pub fn integer(value: i32) -> Self {
        Self::primitive(Primitive::Integer(value))
    }

    /// A percentage.
    #[must_use]
    pub fn percentage(value: f64) -> Self {
        Self::primitive(Primitive::Percentage(value))
    }

    /// A length in `px`.
    #[must_use]
    pub fn px(value: f64) -> Self {
        Self::dimension(value, Unit::Px)
    }

    /// A number with a unit.
    #[must_use]
    pub fn dimension(value: f64, unit: Unit) -> Self {
        Self::primitive(Primitive::Dimension(value, unit))
    }

    /// A keyword. Prefer [`crate::identifier`] to share the node.
    #[must_use]
    pub fn keyword(keyword: ValueId) -> Self {
        Self::primitive(Primitive::Keyword(keyword))
    }

    /// An author-defined identifier.
    #[must_use]
    pub fn custom_ident(ident: &str) -> Self {
        Self::primitive(Primitive::CustomIdent(Arc::from(ident)))
    }

    /// A quoted string.
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self::primitive(Primitive::String(Arc::from(text)))
    }

    /// A `url()`.
    #[must_use]
    pub fn url(url: &str) -> Self {
        Self::primitive(Primitive::Url(Arc::from(url)))
    }

    /// A color. Prefer [`crate::color`] to share the node.
    #[must_use]
    pub fn color(color: Color) -> Self {
        Self::primitive(Primitive::Color(color))
    }

    /// A `font-family` entry. Prefer [`crate::font_family`] to share the node.
    #[must_use]
    pub fn font_family(family: &str) -> Self {
        Self::primitive(Primitive::FontFamily(Arc::from(family)))
    }

    /// A pair of values.
    #[must_use]
    pub fn pair(first: Self, second: Self) -> Self {
        Self::primitive(Primitive::Pair(first, second))
    }

    /// A list of values.
    #[must_use]
    pub fn list(separator: Separator, items: impl IntoIterator<Item = Self>) -> Self {
        Self::new(ValueKind::List(ValueList::new(separator, items)))
    }

    /// A custom property value.
    #[must_use]
    pub fn custom_property(name: &str, text: &str) -> Self {
        Self::new(ValueKind::CustomProperty(CustomPropertyValue::new(name, text)))
    }

    /// Longhand text containing `var()`.
    #[must_use]
    pub fn variable_reference(text: &str) -> Self {
        Self::new(ValueKind::VariableReference(Arc::from(text)))
    }

    /// A shorthand value pending `var()` substitution.
    #[must_use]
    pub fn pending_substitution(shorthand: PropertyId, shorthand_value: Self) -> Self {
        Self::new(ValueKind::PendingSubstitution(PendingSubstitution::new(
            shorthand,
            shorthand_value,
        )))
    }

    // ==================== Serialization ====================

    /// Appends the CSS text of this value.
    pub fn serialize(&self, out: &mut String) {
        match self.kind() {
            ValueKind::Primitive(primitive) => primitive.serialize(out),
            ValueKind::List(list) => list.serialize(out),
            ValueKind::Rect(rect) => rect.serialize(out),
            ValueKind::Quad(quad) => quad.serialize(out),
            ValueKind::Shadow(shadow) => shadow.serialize(out),
            ValueKind::Reflect(reflect) => reflect.serialize(out),
            ValueKind::BorderImageSlice(slice) => slice.serialize(out),
            ValueKind::BorderImageWidth(width) => width.serialize(out),
            ValueKind::GridLineNames(names) => names.serialize(out),
            ValueKind::GridTemplateAreas(areas) => areas.serialize(out),
            ValueKind::CustomProperty(custom) => out.push_str(custom.text()),
            ValueKind::VariableReference(text) => out.push_str(text),
            ValueKind::PendingSubstitution(_) | ValueKind::InitialPlaceholder => {}
        }
    }

    /// Returns the CSS text of this value.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        self.serialize(&mut out);
        out
    }

    // ==================== Queries ====================

    /// Returns the primitive, if this is one.
    #[must_use]
    #[inline]
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self.kind() {
            ValueKind::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    /// Returns the keyword, if this is one.
    #[must_use]
    #[inline]
    pub fn keyword_id(&self) -> Option<ValueId> {
        match self.as_primitive() {
            Some(Primitive::Keyword(keyword)) => Some(*keyword),
            _ => None,
        }
    }

    /// Returns `true` if this is `keyword`.
    #[must_use]
    #[inline]
    pub fn is_keyword(&self, keyword: ValueId) -> bool {
        self.keyword_id() == Some(keyword)
    }

    /// Like [`Value::is_keyword`], but a one-item list of `keyword` also matches.
    #[must_use]
    pub fn is_keyword_including_list(&self, keyword: ValueId) -> bool {
        match self.as_list() {
            Some(list) if list.len() == 1 => {
                list.item(0).is_some_and(|item| item.is_keyword(keyword))
            }
            Some(_) => false,
            None => self.is_keyword(keyword),
        }
    }

    /// Returns the CSS-wide keyword (`inherit`, `initial`, ...), if this is one.
    #[must_use]
    #[inline]
    pub fn css_wide_keyword(&self) -> Option<ValueId> {
        self.keyword_id().filter(|keyword| keyword.is_css_wide())
    }

    /// Returns `true` for CSS-wide keywords.
    #[must_use]
    #[inline]
    pub fn is_css_wide_keyword(&self) -> bool {
        self.css_wide_keyword().is_some()
    }

    /// Returns the list, if this is one.
    #[must_use]
    #[inline]
    pub fn as_list(&self) -> Option<&ValueList> {
        match self.kind() {
            ValueKind::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the list if it is comma separated.
    #[must_use]
    pub fn as_comma_list(&self) -> Option<&ValueList> {
        self.as_list()
            .filter(|list| list.separator() == Separator::Comma)
    }

    /// Returns the identifier text, if this is a custom identifier.
    #[must_use]
    pub fn as_custom_ident(&self) -> Option<&str> {
        match self.as_primitive() {
            Some(Primitive::CustomIdent(ident)) => Some(ident),
            _ => None,
        }
    }

    /// Returns `true` for custom identifiers.
    #[must_use]
    #[inline]
    pub fn is_custom_ident(&self) -> bool {
        self.as_custom_ident().is_some()
    }

    /// Returns both halves, if this is a pair.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&Self, &Self)> {
        match self.as_primitive() {
            Some(Primitive::Pair(first, second)) => Some((first, second)),
            _ => None,
        }
    }

    /// Returns `true` for pairs.
    #[must_use]
    #[inline]
    pub fn is_pair(&self) -> bool {
        self.as_pair().is_some()
    }

    /// Returns the percentage, if this is one.
    #[must_use]
    pub fn percentage_value(&self) -> Option<f64> {
        match self.as_primitive() {
            Some(Primitive::Percentage(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` for percentages.
    #[must_use]
    #[inline]
    pub fn is_percentage(&self) -> bool {
        self.percentage_value().is_some()
    }

    /// Returns `true` for lengths, counting a bare `0` as one.
    #[must_use]
    pub fn is_length(&self) -> bool {
        match self.as_primitive() {
            Some(Primitive::Dimension(_, unit)) => unit.is_length(),
            Some(Primitive::Number(value)) => *value == 0.0,
            Some(Primitive::Integer(value)) => *value == 0,
            _ => false,
        }
    }

    /// Returns `true` for numeric zero, whatever the unit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_primitive()
            .and_then(Primitive::number_value)
            .is_some_and(|value| value == 0.0)
    }

    /// Returns the color, if this is a resolved color.
    #[must_use]
    pub fn color_value(&self) -> Option<Color> {
        match self.as_primitive() {
            Some(Primitive::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns the pending substitution, if this is one.
    #[must_use]
    #[inline]
    pub fn as_pending_substitution(&self) -> Option<&PendingSubstitution> {
        match self.kind() {
            ValueKind::PendingSubstitution(pending) => Some(pending),
            _ => None,
        }
    }

    /// Returns `true` for values containing unresolved `var()` references.
    #[must_use]
    #[inline]
    pub fn is_variable_reference(&self) -> bool {
        matches!(self.kind(), ValueKind::VariableReference(_))
    }

    /// Returns `true` for the omitted-component stand-in.
    #[must_use]
    #[inline]
    pub fn is_initial_placeholder(&self) -> bool {
        matches!(self.kind(), ValueKind::InitialPlaceholder)
    }

    /// Returns the custom property payload, if this is one.
    #[must_use]
    #[inline]
    pub fn as_custom_property(&self) -> Option<&CustomPropertyValue> {
        match self.kind() {
            ValueKind::CustomProperty(custom) => Some(custom),
            _ => None,
        }
    }

    /// Returns the `border-image-width` payload, if this is one.
    #[must_use]
    #[inline]
    pub fn as_border_image_width(&self) -> Option<&BorderImageWidth> {
        match self.kind() {
            ValueKind::BorderImageWidth(width) => Some(width),
            _ => None,
        }
    }

    /// Returns the `grid-template-areas` payload, if this is one.
    #[must_use]
    #[inline]
    pub fn as_grid_template_areas(&self) -> Option<&GridTemplateAreas> {
        match self.kind() {
            ValueKind::GridTemplateAreas(areas) => Some(areas),
            _ => None,
        }
    }

    /// Returns `true` for bracketed grid line names.
    #[must_use]
    #[inline]
    pub fn is_grid_line_names(&self) -> bool {
        matches!(self.kind(), ValueKind::GridLineNames(_))
    }

    /// Returns `true` if this value equals the initial value of `longhand`.
    ///
    /// The placeholder always counts as initial. Keyword initials compare by
    /// id, the rest by serialized text.
    #[must_use]
    pub fn is_initial_value(&self, longhand: PropertyId) -> bool {
        if self.is_initial_placeholder() {
            return true;
        }
        match longhand.initial() {
            Some(Initial::Keyword(keyword)) => self.is_keyword(keyword),
            Some(Initial::Text(text)) => self.css_text() == text,
            None => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.0 == other.0
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_text())
    }
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Self {
        Self::new(kind)
    }
}
