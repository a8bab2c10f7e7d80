// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-side query contract shared by both block representations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_css_property::{ParserMode, PropertyId, ValueId, shorthand_longhands};
use understory_css_value::{Color, Value};

use crate::entry::{PropertyEntry, PropertyRef};
use crate::immutable::ImmutableDeclarations;
use crate::mutable::MutableDeclarations;
use crate::serialize;

/// Longhands that apply to block containers; copied and removed as a set.
pub const BLOCK_PROPERTIES: &[PropertyId] = &[
    PropertyId::BreakAfter,
    PropertyId::BreakBefore,
    PropertyId::BreakInside,
    PropertyId::ColumnCount,
    PropertyId::ColumnGap,
    PropertyId::ColumnRuleColor,
    PropertyId::ColumnRuleStyle,
    PropertyId::ColumnRuleWidth,
    PropertyId::ColumnWidth,
    PropertyId::Orphans,
    PropertyId::OverflowX,
    PropertyId::OverflowY,
    PropertyId::RowGap,
    PropertyId::TextAlign,
    PropertyId::TextIndent,
    PropertyId::Widows,
];

/// Read access to a declaration block.
///
/// Implementors supply indexed access; every query is a provided method, so
/// [`ImmutableDeclarations`] and [`MutableDeclarations`] answer identically.
///
/// Lookups scan from the end: when a property appears more than once, the
/// last entry wins.
///
/// # Example
///
/// ```rust
/// use understory_css_property::{ParserMode, PropertyId, ValueId};
/// use understory_css_value::{identifier, pixels};
/// use understory_declaration::{DeclarationRead, MutableDeclarations};
///
/// let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
/// block.set_shorthand(PropertyId::Margin, pixels(4), false);
/// block.set_keyword(PropertyId::Color, ValueId::Red, true);
///
/// assert_eq!(block.property_as_string(PropertyId::Margin).as_deref(), Some("4px"));
/// assert!(block.property_is_important(PropertyId::Color));
/// assert_eq!(block.property_as_keyword(PropertyId::Color), Some(ValueId::Red));
/// assert_eq!(block.as_text(), "margin: 4px; color: red !important;");
/// ```
pub trait DeclarationRead {
    /// Number of entries.
    fn property_count(&self) -> usize;

    /// Entry `index`. Panics when out of range.
    fn property_at(&self, index: usize) -> PropertyRef<'_>;

    /// The context the block was parsed in.
    fn parser_mode(&self) -> ParserMode;

    /// Returns `true` when the block has no entries.
    fn is_empty(&self) -> bool {
        self.property_count() == 0
    }

    /// Iterates over the entries in order.
    fn properties(&self) -> Properties<'_, Self> {
        Properties {
            block: self,
            index: 0,
        }
    }

    /// Index of the last entry for `id`.
    fn find_property_index(&self, id: PropertyId) -> Option<usize> {
        (0..self.property_count())
            .rev()
            .find(|&index| self.property_at(index).id() == id)
    }

    /// Index of the last entry for the custom property `name`.
    fn find_custom_property_index(&self, name: &str) -> Option<usize> {
        (0..self.property_count()).rev().find(|&index| {
            let property = self.property_at(index);
            property.id() == PropertyId::Custom
                && property
                    .value()
                    .as_custom_property()
                    .is_some_and(|custom| custom.name() == name)
        })
    }

    /// The value of a longhand.
    ///
    /// A system font keyword written through `font` reads as absent: it only
    /// has meaning for the shorthand.
    fn property_value(&self, id: PropertyId) -> Option<&Value> {
        let property = self.property_at(self.find_property_index(id)?);
        let value = property.value();
        if property.shorthand_id() == Some(PropertyId::Font)
            && value.keyword_id().is_some_and(ValueId::is_system_font)
        {
            return None;
        }
        Some(value)
    }

    /// The value of a custom property.
    fn custom_property_value(&self, name: &str) -> Option<&Value> {
        let index = self.find_custom_property_index(name)?;
        Some(self.property_at(index).value())
    }

    /// Returns `true` if the longhand, or any longhand of the shorthand, is set.
    fn has_property(&self, id: PropertyId) -> bool {
        if id.is_shorthand() {
            return shorthand_longhands(id)
                .iter()
                .any(|longhand| self.find_property_index(*longhand).is_some());
        }
        self.find_property_index(id).is_some()
    }

    /// Returns `true` if the longhand is `!important`, or every longhand of the
    /// shorthand is.
    fn property_is_important(&self, id: PropertyId) -> bool {
        if let Some(index) = self.find_property_index(id) {
            return self.property_at(index).is_important();
        }
        let longhands = shorthand_longhands(id);
        !longhands.is_empty()
            && longhands
                .iter()
                .all(|longhand| self.property_is_important(*longhand))
    }

    /// Returns `true` if the custom property is `!important`.
    fn custom_property_is_important(&self, name: &str) -> bool {
        self.find_custom_property_index(name)
            .is_some_and(|index| self.property_at(index).is_important())
    }

    /// Returns `true` if the longhand was filled in implicitly.
    fn is_property_implicit(&self, id: PropertyId) -> bool {
        self.find_property_index(id)
            .is_some_and(|index| self.property_at(index).is_implicit())
    }

    /// The name of the shorthand the longhand was expanded from.
    fn property_shorthand_name(&self, id: PropertyId) -> Option<&'static str> {
        let index = self.find_property_index(id)?;
        self.property_at(index).shorthand_id().map(PropertyId::name)
    }

    /// Serializes a longhand or shorthand.
    ///
    /// Returns `None` when the longhand is absent or the shorthand cannot be
    /// represented by the current longhands.
    fn property_as_string(&self, id: PropertyId) -> Option<String> {
        serialize::property_as_string(self, id)
    }

    /// Serializes a custom property.
    fn custom_property_as_string(&self, name: &str) -> Option<String> {
        self.custom_property_value(name).map(Value::css_text)
    }

    /// The keyword of a longhand, with the omitted-component placeholder
    /// resolved to the initial keyword.
    fn property_as_keyword(&self, id: PropertyId) -> Option<ValueId> {
        let value = self.property_value(id)?;
        serialize::keyword_expanding_initial_placeholder(id, value)
    }

    /// The color of a longhand, from a color value, a color keyword, or hex text.
    fn property_as_color(&self, id: PropertyId) -> Option<Color> {
        let value = self.property_value(id)?;
        if let Some(color) = value.color_value() {
            return Some(color);
        }
        if let Some(keyword) = value.keyword_id() {
            return Color::from_keyword(keyword);
        }
        Color::from_text(&self.property_as_string(id)?)
    }

    /// Returns `true` if the longhand's value equals `expected`.
    ///
    /// A stored placeholder matches the longhand's initial value. An expected
    /// placeholder matches nothing.
    fn property_matches(&self, id: PropertyId, expected: &Value) -> bool {
        let Some(value) = self.property_value(id) else {
            return false;
        };
        if value.is_initial_placeholder() {
            return expected.is_initial_value(id);
        }
        !expected.is_initial_placeholder() && value == expected
    }

    /// Returns `true` if [`property_as_keyword`](Self::property_as_keyword)
    /// is `keyword`.
    fn property_matches_keyword(&self, id: PropertyId, keyword: ValueId) -> bool {
        self.property_as_keyword(id) == Some(keyword)
    }

    /// Serializes the whole block, folding longhands into shorthands where
    /// possible.
    fn as_text(&self) -> String {
        serialize::as_text(self)
    }

    /// An immutable copy.
    fn to_immutable(&self) -> ImmutableDeclarations {
        let entries: Vec<PropertyEntry> = self.properties().map(|p| p.to_entry()).collect();
        ImmutableDeclarations::new(&entries, self.parser_mode())
    }

    /// A mutable copy.
    fn mutable_copy(&self) -> MutableDeclarations {
        MutableDeclarations::from_entries(
            self.properties().map(|p| p.to_entry()),
            self.parser_mode(),
        )
    }

    /// A mutable block holding the values for `ids` that are set here.
    ///
    /// The copies are plain entries: not important and not tied to a
    /// shorthand. Values hidden from [`property_value`](Self::property_value)
    /// are not copied.
    fn copy_properties_in_set(&self, ids: &[PropertyId]) -> MutableDeclarations {
        let entries = ids.iter().filter_map(|&id| {
            let value = self.property_value(id)?;
            Some(PropertyEntry::new(id, value.clone(), false))
        });
        MutableDeclarations::from_entries(entries, self.parser_mode())
    }

    /// A mutable block holding the [`BLOCK_PROPERTIES`] set here.
    fn copy_block_properties(&self) -> MutableDeclarations {
        self.copy_properties_in_set(BLOCK_PROPERTIES)
    }
}

/// Iterator over the entries of a block.
pub struct Properties<'a, B: ?Sized> {
    block: &'a B,
    index: usize,
}

impl<'a, B: DeclarationRead + ?Sized> Iterator for Properties<'a, B> {
    type Item = PropertyRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.block.property_count() {
            return None;
        }
        let property = self.block.property_at(self.index);
        self.index += 1;
        Some(property)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.block.property_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<B: DeclarationRead + ?Sized> ExactSizeIterator for Properties<'_, B> {}

impl<B: ?Sized> fmt::Debug for Properties<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
