// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property entries.
//!
//! A [`PropertyEntry`] is one `property: value [!important]` declaration. Its
//! [`EntryMetadata`] packs the property id and flags into four bytes, so the
//! immutable block can keep metadata and values in two parallel slices.

use core::fmt;

use bitflags::bitflags;
use understory_css_property::{PropertyId, shorthand_position, shorthands_for_longhand};
use understory_css_value::Value;

bitflags! {
    /// Per-entry flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// Declared `!important`.
        const IMPORTANT = 1 << 0;
        /// Produced by expanding a shorthand.
        const SET_FROM_SHORTHAND = 1 << 1;
        /// Not written by the author; filled in by shorthand expansion.
        const IMPLICIT = 1 << 2;
        /// The property inherits by default.
        const INHERITED = 1 << 3;
        /// Two-bit index into the longhand's matching shorthands.
        const SHORTHAND_INDEX = 0b11 << 4;
    }
}

const SHORTHAND_INDEX_SHIFT: u8 = 4;

/// Property id plus flags.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntryMetadata {
    property: PropertyId,
    flags: EntryFlags,
}

impl EntryMetadata {
    /// Creates metadata for a longhand or custom property.
    ///
    /// The inherited flag is derived from the catalog.
    #[must_use]
    pub fn new(property: PropertyId, important: bool) -> Self {
        debug_assert!(
            !property.is_shorthand(),
            "declaration entries hold longhands only"
        );
        let mut flags = EntryFlags::empty();
        flags.set(EntryFlags::IMPORTANT, important);
        flags.set(EntryFlags::INHERITED, property.is_inherited());
        Self { property, flags }
    }

    /// The property.
    #[must_use]
    #[inline]
    pub fn id(self) -> PropertyId {
        self.property
    }

    /// The raw flags.
    #[must_use]
    #[inline]
    pub fn flags(self) -> EntryFlags {
        self.flags
    }

    /// Declared `!important`.
    #[must_use]
    #[inline]
    pub fn is_important(self) -> bool {
        self.flags.contains(EntryFlags::IMPORTANT)
    }

    /// Produced by expanding a shorthand.
    #[must_use]
    #[inline]
    pub fn was_set_from_shorthand(self) -> bool {
        self.flags.contains(EntryFlags::SET_FROM_SHORTHAND)
    }

    /// Filled in by shorthand expansion rather than written by the author.
    #[must_use]
    #[inline]
    pub fn is_implicit(self) -> bool {
        self.flags.contains(EntryFlags::IMPLICIT)
    }

    /// The property inherits by default.
    #[must_use]
    #[inline]
    pub fn is_inherited(self) -> bool {
        self.flags.contains(EntryFlags::INHERITED)
    }

    /// The stored shorthand disambiguation index.
    #[must_use]
    #[inline]
    pub fn shorthand_index(self) -> u8 {
        (self.flags & EntryFlags::SHORTHAND_INDEX).bits() >> SHORTHAND_INDEX_SHIFT
    }

    /// The shorthand this entry was expanded from.
    ///
    /// A longhand that belongs to a single shorthand reports it regardless of
    /// the stored index.
    #[must_use]
    pub fn shorthand_id(self) -> Option<PropertyId> {
        if !self.was_set_from_shorthand() {
            return None;
        }
        let shorthands = shorthands_for_longhand(self.property);
        if shorthands.len() == 1 {
            return shorthands.first().copied();
        }
        shorthands.get(usize::from(self.shorthand_index())).copied()
    }

    /// `all` is not recorded; its entries read as plain longhands.
    #[must_use]
    fn with_shorthand(mut self, shorthand: PropertyId) -> Self {
        if shorthand == PropertyId::All {
            return self;
        }
        let index = shorthand_position(self.property, shorthand);
        debug_assert!(
            index.is_some(),
            "{shorthand:?} does not contain {:?}",
            self.property
        );
        let index = u8::try_from(index.unwrap_or(0)).unwrap_or(0);
        self.flags.insert(EntryFlags::SET_FROM_SHORTHAND);
        self.flags.remove(EntryFlags::SHORTHAND_INDEX);
        self.flags |= EntryFlags::from_bits_retain((index << SHORTHAND_INDEX_SHIFT) & 0b11_0000);
        self
    }
}

impl fmt::Debug for EntryMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryMetadata")
            .field("property", &self.property)
            .field("flags", &self.flags)
            .finish()
    }
}

/// One declaration: metadata plus a shared value.
///
/// # Example
///
/// ```rust
/// use understory_css_property::PropertyId;
/// use understory_css_value::pixels;
/// use understory_declaration::PropertyEntry;
///
/// let entry = PropertyEntry::new(PropertyId::MarginTop, pixels(4), true)
///     .set_from_shorthand(PropertyId::Margin);
/// assert!(entry.is_important());
/// assert_eq!(entry.shorthand_id(), Some(PropertyId::Margin));
/// assert_eq!(entry.value().css_text(), "4px");
/// ```
#[derive(Clone, PartialEq)]
pub struct PropertyEntry {
    metadata: EntryMetadata,
    value: Value,
}

impl PropertyEntry {
    /// Creates an entry for a longhand.
    #[must_use]
    pub fn new(id: PropertyId, value: Value, important: bool) -> Self {
        Self {
            metadata: EntryMetadata::new(id, important),
            value,
        }
    }

    /// Creates a custom property entry.
    #[must_use]
    pub fn custom(name: &str, text: &str, important: bool) -> Self {
        Self::new(PropertyId::Custom, Value::custom_property(name, text), important)
    }

    /// Reassembles an entry from stored parts.
    #[must_use]
    pub fn from_parts(metadata: EntryMetadata, value: Value) -> Self {
        Self { metadata, value }
    }

    /// Marks the entry as expanded from `shorthand`.
    #[must_use]
    pub fn set_from_shorthand(mut self, shorthand: PropertyId) -> Self {
        self.metadata = self.metadata.with_shorthand(shorthand);
        self
    }

    /// Marks the entry as implicit.
    #[must_use]
    pub fn implicit(mut self) -> Self {
        self.metadata.flags.insert(EntryFlags::IMPLICIT);
        self
    }

    /// The metadata.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> EntryMetadata {
        self.metadata
    }

    /// The property.
    #[must_use]
    #[inline]
    pub fn id(&self) -> PropertyId {
        self.metadata.id()
    }

    /// The value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Declared `!important`.
    #[must_use]
    #[inline]
    pub fn is_important(&self) -> bool {
        self.metadata.is_important()
    }

    /// Filled in by shorthand expansion.
    #[must_use]
    #[inline]
    pub fn is_implicit(&self) -> bool {
        self.metadata.is_implicit()
    }

    /// The shorthand this entry was expanded from.
    #[must_use]
    #[inline]
    pub fn shorthand_id(&self) -> Option<PropertyId> {
        self.metadata.shorthand_id()
    }

    /// The `--name` of a custom property entry.
    #[must_use]
    pub fn custom_name(&self) -> Option<&str> {
        self.value.as_custom_property().map(|custom| custom.name())
    }

    /// Borrows the entry as a [`PropertyRef`].
    #[must_use]
    #[inline]
    pub fn as_property_ref(&self) -> PropertyRef<'_> {
        PropertyRef::new(self.metadata, &self.value)
    }
}

impl fmt::Debug for PropertyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyEntry")
            .field("metadata", &self.metadata)
            .field("value", &self.value)
            .finish()
    }
}

/// A borrowed view of one entry in a declaration block.
#[derive(Copy, Clone, Debug)]
pub struct PropertyRef<'a> {
    metadata: EntryMetadata,
    value: &'a Value,
}

impl<'a> PropertyRef<'a> {
    /// Creates a view.
    #[must_use]
    #[inline]
    pub fn new(metadata: EntryMetadata, value: &'a Value) -> Self {
        Self { metadata, value }
    }

    /// The metadata.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> EntryMetadata {
        self.metadata
    }

    /// The property.
    #[must_use]
    #[inline]
    pub fn id(&self) -> PropertyId {
        self.metadata.id()
    }

    /// The value, borrowed from the block.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Declared `!important`.
    #[must_use]
    #[inline]
    pub fn is_important(&self) -> bool {
        self.metadata.is_important()
    }

    /// Filled in by shorthand expansion.
    #[must_use]
    #[inline]
    pub fn is_implicit(&self) -> bool {
        self.metadata.is_implicit()
    }

    /// Produced by expanding a shorthand.
    #[must_use]
    #[inline]
    pub fn was_set_from_shorthand(&self) -> bool {
        self.metadata.was_set_from_shorthand()
    }

    /// The shorthand this entry was expanded from.
    #[must_use]
    #[inline]
    pub fn shorthand_id(&self) -> Option<PropertyId> {
        self.metadata.shorthand_id()
    }

    /// The property name; custom properties report their `--name`.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self.value.as_custom_property() {
            Some(custom) if self.id() == PropertyId::Custom => custom.name(),
            _ => self.id().name(),
        }
    }

    /// Copies the entry out of the block.
    #[must_use]
    pub fn to_entry(&self) -> PropertyEntry {
        PropertyEntry::from_parts(self.metadata, self.value.clone())
    }
}
