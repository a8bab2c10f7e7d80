// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable declaration blocks.

use alloc::string::String;

use hashbrown::HashSet;
use smallvec::SmallVec;
use understory_css_property::{
    ParserMode, PropertyId, PropertySettings, ValueId,
    are_in_same_logical_group_with_different_mapping_logic, is_custom_property_name,
    shorthand_longhands,
};
use understory_css_value::{Value, identifier};

use crate::entry::{PropertyEntry, PropertyRef};
use crate::parser::{ParserContext, PropertyParser};
use crate::read::{BLOCK_PROPERTIES, DeclarationRead};
use crate::serialize;

/// Entries stored inline before spilling to the heap.
///
/// Inline `style` attributes rarely carry more than a handful of declarations.
pub const INLINE_CAPACITY: usize = 8;

/// An editable declaration block.
///
/// Entries keep insertion order. Every mutation reports whether the block
/// changed, and changes bump [`MutableDeclarations::revision`] so callers can
/// cheaply detect staleness of anything derived from the block.
///
/// # Example
///
/// ```rust
/// use understory_css_property::{ParserMode, PropertyId};
/// use understory_css_value::pixels;
/// use understory_declaration::{DeclarationRead, MutableDeclarations, PropertyEntry};
///
/// let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
/// assert!(block.set_entry(PropertyEntry::new(PropertyId::Width, pixels(10), false)));
/// // Writing the same declaration again changes nothing.
/// assert!(!block.set_entry(PropertyEntry::new(PropertyId::Width, pixels(10), false)));
///
/// assert_eq!(block.remove_property(PropertyId::Width).as_deref(), Some("10px"));
/// assert!(block.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MutableDeclarations {
    entries: SmallVec<[PropertyEntry; INLINE_CAPACITY]>,
    mode: ParserMode,
    revision: u64,
}

impl MutableDeclarations {
    /// Creates an empty block.
    #[must_use]
    pub fn new(mode: ParserMode) -> Self {
        Self {
            entries: SmallVec::new(),
            mode,
            revision: 0,
        }
    }

    /// Creates a block holding `entries` in order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = PropertyEntry>, mode: ParserMode) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            mode,
            revision: 0,
        }
    }

    /// Monotonic change counter.
    ///
    /// Bumped by every mutation that reports a change. Wraps on overflow.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The entries in order.
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }

    #[inline]
    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ==================== Setting ====================

    /// Writes one longhand or custom property entry.
    ///
    /// An existing entry for the same property is replaced in place, unless a
    /// later entry belongs to the same logical group with the other mapping
    /// logic; then the old entry is removed and the new one appended so it
    /// still wins. Returns `false` when an equal entry is already present.
    pub fn set_entry(&mut self, entry: PropertyEntry) -> bool {
        let id = entry.id();
        if id.is_shorthand() {
            debug_assert!(false, "cannot store an entry for shorthand {id:?}");
            tracing::warn!(property = id.name(), "ignoring entry for a shorthand");
            return false;
        }

        let existing = match entry.custom_name() {
            Some(name) if id == PropertyId::Custom => self.find_custom_property_index(name),
            _ => self.find_property_index(id),
        };

        if let Some(index) = existing {
            if self.can_update_in_place(id, index) {
                if self.entries[index] == entry {
                    return false;
                }
                self.entries[index] = entry;
                self.bump_revision();
                return true;
            }
            tracing::debug!(
                property = id.name(),
                "logical group conflict; moving entry to the end"
            );
            self.entries.remove(index);
        }

        self.entries.push(entry);
        self.bump_revision();
        true
    }

    fn can_update_in_place(&self, id: PropertyId, index: usize) -> bool {
        if id.logical_group().is_none() {
            return true;
        }
        !self.entries[index + 1..]
            .iter()
            .any(|later| are_in_same_logical_group_with_different_mapping_logic(id, later.id()))
    }

    /// Writes `value` to a property.
    ///
    /// For a shorthand, every longhand is removed and one entry per longhand
    /// is appended, all sharing `value` and marked as set from the shorthand.
    /// For a longhand this is [`MutableDeclarations::set_entry`].
    pub fn set_shorthand(&mut self, id: PropertyId, value: Value, important: bool) -> bool {
        if !id.is_shorthand() {
            return self.set_entry(PropertyEntry::new(id, value, important));
        }
        let longhands = shorthand_longhands(id);
        self.remove_properties_in_set(longhands);
        self.entries.extend(longhands.iter().map(|&longhand| {
            PropertyEntry::new(longhand, value.clone(), important).set_from_shorthand(id)
        }));
        self.bump_revision();
        true
    }

    /// Writes an interned keyword to a property.
    pub fn set_keyword(&mut self, id: PropertyId, keyword: ValueId, important: bool) -> bool {
        self.set_shorthand(id, identifier(keyword), important)
    }

    /// Parses `text` for `id` and stores the resulting entries.
    ///
    /// Empty text removes the property. Text the parser rejects leaves the
    /// block unchanged.
    ///
    /// Internal properties are always accepted. Writing any other property
    /// that `settings` does not expose in this block's mode is a programming
    /// error: it panics in debug builds and is ignored otherwise.
    pub fn set_property_text<P: PropertyParser + ?Sized>(
        &mut self,
        id: PropertyId,
        text: &str,
        important: bool,
        parser: &P,
        settings: &PropertySettings,
    ) -> bool {
        let context = ParserContext::new(self.mode, settings);
        let writable = id.is_internal() || context.is_exposed(id);
        debug_assert!(writable, "{id:?} is not exposed in {:?}", self.mode);
        if !writable {
            tracing::warn!(
                property = id.name(),
                mode = ?self.mode,
                "ignoring write to a property that is not exposed"
            );
            return false;
        }

        if text.is_empty() {
            return self.remove_property(id).is_some();
        }

        match parser.parse_value(id, text, important, &context) {
            Some(entries) => self.add_parsed_properties(&entries),
            None => false,
        }
    }

    /// Stores a custom property.
    ///
    /// Empty text removes it. A non-important write never replaces an
    /// important value.
    pub fn set_custom_property(&mut self, name: &str, text: &str, important: bool) -> bool {
        debug_assert!(
            is_custom_property_name(name),
            "{name:?} is not a custom property name"
        );
        if text.is_empty() {
            return self.remove_custom_property(name).is_some();
        }
        self.add_parsed_property(PropertyEntry::custom(name, text.trim(), important))
    }

    /// Stores entries produced by a parser, in order.
    pub fn add_parsed_properties(&mut self, entries: &[PropertyEntry]) -> bool {
        self.entries.reserve(entries.len());
        let mut changed = false;
        for entry in entries {
            changed |= self.add_parsed_property(entry.clone());
        }
        changed
    }

    /// Stores one parsed entry.
    ///
    /// A custom property only overrides an important value with another
    /// important value.
    pub fn add_parsed_property(&mut self, entry: PropertyEntry) -> bool {
        if entry.id() == PropertyId::Custom
            && !entry.is_important()
            && entry
                .custom_name()
                .is_some_and(|name| self.custom_property_is_important(name))
        {
            return false;
        }
        self.set_entry(entry)
    }

    /// Copies every entry of `other` into this block, `other` winning
    /// conflicts.
    pub fn merge_and_override_on_conflict<B: DeclarationRead + ?Sized>(&mut self, other: &B) -> bool {
        let mut changed = false;
        for property in other.properties() {
            changed |= self.add_parsed_property(property.to_entry());
        }
        changed
    }

    /// Replaces the whole block with the parse of `text`.
    ///
    /// Reports whether the resulting entries differ from the old ones.
    pub fn parse_declaration<P: PropertyParser + ?Sized>(
        &mut self,
        text: &str,
        parser: &P,
        settings: &PropertySettings,
    ) -> bool {
        let context = ParserContext::new(self.mode, settings);
        let parsed = parser.parse_declaration(text, &context);

        let revision = self.revision;
        let old = core::mem::take(&mut self.entries);
        for entry in parsed {
            self.add_parsed_property(entry);
        }
        self.revision = revision;

        let changed = old != self.entries;
        if changed {
            self.bump_revision();
        }
        changed
    }

    // ==================== Removal ====================

    /// Removes a property and returns its text.
    ///
    /// A shorthand removes all of its longhands and returns the shorthand's
    /// text, which is empty when the longhands could not be represented by
    /// it. Returns `None` when nothing was removed.
    pub fn remove_property(&mut self, id: PropertyId) -> Option<String> {
        if id.is_shorthand() {
            let text = serialize::property_as_string(self, id).unwrap_or_default();
            return self
                .remove_properties_in_set(shorthand_longhands(id))
                .then_some(text);
        }
        let index = self.find_property_index(id)?;
        Some(self.remove_at(index))
    }

    /// Removes a custom property and returns its text.
    pub fn remove_custom_property(&mut self, name: &str) -> Option<String> {
        let index = self.find_custom_property_index(name)?;
        Some(self.remove_at(index))
    }

    fn remove_at(&mut self, index: usize) -> String {
        let entry = self.entries.remove(index);
        self.bump_revision();
        serialize::text_expanding_initial_placeholder(entry.id(), entry.value())
    }

    /// Removes every entry whose property is in `ids`.
    pub fn remove_properties_in_set(&mut self, ids: &[PropertyId]) -> bool {
        if self.entries.is_empty() || ids.is_empty() {
            return false;
        }
        let set: HashSet<PropertyId> = ids.iter().copied().collect();
        let before = self.entries.len();
        self.entries.retain(|entry| !set.contains(&entry.id()));
        let changed = self.entries.len() != before;
        if changed {
            self.bump_revision();
        }
        changed
    }

    /// Removes the [`BLOCK_PROPERTIES`].
    pub fn remove_block_properties(&mut self) -> bool {
        self.remove_properties_in_set(BLOCK_PROPERTIES)
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        self.bump_revision();
        true
    }
}

impl DeclarationRead for MutableDeclarations {
    #[inline]
    fn property_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn property_at(&self, index: usize) -> PropertyRef<'_> {
        self.entries[index].as_property_ref()
    }

    #[inline]
    fn parser_mode(&self) -> ParserMode {
        self.mode
    }

    fn find_property_index(&self, id: PropertyId) -> Option<usize> {
        self.entries.iter().rposition(|entry| entry.id() == id)
    }
}
