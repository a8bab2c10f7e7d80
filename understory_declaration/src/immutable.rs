// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared, frozen declaration blocks.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use understory_css_property::{ParserMode, PropertyId};
use understory_css_value::Value;

use crate::entry::{EntryMetadata, PropertyEntry, PropertyRef};
use crate::read::DeclarationRead;

/// A shared, immutable declaration block.
///
/// Stylesheet rules hold these. The block is built once from a list of
/// entries and never changes; cloning only bumps a reference count. Metadata
/// and values live in two parallel slices so id lookups scan four-byte
/// records without touching values.
///
/// Use [`DeclarationRead::mutable_copy`] to edit a copy.
///
/// # Example
///
/// ```rust
/// use understory_css_property::{ParserMode, PropertyId};
/// use understory_css_value::pixels;
/// use understory_declaration::{DeclarationRead, ImmutableDeclarations, PropertyEntry};
///
/// let block = ImmutableDeclarations::new(
///     &[PropertyEntry::new(PropertyId::Width, pixels(10), false)],
///     ParserMode::HtmlStandard,
/// );
/// let shared = block.clone();
/// assert!(ImmutableDeclarations::ptr_eq(&block, &shared));
/// assert_eq!(shared.as_text(), "width: 10px;");
/// ```
#[derive(Clone, Debug)]
pub struct ImmutableDeclarations {
    inner: Arc<BlockData>,
}

#[derive(Debug)]
struct BlockData {
    mode: ParserMode,
    metadata: Box<[EntryMetadata]>,
    values: Box<[Value]>,
}

impl ImmutableDeclarations {
    /// Freezes `entries` into a new block.
    #[must_use]
    pub fn new(entries: &[PropertyEntry], mode: ParserMode) -> Self {
        let metadata: Vec<EntryMetadata> = entries.iter().map(PropertyEntry::metadata).collect();
        let values: Vec<Value> = entries.iter().map(|entry| entry.value().clone()).collect();
        Self {
            inner: Arc::new(BlockData {
                mode,
                metadata: metadata.into_boxed_slice(),
                values: values.into_boxed_slice(),
            }),
        }
    }

    /// An empty block.
    #[must_use]
    pub fn empty(mode: ParserMode) -> Self {
        Self::new(&[], mode)
    }

    /// Returns `true` when both handles share one block.
    #[must_use]
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.metadata.len()
    }

    /// Returns `true` when the block has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.metadata.is_empty()
    }
}

impl DeclarationRead for ImmutableDeclarations {
    #[inline]
    fn property_count(&self) -> usize {
        self.inner.metadata.len()
    }

    #[inline]
    fn property_at(&self, index: usize) -> PropertyRef<'_> {
        PropertyRef::new(self.inner.metadata[index], &self.inner.values[index])
    }

    #[inline]
    fn parser_mode(&self) -> ParserMode {
        self.inner.mode
    }

    fn find_property_index(&self, id: PropertyId) -> Option<usize> {
        self.inner
            .metadata
            .iter()
            .rposition(|metadata| metadata.id() == id)
    }

    fn to_immutable(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_css_property::ValueId;
    use understory_css_value::{identifier, pixels};

    fn sample() -> ImmutableDeclarations {
        ImmutableDeclarations::new(
            &[
                PropertyEntry::new(PropertyId::Width, pixels(1), false),
                PropertyEntry::new(PropertyId::Color, identifier(ValueId::Red), true),
                PropertyEntry::new(PropertyId::Width, pixels(2), false),
            ],
            ParserMode::HtmlQuirks,
        )
    }

    #[test]
    fn last_entry_wins() {
        let block = sample();
        assert_eq!(block.len(), 3);
        assert_eq!(block.find_property_index(PropertyId::Width), Some(2));
        assert_eq!(block.property_value(PropertyId::Width), Some(&pixels(2)));
        assert_eq!(block.find_property_index(PropertyId::Height), None);
    }

    #[test]
    fn clones_share_storage() {
        let block = sample();
        let frozen = block.to_immutable();
        assert!(ImmutableDeclarations::ptr_eq(&block, &frozen));
        assert_eq!(frozen.parser_mode(), ParserMode::HtmlQuirks);
    }

    #[test]
    fn mutable_copy_is_independent() {
        let block = sample();
        let mut copy = block.mutable_copy();
        assert_eq!(copy.property_count(), 3);
        assert!(copy.remove_property(PropertyId::Color).is_some());
        assert_eq!(block.property_count(), 3);
        assert!(block.has_property(PropertyId::Color));
    }

    #[test]
    fn empty_block() {
        let block = ImmutableDeclarations::empty(ParserMode::HtmlStandard);
        assert!(block.is_empty());
        assert_eq!(block.as_text(), "");
    }
}
