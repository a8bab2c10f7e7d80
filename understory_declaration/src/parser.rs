// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam to a CSS value parser.
//!
//! Declaration blocks never tokenize text themselves. Mutations that take text
//! hand it to a [`PropertyParser`] and store the entries it returns.

use alloc::vec::Vec;

use understory_css_property::{ParserMode, PropertyId, PropertySettings};

use crate::entry::PropertyEntry;

/// What a parser needs to know about the block it is parsing for.
#[derive(Copy, Clone, Debug)]
pub struct ParserContext<'a> {
    /// The block's parsing mode.
    pub mode: ParserMode,
    /// Exposure settings.
    pub settings: &'a PropertySettings,
}

impl<'a> ParserContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(mode: ParserMode, settings: &'a PropertySettings) -> Self {
        Self { mode, settings }
    }

    /// Returns `true` if `id` may be set in this context.
    #[must_use]
    #[inline]
    pub fn is_exposed(&self, id: PropertyId) -> bool {
        self.settings.is_exposed(id, self.mode)
    }
}

/// Parses property text into longhand entries.
pub trait PropertyParser {
    /// Parses the value of one property.
    ///
    /// Shorthands expand to one entry per longhand. Returns `None` when the
    /// text is not valid for `id`.
    fn parse_value(
        &self,
        id: PropertyId,
        text: &str,
        important: bool,
        context: &ParserContext<'_>,
    ) -> Option<Vec<PropertyEntry>>;

    /// Parses a full declaration list (`a: b; c: d !important`).
    ///
    /// Invalid declarations are dropped.
    fn parse_declaration(&self, text: &str, context: &ParserContext<'_>) -> Vec<PropertyEntry>;
}
