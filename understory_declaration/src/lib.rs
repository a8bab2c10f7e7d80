// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Declaration: CSS declaration blocks.
//!
//! A declaration block is the ordered list of properties written in one style
//! rule or `style` attribute. Shorthands are stored expanded: writing
//! `margin: 4px` stores four longhand entries, each remembering which
//! shorthand produced it. Reading a shorthand back rebuilds the shortest text
//! that reproduces its longhands, or reports that none exists.
//!
//! ## Core Concepts
//!
//! - [`PropertyEntry`]: one longhand (or custom property) with its flags
//! - [`ImmutableDeclarations`]: a compact, shareable block for parsed rules
//! - [`MutableDeclarations`]: an editable block with a revision counter
//! - [`DeclarationRead`]: the query surface both blocks share
//! - [`PropertyParser`]: the seam to whatever parses CSS text
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_css_property::{ParserMode, PropertyId, ValueId};
//! use understory_css_value::{identifier, pixels};
//! use understory_declaration::{DeclarationRead, MutableDeclarations, PropertyEntry};
//!
//! let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
//! block.set_shorthand(PropertyId::Padding, pixels(2), false);
//! block.set_entry(PropertyEntry::new(PropertyId::PaddingLeft, pixels(3), false));
//! assert_eq!(
//!     block.property_as_string(PropertyId::Padding).as_deref(),
//!     Some("2px 2px 2px 3px")
//! );
//!
//! block.set_keyword(PropertyId::Display, ValueId::Block, false);
//! let frozen = block.to_immutable();
//! assert_eq!(frozen.property_count(), 5);
//! assert_eq!(frozen.as_text(), block.as_text());
//! ```
//!
//! ## Shorthand text
//!
//! A shorthand is written back only when all of its longhands are present
//! with the same importance, and either all or none of them hold the same
//! CSS-wide keyword. Longhands that came from a shorthand containing `var()`
//! print that shorthand's original text. Otherwise each shorthand has its own
//! rules for which components may be omitted.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entry;
mod immutable;
mod mutable;
mod parser;
mod read;
mod serialize;

pub use entry::{EntryFlags, EntryMetadata, PropertyEntry, PropertyRef};
pub use immutable::ImmutableDeclarations;
pub use mutable::{INLINE_CAPACITY, MutableDeclarations};
pub use parser::{ParserContext, PropertyParser};
pub use read::{BLOCK_PROPERTIES, DeclarationRead, Properties};
