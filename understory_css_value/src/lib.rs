// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory CSS Value: immutable value nodes and their interning pool.
//!
//! A [`Value`] is a reference-counted handle to an immutable [`ValueKind`].
//! Cloning shares the node, and nodes are never edited in place: changing a
//! declaration means replacing its handle. Many declaration blocks can share
//! one value graph.
//!
//! ## Core Concepts
//!
//! - [`Value`] / [`ValueKind`]: the node and its closed set of shapes
//! - [`Primitive`]: single tokens (numbers, dimensions, keywords, strings, ...)
//! - [`ValueList`]: space, comma, or slash separated lists
//! - composites: [`Quad`], [`Rect`], [`Shadow`], [`BorderImageSlice`], ...
//! - [`ValuePool`]: shared nodes for common values
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_css_property::{PropertyId, ValueId};
//! use understory_css_value::{Separator, Value, identifier, pixels};
//!
//! let margin = Value::list(Separator::Space, [pixels(0), identifier(ValueId::Auto)]);
//! assert_eq!(margin.css_text(), "0px auto");
//!
//! assert!(pixels(0).is_initial_value(PropertyId::MarginTop));
//! assert!(identifier(ValueId::Auto).is_initial_value(PropertyId::Width));
//! ```
//!
//! ## Serialization
//!
//! | Value | Text |
//! |-------|------|
//! | numbers | at most six significant digits, no trailing zeros |
//! | dimensions | number followed by the unit |
//! | colors | `rgb(r, g, b)` or `rgba(r, g, b, a)` |
//! | strings, urls | double-quoted, `"` and `\` escaped |
//! | pairs | one token when both halves are equal |
//!
//! This crate uses `std` for the process-wide pool.

mod color;
mod composite;
mod number;
mod pool;
mod primitive;
mod value;

pub use color::Color;
pub use composite::{
    BorderImageSlice, BorderImageWidth, CustomPropertyValue, GridLineNames, GridTemplateAreas,
    PendingSubstitution, Quad, Rect, Reflect, Shadow, fold_box_sides,
};
pub use number::{SIGNIFICANT_DIGITS, format_number, write_number};
pub use pool::{
    MAX_CACHEABLE_INTEGER, ValuePool, color, font_family, identifier, initial_placeholder, number,
    percentage, pixels,
};
pub use primitive::{Primitive, Unit, serialize_string};
pub use value::{Separator, Value, ValueKind, ValueList};
