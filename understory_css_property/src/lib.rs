// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory CSS Property: the static property and keyword catalog.
//!
//! Everything a declaration block needs to know about properties without
//! parsing any values:
//!
//! - [`PropertyId`]: dense ids for longhands, custom properties, and shorthands
//! - [`ValueId`]: keyword ids
//! - [`shorthand_longhands`] and [`shorthands_for_longhand`]: the expansion
//!   table and its reverse map
//! - [`LogicalGroup`] / [`MappingLogic`]: physical vs flow-relative aliasing
//! - [`Initial`]: initial values, used to omit defaults from shorthands
//! - [`PropertySettings`] / [`ParserMode`]: exposure rules
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_css_property::{PropertyId, ValueId, shorthand_longhands};
//!
//! let margin = PropertyId::from_name("margin").unwrap();
//! assert_eq!(
//!     shorthand_longhands(margin),
//!     &[
//!         PropertyId::MarginTop,
//!         PropertyId::MarginRight,
//!         PropertyId::MarginBottom,
//!         PropertyId::MarginLeft,
//!     ]
//! );
//! assert_eq!(
//!     PropertyId::BackgroundRepeat.initial_keyword(),
//!     Some(ValueId::Repeat)
//! );
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod id;
mod initial;
mod keyword;
mod logical;
mod settings;
mod shorthand;

pub use id::{PropertyFlags, PropertyId, is_custom_property_name};
pub use initial::Initial;
pub use keyword::ValueId;
pub use logical::{
    LogicalGroup, MappingLogic, are_in_same_logical_group_with_different_mapping_logic,
};
pub use settings::{ParserMode, PropertySettings, PropertySettingsBuilder};
pub use shorthand::{
    MAX_SHORTHANDS_PER_LONGHAND, MatchingShorthands, shorthand_longhands, shorthand_position,
    shorthands_for_longhand,
};
