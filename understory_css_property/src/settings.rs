// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing modes and property exposure.
//!
//! Exposure decides whether a property may be set in a given context. Internal
//! properties are only reachable from user-agent sheets; any property can also
//! be switched off through [`PropertySettings`].
//!
//! ```rust
//! use understory_css_property::{ParserMode, PropertyId, PropertySettings};
//!
//! let settings = PropertySettings::builder()
//!     .disable(PropertyId::MaskImage)
//!     .build();
//!
//! assert!(settings.is_exposed(PropertyId::Color, ParserMode::HtmlStandard));
//! assert!(!settings.is_exposed(PropertyId::MaskImage, ParserMode::HtmlStandard));
//! assert!(!settings.is_exposed(
//!     PropertyId::InternalTextAutosizingStatus,
//!     ParserMode::HtmlStandard,
//! ));
//! assert!(settings.is_exposed(
//!     PropertyId::InternalTextAutosizingStatus,
//!     ParserMode::UserAgentSheet,
//! ));
//! ```

use smallvec::SmallVec;

use crate::{PropertyId, shorthand_longhands};

/// The context a declaration block was parsed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParserMode {
    /// Author style in a standards-mode document.
    #[default]
    HtmlStandard,
    /// Author style in a quirks-mode document.
    HtmlQuirks,
    /// The user-agent stylesheet.
    UserAgentSheet,
}

impl ParserMode {
    /// Returns `true` for [`ParserMode::UserAgentSheet`].
    #[must_use]
    #[inline]
    pub const fn is_user_agent(self) -> bool {
        matches!(self, Self::UserAgentSheet)
    }
}

/// Runtime switches for optional properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertySettings {
    disabled: SmallVec<[PropertyId; 4]>,
}

impl PropertySettings {
    /// Settings with every property enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building settings.
    #[must_use]
    pub fn builder() -> PropertySettingsBuilder {
        PropertySettingsBuilder::default()
    }

    /// Returns `true` if `id` was switched off.
    ///
    /// A shorthand counts as disabled when it or any of its longhands is.
    #[must_use]
    pub fn is_disabled(&self, id: PropertyId) -> bool {
        self.disabled.contains(&id)
            || shorthand_longhands(id)
                .iter()
                .any(|longhand| self.disabled.contains(longhand))
    }

    /// Returns `true` if `id` may be set in a block parsed with `mode`.
    #[must_use]
    pub fn is_exposed(&self, id: PropertyId, mode: ParserMode) -> bool {
        if id.is_internal() && !mode.is_user_agent() {
            return false;
        }
        !self.is_disabled(id)
    }
}

/// Builder for [`PropertySettings`].
#[derive(Clone, Debug, Default)]
pub struct PropertySettingsBuilder {
    disabled: SmallVec<[PropertyId; 4]>,
}

impl PropertySettingsBuilder {
    /// Switches a property off.
    #[must_use]
    pub fn disable(mut self, id: PropertyId) -> Self {
        if !self.disabled.contains(&id) {
            self.disabled.push(id);
        }
        self
    }

    /// Builds the settings.
    #[must_use]
    pub fn build(self) -> PropertySettings {
        PropertySettings {
            disabled: self.disabled,
        }
    }
}
