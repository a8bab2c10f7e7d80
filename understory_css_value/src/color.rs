// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 8-bit sRGB colors.

use std::fmt::Write as _;

use understory_css_property::ValueId;

use crate::number::write_number;

/// An 8-bit sRGB color with alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// `transparent`
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// `black`
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `white`
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates an opaque color.
    #[must_use]
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with alpha.
    #[must_use]
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` when alpha is `255`.
    #[must_use]
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Resolves a named color keyword.
    ///
    /// `currentcolor` is not a concrete color and yields `None`.
    #[must_use]
    pub const fn from_keyword(keyword: ValueId) -> Option<Self> {
        let color = match keyword {
            ValueId::Transparent => Self::TRANSPARENT,
            ValueId::Black => Self::BLACK,
            ValueId::White => Self::WHITE,
            ValueId::Red => Self::rgb(255, 0, 0),
            ValueId::Green => Self::rgb(0, 128, 0),
            ValueId::Blue => Self::rgb(0, 0, 255),
            ValueId::Yellow => Self::rgb(255, 255, 0),
            ValueId::Gray => Self::rgb(128, 128, 128),
            ValueId::Orange => Self::rgb(255, 165, 0),
            _ => return None,
        };
        Some(color)
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 | 4 => {
                let r = nibble(0)? * 17;
                let g = nibble(1)? * 17;
                let b = nibble(2)? * 17;
                let a = if digits.len() == 4 { nibble(3)? * 17 } else { 255 };
                Some(Self::rgba(r, g, b, a))
            }
            6 | 8 => {
                let a = if digits.len() == 8 { byte(6)? } else { 255 };
                Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
            }
            _ => None,
        }
    }

    /// Parses a named color or a hex color.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        if text.starts_with('#') {
            return Self::from_hex(text);
        }
        ValueId::from_name(text).and_then(Self::from_keyword)
    }

    /// Appends `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn serialize(self, out: &mut String) {
        if self.is_opaque() {
            let _ = write!(out, "rgb({}, {}, {})", self.r, self.g, self.b);
            return;
        }
        let _ = write!(out, "rgba({}, {}, {}, ", self.r, self.g, self.b);
        write_number(out, alpha_fraction(self.a));
        out.push(')');
    }
}

/// The shortest decimal alpha that maps back to the same byte.
fn alpha_fraction(alpha: u8) -> f64 {
    let exact = f64::from(alpha) / 255.0;
    let two_digits = (exact * 100.0).round() / 100.0;
    if (two_digits * 255.0).round() == f64::from(alpha) {
        two_digits
    } else {
        (exact * 1000.0).round() / 1000.0
    }
}
