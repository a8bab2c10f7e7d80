// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-token values.

use std::sync::Arc;

use understory_css_property::ValueId;

use crate::number::write_number;
use crate::{Color, Value};

/// The unit of a [`Primitive::Dimension`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `px`
    Px,
    /// `em`
    Em,
    /// `rem`
    Rem,
    /// `ex`
    Ex,
    /// `ch`
    Ch,
    /// `vw`
    Vw,
    /// `vh`
    Vh,
    /// `pt`
    Pt,
    /// `pc`
    Pc,
    /// `cm`
    Cm,
    /// `mm`
    Mm,
    /// `in`
    In,
    /// `s`
    S,
    /// `ms`
    Ms,
    /// `deg`
    Deg,
    /// `rad`
    Rad,
    /// `grad`
    Grad,
    /// `turn`
    Turn,
    /// `fr`
    Fr,
}

impl Unit {
    const ALL: [Self; 19] = [
        Self::Px,
        Self::Em,
        Self::Rem,
        Self::Ex,
        Self::Ch,
        Self::Vw,
        Self::Vh,
        Self::Pt,
        Self::Pc,
        Self::Cm,
        Self::Mm,
        Self::In,
        Self::S,
        Self::Ms,
        Self::Deg,
        Self::Rad,
        Self::Grad,
        Self::Turn,
        Self::Fr,
    ];

    /// Returns the unit suffix as written in CSS.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::S => "s",
            Self::Ms => "ms",
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
            Self::Turn => "turn",
            Self::Fr => "fr",
        }
    }

    /// Looks up a unit by suffix, ignoring ASCII case.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }

    /// Returns `true` for length units.
    #[must_use]
    pub const fn is_length(self) -> bool {
        !matches!(
            self,
            Self::S | Self::Ms | Self::Deg | Self::Rad | Self::Grad | Self::Turn | Self::Fr
        )
    }
}

/// A single-token value, or a pair of them.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A unitless number.
    Number(f64),
    /// An integer.
    Integer(i32),
    /// A percentage, `50.0` is `50%`.
    Percentage(f64),
    /// A number with a unit.
    Dimension(f64, Unit),
    /// A keyword.
    Keyword(ValueId),
    /// An author-defined identifier (`animation-name: spin`).
    CustomIdent(Arc<str>),
    /// A quoted string.
    String(Arc<str>),
    /// A `url()`.
    Url(Arc<str>),
    /// A resolved color.
    Color(Color),
    /// One `font-family` entry.
    FontFamily(Arc<str>),
    /// Two values printed with a space, or once when equal.
    Pair(Value, Value),
}

impl Primitive {
    /// Appends the CSS text of this primitive.
    pub fn serialize(&self, out: &mut String) {
        match self {
            Self::Number(value) => write_number(out, *value),
            Self::Integer(value) => write_number(out, f64::from(*value)),
            Self::Percentage(value) => {
                write_number(out, *value);
                out.push('%');
            }
            Self::Dimension(value, unit) => {
                write_number(out, *value);
                out.push_str(unit.suffix());
            }
            Self::Keyword(keyword) => out.push_str(keyword.name()),
            Self::CustomIdent(ident) => out.push_str(ident),
            Self::String(text) => serialize_string(out, text),
            Self::Url(url) => {
                out.push_str("url(");
                serialize_string(out, url);
                out.push(')');
            }
            Self::Color(color) => color.serialize(out),
            Self::FontFamily(family) => {
                if is_plain_family_name(family) {
                    out.push_str(family);
                } else {
                    serialize_string(out, family);
                }
            }
            Self::Pair(first, second) => {
                first.serialize(out);
                if first != second {
                    out.push(' ');
                    second.serialize(out);
                }
            }
        }
    }

    /// Returns the numeric part of numbers, percentages, and dimensions.
    #[must_use]
    pub fn number_value(&self) -> Option<f64> {
        match self {
            Self::Number(value) | Self::Percentage(value) | Self::Dimension(value, _) => {
                Some(*value)
            }
            Self::Integer(value) => Some(f64::from(*value)),
            _ => None,
        }
    }
}

/// Appends `text` as a double-quoted CSS string.
pub fn serialize_string(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push('"');
}

fn is_plain_family_name(family: &str) -> bool {
    family.split(' ').all(|word| {
        let mut chars = word.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '-')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }) && ValueId::from_name(family).is_none()
}
