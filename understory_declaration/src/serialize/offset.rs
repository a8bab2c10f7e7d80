// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `offset` shorthand.

use alloc::string::String;

use understory_css_property::{PropertyId, ValueId};
use understory_css_value::Value;

use super::{keyword_expanding_initial_placeholder, text_expanding_initial_placeholder};
use crate::read::DeclarationRead;

/// The value of a longhand the author wrote, skipping implicit ones.
fn explicit<B: DeclarationRead + ?Sized>(block: &B, id: PropertyId) -> Option<&Value> {
    let property = block.property_at(block.find_property_index(id)?);
    (!property.is_implicit()).then(|| property.value())
}

fn append(out: &mut String, separator: &str, id: PropertyId, value: &Value) {
    if !out.is_empty() {
        out.push_str(separator);
    }
    out.push_str(&text_expanding_initial_placeholder(id, value));
}

/// `offset`: position and path as written, then the distance unless zero,
/// the rotation unless `auto`, and `/ anchor` unless `auto`.
pub(super) fn offset<B: DeclarationRead + ?Sized>(block: &B) -> String {
    use PropertyId as P;
    let mut out = String::new();

    for id in [P::OffsetPosition, P::OffsetPath] {
        if let Some(value) = explicit(block, id) {
            append(&mut out, " ", id, value);
        }
    }

    if let Some(distance) = explicit(block, P::OffsetDistance)
        && !distance.is_initial_placeholder()
        && !distance.is_zero()
    {
        append(&mut out, " ", P::OffsetDistance, distance);
    }

    if let Some(rotate) = explicit(block, P::OffsetRotate)
        && !rotate.is_initial_value(P::OffsetRotate)
    {
        append(&mut out, " ", P::OffsetRotate, rotate);
    }

    if let Some(anchor) = explicit(block, P::OffsetAnchor)
        && keyword_expanding_initial_placeholder(P::OffsetAnchor, anchor) != Some(ValueId::Auto)
    {
        append(&mut out, " / ", P::OffsetAnchor, anchor);
    }

    out
}
