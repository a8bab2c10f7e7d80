// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `border`, `border-block`, `border-inline`, `border-image` and
//! `border-radius`.

use alloc::string::String;

use understory_css_property::{PropertyId, shorthand_longhands};
use understory_css_value::fold_box_sides;

use super::{common_value, text_expanding_initial_placeholder};
use crate::read::DeclarationRead;

/// `border` also resets `border-image`, so it only applies when every
/// `border-image-*` longhand is initial.
pub(super) fn border<B: DeclarationRead + ?Sized>(block: &B) -> Option<String> {
    let image_is_initial = shorthand_longhands(PropertyId::BorderImage)
        .iter()
        .all(|&longhand| {
            block
                .property_value(longhand)
                .is_some_and(|value| value.is_initial_value(longhand))
        });
    if !image_is_initial {
        tracing::trace!("border-image is not initial; border not representable");
        return None;
    }
    triplet(
        block,
        PropertyId::BorderWidth,
        PropertyId::BorderStyle,
        PropertyId::BorderColor,
    )
}

/// `<width> <style> <color>`, each taken from a per-side shorthand whose
/// sides must agree. Default components are dropped.
pub(super) fn triplet<B: DeclarationRead + ?Sized>(
    block: &B,
    width: PropertyId,
    style: PropertyId,
    color: PropertyId,
) -> Option<String> {
    let width = common_value(block, width)?;
    let style = common_value(block, style)?;
    let color = common_value(block, color)?;

    let style = (style != "none").then_some(style);
    let color = (color != "currentcolor").then_some(color);
    let width = (width != "medium" || (style.is_none() && color.is_none())).then_some(width);

    let mut out = String::new();
    for part in [width, style, color].into_iter().flatten() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&part);
    }
    Some(out)
}

/// `<source> <slice> / <width> / <outset> <repeat>`.
///
/// Implicit components are omitted. Width and outset can only follow an
/// explicit slice, and an outset without a width keeps both slashes.
pub(super) fn image<B: DeclarationRead + ?Sized>(block: &B) -> Option<String> {
    use PropertyId as P;
    let mut out = String::new();
    let mut omitted_slice = false;
    let mut omitted_width = false;
    let mut separator = "";

    for &longhand in shorthand_longhands(P::BorderImage) {
        if block.is_property_implicit(longhand) {
            match longhand {
                P::BorderImageSlice => omitted_slice = true,
                P::BorderImageWidth => omitted_width = true,
                _ => {}
            }
            continue;
        }
        if omitted_slice && matches!(longhand, P::BorderImageWidth | P::BorderImageOutset) {
            tracing::trace!("border-image width or outset without a slice");
            return None;
        }

        let value = block.property_value(longhand)?;
        if value
            .as_border_image_width()
            .is_some_and(|width| width.overrides_border_widths)
        {
            tracing::trace!("border-image width also sets border widths");
            return None;
        }

        match longhand {
            P::BorderImageWidth => separator = " / ",
            P::BorderImageOutset => separator = if omitted_width { " / / " } else { " / " },
            _ => {}
        }
        out.push_str(separator);
        out.push_str(&text_expanding_initial_placeholder(longhand, value));
        separator = " ";
    }

    if out.is_empty() {
        out.push_str("none");
    }
    Some(out)
}

/// Horizontal radii folded like box sides, then `/` and the vertical radii
/// when any corner is elliptical.
pub(super) fn radius<B: DeclarationRead + ?Sized>(block: &B) -> Option<String> {
    let mut horizontal = [const { String::new() }; 4];
    let mut vertical = [const { String::new() }; 4];
    for (index, &corner) in shorthand_longhands(PropertyId::BorderRadius).iter().enumerate() {
        let value = block.property_value(corner)?;
        let (h, v) = match value.as_pair() {
            Some((first, second)) => (first.css_text(), second.css_text()),
            None => {
                let text = text_expanding_initial_placeholder(corner, value);
                (text.clone(), text)
            }
        };
        horizontal[index] = h;
        vertical[index] = v;
    }

    let fold = |radii: &[String; 4]| fold_box_sides(&radii[0], &radii[1], &radii[2], &radii[3]);
    let mut out = fold(&horizontal);
    if horizontal != vertical {
        out.push_str(" / ");
        out.push_str(&fold(&vertical));
    }
    Some(out)
}
