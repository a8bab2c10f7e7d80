// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered shorthands: `background`, `mask`, `animation`, `transition`, and
//! the two position pairs.
//!
//! Each longhand holds either a comma list with one item per layer or a single
//! value. Layers are rebuilt one at a time, omitting components that hold
//! their initial value unless the grammar needs them to stay unambiguous.

use alloc::string::String;

use smallvec::SmallVec;
use understory_css_property::{PropertyId, ValueId, shorthand_longhands};
use understory_css_value::Value;

use super::{keyword_expanding_initial_placeholder, text_expanding_initial_placeholder};
use crate::read::DeclarationRead;

/// The most longhands in any layered shorthand.
const MAX_LAYERED_LONGHANDS: usize = 9;

/// One layer's components and which of them to omit.
struct LayerValues<'a> {
    longhands: &'static [PropertyId],
    values: [Option<&'a Value>; MAX_LAYERED_LONGHANDS],
    skip: [bool; MAX_LAYERED_LONGHANDS],
}

impl<'a> LayerValues<'a> {
    fn new(longhands: &'static [PropertyId]) -> Self {
        debug_assert!(
            longhands.len() <= MAX_LAYERED_LONGHANDS,
            "layered shorthand has too many longhands"
        );
        Self {
            longhands,
            values: [None; MAX_LAYERED_LONGHANDS],
            skip: [false; MAX_LAYERED_LONGHANDS],
        }
    }

    /// Missing and initial values are skipped, as is anything `skip` marks.
    fn set(&mut self, index: usize, value: Option<&'a Value>, skip: bool) {
        let longhand = self.longhands[index];
        self.skip[index] = skip || value.is_none_or(|value| value.is_initial_value(longhand));
        self.values[index] = value;
    }

    fn index_of(&self, longhand: PropertyId) -> Option<usize> {
        self.longhands.iter().position(|&id| id == longhand)
    }

    fn keep(&mut self, longhand: PropertyId) {
        if let Some(index) = self.index_of(longhand) {
            self.skip[index] = false;
        }
    }

    fn value_id(&self, index: usize) -> Option<ValueId> {
        keyword_expanding_initial_placeholder(self.longhands[index], self.values[index]?)
    }

    /// Like [`Self::value_id`], but a custom identifier that spells a keyword
    /// counts as that keyword.
    fn value_id_including_custom_ident(&self, index: usize) -> Option<ValueId> {
        match self.values[index].and_then(Value::as_custom_ident) {
            Some(ident) => ValueId::from_name(ident),
            None => self.value_id(index),
        }
    }

    fn equal_value_ids(&self, a: usize, b: usize) -> bool {
        matches!((self.value_id(a), self.value_id(b)), (Some(a), Some(b)) if a == b)
    }

    fn is_pair(&self, index: usize) -> bool {
        self.values[index].is_some_and(Value::is_pair)
    }

    fn len(&self) -> usize {
        self.longhands.len()
    }

    /// Applies the rules that force or drop components for one longhand.
    fn apply_rules(&mut self, index: usize) {
        use PropertyId as P;
        let longhand = self.longhands[index];

        // A single box value sets both origin and clip.
        if matches!(longhand, P::BackgroundClip | P::MaskClip) && index >= 1 {
            let origin = index - 1;
            if self.equal_value_ids(origin, index) {
                if !self.skip[origin] && !self.skip[index] {
                    self.skip[index] = true;
                }
            } else if (!self.skip[origin] || !self.skip[index])
                && self.value_id(index) != Some(ValueId::NoClip)
            {
                self.skip[origin] = false;
                self.skip[index] = false;
            }
        }

        if self.skip[index] {
            return;
        }

        match longhand {
            // Size is only accepted after a position.
            P::BackgroundSize | P::MaskSize if index >= 2 => {
                self.skip[index - 2] = false;
                self.skip[index - 1] = false;
            }
            // One position component implies `center` for the other.
            P::BackgroundPositionY | P::MaskPositionY if index >= 1 => {
                let x = index - 1;
                if self.value_id(x) == Some(ValueId::Center) && self.value_id(index).is_some() {
                    self.skip[x] = true;
                } else if self.value_id(index) == Some(ValueId::Center) && !self.is_pair(x) {
                    self.skip[x] = false;
                    self.skip[index] = true;
                }
            }
            // The first time is the duration, so a delay needs one before it.
            P::AnimationDelay => self.keep(P::AnimationDuration),
            P::TransitionDelay => self.keep(P::TransitionDuration),
            _ => {}
        }
    }

    /// An animation name that reads as another longhand's keyword forces
    /// that longhand to be written.
    fn disambiguate_animation_name(&mut self) {
        use PropertyId as P;
        let Some(name) = self.index_of(P::AnimationName) else {
            return;
        };
        if self.skip[name] {
            return;
        }
        let forced = match self.value_id_including_custom_ident(name) {
            Some(
                ValueId::Alternate | ValueId::AlternateReverse | ValueId::Normal | ValueId::Reverse,
            ) => P::AnimationDirection,
            Some(ValueId::Backwards | ValueId::Both | ValueId::Forwards) => P::AnimationFillMode,
            Some(
                ValueId::Ease
                | ValueId::EaseIn
                | ValueId::EaseInOut
                | ValueId::EaseOut
                | ValueId::Linear
                | ValueId::StepEnd
                | ValueId::StepStart,
            ) => P::AnimationTimingFunction,
            Some(ValueId::Infinite) => P::AnimationIterationCount,
            Some(ValueId::Paused | ValueId::Running) => P::AnimationPlayState,
            _ => return,
        };
        self.keep(forced);
    }

    fn serialize(&self, out: &mut String) {
        let all_skipped = self.skip[..self.len()].iter().all(|skip| *skip);
        let mut separator = if out.is_empty() { "" } else { ", " };
        for (index, &longhand) in self.longhands.iter().enumerate() {
            let skipped = if all_skipped { index > 0 } else { self.skip[index] };
            if skipped {
                continue;
            }
            if matches!(longhand, PropertyId::BackgroundSize | PropertyId::MaskSize) {
                separator = " / ";
            }
            out.push_str(separator);
            match self.values[index] {
                Some(value) => out.push_str(&text_expanding_initial_placeholder(longhand, value)),
                None => out.push_str(longhand.initial_text().unwrap_or_default()),
            }
            separator = " ";
        }
    }
}

/// Serializes a layered shorthand.
pub(super) fn serialize<B: DeclarationRead + ?Sized>(block: &B, shorthand: PropertyId) -> Option<String> {
    let longhands = shorthand_longhands(shorthand);
    let mut values: SmallVec<[&Value; MAX_LAYERED_LONGHANDS]> = SmallVec::new();
    for &longhand in longhands {
        values.push(block.property_value(longhand)?);
    }

    let layer_count = values
        .iter()
        .filter_map(|value| value.as_comma_list())
        .map(|list| list.len())
        .fold(1, usize::max);

    let mut out = String::new();
    for layer in 0..layer_count {
        let mut layer_values = LayerValues::new(longhands);
        for (index, &value) in values.iter().enumerate() {
            match value.as_comma_list() {
                Some(list) => layer_values.set(index, list.item(layer), false),
                None => {
                    // Color belongs to the last layer, other singletons to the first.
                    let singleton_layer = if longhands[index] == PropertyId::BackgroundColor {
                        layer_count - 1
                    } else {
                        0
                    };
                    layer_values.set(index, Some(value), layer != singleton_layer);
                }
            }
        }
        for index in 0..longhands.len() {
            layer_values.apply_rules(index);
        }
        if shorthand == PropertyId::Animation {
            layer_values.disambiguate_animation_name();
        }
        layer_values.serialize(&mut out);
    }

    (!out.is_empty()).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PropertyEntry;
    use crate::mutable::MutableDeclarations;
    use understory_css_property::ParserMode;
    use understory_css_value::{Separator, Unit, identifier, initial_placeholder, pixels};

    fn layers(items: impl IntoIterator<Item = Value>) -> Value {
        Value::list(Separator::Comma, items)
    }

    fn background(entries: &[(PropertyId, Value)]) -> MutableDeclarations {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::Background, initial_placeholder(), false);
        for (id, value) in entries {
            block.set_entry(
                PropertyEntry::new(*id, value.clone(), false).set_from_shorthand(PropertyId::Background),
            );
        }
        block
    }

    #[test]
    fn initial_background_keeps_first_component() {
        let block = background(&[]);
        assert_eq!(
            serialize(&block, PropertyId::Background).as_deref(),
            Some("none")
        );
    }

    #[test]
    fn size_forces_position() {
        let block = background(&[
            (
                PropertyId::BackgroundImage,
                layers([Value::url("a.png"), Value::url("b.png")]),
            ),
            (
                PropertyId::BackgroundSize,
                layers([initial_placeholder(), identifier(ValueId::Contain)]),
            ),
        ]);
        assert_eq!(
            serialize(&block, PropertyId::Background).as_deref(),
            Some("url(\"a.png\"), url(\"b.png\") 0% 0% / contain")
        );
    }

    #[test]
    fn color_lands_in_last_layer() {
        let block = background(&[
            (
                PropertyId::BackgroundImage,
                layers([Value::url("a.png"), Value::url("b.png")]),
            ),
            (PropertyId::BackgroundColor, identifier(ValueId::Red)),
        ]);
        assert_eq!(
            serialize(&block, PropertyId::Background).as_deref(),
            Some("url(\"a.png\"), url(\"b.png\") red")
        );
    }

    #[test]
    fn origin_and_clip_collapse() {
        let same = background(&[
            (PropertyId::BackgroundOrigin, identifier(ValueId::ContentBox)),
            (PropertyId::BackgroundClip, identifier(ValueId::ContentBox)),
        ]);
        assert_eq!(
            serialize(&same, PropertyId::Background).as_deref(),
            Some("content-box")
        );

        let clip_only = background(&[(PropertyId::BackgroundClip, identifier(ValueId::ContentBox))]);
        assert_eq!(
            serialize(&clip_only, PropertyId::Background).as_deref(),
            Some("padding-box content-box")
        );
    }

    #[test]
    fn center_position_elides() {
        let block = background(&[
            (PropertyId::BackgroundPositionX, identifier(ValueId::Center)),
            (PropertyId::BackgroundPositionY, identifier(ValueId::Top)),
        ]);
        assert_eq!(serialize(&block, PropertyId::Background).as_deref(), Some("top"));

        let block = background(&[
            (PropertyId::BackgroundPositionX, pixels(10)),
            (PropertyId::BackgroundPositionY, identifier(ValueId::Center)),
        ]);
        assert_eq!(serialize(&block, PropertyId::Background).as_deref(), Some("10px"));
    }

    #[test]
    fn animation_name_ambiguity_forces_longhand() {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::Animation, initial_placeholder(), false);
        block.set_entry(
            PropertyEntry::new(PropertyId::AnimationName, Value::custom_ident("reverse"), false)
                .set_from_shorthand(PropertyId::Animation),
        );
        assert_eq!(
            serialize(&block, PropertyId::Animation).as_deref(),
            Some("normal reverse")
        );

        block.set_entry(
            PropertyEntry::new(PropertyId::AnimationName, Value::custom_ident("spin"), false)
                .set_from_shorthand(PropertyId::Animation),
        );
        assert_eq!(serialize(&block, PropertyId::Animation).as_deref(), Some("spin"));
    }

    #[test]
    fn delay_forces_duration() {
        let mut block = MutableDeclarations::new(ParserMode::HtmlStandard);
        block.set_shorthand(PropertyId::Transition, initial_placeholder(), false);
        block.set_entry(
            PropertyEntry::new(
                PropertyId::TransitionDelay,
                Value::dimension(1.0, Unit::S),
                false,
            )
            .set_from_shorthand(PropertyId::Transition),
        );
        assert_eq!(
            serialize(&block, PropertyId::Transition).as_deref(),
            Some("0s 1s")
        );
    }
}
