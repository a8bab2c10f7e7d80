// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide interning of common values.
//!
//! Parsers produce the same handful of values over and over: small pixel
//! lengths, `0%`, keywords, black and white. The pool hands out shared nodes
//! for these so blocks parsed from similar text share storage.
//!
//! Small numbers and keywords live in fixed tables filled on first use.
//! Colors and font families go through hash maps that grow for the life of
//! the pool and are never evicted. Every lookup is idempotent: asking twice
//! yields handles to the same node, and a value that falls outside the
//! tables is still equal to any shared one.
//!
//! ```rust
//! use understory_css_value::{Value, pixels};
//!
//! assert!(Value::ptr_eq(&pixels(12), &pixels(12)));
//! assert_eq!(pixels(1000), Value::px(1000.0));
//! ```

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use hashbrown::HashMap;
use understory_css_property::ValueId;

use crate::{Color, Value, ValueKind};

/// Largest integer served from the number, percentage, and pixel tables.
pub const MAX_CACHEABLE_INTEGER: i32 = 255;

const TABLE_SIZE: usize = MAX_CACHEABLE_INTEGER as usize + 1;

/// The shared value tables.
#[derive(Debug)]
pub struct ValuePool {
    numbers: Box<[OnceLock<Value>]>,
    percentages: Box<[OnceLock<Value>]>,
    pixels: Box<[OnceLock<Value>]>,
    identifiers: Box<[OnceLock<Value>]>,
    transparent: Value,
    white: Value,
    black: Value,
    initial_placeholder: Value,
    colors: RwLock<HashMap<Color, Value>>,
    font_families: RwLock<HashMap<Arc<str>, Value>>,
}

static SHARED: OnceLock<ValuePool> = OnceLock::new();

fn slots(len: usize) -> Box<[OnceLock<Value>]> {
    core::iter::repeat_with(OnceLock::new).take(len).collect()
}

fn cache_slot(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|slot| *slot < TABLE_SIZE)
}

impl ValuePool {
    fn new() -> Self {
        Self {
            numbers: slots(TABLE_SIZE),
            percentages: slots(TABLE_SIZE),
            pixels: slots(TABLE_SIZE),
            identifiers: slots(ValueId::ALL.len()),
            transparent: Value::color(Color::TRANSPARENT),
            white: Value::color(Color::WHITE),
            black: Value::color(Color::BLACK),
            initial_placeholder: Value::new(ValueKind::InitialPlaceholder),
            colors: RwLock::new(HashMap::new()),
            font_families: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide pool, creating it on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// A unitless number.
    #[must_use]
    pub fn number(&self, value: i32) -> Value {
        match cache_slot(value) {
            Some(slot) => self.numbers[slot]
                .get_or_init(|| Value::number(f64::from(value)))
                .clone(),
            None => Value::number(f64::from(value)),
        }
    }

    /// A percentage.
    #[must_use]
    pub fn percentage(&self, value: i32) -> Value {
        match cache_slot(value) {
            Some(slot) => self.percentages[slot]
                .get_or_init(|| Value::percentage(f64::from(value)))
                .clone(),
            None => Value::percentage(f64::from(value)),
        }
    }

    /// A length in `px`.
    #[must_use]
    pub fn pixels(&self, value: i32) -> Value {
        match cache_slot(value) {
            Some(slot) => self.pixels[slot]
                .get_or_init(|| Value::px(f64::from(value)))
                .clone(),
            None => Value::px(f64::from(value)),
        }
    }

    /// A keyword.
    #[must_use]
    pub fn identifier(&self, keyword: ValueId) -> Value {
        self.identifiers[usize::from(keyword.index())]
            .get_or_init(|| Value::keyword(keyword))
            .clone()
    }

    /// A color.
    #[must_use]
    pub fn color(&self, color: Color) -> Value {
        match color {
            Color::TRANSPARENT => return self.transparent.clone(),
            Color::WHITE => return self.white.clone(),
            Color::BLACK => return self.black.clone(),
            _ => {}
        }
        if let Some(value) = self
            .colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&color)
        {
            return value.clone();
        }
        self.colors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(color)
            .or_insert_with(|| Value::color(color))
            .clone()
    }

    /// A `font-family` entry.
    #[must_use]
    pub fn font_family(&self, family: &str) -> Value {
        if let Some(value) = self
            .font_families
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(family)
        {
            return value.clone();
        }
        self.font_families
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(Arc::from(family))
            .or_insert_with(|| Value::font_family(family))
            .clone()
    }

    /// The omitted-component stand-in.
    #[must_use]
    pub fn initial_placeholder(&self) -> Value {
        self.initial_placeholder.clone()
    }

    /// Number of colors currently cached, excluding the pre-seeded ones.
    #[must_use]
    pub fn cached_color_count(&self) -> usize {
        self.colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of font families currently cached.
    #[must_use]
    pub fn cached_font_family_count(&self) -> usize {
        self.font_families
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// A shared unitless number. See [`ValuePool::number`].
#[must_use]
pub fn number(value: i32) -> Value {
    ValuePool::shared().number(value)
}

/// A shared percentage. See [`ValuePool::percentage`].
#[must_use]
pub fn percentage(value: i32) -> Value {
    ValuePool::shared().percentage(value)
}

/// A shared `px` length. See [`ValuePool::pixels`].
#[must_use]
pub fn pixels(value: i32) -> Value {
    ValuePool::shared().pixels(value)
}

/// A shared keyword. See [`ValuePool::identifier`].
#[must_use]
pub fn identifier(keyword: ValueId) -> Value {
    ValuePool::shared().identifier(keyword)
}

/// A shared color. See [`ValuePool::color`].
#[must_use]
pub fn color(color: Color) -> Value {
    ValuePool::shared().color(color)
}

/// A shared `font-family` entry. See [`ValuePool::font_family`].
#[must_use]
pub fn font_family(family: &str) -> Value {
    ValuePool::shared().font_family(family)
}

/// The shared omitted-component stand-in.
#[must_use]
pub fn initial_placeholder() -> Value {
    ValuePool::shared().initial_placeholder()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_are_shared() {
        for value in [0, 1, 42, MAX_CACHEABLE_INTEGER] {
            assert!(Value::ptr_eq(&number(value), &number(value)));
            assert!(Value::ptr_eq(&percentage(value), &percentage(value)));
            assert!(Value::ptr_eq(&pixels(value), &pixels(value)));
        }
        assert_eq!(pixels(3).css_text(), "3px");
        assert_eq!(percentage(50).css_text(), "50%");
    }

    #[test]
    fn out_of_range_integers_are_fresh_but_equal() {
        for value in [-1, MAX_CACHEABLE_INTEGER + 1, i32::MAX] {
            let a = pixels(value);
            let b = pixels(value);
            assert!(!Value::ptr_eq(&a, &b));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn identifiers_are_shared() {
        let a = identifier(ValueId::Auto);
        assert!(Value::ptr_eq(&a, &identifier(ValueId::Auto)));
        assert_eq!(a, Value::keyword(ValueId::Auto));
    }

    #[test]
    fn seeded_colors_bypass_the_cache() {
        let pool = ValuePool::new();
        let black = pool.color(Color::BLACK);
        assert!(Value::ptr_eq(&black, &pool.color(Color::BLACK)));
        assert_eq!(pool.cached_color_count(), 0);
        let teal = pool.color(Color::rgb(0, 128, 128));
        assert!(Value::ptr_eq(&teal, &pool.color(Color::rgb(0, 128, 128))));
        assert_eq!(pool.cached_color_count(), 1);
    }

    #[test]
    fn color_cache_keeps_every_entry() {
        let pool = ValuePool::new();
        let first = pool.color(Color::rgb(1, 0, 0));
        for i in 0..1024_u32 {
            let [_, _, g, b] = i.to_be_bytes();
            let _ = pool.color(Color::rgb(1, g, b));
        }
        assert_eq!(pool.cached_color_count(), 1024);
        assert!(Value::ptr_eq(&first, &pool.color(Color::rgb(1, 0, 0))));
    }

    #[test]
    fn font_families_are_shared() {
        let pool = ValuePool::new();
        let a = pool.font_family("Helvetica");
        assert!(Value::ptr_eq(&a, &pool.font_family("Helvetica")));
        assert_eq!(pool.cached_font_family_count(), 1);
        assert_eq!(a.css_text(), "Helvetica");
    }

    #[test]
    fn placeholder_is_shared() {
        assert!(Value::ptr_eq(&initial_placeholder(), &initial_placeholder()));
        assert!(initial_placeholder().is_initial_placeholder());
    }

    #[test]
    fn concurrent_lookups_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (pixels(7), color(Color::rgb(9, 9, 9)))))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (px, c) in &results {
            assert!(Value::ptr_eq(px, &results[0].0));
            assert_eq!(c, &results[0].1);
        }
    }
}
