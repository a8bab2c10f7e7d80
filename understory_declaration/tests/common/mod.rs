// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny parser covering the syntax these tests write.

use understory_css_property::{PropertyId, ValueId, is_custom_property_name, shorthand_longhands};
use understory_css_value::{Separator, Value, identifier};
use understory_declaration::{ParserContext, PropertyEntry, PropertyParser};

/// Parses single tokens, space lists, `var()`, and box or pair shorthands.
#[derive(Debug, Default)]
pub struct TestParser;

fn token(text: &str) -> Value {
    if let Some(number) = text.strip_suffix("px").and_then(|n| n.parse::<f64>().ok()) {
        return Value::px(number);
    }
    if let Some(number) = text.strip_suffix('%').and_then(|n| n.parse::<f64>().ok()) {
        return Value::percentage(number);
    }
    if let Some(keyword) = ValueId::from_name(text) {
        return identifier(keyword);
    }
    if let Ok(number) = text.parse::<f64>() {
        return Value::number(number);
    }
    Value::custom_ident(text)
}

fn longhand_value(text: &str) -> Value {
    if text.contains("var(") {
        return Value::variable_reference(text);
    }
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [single] => token(single),
        _ => Value::list(Separator::Space, tokens.into_iter().map(token)),
    }
}

fn expand_box<'a>(tokens: &[&'a str]) -> Option<[&'a str; 4]> {
    Some(match *tokens {
        [all] => [all, all, all, all],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        [top, right, bottom, left] => [top, right, bottom, left],
        _ => return None,
    })
}

impl PropertyParser for TestParser {
    fn parse_value(
        &self,
        id: PropertyId,
        text: &str,
        important: bool,
        _context: &ParserContext<'_>,
    ) -> Option<Vec<PropertyEntry>> {
        let text = text.trim();
        if !id.is_shorthand() {
            return Some(vec![PropertyEntry::new(id, longhand_value(text), important)]);
        }

        let longhands = shorthand_longhands(id);
        let entry = |longhand: PropertyId, value: Value| {
            PropertyEntry::new(longhand, value, important).set_from_shorthand(id)
        };

        if text.contains("var(") {
            let pending = Value::pending_substitution(id, Value::variable_reference(text));
            return Some(longhands.iter().map(|&l| entry(l, pending.clone())).collect());
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if let [single] = tokens.as_slice()
            && ValueId::from_name(single).is_some_and(ValueId::is_css_wide)
        {
            let value = token(single);
            return Some(longhands.iter().map(|&l| entry(l, value.clone())).collect());
        }

        let values: Vec<&str> = match longhands.len() {
            4 => expand_box(&tokens)?.to_vec(),
            2 => match tokens.as_slice() {
                [both] => vec![*both, *both],
                [first, second] => vec![*first, *second],
                _ => return None,
            },
            _ => return None,
        };
        Some(
            longhands
                .iter()
                .zip(values)
                .map(|(&longhand, text)| entry(longhand, token(text)))
                .collect(),
        )
    }

    fn parse_declaration(&self, text: &str, context: &ParserContext<'_>) -> Vec<PropertyEntry> {
        let mut entries = Vec::new();
        for declaration in text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let (value, important) = match value.trim().strip_suffix("!important") {
                Some(value) => (value.trim(), true),
                None => (value.trim(), false),
            };
            if is_custom_property_name(name) {
                entries.push(PropertyEntry::custom(name, value, important));
                continue;
            }
            let Some(id) = PropertyId::from_name(name) else {
                continue;
            };
            if let Some(parsed) = self.parse_value(id, value, important, context) {
                entries.extend(parsed);
            }
        }
        entries
    }
}
