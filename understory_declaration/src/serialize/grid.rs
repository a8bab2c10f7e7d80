// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid placement and template shorthands.

use alloc::string::String;

use understory_css_property::{PropertyId, ValueId};
use understory_css_value::Value;

use super::{keyword_of, text_expanding_initial_placeholder};
use crate::read::DeclarationRead;

/// A longhand value together with the id that gives its placeholder meaning.
#[derive(Clone, Copy)]
struct Slot<'a> {
    id: PropertyId,
    value: &'a Value,
}

impl<'a> Slot<'a> {
    fn read<B: DeclarationRead + ?Sized>(block: &'a B, id: PropertyId) -> Option<Self> {
        Some(Self {
            id,
            value: block.property_value(id)?,
        })
    }

    fn text(self) -> String {
        text_expanding_initial_placeholder(self.id, self.value)
    }

    /// `keyword`, alone or as a one-item list.
    fn is(self, keyword: ValueId) -> bool {
        if self.value.is_initial_placeholder() {
            return self.id.initial_keyword() == Some(keyword);
        }
        self.value.is_keyword_including_list(keyword)
    }

    /// `keyword` anywhere in a list, or as the whole value.
    fn contains(self, keyword: ValueId) -> bool {
        match self.value.as_list() {
            Some(list) => list.iter().any(|item| item.is_keyword(keyword)),
            None => self.is(keyword),
        }
    }
}

/// A trailing line can be left out when it repeats a named line, or is
/// `auto` after anything else.
fn can_omit_trailing(value: Slot<'_>, trailing: Slot<'_>) -> bool {
    match value.value.as_custom_ident() {
        Some(name) => trailing.value.as_custom_ident() == Some(name),
        None => trailing.is(ValueId::Auto),
    }
}

/// `grid-row` and `grid-column`: `<start> [/ <end>]`.
pub(super) fn row_or_column<B: DeclarationRead + ?Sized>(
    block: &B,
    shorthand: PropertyId,
) -> Option<String> {
    let (start, end) = match shorthand {
        PropertyId::GridRow => (PropertyId::GridRowStart, PropertyId::GridRowEnd),
        _ => (PropertyId::GridColumnStart, PropertyId::GridColumnEnd),
    };
    let start = Slot::read(block, start)?;
    let end = Slot::read(block, end)?;
    let mut out = start.text();
    if !can_omit_trailing(start, end) {
        out.push_str(" / ");
        out.push_str(&end.text());
    }
    Some(out)
}

/// `grid-area`: up to four lines, dropping trailing ones that can be
/// inferred.
pub(super) fn area<B: DeclarationRead + ?Sized>(block: &B) -> Option<String> {
    let slots = [
        Slot::read(block, PropertyId::GridRowStart)?,
        Slot::read(block, PropertyId::GridColumnStart)?,
        Slot::read(block, PropertyId::GridRowEnd)?,
        Slot::read(block, PropertyId::GridColumnEnd)?,
    ];

    let mut trailing = 3;
    if can_omit_trailing(slots[1], slots[3]) {
        trailing -= 1;
        if can_omit_trailing(slots[0], slots[2]) {
            trailing -= 1;
            if can_omit_trailing(slots[0], slots[1]) {
                trailing -= 1;
            }
        }
    }

    let mut out = slots[0].text();
    for slot in &slots[1..=trailing] {
        out.push_str(" / ");
        out.push_str(&slot.text());
    }
    Some(out)
}

/// `grid-template`: either `<rows> / <columns>`, or area strings
/// interleaved with their row sizes and line names.
pub(super) fn template<B: DeclarationRead + ?Sized>(block: &B) -> Option<String> {
    let rows = Slot::read(block, PropertyId::GridTemplateRows)?;
    let columns = Slot::read(block, PropertyId::GridTemplateColumns)?;
    let areas = block.property_at(block.find_property_index(PropertyId::GridTemplateAreas)?);

    let Some(area_rows) = areas.value().as_grid_template_areas() else {
        let rows_text = rows.text();
        let columns_text = columns.text();
        if rows_text == columns_text
            && (columns.value.is_css_wide_keyword() || columns.is(ValueId::None))
        {
            return Some(rows_text);
        }
        let mut out = rows_text;
        out.push_str(" / ");
        out.push_str(&columns_text);
        return Some(out);
    };

    // Only a value written through this shorthand is known to fit the
    // interleaved form.
    if !areas.was_set_from_shorthand() {
        return None;
    }

    let mut out = String::new();
    let mut row = 0;
    let items: &[Value] = match rows.value.as_list() {
        Some(list) => list.as_slice(),
        None => core::slice::from_ref(rows.value),
    };
    for item in items {
        if !out.is_empty() {
            out.push(' ');
        }
        if item.is_grid_line_names() {
            item.serialize(&mut out);
            continue;
        }
        out.push_str(&area_rows.string_for_row(row).unwrap_or_default());
        if !item.is_keyword(ValueId::Auto) {
            out.push(' ');
            item.serialize(&mut out);
        }
        row += 1;
    }
    if !columns.is(ValueId::None) {
        out.push_str(" / ");
        out.push_str(&columns.text());
    }
    Some(out)
}

/// `grid`: a template, or `auto-flow` on one axis with a template on the
/// other.
pub(super) fn grid<B: DeclarationRead + ?Sized>(block: &B) -> Option<String> {
    let auto_columns = Slot::read(block, PropertyId::GridAutoColumns)?;
    let auto_rows = Slot::read(block, PropertyId::GridAutoRows)?;
    let auto_flow = Slot::read(block, PropertyId::GridAutoFlow)?;

    if auto_columns.is(ValueId::Auto) && auto_rows.is(ValueId::Auto) && auto_flow.is(ValueId::Row) {
        return template(block);
    }

    if keyword_of(block, PropertyId::GridTemplateAreas) != Some(ValueId::None) {
        tracing::trace!("grid with auto-flow cannot carry template areas");
        return None;
    }

    let rows = Slot::read(block, PropertyId::GridTemplateRows)?;
    let columns = Slot::read(block, PropertyId::GridTemplateColumns)?;
    let dense = if auto_flow.contains(ValueId::Dense) { " dense" } else { "" };

    let mut out = String::new();
    if auto_flow.contains(ValueId::Column) {
        if !auto_rows.is(ValueId::Auto) || !columns.is(ValueId::None) {
            return None;
        }
        out.push_str(&rows.text());
        out.push_str(" / auto-flow");
        out.push_str(dense);
        if !auto_columns.is(ValueId::Auto) {
            out.push(' ');
            out.push_str(&auto_columns.text());
        }
        return Some(out);
    }

    if !auto_flow.contains(ValueId::Row) && !auto_flow.contains(ValueId::Dense) {
        return None;
    }
    if !auto_columns.is(ValueId::Auto) || !rows.is(ValueId::None) {
        return None;
    }
    out.push_str("auto-flow");
    out.push_str(dense);
    if !auto_rows.is(ValueId::Auto) {
        out.push(' ');
        out.push_str(&auto_rows.text());
    }
    out.push_str(" / ");
    out.push_str(&columns.text());
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PropertyEntry;
    use crate::mutable::MutableDeclarations;
    use alloc::sync::Arc;
    use alloc::vec;
    use understory_css_property::ParserMode;
    use understory_css_value::{
        GridLineNames, GridTemplateAreas, Separator, ValueKind, identifier, initial_placeholder,
        number, pixels,
    };

    fn set(block: &mut MutableDeclarations, shorthand: PropertyId, entries: &[(PropertyId, Value)]) {
        block.set_shorthand(shorthand, initial_placeholder(), false);
        for (id, value) in entries {
            block.set_entry(PropertyEntry::new(*id, value.clone(), false).set_from_shorthand(shorthand));
        }
    }

    fn block() -> MutableDeclarations {
        MutableDeclarations::new(ParserMode::HtmlStandard)
    }

    #[test]
    fn area_drops_inferable_lines() {
        let mut block = block();
        set(&mut block, PropertyId::GridArea, &[]);
        assert_eq!(area(&block).as_deref(), Some("auto"));

        let name = Value::custom_ident("main");
        set(
            &mut block,
            PropertyId::GridArea,
            &[
                (PropertyId::GridRowStart, name.clone()),
                (PropertyId::GridColumnStart, name.clone()),
                (PropertyId::GridRowEnd, name.clone()),
                (PropertyId::GridColumnEnd, name),
            ],
        );
        assert_eq!(area(&block).as_deref(), Some("main"));

        set(
            &mut block,
            PropertyId::GridArea,
            &[
                (PropertyId::GridRowStart, number(1)),
                (PropertyId::GridColumnStart, number(2)),
                (PropertyId::GridRowEnd, number(3)),
            ],
        );
        assert_eq!(area(&block).as_deref(), Some("1 / 2 / 3"));
    }

    #[test]
    fn row_keeps_distinct_end() {
        let mut block = block();
        set(
            &mut block,
            PropertyId::GridRow,
            &[
                (PropertyId::GridRowStart, number(1)),
                (PropertyId::GridRowEnd, number(3)),
            ],
        );
        assert_eq!(
            row_or_column(&block, PropertyId::GridRow).as_deref(),
            Some("1 / 3")
        );
    }

    #[test]
    fn template_without_areas() {
        let mut block = block();
        set(
            &mut block,
            PropertyId::GridTemplate,
            &[
                (PropertyId::GridTemplateRows, pixels(10)),
                (PropertyId::GridTemplateColumns, pixels(20)),
            ],
        );
        assert_eq!(template(&block).as_deref(), Some("10px / 20px"));

        set(&mut block, PropertyId::GridTemplate, &[]);
        assert_eq!(template(&block).as_deref(), Some("none"));
    }

    #[test]
    fn template_interleaves_areas() {
        let mut block = block();
        let areas = Value::new(ValueKind::GridTemplateAreas(GridTemplateAreas {
            rows: vec![Arc::<str>::from("a b"), Arc::<str>::from("c d")],
            column_count: 2,
        }));
        let names = Value::new(ValueKind::GridLineNames(GridLineNames {
            names: [Arc::<str>::from("top")].into_iter().collect(),
        }));
        let rows = Value::list(
            Separator::Space,
            [names, pixels(40), identifier(ValueId::Auto)],
        );
        set(
            &mut block,
            PropertyId::GridTemplate,
            &[
                (PropertyId::GridTemplateRows, rows),
                (PropertyId::GridTemplateColumns, pixels(100)),
                (PropertyId::GridTemplateAreas, areas.clone()),
            ],
        );
        assert_eq!(
            template(&block).as_deref(),
            Some("[top] \"a b\" 40px \"c d\" / 100px")
        );

        // Areas written directly may not fit the interleaved form.
        block.set_entry(PropertyEntry::new(PropertyId::GridTemplateAreas, areas, false));
        assert_eq!(template(&block), None);
    }

    #[test]
    fn grid_auto_flow() {
        let mut block = block();
        set(
            &mut block,
            PropertyId::Grid,
            &[
                (PropertyId::GridTemplateColumns, pixels(50)),
                (
                    PropertyId::GridAutoFlow,
                    Value::list(
                        Separator::Space,
                        [identifier(ValueId::Row), identifier(ValueId::Dense)],
                    ),
                ),
                (PropertyId::GridAutoRows, pixels(20)),
            ],
        );
        assert_eq!(grid(&block).as_deref(), Some("auto-flow dense 20px / 50px"));

        set(
            &mut block,
            PropertyId::Grid,
            &[
                (PropertyId::GridTemplateRows, pixels(30)),
                (PropertyId::GridAutoFlow, identifier(ValueId::Column)),
            ],
        );
        assert_eq!(grid(&block).as_deref(), Some("30px / auto-flow"));

        set(&mut block, PropertyId::Grid, &[]);
        assert_eq!(grid(&block).as_deref(), Some("none"));
    }
}
