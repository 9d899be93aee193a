use std::io::{self, Write};

use stoich_forge::{IdSource, LetterSource, SequenceSource, Stoichiometry};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 15;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Column {
    title: &'static str,
    width: usize,
    align: Align,
}

impl Column {
    const fn left(title: &'static str, width: usize) -> Self {
        Self {
            title,
            width,
            align: Align::Left,
        }
    }

    const fn right(title: &'static str, width: usize) -> Self {
        Self {
            title,
            width,
            align: Align::Right,
        }
    }
}

/// Entities of a stoichiometry with the record each letter resolves to.
pub fn print_entity_table(source: &LetterSource, stoichiometry: &Stoichiometry) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<Vec<String>> = stoichiometry
        .sorted()
        .into_iter()
        .map(|(label, max)| {
            let (id, len) = match source.get(label) {
                Some(record) => (record.id.clone(), record.len().to_string()),
                None => ("(missing)".to_string(), "-".to_string()),
            };
            vec![label.to_string(), id, len, max.to_string()]
        })
        .collect();

    let columns = [
        Column::left("Entity", 6),
        Column::left("Record", 24),
        Column::right("Length", 8),
        Column::right("Max", 0),
    ];
    print_table(&mut out, "Stoichiometry", &columns, &rows);
}

/// Records taking part in multiset enumeration.
pub fn print_record_table(source: &IdSource) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<Vec<String>> = source
        .ids()
        .into_iter()
        .map(|id| {
            let len = source.get(&id).map(|r| r.len()).unwrap_or(0);
            vec![id, len.to_string()]
        })
        .collect();

    let columns = [Column::left("Record", 30), Column::right("Length", 0)];
    print_table(&mut out, "Sequence Records", &columns, &rows);
}

pub fn print_summary(title: &str, rows: &[(&str, String)]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_kv_table(&mut out, title, rows);
}

/// Draws a boxed table; a column of width 0 takes the remaining space.
fn print_table(out: &mut impl Write, title: &str, columns: &[Column], rows: &[Vec<String>]) {
    let sep_overhead = columns.len() * 3 + 1;
    let fixed: usize = columns.iter().map(|c| c.width).sum();
    let flex = SAFE_TABLE_WIDTH.saturating_sub(fixed + sep_overhead).max(4);
    let widths: Vec<usize> = columns
        .iter()
        .map(|c| if c.width == 0 { flex } else { c.width })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| -> String {
        let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{INDENT}{left}{}{right}", parts.join(mid))
    };
    let line = |cells: &[&str]| -> String {
        let parts: Vec<String> = cells
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (col, &w))| {
                let cell = truncate(cell, w);
                match col.align {
                    Align::Left => format!(" {cell:<w$} "),
                    Align::Right => format!(" {cell:>w$} "),
                }
            })
            .collect();
        format!("{INDENT}│{}│", parts.join("│"))
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let titles: Vec<&str> = columns.iter().map(|c| c.title).collect();
    let _ = writeln!(out, "{}", line(&titles));
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for row in rows.iter().take(MAX_ROWS) {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", line(&cells));
    }

    if rows.len() > MAX_ROWS {
        let more = format!("({} more)", rows.len() - MAX_ROWS);
        let mut cells = vec!["..."; columns.len()];
        if let Some(last) = cells.last_mut() {
            *last = more.as_str();
        }
        let _ = writeln!(out, "{}", line(&cells));
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
