//! Aligned plain-text tables.
//!
//! Widths count characters, so CJK narration text aligns by code point
//! rather than by terminal cell.

use crate::ui;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    #[must_use]
    pub fn from_prefs() -> Self {
        let prefs = ui::prefs();
        Self {
            max_width: prefs.term_width,
            color: prefs.color,
        }
    }
}

/// Render rows under headers, the last column taking whatever width is left.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    shrink_last_column(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let padded = pad(&text, *width);
                match severity_color(&text) {
                    Some(code) if options.color => padded.replacen(&text, &ui::paint(&text, code, true), 1),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(cells.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_last_column(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let (Some(max_width), Some(last)) = (max_width, widths.len().checked_sub(1)) else {
        return;
    };
    let separators = last * 2;
    let fixed: usize = widths[..last].iter().sum::<usize>() + separators;
    let available = max_width.saturating_sub(fixed);
    let floor = headers[last].chars().count().max(8);
    widths[last] = widths[last].min(available.max(floor));
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

fn severity_color(value: &str) -> Option<&'static str> {
    match value {
        "error" | "FAIL" => Some("31"),
        "warning" => Some("33"),
        "PASS" => Some("32"),
        _ => None,
    }
}
