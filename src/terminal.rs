//! Terminal rendering of a [`Page`]: padded text, JSON, or CSV.

use std::fmt::Write;
use thiserror::Error;

use crate::display::{Card, Cell, Header, Page, Screen, Table};

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8,
}

pub fn render(page: &Page, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(page)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
        OutputFormat::Csv => render_csv(page),
    }
}

/// Human readable rendering
pub fn render_text(page: &Page) -> String {
    let mut out = String::new();

    if let Some(header) = &page.header {
        write_header(&mut out, header, page);
    }

    match &page.screen {
        Screen::Loading { message } => {
            let _ = writeln!(out, "{}", message);
        }
        Screen::Error { message } => {
            let _ = writeln!(out, "Error: {}", message);
        }
        Screen::Empty { heading, hint } => {
            let _ = writeln!(out, "{}", heading);
            let _ = writeln!(out, "{}", hint);
        }
        Screen::Table { table } => write_table(&mut out, table),
        Screen::Cards { cards } => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_card(&mut out, card);
            }
        }
    }

    out
}

fn write_header(out: &mut String, header: &Header, page: &Page) {
    let _ = writeln!(out, "{}", header.title);
    let _ = writeln!(out, "{}", header.subtitle);
    let _ = write!(out, "{}: {}", header.count_label, header.count);
    if let Some(view) = page.view {
        let _ = write!(out, "  [view: {}]", view);
    }
    out.push_str("\n\n");
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Badge { text, .. } if text.is_empty() => "-".to_string(),
        Cell::Badge { text, .. } => format!("[{}]", text),
        Cell::Actions { labels } => labels
            .iter()
            .map(|label| format!("<{}>", label))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.plain(),
    }
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let len = text.chars().count();
    if len < width {
        out.push_str(&" ".repeat(width - len));
    }
}

fn write_table(out: &mut String, table: &Table) {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|text| text.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, &widths, table.headers.iter().copied());

    let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &rows {
        write_row(out, &widths, row.iter().map(String::as_str));
    }
}

fn write_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let mut line = String::new();
    for (col, text) in cells.enumerate() {
        if col > 0 {
            line.push_str(" | ");
        }
        pad(&mut line, text, widths.get(col).copied().unwrap_or(0));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn write_card(out: &mut String, card: &Card) {
    let _ = write!(out, "== {}", card.title.plain());
    if let Some(badge) = &card.badge {
        let _ = write!(out, " {}", cell_text(badge));
    }
    out.push_str(" ==\n");

    for field in &card.fields {
        let _ = writeln!(out, "  {}: {}", field.label, cell_text(&field.value));
    }

    if !card.actions.is_empty() {
        let _ = writeln!(out, "  {}", cell_text(&Cell::actions(&card.actions)));
    }
}

/// CSV of the visible records. Nothing is written unless the view is
/// populated.
pub fn render_csv(page: &Page) -> Result<String, RenderError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match &page.screen {
        Screen::Table { table } => {
            writer.write_record(&table.headers)?;
            for row in &table.rows {
                writer.write_record(row.iter().map(Cell::plain))?;
            }
        }
        Screen::Cards { cards } => {
            if let Some(first) = cards.first() {
                let mut headers = vec!["Title", "Badge"];
                headers.extend(first.fields.iter().map(|field| field.label));
                writer.write_record(&headers)?;
            }
            for card in cards {
                let mut record = vec![
                    card.title.plain(),
                    card.badge.as_ref().map(Cell::plain).unwrap_or_default(),
                ];
                record.extend(card.fields.iter().map(|field| field.value.plain()));
                writer.write_record(&record)?;
            }
        }
        Screen::Loading { .. } | Screen::Error { .. } | Screen::Empty { .. } => {}
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| RenderError::Utf8)
}
