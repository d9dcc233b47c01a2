use std::io::Write;

use arrow::record_batch::RecordBatch;
use arrow::util::display::ArrayFormatter;
use arrow::util::display::FormatOptions;
use arrow::util::pretty::pretty_format_batches;

use crate::error::Error;
use crate::error::Result;
use crate::render::style;
use crate::render::Paint;

/// Marks the cells of one column whose displayed value satisfies `predicate`.
pub struct Highlight {
    pub column: &'static str,
    pub predicate: Box<dyn Fn(&str) -> bool>,
}

impl Highlight {
    pub fn new(column: &'static str, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            column,
            predicate: Box::new(predicate),
        }
    }

    /// Highlights cells equal to `value`.
    pub fn equals(column: &'static str, value: &'static str) -> Self {
        Self::new(column, move |v| v == value)
    }
}

fn cells(batch: &RecordBatch) -> Result<Vec<Vec<String>>> {
    let opts = FormatOptions::default();
    let formatters = batch
        .columns()
        .iter()
        .map(|col| ArrayFormatter::try_new(col.as_ref(), &opts))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((0..batch.num_rows())
        .map(|row| formatters.iter().map(|f| f.value(row).to_string()).collect())
        .collect())
}

fn border<W: Write>(w: &mut W, widths: &[usize]) -> Result<()> {
    let line = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    writeln!(w, "+{line}+")?;

    Ok(())
}

/// Draws `batch` as a bordered text table. Without a highlight this is arrow's
/// own pretty printer.
pub fn render_table<W: Write>(
    w: &mut W,
    batch: &RecordBatch,
    highlight: Option<&Highlight>,
    paint: Paint,
) -> Result<()> {
    let Some(highlight) = highlight else {
        writeln!(w, "{}", pretty_format_batches(&[batch.clone()])?)?;
        return Ok(());
    };

    let schema = batch.schema();
    let highlight_idx = schema.index_of(highlight.column).map_err(|_| {
        Error::BadRequest(format!("no column {:?} to highlight", highlight.column))
    })?;
    let header = schema
        .fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect::<Vec<_>>();
    let rows = cells(batch)?
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(idx, cell)| {
                    let marked = idx == highlight_idx && (highlight.predicate)(&cell);
                    match (marked, paint) {
                        (true, Paint::Plain) => (paint.highlight(&cell), false),
                        _ => (cell, marked),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut widths = header.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in &rows {
        for (idx, (cell, _)) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    border(w, &widths)?;
    let line = header
        .iter()
        .zip(&widths)
        .map(|(h, width)| format!(" {h:<width$} "))
        .collect::<Vec<_>>()
        .join("|");
    writeln!(w, "|{line}|")?;
    border(w, &widths)?;

    for row in &rows {
        // escape codes go around the padded cell so they don't count towards its width
        let line = row
            .iter()
            .zip(&widths)
            .map(|((cell, paint_after), width)| {
                let padded = format!("{cell:<width$}");
                if *paint_after {
                    format!(" {} ", paint.highlight(&padded))
                } else {
                    format!(" {padded} ")
                }
            })
            .collect::<Vec<_>>()
            .join("|");
        writeln!(w, "|{line}|")?;
    }
    border(w, &widths)?;

    if paint == Paint::Plain {
        writeln!(
            w,
            "{} marks cells in \"{}\"",
            style::PLAIN_HIGHLIGHT_MARK,
            highlight.column
        )?;
    }

    Ok(())
}
