use std::io::Write;

use arrow::array::Array;
use arrow::array::AsArray;
use arrow::array::PrimitiveArray;
use arrow::datatypes::ArrowPrimitiveType;
use arrow::datatypes::Float64Type;
use arrow::datatypes::Int64Type;
use arrow::record_batch::RecordBatch;
use common::types::COLUMN_DAY;
use common::types::COLUMN_WITHOUT_SONAR;
use common::types::COLUMN_WITH_SONAR;

use crate::error::Error;
use crate::error::Result;
use crate::render::style::Fill;
use crate::render::Paint;

const AXIS_LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

fn column<'a, T: ArrowPrimitiveType>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<&'a PrimitiveArray<T>> {
    batch
        .column_by_name(name)
        .and_then(|col| col.as_primitive_opt::<T>())
        .ok_or_else(|| Error::BadRequest(format!("chart needs a numeric {name:?} column")))
}

/// Averages `values` into `width` buckets. When there are fewer values than
/// buckets, values repeat.
fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    let n = values.len();
    (0..width)
        .map(|c| {
            let lo = c * n / width;
            let hi = ((c + 1) * n / width).max(lo + 1).min(n);
            let bucket = &values[lo..hi];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

/// Draws the `Without Sonar` and `With Sonar` columns of `batch` as two areas
/// sharing one zero baseline, the baseline area in front.
pub fn render_area_chart<W: Write>(
    w: &mut W,
    batch: &RecordBatch,
    size: ChartSize,
    paint: Paint,
) -> Result<()> {
    let days = column::<Int64Type>(batch, COLUMN_DAY)?;
    let baseline = column::<Float64Type>(batch, COLUMN_WITHOUT_SONAR)?;
    let uplifted = column::<Float64Type>(batch, COLUMN_WITH_SONAR)?;
    if days.is_empty() {
        return Err(Error::BadRequest("chart has no rows".to_string()));
    }

    let baseline = downsample(baseline.values(), size.width);
    let uplifted = downsample(uplifted.values(), size.width);
    let y_max = baseline
        .iter()
        .chain(uplifted.iter())
        .fold(0f64, |acc, v| acc.max(*v));
    let y_max = if y_max > 0. { y_max } else { 1. };

    for row in (0..size.height).rev() {
        let threshold = y_max * (row as f64 + 0.5) / size.height as f64;
        let label = if row == size.height - 1 {
            format!("{y_max:.0}")
        } else if row == 0 {
            "0".to_string()
        } else if row == size.height / 2 {
            format!("{:.0}", y_max / 2.)
        } else {
            String::new()
        };

        let line = baseline
            .iter()
            .zip(&uplifted)
            .map(|(b, u)| {
                let fill = if *b >= threshold {
                    Some(Fill::Baseline)
                } else if *u >= threshold {
                    Some(Fill::Uplifted)
                } else {
                    None
                };
                match fill {
                    Some(fill) => paint.fill(fill, &fill.glyph().to_string()),
                    None => " ".to_string(),
                }
            })
            .collect::<String>();
        writeln!(w, "{label:>AXIS_LABEL_WIDTH$} |{line}")?;
    }

    writeln!(w, "{:>AXIS_LABEL_WIDTH$} +{}", "", "-".repeat(size.width))?;
    let first = format!("Day {}", days.value(0));
    let last = format!("Day {}", days.value(days.len() - 1));
    let gap = size.width.saturating_sub(first.len() + last.len()).max(1);
    writeln!(
        w,
        "{:>AXIS_LABEL_WIDTH$}  {first}{}{last}",
        "",
        " ".repeat(gap)
    )?;
    writeln!(
        w,
        "{:>AXIS_LABEL_WIDTH$}  {} {}   {} {}",
        "",
        paint.fill(Fill::Baseline, &Fill::Baseline.glyph().to_string()),
        COLUMN_WITHOUT_SONAR,
        paint.fill(Fill::Uplifted, &Fill::Uplifted.glyph().to_string()),
        COLUMN_WITH_SONAR
    )?;

    Ok(())
}
