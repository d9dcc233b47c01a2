//! Text rendering of the demo page. Everything here only lays out data handed
//! in by `uplift_gen`; no figures are computed at this level.

use std::io::Write;

use common::types::COLUMN_ADDITIONAL_EVENTS;
use enum_iterator::all;
use uplift_gen::batch_builder::series_batch;
use uplift_gen::batch_builder::shops_batch;
use uplift_gen::batch_builder::visitors_batch;
use uplift_gen::error::UpliftGenError;
use uplift_gen::params::CURRENT_REVENUE;
use uplift_gen::params::FLOWS_TRIGGERED;
use uplift_gen::series::SeriesKind;
use uplift_gen::store::shops::top_shops;
use uplift_gen::store::visitors::visitors;
use uplift_gen::totals::MetricGroup;
use uplift_gen::ScenarioParameters;
use uplift_gen::Series;

use crate::error::Result;
use crate::render::chart::render_area_chart;
use crate::render::chart::ChartSize;
use crate::render::controls::render_control;
use crate::render::metrics::render_metrics;
pub use crate::render::style::Paint;
use crate::render::table::render_table;
use crate::render::table::Highlight;

pub mod chart;
pub mod controls;
pub mod metrics;
pub mod style;
pub mod table;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub chart_width: usize,
    pub chart_height: usize,
    pub color: bool,
}

fn heading<W: Write>(w: &mut W, title: &str, paint: Paint) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", paint.bold(title))?;
    writeln!(w, "{}", "-".repeat(title.chars().count()))?;

    Ok(())
}

fn render_generated<W: Write>(w: &mut W, series: &Series, opts: &PageOptions) -> Result<()> {
    let paint = Paint::from_color(opts.color);
    let size = ChartSize {
        width: opts.chart_width,
        height: opts.chart_height,
    };

    for kind in all::<SeriesKind>() {
        heading(w, &text::chart_title(kind), paint)?;
        writeln!(w, "{}", text::chart_description(kind))?;
        writeln!(w)?;
        render_area_chart(w, &series_batch(series, kind)?, size, paint)?;
    }

    let metrics = series.totals().metrics();
    for (group, title) in [
        (MetricGroup::Flows, text::FLOWS_SUMMARY),
        (MetricGroup::Revenue, text::REVENUE_SUMMARY),
    ] {
        heading(w, title, paint)?;
        let row = metrics
            .iter()
            .filter(|m| m.metric.group() == group)
            .copied()
            .collect::<Vec<_>>();
        render_metrics(w, &row, paint)?;
    }

    Ok(())
}

fn render_error<W: Write>(w: &mut W, err: &UpliftGenError, paint: Paint) -> Result<()> {
    let msg = match err {
        UpliftGenError::InvalidParameter(msg) => format!("Invalid parameter: {msg}"),
        other => other.to_string(),
    };
    let border = format!("!{}!", "!".repeat(msg.chars().count() + 2));

    writeln!(w)?;
    writeln!(w, "{border}")?;
    writeln!(w, "! {} !", paint.delta(&msg, true))?;
    writeln!(w, "{border}")?;

    Ok(())
}

/// Writes the whole page. When `series` is an error, the charts and metric
/// cards are replaced by a visible error block and the static sections still
/// render.
pub fn render_page<W: Write>(
    w: &mut W,
    params: &ScenarioParameters,
    series: std::result::Result<&Series, &UpliftGenError>,
    opts: &PageOptions,
) -> Result<()> {
    let paint = Paint::from_color(opts.color);

    writeln!(w, "{}", paint.bold(text::TITLE))?;
    writeln!(w, "{}", "=".repeat(text::TITLE.chars().count()))?;
    writeln!(w, "{}", text::INTRO)?;

    heading(w, text::CURRENT_PERFORMANCE, paint)?;
    render_control(w, &FLOWS_TRIGGERED, params.flows_triggered, paint)?;
    render_control(w, &CURRENT_REVENUE, params.current_revenue, paint)?;

    heading(w, text::VISITORS, paint)?;
    render_table(
        w,
        &visitors_batch(visitors())?,
        Some(&Highlight::equals(COLUMN_ADDITIONAL_EVENTS, "1")),
        paint,
    )?;
    writeln!(w, "{}", text::VISITORS_NOTE)?;

    match series {
        Ok(series) => render_generated(w, series, opts)?,
        Err(err) => render_error(w, err, paint)?,
    }

    heading(w, text::TOP_SHOPS, paint)?;
    writeln!(w, "{}", text::TOP_SHOPS_NOTE)?;
    writeln!(w)?;
    render_table(w, &shops_batch(top_shops())?, None, paint)?;

    heading(w, text::CASE_STUDIES, paint)?;
    for study in &text::CASE_STUDY_LINKS {
        writeln!(w, "  - {}: {}", paint.bold(study.shop), study.summary)?;
        writeln!(w, "    Read the full case study here: {}", study.url)?;
    }

    Ok(())
}
