use std::io;
use std::io::IsTerminal;
use std::io::Write;

use clap::Parser;
use common::config::Config;
use tracing::info;
use uplift_gen::generator;
use uplift_gen::Generator;

use crate::command::scenario_params;
use crate::command::ScenarioArgs;
use crate::error::Result;
use crate::make_rng;
use crate::render;
use crate::render::PageOptions;

#[derive(Parser, Clone, Debug, Default)]
pub struct Page {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,
    /// Chart width in columns
    #[arg(long)]
    pub chart_width: Option<usize>,
    /// Chart height in rows
    #[arg(long)]
    pub chart_height: Option<usize>,
    /// Plain text without ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

/// Renders the page to stdout.
pub fn start(args: &Page, cfg: Config) -> Result<()> {
    let color = !args.no_color && io::stdout().is_terminal();
    let stdout = io::stdout();
    let mut w = stdout.lock();
    write(&mut w, args, cfg, color)?;
    w.flush()?;

    Ok(())
}

/// One full render cycle: generate, then draw every section into `w`. A rejected
/// scenario is drawn as an error block and then returned as the command error.
pub fn write<W: Write>(w: &mut W, args: &Page, mut cfg: Config, color: bool) -> Result<()> {
    args.scenario.apply(&mut cfg);
    if let Some(v) = args.chart_width {
        cfg.chart.width = v;
    }
    if let Some(v) = args.chart_height {
        cfg.chart.height = v;
    }
    cfg.chart.validate()?;

    let params = scenario_params(&cfg);
    let gen = Generator::try_new(generator::Config::default())?;
    let mut rng = make_rng(cfg.scenario.seed);
    let series = gen.generate(&params, &mut rng);

    let opts = PageOptions {
        chart_width: cfg.chart.width,
        chart_height: cfg.chart.height,
        color,
    };
    render::render_page(w, &params, series.as_ref(), &opts)?;

    let totals = series?.totals();
    info!(
        "additional flows: {}, additional revenue: ${}",
        totals.additional_flows, totals.additional_revenue
    );

    Ok(())
}
