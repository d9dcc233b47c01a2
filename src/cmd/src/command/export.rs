use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use clap::Parser;
use clap::ValueEnum;
use common::config::Config;
use tracing::debug;
use tracing::info;
use uplift_gen::batch_builder::export_batch;
use uplift_gen::generator;
use uplift_gen::Generator;

use crate::command::scenario_params;
use crate::command::ScenarioArgs;
use crate::error::Error;
use crate::error::Result;
use crate::make_rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    #[default]
    Csv,
    Tsv,
}

impl Format {
    fn delimiter(&self) -> u8 {
        match self {
            Format::Csv => b',',
            Format::Tsv => b'\t',
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct Export {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,
    /// File to write the generated days to
    #[arg(long)]
    pub out_path: PathBuf,
    #[arg(long, value_enum, default_value = "csv")]
    pub format: Format,
}

/// Writes `batch` with a header row.
pub fn write_batch<W: io::Write>(w: W, batch: &RecordBatch, format: Format) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(format.delimiter())
        .build(w);
    writer.write(batch)?;

    Ok(())
}

fn check_out_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::BadRequest(format!(
            "out path {path:?} is a directory"
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.try_exists()? => Err(
            Error::BadRequest(format!("out path directory {parent:?} doesn't exist")),
        ),
        _ => Ok(()),
    }
}

pub fn start(args: &Export, mut cfg: Config) -> Result<()> {
    args.scenario.apply(&mut cfg);
    check_out_path(&args.out_path)?;
    debug!("out path: {:?} ({:?})", args.out_path, args.format);

    let params = scenario_params(&cfg);
    let gen = Generator::try_new(generator::Config::default())?;
    let series = gen.generate(&params, &mut make_rng(cfg.scenario.seed))?;

    let batch = export_batch(&series)?;
    write_batch(File::create(&args.out_path)?, &batch, args.format)?;
    info!("wrote {} days to {:?}", batch.num_rows(), args.out_path);

    Ok(())
}
