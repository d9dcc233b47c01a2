use std::env::temp_dir;
use std::fs;

use cmd::command::export;
use cmd::command::export::Export;
use cmd::command::export::Format;
use cmd::command::ScenarioArgs;
use cmd::error::Error;
use cmd::error::Result;
use common::config::Config;
use uuid::Uuid;

fn export_args(format: Format, seed: u64) -> Export {
    let mut out_path = temp_dir();
    out_path.push(format!("{}.out", Uuid::new_v4()));

    Export {
        scenario: ScenarioArgs {
            flows_triggered: Some(300),
            current_revenue: Some(500),
            seed: Some(seed),
        },
        out_path,
        format,
    }
}

#[test]
fn test_export_csv() -> Result<()> {
    let args = export_args(Format::Csv, 1);
    export::start(&args, Config::default())?;
    let data = fs::read_to_string(&args.out_path)?;
    fs::remove_file(&args.out_path)?;

    let lines = data.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 91);
    assert_eq!(
        lines[0],
        "day,flows_without_sonar,flows_with_sonar,revenue_without_sonar,revenue_with_sonar"
    );
    assert!(lines[1].starts_with("1,"));
    assert!(lines[90].starts_with("90,"));
    assert_eq!(lines[45].split(',').count(), 5);

    Ok(())
}

#[test]
fn test_export_tsv() -> Result<()> {
    let args = export_args(Format::Tsv, 2);
    export::start(&args, Config::default())?;
    let data = fs::read_to_string(&args.out_path)?;
    fs::remove_file(&args.out_path)?;

    let header = data.lines().next().unwrap();
    assert_eq!(header.split('\t').count(), 5);

    Ok(())
}

#[test]
fn test_same_seed_same_file() -> Result<()> {
    let a = export_args(Format::Csv, 9);
    let b = export_args(Format::Csv, 9);
    export::start(&a, Config::default())?;
    export::start(&b, Config::default())?;
    let da = fs::read_to_string(&a.out_path)?;
    let db = fs::read_to_string(&b.out_path)?;
    fs::remove_file(&a.out_path)?;
    fs::remove_file(&b.out_path)?;

    assert_eq!(da, db);

    Ok(())
}

#[test]
fn test_out_path_is_directory() {
    let mut args = export_args(Format::Csv, 1);
    args.out_path = temp_dir();
    assert!(matches!(
        export::start(&args, Config::default()),
        Err(Error::BadRequest(_))
    ));
}

#[test]
fn test_out_path_parent_missing() {
    let mut args = export_args(Format::Csv, 1);
    args.out_path = temp_dir()
        .join(Uuid::new_v4().to_string())
        .join("series.csv");
    assert!(matches!(
        export::start(&args, Config::default()),
        Err(Error::BadRequest(_))
    ));
}
