use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use cmd::config;
use cmd::error::Error;
use cmd::error::Result;
use tracing::level_filters::LevelFilter;
use uuid::Uuid;

fn write_config(contents: &str) -> PathBuf {
    let mut path = temp_dir();
    path.push(format!("{}.toml", Uuid::new_v4()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_without_file() -> Result<()> {
    let cfg = config::load(None)?;
    assert_eq!(cfg.log.level, LevelFilter::INFO);
    assert_eq!(cfg.scenario.flows_triggered, 300);
    assert_eq!(cfg.scenario.current_revenue, 500);
    assert_eq!(cfg.scenario.seed, None);
    assert_eq!(cfg.chart.width, 90);
    assert_eq!(cfg.chart.height, 12);

    Ok(())
}

#[test]
fn test_full_file() -> Result<()> {
    let path = write_config(
        r#"
[log]
level = "debug"

[scenario]
flows_triggered = 120
current_revenue = 750
seed = 42

[chart]
width = 60
height = 8
"#,
    );
    let cfg = config::load(Some(&path))?;
    fs::remove_file(&path)?;

    assert_eq!(cfg.log.level, LevelFilter::DEBUG);
    assert_eq!(cfg.scenario.flows_triggered, 120);
    assert_eq!(cfg.scenario.current_revenue, 750);
    assert_eq!(cfg.scenario.seed, Some(42));
    assert_eq!(cfg.chart.width, 60);
    assert_eq!(cfg.chart.height, 8);

    Ok(())
}

#[test]
fn test_partial_file() -> Result<()> {
    let path = write_config(
        r#"
[scenario]
current_revenue = 200
"#,
    );
    let cfg = config::load(Some(&path))?;
    fs::remove_file(&path)?;

    assert_eq!(cfg.scenario.flows_triggered, 300);
    assert_eq!(cfg.scenario.current_revenue, 200);
    assert_eq!(cfg.log.level, LevelFilter::INFO);

    Ok(())
}

#[test]
fn test_out_of_range_scenario() {
    let path = write_config(
        r#"
[scenario]
flows_triggered = 0
"#,
    );
    let res = config::load(Some(&path));
    fs::remove_file(&path).unwrap();

    assert!(matches!(res, Err(Error::UpliftGen(_))));
}

#[test]
fn test_zero_chart() {
    let path = write_config(
        r#"
[chart]
height = 0
"#,
    );
    let res = config::load(Some(&path));
    fs::remove_file(&path).unwrap();

    assert!(matches!(res, Err(Error::Common(_))));
}

#[test]
fn test_missing_file() {
    let mut path = temp_dir();
    path.push(format!("{}.toml", Uuid::new_v4()));
    assert!(matches!(config::load(Some(&path)), Err(Error::Config(_))));
}
