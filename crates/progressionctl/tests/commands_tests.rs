//! Tests for commands.rs

use progression_common::config::{FishingConfig, GeneratorConfig, XpCurveConfig};
use progression_common::ProgressionError;
use progressionctl::cli::{Cli, Commands};
use progressionctl::commands::{
    fishing_settings, generate_fishing, generate_xp, lookup_level, print_fishing_table,
    xp_settings,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn xp_config(dir: &TempDir, max_level: u32) -> XpCurveConfig {
    XpCurveConfig {
        max_level,
        output: dir.path().join("xp_data.json"),
    }
}

fn fishing_config(dir: &TempDir) -> FishingConfig {
    FishingConfig {
        output: dir.path().join("catch_times_and_xp.csv"),
        ..FishingConfig::default()
    }
}

#[test]
fn test_xp_trace_one_integer_per_line() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    let table = generate_xp(&xp_config(&dir, 99), false, &mut out).unwrap();

    let trace = String::from_utf8(out).unwrap();
    let values: Vec<u64> = trace.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 99);
    assert_eq!(values[0], 0);
    assert_eq!(values[1], 83);
    assert_eq!(values[98], 13034441);
    assert_eq!(table.len(), 99);
    assert!(dir.path().join("xp_data.json").exists());
}

#[test]
fn test_quiet_suppresses_trace() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    generate_xp(&xp_config(&dir, 10), true, &mut out).unwrap();
    generate_fishing(&fishing_config(&dir), true, &mut out).unwrap();

    assert!(out.is_empty());
}

#[test]
fn test_generate_fishing_writes_csv() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    let rows = generate_fishing(&fishing_config(&dir), false, &mut out).unwrap();

    assert_eq!(rows.len(), 11);
    let csv = fs::read_to_string(dir.path().join("catch_times_and_xp.csv")).unwrap();
    assert_eq!(csv.lines().count(), 12);
    assert!(String::from_utf8(out).unwrap().contains("Min Catch Time"));
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = TempDir::new().unwrap();
    let settings = XpCurveConfig {
        max_level: 5,
        output: dir.path().join("missing").join("xp.json"),
    };
    let mut out = Vec::new();

    let err = generate_xp(&settings, true, &mut out).unwrap_err();
    assert!(err.to_string().contains("xp.json"));
}

#[test]
fn test_invalid_step_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let settings = FishingConfig {
        step: 0,
        ..fishing_config(&dir)
    };
    let mut out = Vec::new();

    assert!(generate_fishing(&settings, false, &mut out).is_err());
    assert!(!settings.output.exists());
    assert!(out.is_empty());
}

#[test]
fn test_settings_overrides() {
    let config = GeneratorConfig::default();

    let xp = xp_settings(&config, Some(20), None);
    assert_eq!(xp.max_level, 20);
    assert_eq!(xp.output, config.xp.output);

    let fishing = fishing_settings(&config, None, Some(25), Some(PathBuf::from("f.csv")));
    assert_eq!(fishing.max_level, 100);
    assert_eq!(fishing.step, 25);
    assert_eq!(fishing.output, PathBuf::from("f.csv"));
}

#[test]
fn test_lookup_level_from_curve() {
    let progress = lookup_level(900, None, &XpCurveConfig::default()).unwrap();
    assert_eq!(progress.level, 8);
    assert_eq!(progress.current_xp, 97);
}

#[test]
fn test_lookup_level_from_exported_table() {
    let dir = TempDir::new().unwrap();
    let settings = xp_config(&dir, 99);
    generate_xp(&settings, true, &mut Vec::new()).unwrap();

    let progress = lookup_level(13034441, Some(settings.output.as_path()), &settings).unwrap();
    assert_eq!(progress.level, 99);
    assert_eq!(progress.progress_percent, 100.0);
}

#[test]
fn test_lookup_level_missing_table_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    assert!(lookup_level(10, Some(path.as_path()), &XpCurveConfig::default()).is_err());
}

#[test]
fn test_print_fishing_table_alignment() {
    let rows = progression_common::build_fishing_table(100, 50).unwrap();
    let mut out = Vec::new();
    print_fishing_table(&rows, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Level  Min Catch Time  Max Catch Time   XP");
    assert_eq!(lines[3], "  100               8              17  870");
    assert!(lines.iter().all(|l| l.len() == lines[0].len()));
}

#[test]
fn test_run_all_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("progression.toml");
    let xp_out = dir.path().join("xp.json");
    let fish_out = dir.path().join("fish.csv");
    fs::write(
        &config_path,
        format!(
            "[xp]\nmax_level = 3\noutput = {:?}\n\n[fishing]\nmax_level = 20\noutput = {:?}\n",
            xp_out.to_string_lossy(),
            fish_out.to_string_lossy()
        ),
    )
    .unwrap();

    let cli = Cli {
        config: Some(config_path),
        quiet: false,
        verbose: false,
        command: Some(Commands::All),
    };
    let mut out = Vec::new();
    progressionctl::commands::run(&cli, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("0\n83\n175\n"));
    assert_eq!(
        fs::read_to_string(&fish_out).unwrap(),
        "Level,Min Catch Time,Max Catch Time,XP\n0,3,6,5\n10,4,7,30\n20,4,8,70\n"
    );
    assert!(fs::read_to_string(&xp_out).unwrap().contains("\"3\": {"));
}

#[test]
fn test_run_all_writes_nothing_when_fishing_is_invalid() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("progression.toml");
    let xp_out = dir.path().join("xp.json");
    let fish_out = dir.path().join("fish.csv");
    fs::write(
        &config_path,
        format!(
            "[xp]\noutput = {:?}\n\n[fishing]\nstep = 0\noutput = {:?}\n",
            xp_out.to_string_lossy(),
            fish_out.to_string_lossy()
        ),
    )
    .unwrap();

    let cli = Cli {
        config: Some(config_path),
        quiet: true,
        verbose: false,
        command: None,
    };
    let err = progressionctl::commands::run(&cli, &mut Vec::new()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProgressionError>(),
        Some(ProgressionError::InvalidStep)
    ));
    assert!(!xp_out.exists());
    assert!(!fish_out.exists());
}

#[test]
fn test_run_all_writes_nothing_when_xp_overflows() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("progression.toml");
    let xp_out = dir.path().join("xp.json");
    let fish_out = dir.path().join("fish.csv");
    fs::write(
        &config_path,
        format!(
            "[xp]\nmax_level = 500\noutput = {:?}\n\n[fishing]\noutput = {:?}\n",
            xp_out.to_string_lossy(),
            fish_out.to_string_lossy()
        ),
    )
    .unwrap();

    let cli = Cli {
        config: Some(config_path),
        quiet: true,
        verbose: false,
        command: Some(Commands::All),
    };

    assert!(progressionctl::commands::run(&cli, &mut Vec::new()).is_err());
    assert!(!xp_out.exists());
    assert!(!fish_out.exists());
}
