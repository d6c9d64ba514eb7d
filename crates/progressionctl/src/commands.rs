//! Command execution
//!
//! Each command resolves its settings (config file, then CLI flags), builds
//! the table in memory and hands it to the exporter. Console output goes to
//! the writer passed in, so tests can capture it.

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use progression_common::config::{FishingConfig, GeneratorConfig, XpCurveConfig};
use progression_common::export::{write_fishing_csv, write_xp_json};
use progression_common::fishing::{build_fishing_table, FishingRow};
use progression_common::xp_table::{build_xp_table, LevelProgress, XpTable};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dispatch the parsed command line.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = GeneratorConfig::load(cli.config.as_deref())?;
    debug!("Effective configuration: {:?}", config);

    let command = cli.command.clone().unwrap_or(Commands::All);
    match command {
        Commands::Xp { max_level, output } => {
            let settings = xp_settings(&config, max_level, output);
            generate_xp(&settings, cli.quiet, out)?;
        }
        Commands::Fishing {
            max_level,
            step,
            output,
        } => {
            let settings = fishing_settings(&config, max_level, step, output);
            generate_fishing(&settings, cli.quiet, out)?;
        }
        Commands::All => {
            // Both tables must build before either file is touched
            let table = build_xp(&config.xp, cli.quiet, out)?;
            let rows = build_fishing(&config.fishing, cli.quiet, out)?;
            write_xp_json(&table, &config.xp.output)?;
            write_fishing_csv(&rows, &config.fishing.output)?;
        }
        Commands::Level { xp, table } => {
            let progress = lookup_level(xp, table.as_deref(), &config.xp)?;
            print_level(xp, &progress, out)?;
        }
    }

    Ok(())
}

/// Apply CLI overrides on top of the configured XP settings
pub fn xp_settings(
    config: &GeneratorConfig,
    max_level: Option<u32>,
    output: Option<PathBuf>,
) -> XpCurveConfig {
    XpCurveConfig {
        max_level: max_level.unwrap_or(config.xp.max_level),
        output: output.unwrap_or_else(|| config.xp.output.clone()),
    }
}

/// Apply CLI overrides on top of the configured fishing settings
pub fn fishing_settings(
    config: &GeneratorConfig,
    max_level: Option<u32>,
    step: Option<u32>,
    output: Option<PathBuf>,
) -> FishingConfig {
    FishingConfig {
        max_level: max_level.unwrap_or(config.fishing.max_level),
        step: step.unwrap_or(config.fishing.step),
        output: output.unwrap_or_else(|| config.fishing.output.clone()),
    }
}

/// Build and export the XP curve.
pub fn generate_xp(settings: &XpCurveConfig, quiet: bool, out: &mut dyn Write) -> Result<XpTable> {
    let table = build_xp(settings, quiet, out)?;
    write_xp_json(&table, &settings.output)?;
    Ok(table)
}

/// Build the XP curve in memory.
///
/// Unless `quiet`, every total is traced to `out` as it is computed.
pub fn build_xp(settings: &XpCurveConfig, quiet: bool, out: &mut dyn Write) -> Result<XpTable> {
    info!(
        "Generating XP curve for levels 1..={} -> {}",
        settings.max_level,
        settings.output.display()
    );

    let mut trace_error: Option<io::Error> = None;
    let table = build_xp_table(settings.max_level, |row| {
        if quiet || trace_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(out, "{}", row.total_xp) {
            trace_error = Some(e);
        }
    })?;

    if let Some(e) = trace_error {
        return Err(e).context("Failed to write XP trace");
    }

    Ok(table)
}

/// Build and export the fishing table, printing it unless `quiet`.
pub fn generate_fishing(
    settings: &FishingConfig,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<Vec<FishingRow>> {
    let rows = build_fishing(settings, quiet, out)?;
    write_fishing_csv(&rows, &settings.output)?;
    Ok(rows)
}

/// Build the fishing table in memory, printing it unless `quiet`.
pub fn build_fishing(
    settings: &FishingConfig,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<Vec<FishingRow>> {
    info!(
        "Generating fishing table 0..={} step {} -> {}",
        settings.max_level,
        settings.step,
        settings.output.display()
    );

    let rows = build_fishing_table(settings.max_level, settings.step)?;

    if !quiet {
        print_fishing_table(&rows, out).context("Failed to print fishing table")?;
    }

    Ok(rows)
}

/// Resolve `xp` against an exported table, or the computed curve when no table is given.
pub fn lookup_level(
    xp: u64,
    table_path: Option<&Path>,
    settings: &XpCurveConfig,
) -> Result<LevelProgress> {
    let table = match table_path {
        Some(path) => XpTable::load_json(path)
            .with_context(|| format!("Failed to load XP table {}", path.display()))?,
        None => build_xp_table(settings.max_level, |_| {})?,
    };

    Ok(table.level_for_xp(xp))
}

fn print_level(xp: u64, progress: &LevelProgress, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "XP:       {}", xp)?;
    writeln!(out, "Level:    {}", progress.level)?;
    if progress.max_xp > 0 {
        writeln!(
            out,
            "Progress: {}/{} ({:.2}%)",
            progress.current_xp, progress.max_xp, progress.progress_percent
        )?;
    } else {
        writeln!(out, "Progress: max level (+{} XP)", progress.current_xp)?;
    }
    Ok(())
}

/// Right-aligned console rendering of the fishing table
pub fn print_fishing_table(rows: &[FishingRow], out: &mut dyn Write) -> io::Result<()> {
    const HEADERS: [&str; 4] = ["Level", "Min Catch Time", "Max Catch Time", "XP"];

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.level.to_string(),
                r.min_catch_time.to_string(),
                r.max_catch_time.to_string(),
                r.xp.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:>w$}", h, w = w))
        .collect();
    writeln!(out, "{}", header.join("  "))?;

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:>w$}", c, w = w))
            .collect();
        writeln!(out, "{}", line.join("  "))?;
    }

    Ok(())
}
