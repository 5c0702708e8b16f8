//! Convert command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use colored::*;
use rand::Rng;
use serde::Serialize;

use super::ConvertArgs;
use crate::convert::{Conversion, RecordKind, convert, read_order_rows};

/// UTF-8 byte-order mark, prepended so spreadsheet applications pick up the
/// encoding when opening the output files. Presentation concern only; the
/// conversion core never sees it.
const UTF8_BOM: &str = "\u{feff}";

/// Per-file outcome for reporting and the `--json` summary.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum FileOutcome {
    Converted {
        input: String,
        output: String,
        kind: RecordKind,
        rows: usize,
    },
    Failed {
        input: String,
        error: String,
    },
}

/// Handle the convert command: each input file is converted independently,
/// and one file's failure never aborts its siblings.
pub fn handle_convert_command(args: ConvertArgs) -> Result<()> {
    let mut outcomes = Vec::with_capacity(args.files.len());

    for file in &args.files {
        match process_file(file, &args) {
            Ok((conversion, output_path)) => {
                println!(
                    "{} {} [{}] {} records -> {}",
                    "✓".green().bold(),
                    file.display(),
                    conversion.kind.label().cyan(),
                    conversion.row_count,
                    output_path.display()
                );
                outcomes.push(FileOutcome::Converted {
                    input: file.display().to_string(),
                    output: output_path.display().to_string(),
                    kind: conversion.kind,
                    rows: conversion.row_count,
                });
            }
            Err(err) => {
                println!(
                    "{} {}: {:#}",
                    "✗".red().bold(),
                    file.display(),
                    err
                );
                outcomes.push(FileOutcome::Failed {
                    input: file.display().to_string(),
                    error: format!("{:#}", err),
                });
            }
        }
    }

    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, FileOutcome::Failed { .. }))
        .count();

    if args.files.len() > 1 {
        println!(
            "{} of {} files converted",
            outcomes.len() - failed,
            outcomes.len()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed to convert", failed, outcomes.len());
    }
    Ok(())
}

/// Convert a single input file and write its CSV next to it (or into the
/// requested output directory).
fn process_file(input: &Path, args: &ConvertArgs) -> Result<(Conversion, PathBuf)> {
    log::info!("Converting {}", input.display());

    let rows = read_order_rows(input)?;
    if rows.is_empty() {
        anyhow::bail!("Excel file content is empty");
    }

    let conversion = convert(&rows);

    let output_dir = match &args.output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.clone()
        }
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let suffix: u32 = rand::rng().random_range(0..1000);
    let output_path = output_dir.join(output_filename(conversion.kind, Local::now(), suffix));

    let mut contents = String::with_capacity(UTF8_BOM.len() + conversion.csv.len());
    if !args.no_bom {
        contents.push_str(UTF8_BOM);
    }
    contents.push_str(&conversion.csv);

    fs::write(&output_path, contents)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    Ok((conversion, output_path))
}

/// Build the ERP import filename: kind prefix, wall-clock timestamp, and a
/// 3-digit suffix against same-second collisions within a batch.
fn output_filename(kind: RecordKind, now: DateTime<Local>, suffix: u32) -> String {
    format!(
        "{}_{}_{:03}.csv",
        kind.file_prefix(),
        now.format("%Y%m%d%H%M%S"),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_output_filename_format() {
        let now = Local.with_ymd_and_hms(2025, 7, 10, 12, 34, 56).unwrap();
        assert_eq!(
            output_filename(RecordKind::Return, now, 7),
            "MUFE_MOMO_ZOHO_RTN02_20250710123456_007.csv"
        );
        assert_eq!(
            output_filename(RecordKind::Shipment, now, 123),
            "MUFE_MOMO_ZOHO_SHPECOM_20250710123456_123.csv"
        );
    }
}
