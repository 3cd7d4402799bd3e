use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use dfr::{
    convert_to_float, create_slice, flatten, load_csv, Dimensions, LoadOptions, SlicePattern,
    Summary, Value,
};

/// Inspect and summarise a simple comma-separated file.
#[derive(Debug, Parser)]
#[command(name = "dfr", version, about)]
struct Args {
    /// CSV file to load
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Zero-based rows to drop (after blank lines are removed)
    #[arg(long, value_delimiter = ',', value_name = "ROWS")]
    ignore_rows: Vec<usize>,

    /// Zero-based columns to drop
    #[arg(long, value_delimiter = ',', value_name = "COLS")]
    ignore_cols: Vec<usize>,

    /// Actually drop --ignore-cols from each row
    #[arg(long)]
    apply_ignore_cols: bool,

    /// Report the row count as filtered rows + 1
    #[arg(long)]
    legacy_row_count: bool,

    /// Keep only rows whose --match-column cell equals this text ("*" keeps all)
    #[arg(long = "match", value_name = "VALUE")]
    pattern: Option<String>,

    /// Column tested by --match
    #[arg(long, default_value_t = 0)]
    match_column: usize,

    /// Columns to keep in the sliced output, in order
    #[arg(long, value_delimiter = ',', value_name = "COLS")]
    export: Vec<usize>,

    /// Column to coerce to numbers and summarise
    #[arg(long, value_name = "N")]
    column: Option<usize>,
}

#[derive(Debug, Serialize)]
struct Report {
    file: PathBuf,
    dims: [i64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    sliced_rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<ColumnReport>,
}

#[derive(Debug, Serialize)]
struct ColumnReport {
    index: usize,
    converted: usize,
    numeric_rate: f64,
    summary: Summary,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = LoadOptions::default()
        .with_ignore_rows(args.ignore_rows.iter().copied())
        .with_ignore_cols(args.ignore_cols.iter().copied())
        .with_applied_ignore_cols(args.apply_ignore_cols)
        .with_legacy_row_count(args.legacy_row_count);

    let table = load_csv(&args.file, &options)
        .with_context(|| format!("loading {}", args.file.display()))?;
    if table.dims == Dimensions::UNDEFINED {
        log::warn!("{} does not exist", args.file.display());
    }
    let dims = table.dims.as_pair();
    let mut frame = table.data;

    let mut sliced_rows = None;
    if args.pattern.is_some() || !args.export.is_empty() {
        let pattern = args
            .pattern
            .as_deref()
            .map_or(SlicePattern::Wildcard, SlicePattern::from);
        frame = create_slice(&frame, args.match_column, &pattern, &args.export);
        sliced_rows = Some(frame.len());
    }

    let column = args.column.map(|index| {
        let converted = convert_to_float(&mut frame, index);
        let single = create_slice(&frame, 0, &SlicePattern::Wildcard, &[index]);
        let values: Vec<Value> = flatten(&single);
        let summary = Summary::of(&values);
        ColumnReport {
            index,
            converted,
            numeric_rate: summary.numeric_rate(),
            summary,
        }
    });

    let report = Report {
        file: args.file,
        dims,
        sliced_rows,
        column,
    };
    let json = serde_json::to_string_pretty(&report).context("serialising report")?;
    println!("{json}");
    Ok(())
}
