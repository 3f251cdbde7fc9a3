// src/cli.rs
//
// Terminal frontend: one fetch, then the grid, the top gainer and a text bar
// chart on stdout. Warnings and notices go to stderr. With no flags every
// setting is the built-in default.

use std::io::{ self, Write };
use std::path::{ Path, PathBuf };

use clap::{ Parser, ValueEnum };
use color_eyre::eyre::{ bail, Result };
use log::LevelFilter;

use crate::{
    chart::{ text_bar, BarSeries },
    config::{ consts::*, options::{ AppOptions, ExportFormat } },
    data::{ DataSet, NUMERIC_COLUMNS },
    file,
    logger,
    model::CoercionPolicy,
    progress::Progress,
    scrape::{ self, Report },
    specs::SelectorTable,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned grid + top gainer + bar chart
    Table,
    Csv,
    Tsv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Fetch the PSX market summary and show the top gainer")]
pub struct Args {
    /// Market-summary page to fetch
    #[arg(long, default_value = MARKET_SUMMARY_URL)]
    pub url: String,

    /// CSS selector of the stock table
    #[arg(long, default_value = DEFAULT_TABLE_SELECTOR)]
    pub selector: String,

    /// Keep price/change/volume as the page text instead of parsing numbers
    #[arg(long)]
    pub raw: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write csv/tsv/json output to exactly this file instead of stdout
    /// (not valid with `--format table`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Leave the header line out of csv/tsv output
    #[arg(long)]
    pub no_headers: bool,

    /// Skip the bar chart in table output
    #[arg(long)]
    pub no_chart: bool,

    /// Debug-level entries in the log file
    #[arg(short, long)]
    pub verbose: bool,
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, url: &str) {
        eprintln!("Fetching {url} …");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_io(args, &mut stdout.lock(), &mut stderr.lock())
}

/// `run_with` against explicit output streams: results go to `out`,
/// warnings and notices to `err`.
pub fn run_io<W: Write, E: Write>(args: Args, out: &mut W, err: &mut E) -> Result<()> {
    if args.format == OutputFormat::Table && args.out.is_some() {
        bail!("--out needs --format csv, tsv or json");
    }

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    logger::init(Path::new(LOG_FILE), level);

    let options = options_from(&args);
    let spec = SelectorTable::new(&options.extract.selector)?;

    let mut progress = CliProgress;
    let report = match scrape::collect(
        &options.fetch,
        &spec,
        options.extract.coercion,
        &mut progress,
    ) {
        Ok(r) => r,
        Err(e) => {
            log::error!("CLI: fetch failed: {e}");
            writeln!(err, "Warning: error fetching market data: {e}")?;
            writeln!(err, "No stock data available at the moment.")?;
            return Ok(());
        }
    };

    for notice in &report.notices {
        writeln!(err, "{notice}")?;
    }

    if report.is_empty() {
        // keep stdout clean for piped csv/tsv/json
        match args.format {
            OutputFormat::Table => writeln!(out, "No stock data available at the moment.")?,
            _ => writeln!(err, "No stock data available at the moment.")?,
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_report(out, &report, !args.no_chart)?,
        _ if args.out.is_some() => {
            let path = file::write_export(&options.export, &report.rows)?;
            log::info!("CLI: wrote {}", path.display());
            writeln!(err, "Wrote {}", path.display())?;
        }
        _ => {
            let text = file::to_export_string(&options.export, &report.rows)?;
            out.write_all(text.as_bytes())?;
        }
    }

    Ok(())
}

fn options_from(args: &Args) -> AppOptions {
    let mut options = AppOptions::default();
    options.fetch.url = args.url.clone();
    options.extract.selector = args.selector.clone();
    if args.raw {
        options.extract.coercion = CoercionPolicy::Preserve;
    }
    options.export.format = match args.format {
        OutputFormat::Tsv => ExportFormat::Tsv,
        OutputFormat::Json => ExportFormat::Json,
        OutputFormat::Csv | OutputFormat::Table => ExportFormat::Csv,
    };
    options.export.include_headers = !args.no_headers;
    if let Some(p) = &args.out {
        options.export.set_path_exact(&p.to_string_lossy());
    }
    options
}

fn print_report<W: Write>(out: &mut W, report: &Report, chart: bool) -> io::Result<()> {
    let ds = DataSet::from_stock_rows(&report.rows);

    writeln!(out, "Current stock data")?;
    write_grid(out, &ds)?;

    writeln!(out)?;
    writeln!(out, "Top stock to watch")?;
    match report.top_gainer() {
        Some(top) => {
            let one = DataSet::from_stock_rows(std::slice::from_ref(top));
            write_grid(out, &one)?;
        }
        None => writeln!(out, "No stock with positive price change found.")?,
    }

    if chart {
        writeln!(out)?;
        writeln!(out, "Stock prices overview")?;
        write_chart(out, &report.chart())?;
    }
    Ok(())
}

fn write_grid<W: Write>(out: &mut W, ds: &DataSet) -> io::Result<()> {
    let headers = ds.headers.clone().unwrap_or_default();
    let cols = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &ds.rows {
        for (ci, cell) in row.iter().enumerate().take(cols) {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        let mut parts = Vec::with_capacity(cols);
        for ci in 0..cols {
            let cell = cells.get(ci).map(|s| s.as_str()).unwrap_or("");
            let w = widths[ci];
            if NUMERIC_COLUMNS.contains(&ci) {
                parts.push(format!("{cell:>w$}"));
            } else {
                parts.push(format!("{cell:<w$}"));
            }
        }
        parts.join("  ").trim_end().to_string()
    };

    writeln!(out, "{}", line(&headers))?;
    let total: usize = widths.iter().sum::<usize>() + 2 * cols.saturating_sub(1);
    writeln!(out, "{}", "-".repeat(total))?;
    for row in &ds.rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}

fn write_chart<W: Write>(out: &mut W, series: &BarSeries) -> io::Result<()> {
    if series.is_empty() {
        return writeln!(out, "(no numeric prices to chart)");
    }
    let label_w = series.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0).min(28);

    for bar in &series.bars {
        let label: String = bar.label.chars().take(label_w).collect();
        let change = match bar.change {
            Some(c) if c > 0.0 => format!("+{c:.2}"),
            Some(c) => format!("{c:.2}"),
            None => s!("?"),
        };
        writeln!(
            out,
            "{label:<label_w$} │{} {:.2} ({change})",
            text_bar(series.height_fraction(bar), 40),
            bar.price,
        )?;
    }
    Ok(())
}
