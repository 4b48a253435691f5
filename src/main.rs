use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use tracing::info;

use carport_pricing::error::AppError;
use carport_pricing::format::format_money;
use carport_pricing::models::{NumberStyle, Settings};
use carport_pricing::{bind_recalculator, logging, page, settings};
use carport_pricing::{MemorySink, PriceRecalculator, TotalPriceField};

/// Recomputes carport offer prices for every total price read from stdin.
#[derive(Parser, Debug)]
#[command(name = "carport-pricing", version)]
struct Cli {
  /// Page fixture with the initial total price and the input's data attributes
  #[arg(long)]
  page: PathBuf,

  /// Settings file; defaults to settings.json in the application directory
  #[arg(long)]
  settings: Option<PathBuf>,

  /// Print each update as a JSON object
  #[arg(long)]
  json: bool,

  /// Print the total price for this coverage percentage and exit
  #[arg(long, value_name = "PERCENT")]
  coverage: Option<f64>,

  #[arg(long, env = "CARPORT_PRICING_LOG", default_value = "warn")]
  log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let cli = Cli::parse();
  logging::init(&cli.log_level);

  let settings = load_settings(cli.settings.as_ref())?;
  let page_data = page::load_page(&cli.page)?;
  let recalculator = PriceRecalculator::from_dataset(&page_data.dataset, settings)?;
  info!(inputs = ?recalculator.inputs(), "recalculator ready");

  let stdout = io::stdout();
  let mut out = stdout.lock();

  if let Some(coverage) = cli.coverage {
    let total = recalculator
      .total_for_coverage(coverage)
      .ok_or_else(|| AppError::new("INVALID_COVERAGE", "coverage must be below 100"))?;
    writeln!(out, "{}", format_money(total, NumberStyle::Plain))?;
    return Ok(());
  }

  let sink = Rc::new(RefCell::new(MemorySink::new()));
  let mut field = TotalPriceField::new(page_data.total_price);
  bind_recalculator(&mut field, recalculator, Rc::clone(&sink));
  print_update(&mut out, &sink.borrow(), cli.json)?;

  for line in io::stdin().lock().lines() {
    field.set_value(line?);
    print_update(&mut out, &sink.borrow(), cli.json)?;
  }

  Ok(())
}

fn load_settings(explicit: Option<&PathBuf>) -> Result<Settings, AppError> {
  match explicit {
    Some(path) => settings::get_settings(path),
    None => {
      let app_dir = settings::resolve_app_dir()?;
      let path = settings::ensure_defaults(&app_dir)?;
      settings::get_settings(&path)
    }
  }
}

fn print_update(out: &mut impl Write, sink: &MemorySink, json: bool) -> Result<(), AppError> {
  if json {
    writeln!(out, "{}", serde_json::to_string(sink)?)?;
  } else {
    for line in sink.lines() {
      writeln!(out, "{line}")?;
    }
    writeln!(out)?;
  }
  out.flush()?;
  Ok(())
}
