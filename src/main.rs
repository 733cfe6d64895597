mod archiver;
mod error;
mod extractor;
mod fetcher;
mod identity;
mod logging;
mod models;
mod parser;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::extractor::Extractor;
use crate::fetcher::{FetchConfig, HttpFetcher};
use crate::parser::PageSelectors;

/// Extract product information from Amazon product URLs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input CSV file containing Amazon product URLs
    input_csv: PathBuf,

    /// Path to the output CSV file where product information will be saved
    output_csv: PathBuf,
}

fn main() -> Result<()> {
    logging::init_logging("info");
    let args = Args::parse();

    let fetcher =
        HttpFetcher::new(&FetchConfig::default()).context("failed to build HTTP client")?;
    let selectors = PageSelectors::new()?;
    let extractor = Extractor::new(fetcher, selectors);

    archiver::run(&args.input_csv, &args.output_csv, &extractor)?;
    Ok(())
}
