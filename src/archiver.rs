use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use crate::extractor::{Extractor, Outcome};
use crate::fetcher::PageSource;
use crate::models::ProductRecord;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub complete: usize,
    pub partial: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Complete => self.complete += 1,
            Outcome::Partial => self.partial += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Read the URL column of the input CSV, skipping its header row.
/// A row with an empty first column yields an empty URL so the row count is preserved.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut urls = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| {
            format!("failed to read row {} of {}", index + 2, path.display())
        })?;
        urls.push(row.get(0).unwrap_or_default().to_string());
    }
    Ok(urls)
}

pub fn write_records(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for record in records {
        writer.serialize(record.to_row())?;
    }
    // serialize() only emits the header with the first row
    if records.is_empty() {
        writer.write_record(HEADER)?;
    }

    writer.flush()?;
    Ok(())
}

const HEADER: [&str; 6] = [
    "URL",
    "Product Name",
    "ASIN",
    "Original Price",
    "Discounted Price",
    "Product Rating",
];

/// Extract every URL in `input` in order and write one row each to `output`.
pub fn run<S: PageSource>(
    input: &Path,
    output: &Path,
    extractor: &Extractor<S>,
) -> Result<BatchSummary> {
    let urls = read_urls(input)?;
    info!("Read {} URLs from {}", urls.len(), input.display());

    let mut summary = BatchSummary::default();
    let mut records = Vec::with_capacity(urls.len());
    for (index, url) in urls.iter().enumerate() {
        debug!("[{}/{}] {}", index + 1, urls.len(), url);
        let (record, outcome) = extractor.extract(url);
        summary.record(outcome);
        records.push(record);
    }

    write_records(output, &records)?;
    info!(
        "Wrote {} rows to {} ({} complete, {} without page data, {} without name/ASIN)",
        summary.total,
        output.display(),
        summary.complete,
        summary.partial,
        summary.failed
    );

    Ok(summary)
}
