pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod merge;
pub mod model;
pub mod sources;
pub mod store;

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

pub use crate::config::Settings;
pub use crate::error::HarvestError;
pub use crate::fetch::PageFetcher;
pub use crate::model::{Collection, Record};
pub use crate::sources::PageDefinition;

/// Counts reported after a run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub pages_scraped: usize,
    pub pages_failed: usize,
    pub records_extracted: usize,
    pub total_records: usize,
}

/// Fetch one listing page and extract its records.
pub fn scrape_page(
    fetcher: &PageFetcher,
    page: &PageDefinition,
) -> Result<Vec<Record>, HarvestError> {
    let body = fetcher.fetch(&page.url)?;
    Ok(extract::extract_records(&body, page))
}

/// Run one harvest pass: scrape every configured page, merge the results
/// into the store, save once at the end.
///
/// Per-page failures are logged and skipped; the run only aborts when the
/// page definitions cannot be loaded at all or the store cannot be saved.
pub fn run(settings: &Settings) -> Result<RunSummary, HarvestError> {
    let definitions = sources::load_definitions(Path::new(&settings.sources_file))?;
    let fetcher = PageFetcher::new(Duration::from_secs(settings.timeout), &settings.user_agent)?;

    let store_path = Path::new(&settings.store_file);
    let mut collection = store::load(store_path);

    let mut summary = RunSummary::default();
    for page in &definitions {
        match scrape_page(&fetcher, page) {
            Ok(records) => {
                info!("{}: {} records", page.url, records.len());
                summary.pages_scraped += 1;
                summary.records_extracted += records.len();
                merge::merge(&mut collection, records);
            }
            Err(e) => {
                warn!("Skipping {}: {e}", page.url);
                summary.pages_failed += 1;
            }
        }
    }

    store::save(&collection, store_path)?;
    summary.total_records = collection.len();
    Ok(summary)
}
