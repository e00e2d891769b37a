use std::env;

use proxy_harvest::{config, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut settings = config::load_settings()?;

    // Optional positional argument overrides the sources file.
    if let Some(path) = env::args().nth(1) {
        settings.sources_file = path;
    }

    let summary = run(&settings)?;
    println!(
        "Scraped {} pages ({} failed), {} records extracted; store holds {} entries.",
        summary.pages_scraped,
        summary.pages_failed,
        summary.records_extracted,
        summary.total_records
    );

    Ok(())
}
