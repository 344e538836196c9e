use std::error::Error;
use std::path::Path;

use log::{info, warn};

use crate::records::{self, CompanyEntry};

/// Seam for the external search lookup, so enrichment runs against a stub
/// in tests instead of a live search engine.
pub trait UrlLookup {
    fn lookup_url(&self, name: &str) -> Option<String>;
}

/// Fills in empty URLs, one sequential lookup per unresolved record.
/// Records that already carry a URL are left alone and never looked up.
/// Returns how many records were newly resolved.
pub fn fill_missing_urls(entries: &mut [CompanyEntry], lookup: &dyn UrlLookup) -> usize {
    let mut resolved = 0;
    for entry in entries.iter_mut() {
        if !entry.url.is_empty() {
            continue;
        }

        info!("Fetching URL for: {}", entry.name);
        match lookup.lookup_url(&entry.name) {
            Some(url) => {
                entry.url = url;
                resolved += 1;
            }
            None => warn!("No URL found for: {}", entry.name),
        }
    }
    resolved
}

/// Entry point for the enrichment run: load the roster, fill in missing
/// URLs, rewrite the whole file.
pub fn run(csv_path: &Path, lookup: &dyn UrlLookup) -> Result<(), Box<dyn Error>> {
    let mut entries = records::load_entries(csv_path)?;
    let resolved = fill_missing_urls(&mut entries, lookup);
    records::write_entries(csv_path, &entries)?;
    info!("URL fetching and updating completed. {} newly resolved.", resolved);
    Ok(())
}
