use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;

use log::{info, warn};

use crate::util;

/// One line of the roster file: a company name and its website URL.
/// An empty `url` means the record has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyEntry {
    pub name: String,
    pub url: String,
}

pub fn load_entries(path: &Path) -> Result<Vec<CompanyEntry>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut entries = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let name = record.get(0).unwrap_or("").to_string();
        if name.is_empty() {
            warn!("Skipping record with empty company name");
            continue;
        }
        // Anything but a clean name,url pair keeps the name and drops the rest.
        let url = if record.len() == 2 {
            record.get(1).unwrap_or("").to_string()
        } else {
            String::new()
        };
        entries.push(CompanyEntry { name, url });
    }
    info!("Loaded {} records from {:?}", entries.len(), path);
    Ok(entries)
}

/// Rewrites the full record set as `name,url` lines. The write goes through
/// a temp file so an interrupted run never truncates the roster.
pub fn write_entries(path: &Path, entries: &[CompanyEntry]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
    for entry in entries {
        wtr.write_record([entry.name.as_str(), entry.url.as_str()])?;
    }
    wtr.flush()?;
    let buf = wtr
        .into_inner()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    util::write_atomic(path, &String::from_utf8(buf)?)?;
    Ok(())
}
