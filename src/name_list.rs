use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::util;

pub const SAMPLE_FILE: &str = "sample_companies.txt";

const SAMPLE_NAMES: [&str; 5] = ["A社", "B社", "B社", "C社", "A社"];

/// Reads a line-delimited name list. Lines are trimmed; blank lines dropped.
pub fn load_names(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn save_names(path: &Path, names: &[String]) -> io::Result<()> {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    util::write_atomic(path, &out)
}

/// Writes the fixed demonstration list used by `--sample`.
pub fn create_sample_file(path: &Path) -> io::Result<()> {
    let mut out = String::new();
    for name in SAMPLE_NAMES {
        out.push_str(name);
        out.push('\n');
    }
    util::write_atomic(path, &out)?;
    info!("Created sample file {:?}", path);
    Ok(())
}
