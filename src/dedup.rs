use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

use log::info;

use crate::name_list;

/// Appended to the first occurrence of a name that recurs later.
pub const SOURCE_MARK: &str = "（重複元）";
/// Appended to every occurrence after the first.
pub const TARGET_MARK: &str = "（重複先）";

pub fn count_names(names: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Names occurring more than once, with their counts, in first-appearance order.
pub fn duplicate_names(
    names: &[String],
    counts: &HashMap<String, usize>,
) -> Vec<(String, usize)> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for name in names {
        let count = counts.get(name).copied().unwrap_or(0);
        if count > 1 && seen.insert(name.clone()) {
            duplicates.push((name.clone(), count));
        }
    }
    duplicates
}

/// Tags recurring names while keeping order and length intact.
///
/// Two passes: the full tally has to exist before the first occurrence can
/// be marked, because its mark depends on whether the name shows up again
/// later in the list.
pub fn annotate(names: &[String]) -> Vec<String> {
    let counts = count_names(names);

    let mut seen = HashSet::new();
    let mut annotated = Vec::with_capacity(names.len());
    for name in names {
        if counts[name] > 1 {
            if seen.insert(name.clone()) {
                annotated.push(format!("{}{}", name, SOURCE_MARK));
            } else {
                annotated.push(format!("{}{}", name, TARGET_MARK));
            }
        } else {
            annotated.push(name.clone());
        }
    }
    annotated
}

/// Loads a name list, prints the duplicate report, writes the annotated
/// list to `output` (or back over `input` when no output path is given).
pub fn process_file(input: &Path, output: Option<&Path>) -> io::Result<()> {
    let names = name_list::load_names(input)?;
    let counts = count_names(&names);
    let duplicates = duplicate_names(&names, &counts);

    println!("=== Duplicated company names ===");
    if duplicates.is_empty() {
        println!("No duplicated company names.");
    } else {
        for (i, (name, count)) in duplicates.iter().enumerate() {
            println!("{}. {} (occurs {} times)", i + 1, name, count);
        }
    }
    println!();

    let annotated = annotate(&names);
    let target = output.unwrap_or(input);
    name_list::save_names(target, &annotated)?;
    info!("Saved {} annotated names to {:?}", annotated.len(), target);

    println!("=== Result ===");
    for line in &annotated {
        println!("{}", line);
    }
    Ok(())
}
