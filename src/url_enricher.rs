use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use company_roster_lib::{enricher, logger, SearchEngine};

#[derive(Parser)]
#[command(name = "url-enricher", about = "Fill in missing company URLs from a web search")]
struct Cli {
    /// CSV file of name,url records; url may be empty
    csv: PathBuf,
}

fn main() {
    logger::init();
    let cli = Cli::parse();

    info!("Starting URL enrichment for {:?}", cli.csv);

    let engine = SearchEngine::new();
    if let Err(e) = enricher::run(&cli.csv, &engine) {
        error!("URL enrichment failed: {}", e);
        process::exit(1);
    }
}
