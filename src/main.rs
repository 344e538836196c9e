use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::error;

use company_roster_lib::{dedup, logger, name_list};

#[derive(Parser)]
#[command(name = "dup-marker", about = "Mark duplicated company names in a plain-text list")]
struct Cli {
    /// Input file, one company name per line
    input: Option<PathBuf>,
    /// Output file (defaults to overwriting the input file)
    output: Option<PathBuf>,
    /// Create a sample input file and exit
    #[arg(long)]
    sample: bool,
}

fn main() {
    logger::init();
    let cli = Cli::parse();

    if cli.sample {
        if let Err(e) = name_list::create_sample_file(Path::new(name_list::SAMPLE_FILE)) {
            error!("Failed to create sample file: {}", e);
            process::exit(1);
        }
        return;
    }

    let input = match cli.input {
        Some(path) => path,
        None => {
            println!("Usage:");
            println!("  dup-marker <input> [output]");
            println!("  dup-marker --sample");
            println!();
            if offer_sample_run() {
                let sample = Path::new(name_list::SAMPLE_FILE);
                match name_list::create_sample_file(sample) {
                    Ok(()) => run(sample, None),
                    Err(e) => error!("Failed to create sample file: {}", e),
                }
            }
            process::exit(1);
        }
    };

    run(&input, cli.output.as_deref());
}

fn run(input: &Path, output: Option<&Path>) {
    if let Err(e) = dedup::process_file(input, output) {
        if e.kind() == io::ErrorKind::NotFound {
            error!("Input file {:?} not found.", input);
        } else {
            error!("Processing failed: {}", e);
        }
        process::exit(1);
    }
}

fn offer_sample_run() -> bool {
    print!("Create a sample file and process it? (y/n): ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
