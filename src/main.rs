use clap::Parser;
use page_extract::{Extractor, PageData};
use std::error::Error;
use std::io::Read;
use std::process::ExitCode;

mod args;
use args::Args;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Extraction failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut extractor = Extractor::new();
    if let Some(path) = &args.config {
        extractor = extractor.with_config_file(path)?;
    }
    if let Some(base_url) = &args.base_url {
        extractor = extractor.with_base_url(base_url)?;
    }

    let html = read_input(&args.input)?;
    ::log::info!("Read {} bytes from {}", html.len(), args.input);

    let page = extractor.parse_html(&html)?;
    print_page(&page, args.compact)
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        std::fs::read_to_string(input)
    }
}

fn print_page(page: &PageData, compact: bool) -> Result<(), Box<dyn Error>> {
    let json = if compact {
        serde_json::to_string(page)?
    } else {
        serde_json::to_string_pretty(page)?
    };
    println!("{}", json);
    Ok(())
}
